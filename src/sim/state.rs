//! Court state types
//!
//! The kernel owns none of these; the host keeps them between frames and hands
//! them to the collision and motion functions by reference.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;

/// The ball: a moving box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Top-left corner
    pub pos: Vec2,
    /// Velocity in units per second
    pub vel: Vec2,
    /// Width and height of the bounding box
    pub size: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, size: Vec2) -> Self {
        Self { pos, vel, size }
    }

    /// A resting ball of the given radius whose center sits at `center`
    pub fn from_center(center: Vec2, radius: f32) -> Self {
        let size = Vec2::splat(radius * 2.0);
        Self {
            pos: center - size / 2.0,
            vel: Vec2::ZERO,
            size,
        }
    }

    /// Bounding box at the current position
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    /// Park the ball horizontally centered over the paddle, `gap` above it
    pub fn place_on_paddle(&mut self, paddle: &Rect, gap: f32) {
        self.pos.x = paddle.x + paddle.width / 2.0 - self.size.x / 2.0;
        self.pos.y = paddle.y - self.size.y - gap;
    }
}

/// Canvas bounds the ball bounces inside
///
/// The left, right and top edges reflect the ball. The bottom edge is where
/// the ball is lost, which is the host's business, so `height` is informational
/// for the kernel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayArea {
    pub width: f32,
    pub height: f32,
}

impl PlayArea {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True once the ball's top edge has passed below the bottom of the canvas
    #[inline]
    pub fn is_below(&self, ball: &Ball) -> bool {
        ball.pos.y > self.height
    }
}
