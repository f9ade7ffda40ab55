//! Reference host step
//!
//! Composes the kernel the way the breakout host does once per physics step:
//! move, check for a lost ball, bounce off the paddle, then hit bricks.
//! A lost ball is re-served and the paddle and brick checks still run on the
//! fresh serve in the same step.
//! Rendering, input, scoring and level layout stay with the host.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::{ball_vs_blocks, block_bounce_axis, paddle_bounce_with_span};
use super::motion::integrate_ball;
use super::rect::Rect;
use super::state::{Ball, PlayArea};
use crate::consts::*;
use crate::tuning::Tuning;

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RallyEvent {
    /// Ball came off the paddle
    PaddleHit,
    /// Ball broke the block that was at `index` (already removed)
    BlockHit { index: usize },
    /// Ball fell past the bottom edge and was re-served
    BallLost,
    /// Last block is gone
    Cleared,
}

/// Everything one rally needs between ticks
#[derive(Debug, Clone)]
pub struct Rally {
    pub ball: Ball,
    pub paddle: Rect,
    pub blocks: Vec<Rect>,
    pub area: PlayArea,
    pub tuning: Tuning,
    /// 1-based level, drives serve speed
    pub level: u32,
    /// Ticks simulated so far
    pub time_ticks: u64,
    accumulator: f32,
    hit_buf: Vec<u32>,
    rng: Pcg32,
}

impl Rally {
    /// Start a rally with the ball served from the paddle
    pub fn new(
        area: PlayArea,
        paddle: Rect,
        ball_radius: f32,
        blocks: Vec<Rect>,
        tuning: Tuning,
        level: u32,
        seed: u64,
    ) -> Self {
        let hit_buf = vec![0; blocks.len()];
        let mut rally = Self {
            ball: Ball::from_center(Vec2::ZERO, ball_radius),
            paddle,
            blocks,
            area,
            tuning,
            level,
            time_ticks: 0,
            accumulator: 0.0,
            hit_buf,
            rng: Pcg32::seed_from_u64(seed),
        };
        rally.serve();
        rally
    }

    /// Park the ball over the paddle and give it a fresh serve velocity
    pub fn serve(&mut self) {
        self.ball.place_on_paddle(&self.paddle, self.tuning.serve_gap);
        self.ball.vel = self.tuning.serve_velocity(self.level, &mut self.rng);
    }

    /// Slide the paddle so its center is at `center_x`, kept inside the area
    pub fn move_paddle_to(&mut self, center_x: f32) {
        let max_x = (self.area.width - self.paddle.width).max(0.0);
        self.paddle.x = (center_x - self.paddle.width / 2.0).clamp(0.0, max_x);
    }

    pub fn is_cleared(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Run fixed `SIM_DT` ticks for a frame of length `frame_dt`
    ///
    /// Leftover time carries over to the next frame. At most `MAX_SUBSTEPS`
    /// ticks run per call so a long stall can't snowball.
    pub fn advance(&mut self, frame_dt: f32) -> Vec<RallyEvent> {
        self.accumulator += frame_dt.min(0.1);

        let mut events = Vec::new();
        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            events.extend(tick(self, SIM_DT));
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        events
    }
}

/// Advance the rally by one step of `dt` seconds
pub fn tick(rally: &mut Rally, dt: f32) -> Vec<RallyEvent> {
    let mut events = Vec::new();
    rally.time_ticks += 1;

    integrate_ball(&mut rally.ball, dt, &rally.area);

    if rally.area.is_below(&rally.ball) {
        log::debug!("Ball lost at tick {}", rally.time_ticks);
        rally.serve();
        events.push(RallyEvent::BallLost);
    }

    let center_x = rally.ball.center_x();
    if paddle_bounce_with_span(
        &mut rally.ball,
        &rally.paddle,
        center_x,
        rally.tuning.paddle_deflection_span,
    ) {
        events.push(RallyEvent::PaddleHit);
    }

    let ball_rect = rally.ball.rect();
    // `blocks` is public, so the host may have swapped in a new wall
    rally.hit_buf.resize(rally.blocks.len(), 0);
    let hit_count = ball_vs_blocks(&ball_rect, &rally.blocks, &mut rally.hit_buf);
    if hit_count > 0 {
        // Only the first brick reacts; the rest get their turn next tick
        let index = rally.hit_buf[0] as usize;
        let block = rally.blocks.remove(index);
        block_bounce_axis(&ball_rect, &block).apply(&mut rally.ball.vel);
        events.push(RallyEvent::BlockHit { index });

        if rally.blocks.is_empty() {
            log::info!("All blocks cleared after {} ticks", rally.time_ticks);
            events.push(RallyEvent::Cleared);
        }
    }

    events
}
