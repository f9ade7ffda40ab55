//! Axis-aligned rectangles
//!
//! Everything in the court is a box: ball, paddle, and bricks. A rectangle is
//! stored as its top-left corner plus a size, in canvas coordinates (y grows
//! downward).

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle (top-left corner + size)
///
/// `#[repr(C)]` with four `f32` fields, so a flat `[x, y, w, h, x, y, w, h, ...]`
/// buffer can be viewed as `&[Rect]` without copying (see [`Rect::slice_from_flat`]).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    /// Expected to be non-negative (not enforced)
    pub width: f32,
    /// Expected to be non-negative (not enforced)
    pub height: f32,
}

impl Rect {
    /// Number of `f32` fields per rectangle in a flat buffer
    pub const STRIDE: usize = 4;

    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build from a top-left position and a size vector
    #[inline]
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Shorthand for [`rect_overlap`]
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        rect_overlap(self, other)
    }

    /// View a stride-4 flat float buffer as rectangles
    ///
    /// Trailing floats that don't make up a whole rectangle are ignored.
    pub fn slice_from_flat(data: &[f32]) -> &[Rect] {
        let whole = data.len() - data.len() % Self::STRIDE;
        bytemuck::cast_slice(&data[..whole])
    }

    /// View rectangles as a flat float buffer
    pub fn slice_as_flat(rects: &[Rect]) -> &[f32] {
        bytemuck::cast_slice(rects)
    }
}

/// Check whether two rectangles overlap with positive area
///
/// Separating-axis test with strict inequalities: boxes that only share an
/// edge or a corner do not overlap. Sizes are not validated; a negative width
/// or height gives a consistent but meaningless answer.
#[inline]
pub fn rect_overlap(a: &Rect, b: &Rect) -> bool {
    a.x < b.x + b.width && a.x + a.width > b.x && a.y < b.y + b.height && a.y + a.height > b.y
}
