//! Collision detection and response against bricks and the paddle
//!
//! Discrete tests only: every check looks at where the ball *is* after the
//! move, never at the path it took to get there.

use glam::Vec2;

use super::rect::{Rect, rect_overlap};
use super::state::Ball;
use crate::consts::PADDLE_DEFLECTION_SPAN;

/// Indices of every block the ball overlaps, in ascending order
///
/// Allocation-free form of [`ball_vs_blocks`]. Linear scan, no broad-phase.
pub fn hit_blocks<'a>(ball: &'a Rect, blocks: &'a [Rect]) -> impl Iterator<Item = usize> + 'a {
    blocks
        .iter()
        .enumerate()
        .filter(move |(_, block)| rect_overlap(ball, block))
        .map(|(i, _)| i)
}

/// Test one ball against a batch of blocks
///
/// Writes the index of each overlapping block into the front of `hit_indices`
/// in scan order and returns how many were written. Entries past the returned
/// count are left as they were.
///
/// # Panics
///
/// `hit_indices` must have room for `blocks.len()` entries. If it is shorter
/// and more hits occur than fit, the out-of-range write panics.
pub fn ball_vs_blocks(ball: &Rect, blocks: &[Rect], hit_indices: &mut [u32]) -> usize {
    let mut hit_count = 0;
    for i in hit_blocks(ball, blocks) {
        hit_indices[hit_count] = i as u32;
        hit_count += 1;
    }
    hit_count
}

/// Bounce the ball off the paddle
///
/// Only fires while the ball is moving down (`vel.y > 0`), so a ball that is
/// still inside the paddle after the previous bounce doesn't get flipped back.
/// The new horizontal speed depends on where along the paddle the ball hit:
/// dead center sends it straight up, the edges send it off at
/// `±PADDLE_DEFLECTION_SPAN / 2`.
///
/// Returns true if the ball bounced. On false nothing is modified.
pub fn paddle_bounce(ball: &mut Ball, paddle: &Rect, ball_center_x: f32) -> bool {
    paddle_bounce_with_span(ball, paddle, ball_center_x, PADDLE_DEFLECTION_SPAN)
}

/// [`paddle_bounce`] with an explicit deflection span
///
/// The impact position `(ball_center_x - paddle.x) / paddle.width` is not
/// clamped, so a ball centered past either end of the paddle leaves faster
/// than `span / 2`.
pub fn paddle_bounce_with_span(
    ball: &mut Ball,
    paddle: &Rect,
    ball_center_x: f32,
    span: f32,
) -> bool {
    if !(rect_overlap(&ball.rect(), paddle) && ball.vel.y > 0.0) {
        return false;
    }

    ball.vel.y = -ball.vel.y;

    let hit_pos = (ball_center_x - paddle.x) / paddle.width;
    ball.vel.x = (hit_pos - 0.5) * span;

    log::trace!("Paddle hit at {:.3}, vel -> {:?}", hit_pos, ball.vel);
    true
}

/// Which velocity component to flip after hitting a block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BounceAxis {
    /// Side hit: flip `vx`
    Horizontal,
    /// Top/bottom hit: flip `vy`
    Vertical,
}

impl BounceAxis {
    /// Negate the matching velocity component
    #[inline]
    pub fn apply(self, vel: &mut Vec2) {
        match self {
            BounceAxis::Horizontal => vel.x = -vel.x,
            BounceAxis::Vertical => vel.y = -vel.y,
        }
    }
}

/// Pick the reflection axis for a ball/block hit from their center offset
///
/// Wider horizontal offset than vertical means a side hit. Equal offsets count
/// as a top/bottom hit.
pub fn block_bounce_axis(ball: &Rect, block: &Rect) -> BounceAxis {
    let d = ball.center() - block.center();
    if d.x.abs() > d.y.abs() {
        BounceAxis::Horizontal
    } else {
        BounceAxis::Vertical
    }
}
