//! Ball integration and wall bounces

use super::state::{Ball, PlayArea};

/// Advance the ball by one step and bounce it off the side and top walls
///
/// Explicit Euler with no sub-stepping: a large `dt` or a fast ball can skip
/// straight through a thin brick.
///
/// Steps run in a fixed order and nothing is re-checked after it's been
/// resolved:
/// 1. move by `vel * dt`
/// 2. left/right wall: flip `vel.x`, then pin to the left edge if `x <= 0`,
///    otherwise to the right edge
/// 3. top wall: flip `vel.y`, pin to `y = 0`
///
/// The bottom edge is left alone.
pub fn integrate_ball(ball: &mut Ball, dt: f32, area: &PlayArea) {
    ball.pos.x += ball.vel.x * dt;
    ball.pos.y += ball.vel.y * dt;

    if ball.pos.x <= 0.0 || ball.pos.x + ball.size.x >= area.width {
        ball.vel.x = -ball.vel.x;
        ball.pos.x = if ball.pos.x <= 0.0 {
            0.0
        } else {
            area.width - ball.size.x
        };
        log::trace!("Side wall bounce at x={}", ball.pos.x);
    }

    if ball.pos.y <= 0.0 {
        ball.vel.y = -ball.vel.y;
        ball.pos.y = 0.0;
        log::trace!("Top wall bounce");
    }
}
