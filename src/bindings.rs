//! Flat numeric API for the JavaScript host
//!
//! Mirrors the kernel with plain `f32` arguments and typed-array buffers so it
//! can be called across the wasm boundary. On `wasm32` each function is
//! exported through `wasm-bindgen`; elsewhere they are ordinary Rust functions.
//!
//! Buffers are bounds-checked slices. A buffer that is too short for the
//! requested work panics (a wasm trap) instead of being validated up front.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

use crate::sim::{Ball, PlayArea, Rect, ball_vs_blocks, integrate_ball, paddle_bounce, rect_overlap};

/// Overlap test for two rectangles given as corner + size
#[allow(clippy::too_many_arguments)]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
pub fn check_collision(
    x1: f32,
    y1: f32,
    w1: f32,
    h1: f32,
    x2: f32,
    y2: f32,
    w2: f32,
    h2: f32,
) -> bool {
    rect_overlap(&Rect::new(x1, y1, w1, h1), &Rect::new(x2, y2, w2, h2))
}

/// Ball against `block_count` blocks packed as `[x, y, w, h, ...]`
///
/// Hit indices go into the front of `hit_indices`; returns how many.
/// `blocks_data` needs at least `4 * block_count` floats and `hit_indices`
/// room for every possible hit.
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
pub fn check_ball_blocks_collision(
    ball_x: f32,
    ball_y: f32,
    ball_w: f32,
    ball_h: f32,
    blocks_data: &[f32],
    block_count: u32,
    hit_indices: &mut [i32],
) -> i32 {
    // An overflowing length can never fit, so let the slice bounds check reject it
    let len = (block_count as usize)
        .checked_mul(Rect::STRIDE)
        .unwrap_or(usize::MAX);
    let blocks = Rect::slice_from_flat(&blocks_data[..len]);
    let ball = Rect::new(ball_x, ball_y, ball_w, ball_h);
    ball_vs_blocks(&ball, blocks, bytemuck::cast_slice_mut(hit_indices)) as i32
}

/// Move the ball and bounce it off the side and top walls
///
/// `ball_state` is `[x, y, vx, vy]` and is updated in place.
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
pub fn update_ball_position(
    ball_state: &mut [f32],
    dt: f32,
    canvas_width: f32,
    canvas_height: f32,
    ball_width: f32,
    ball_height: f32,
) {
    let state = &mut ball_state[..4];
    let mut ball = Ball {
        pos: glam::Vec2::new(state[0], state[1]),
        vel: glam::Vec2::new(state[2], state[3]),
        size: glam::Vec2::new(ball_width, ball_height),
    };
    integrate_ball(&mut ball, dt, &PlayArea::new(canvas_width, canvas_height));
    state.copy_from_slice(&[ball.pos.x, ball.pos.y, ball.vel.x, ball.vel.y]);
}

/// Paddle bounce; `ball_velocity` is `[vx, vy]` and only changes on a hit
#[allow(clippy::too_many_arguments)]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
pub fn check_paddle_collision(
    ball_x: f32,
    ball_y: f32,
    ball_w: f32,
    ball_h: f32,
    paddle_x: f32,
    paddle_y: f32,
    paddle_w: f32,
    paddle_h: f32,
    ball_velocity: &mut [f32],
    ball_center_x: f32,
) -> bool {
    let vel = &mut ball_velocity[..2];
    let mut ball = Ball {
        pos: glam::Vec2::new(ball_x, ball_y),
        vel: glam::Vec2::new(vel[0], vel[1]),
        size: glam::Vec2::new(ball_w, ball_h),
    };
    let paddle = Rect::new(paddle_x, paddle_y, paddle_w, paddle_h);
    if !paddle_bounce(&mut ball, &paddle, ball_center_x) {
        return false;
    }
    vel.copy_from_slice(&[ball.vel.x, ball.vel.y]);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_collision() {
        assert!(check_collision(0.0, 0.0, 10.0, 10.0, 9.999, 0.0, 10.0, 10.0));
        assert!(!check_collision(0.0, 0.0, 10.0, 10.0, 10.0, 0.0, 10.0, 10.0));
    }

    #[test]
    fn test_blocks_flat_layout() {
        #[rustfmt::skip]
        let blocks = [
            0.0, 0.0, 10.0, 10.0,
            20.0, 0.0, 10.0, 10.0,
            100.0, 100.0, 10.0, 10.0,
            20.0, 8.0, 10.0, 10.0,
        ];
        let mut hits = [-1; 4];

        let count = check_ball_blocks_collision(22.0, 5.0, 4.0, 4.0, &blocks, 4, &mut hits);
        assert_eq!(count, 2);
        assert_eq!(hits, [1, 3, -1, -1]);
    }

    #[test]
    fn test_blocks_count_limits_scan() {
        #[rustfmt::skip]
        let blocks = [
            100.0, 100.0, 10.0, 10.0,
            0.0, 0.0, 50.0, 50.0,
            0.0, 0.0, 50.0, 50.0,
        ];
        let mut hits = [0; 3];
        // Only the first two blocks are live
        let count = check_ball_blocks_collision(10.0, 10.0, 4.0, 4.0, &blocks, 2, &mut hits);
        assert_eq!(count, 1);
        assert_eq!(hits[0], 1);
    }

    #[test]
    #[should_panic]
    fn test_blocks_short_buffer_panics() {
        let blocks = [0.0, 0.0, 10.0, 10.0];
        let mut hits = [0; 2];
        check_ball_blocks_collision(0.0, 0.0, 4.0, 4.0, &blocks, 2, &mut hits);
    }

    #[test]
    #[should_panic]
    fn test_blocks_huge_count_panics() {
        let blocks = [0.0, 0.0, 10.0, 10.0];
        let mut hits = [0; 1];
        check_ball_blocks_collision(0.0, 0.0, 4.0, 4.0, &blocks, u32::MAX, &mut hits);
    }

    #[test]
    fn test_update_ball_position() {
        let mut state = [5.0, 5.0, 10.0, 10.0];
        update_ball_position(&mut state, 1.0, 20.0, 20.0, 2.0, 2.0);
        assert_eq!(state, [15.0, 15.0, 10.0, 10.0]);

        let mut state = [1.0, 3.0, -2.0, -5.0];
        update_ball_position(&mut state, 1.0, 100.0, 100.0, 4.0, 4.0);
        assert_eq!(state, [0.0, 0.0, 2.0, 5.0]);
    }

    #[test]
    fn test_update_ball_position_ignores_trailing_floats() {
        let mut state = [5.0, 5.0, 10.0, 10.0, 42.0];
        update_ball_position(&mut state, 1.0, 20.0, 20.0, 2.0, 2.0);
        assert_eq!(state[4], 42.0);
    }

    #[test]
    fn test_check_paddle_collision() {
        let mut vel = [120.0, 250.0];
        let hit = check_paddle_collision(
            145.0, 95.0, 10.0, 10.0, 100.0, 100.0, 100.0, 10.0, &mut vel, 150.0,
        );
        assert!(hit);
        assert_eq!(vel, [0.0, -250.0]);

        // Rising now: no second bounce, velocity untouched
        let hit = check_paddle_collision(
            145.0, 95.0, 10.0, 10.0, 100.0, 100.0, 100.0, 10.0, &mut vel, 150.0,
        );
        assert!(!hit);
        assert_eq!(vel, [0.0, -250.0]);
    }
}
