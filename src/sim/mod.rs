//! Collision and motion kernel
//!
//! Pure functions over caller-owned state:
//! - No allocation in the kernel functions
//! - No hidden state: same inputs, same outputs
//! - Discrete overlap tests only (no swept collision)
//!
//! `tick` is a reference composition of the kernel for hosts that want one.

pub mod collision;
pub mod motion;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{
    BounceAxis, ball_vs_blocks, block_bounce_axis, hit_blocks, paddle_bounce,
    paddle_bounce_with_span,
};
pub use motion::integrate_ball;
pub use rect::{Rect, rect_overlap};
pub use state::{Ball, PlayArea};
pub use tick::{Rally, RallyEvent, tick};
