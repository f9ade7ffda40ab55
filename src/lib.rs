//! Breakout Kernel - AABB collision and ball physics for a breakout-style game
//!
//! Core modules:
//! - `sim`: Collision tests, ball integration, paddle bounce, reference host step
//! - `bindings`: Flat `f32` API for the WebAssembly boundary
//! - `tuning`: Data-driven serve and bounce constants

pub mod bindings;
pub mod sim;
pub mod tuning;

pub use sim::{Ball, PlayArea, Rect, ball_vs_blocks, integrate_ball, paddle_bounce, rect_overlap};
pub use tuning::{Difficulty, Tuning};

/// Kernel constants
pub mod consts {
    /// Fixed simulation timestep for the reference host step (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Horizontal speed range of a paddle bounce: center hit leaves straight
    /// up, edge hits leave at ±300
    pub const PADDLE_DEFLECTION_SPAN: f32 = 600.0;
}

/// Browser setup: panic messages and `log` output go to the console
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() -> Result<(), wasm_bindgen::JsValue> {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("Breakout kernel loaded");
    Ok(())
}
