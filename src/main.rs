//! Breakout Kernel demo entry point
//!
//! Native: runs a headless autopilot rally and logs what happens.
//! Web: the library's start hook does all setup; this is just a stub.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use breakout_kernel::consts::SIM_DT;
    use breakout_kernel::sim::{PlayArea, Rally, RallyEvent, Rect};
    use breakout_kernel::{Difficulty, Tuning};

    const MAX_TICKS: u64 = 120 * 120;

    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(12345);
    let difficulty = args
        .next()
        .and_then(|s| Difficulty::from_str(&s))
        .unwrap_or_default();

    log::info!(
        "Breakout Kernel (native) demo, seed {}, difficulty {}",
        seed,
        difficulty.as_str()
    );

    let area = PlayArea::new(800.0, 600.0);
    let paddle = Rect::new(360.0, 560.0, 100.0, 12.0);
    let blocks = brick_wall(&area, 5, 10);
    let mut rally = Rally::new(
        area,
        paddle,
        8.0,
        blocks,
        Tuning::default(),
        difficulty.level(),
        seed,
    );

    let (mut paddle_hits, mut blocks_hit, mut lost) = (0u32, 0u32, 0u32);
    while rally.time_ticks < MAX_TICKS && !rally.is_cleared() {
        // Autopilot: keep the paddle under the ball, slightly off-center for angle
        let aim = rally.ball.center_x() + (rally.time_ticks as f32 * 0.05).sin() * 30.0;
        rally.move_paddle_to(aim);

        for event in rally.advance(SIM_DT) {
            match event {
                RallyEvent::PaddleHit => paddle_hits += 1,
                RallyEvent::BlockHit { index } => {
                    blocks_hit += 1;
                    log::debug!("Block {} hit, {} left", index, rally.blocks.len());
                }
                RallyEvent::BallLost => {
                    lost += 1;
                    log::warn!("Ball lost at tick {}", rally.time_ticks);
                }
                RallyEvent::Cleared => log::info!("Wall cleared!"),
            }
        }
    }

    println!(
        "{} ticks: {} paddle hits, {} blocks broken, {} balls lost, {} blocks left",
        rally.time_ticks,
        paddle_hits,
        blocks_hit,
        lost,
        rally.blocks.len()
    );
}

/// Rows of evenly spaced bricks across the top of the area
#[cfg(not(target_arch = "wasm32"))]
fn brick_wall(area: &breakout_kernel::PlayArea, rows: u32, cols: u32) -> Vec<breakout_kernel::Rect> {
    const PADDING: f32 = 5.0;
    const TOP: f32 = 60.0;
    const HEIGHT: f32 = 20.0;

    let width = (area.width - PADDING * (cols + 1) as f32) / cols as f32;
    (0..rows)
        .flat_map(|row| {
            (0..cols).map(move |col| {
                breakout_kernel::Rect::new(
                    PADDING + col as f32 * (width + PADDING),
                    TOP + row as f32 * (HEIGHT + PADDING),
                    width,
                    HEIGHT,
                )
            })
        })
        .collect()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is the library's start hook, this is just to satisfy the compiler
}
