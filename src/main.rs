//! Vsync Pong entry point
//!
//! Headless demo: runs the frame loop against the software display for a
//! bounded number of frames and logs a summary. On real hardware the same
//! driver would run forever against a memory-mapped backend.

use vsync_pong::consts::{DEFAULT_SEED, SCREEN_H, SCREEN_W};
use vsync_pong::platform::{FixedInput, SoftwareDisplay};
use vsync_pong::Driver;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: i32 = match args.next() {
        Some(arg) => arg.parse().unwrap_or(DEFAULT_SEED),
        None => rand::random(),
    };
    let frames: u64 = args
        .next()
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(1000);

    log::info!("vsync-pong starting: seed {seed}, {frames} frames");

    let display = SoftwareDisplay::new(SCREEN_W, SCREEN_H);
    let mut driver = Driver::new(display, FixedInput::default(), seed);
    driver.run_frames(frames);

    let state = driver.state();
    log::info!(
        "done after {} frames: ball at ({}, {}) heading ({}, {})",
        state.frame_ticks,
        state.ball.pos.x,
        state.ball.pos.y,
        state.ball.dir.x,
        state.ball.dir.y
    );
    if let Ok(snapshot) = state.snapshot() {
        log::debug!("final state: {snapshot}");
    }
}
