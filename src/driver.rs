//! Frame-loop driver
//!
//! The impure half of the loop: owns the display backend, the input
//! collaborator, and the match state. Each frame it blocks on vsync, polls
//! input, runs the pure simulation step, and applies the returned draw
//! commands to the surface. Startup performs the one-time display-mode
//! write, clears the screen, and draws the center net.

use glam::ivec2;

use crate::consts::{BACKGROUND, NET_COLOR};
use crate::gfx::draw_line;
use crate::platform::{
    await_vblank, Button, DisplayBackend, InputSource, DISPLAY_BG2, DISPLAY_MODE_BITMAP,
};
use crate::sim::{tick, Arena, GameState, TickInput};

/// Owns the blocking wait and the pixel writes around the pure `tick`
pub struct Driver<D: DisplayBackend, I: InputSource> {
    display: D,
    input: I,
    state: GameState,
}

impl<D: DisplayBackend, I: InputSource> Driver<D, I> {
    /// Configure the display, clear the field, and seed a new match
    pub fn new(mut display: D, input: I, seed: i32) -> Self {
        display.write_display_control(DISPLAY_MODE_BITMAP | DISPLAY_BG2);

        let fb = display.surface_mut();
        let arena = Arena::new(fb.width(), fb.height());
        fb.clear(BACKGROUND);
        draw_line(
            fb,
            ivec2(arena.width >> 1, 0),
            ivec2(arena.width >> 1, arena.height - 1),
            NET_COLOR,
        );

        let state = GameState::new(arena, seed);
        log::info!(
            "match initialized: {}x{} arena, seed {seed}",
            arena.width,
            arena.height
        );

        Self {
            display,
            input,
            state,
        }
    }

    /// Run exactly one frame: sync, poll, step, apply
    pub fn step(&mut self) {
        await_vblank(&self.display);
        self.input.poll();

        let snapshot = TickInput {
            p1_up: self.input.is_held(Button::Up),
            p1_down: self.input.is_held(Button::Down),
            p2_up: self.input.is_held(Button::A),
            p2_down: self.input.is_held(Button::B),
        };

        let ops = tick(&mut self.state, &snapshot);
        let fb = self.display.surface_mut();
        for op in ops {
            fb.fill_rect(op.rect, op.color);
        }
    }

    /// Run a bounded number of frames (demo binary, tests)
    pub fn run_frames(&mut self, frames: u64) {
        for _ in 0..frames {
            self.step();
        }
    }

    /// Run forever; the loop has no exit condition by design
    pub fn run(&mut self) -> ! {
        loop {
            self.step();
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn display(&self) -> &D {
        &self.display
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::platform::{ButtonSet, FixedInput, SoftwareDisplay};

    fn new_driver(held: ButtonSet, seed: i32) -> Driver<SoftwareDisplay, FixedInput> {
        Driver::new(
            SoftwareDisplay::new(SCREEN_W, SCREEN_H),
            FixedInput(held),
            seed,
        )
    }

    #[test]
    fn test_startup_configures_display_and_net() {
        let driver = new_driver(ButtonSet::default(), 42);
        assert_eq!(
            driver.display().display_control(),
            DISPLAY_MODE_BITMAP | DISPLAY_BG2
        );

        let fb = driver.display().surface();
        let net_x = SCREEN_W >> 1;
        assert_eq!(fb.pixel(net_x, 0), Some(NET_COLOR));
        assert_eq!(fb.pixel(net_x, SCREEN_H - 1), Some(NET_COLOR));
        assert_eq!(fb.pixel(0, 0), Some(BACKGROUND));
    }

    #[test]
    fn test_step_draws_entities_at_state_positions() {
        let mut driver = new_driver(ButtonSet::default(), 42);
        driver.step();

        let ball = driver.state().ball;
        let p1 = driver.state().paddles[0];
        let fb = driver.display().surface();
        assert_eq!(fb.pixel(ball.pos.x, ball.pos.y), Some(BALL_COLOR));
        assert_eq!(fb.pixel(p1.pos.x, p1.pos.y), Some(LEFT_PADDLE_COLOR));
    }

    #[test]
    fn test_step_erases_previous_ball_position() {
        let mut driver = new_driver(ButtonSet::default(), 42);
        driver.step();
        let old_ball = driver.state().ball.rect();

        driver.step();
        let new_ball = driver.state().ball.rect();
        assert_ne!(old_ball, new_ball);

        // A pixel covered by the old rect but not the new one is background
        let fb = driver.display().surface();
        'scan: for y in old_ball.y..old_ball.y + old_ball.height {
            for x in old_ball.x..old_ball.x + old_ball.width {
                let in_new = x >= new_ball.x
                    && x < new_ball.x + new_ball.width
                    && y >= new_ball.y
                    && y < new_ball.y + new_ball.height;
                if !in_new {
                    assert_eq!(fb.pixel(x, y), Some(BACKGROUND));
                    break 'scan;
                }
            }
        }
    }

    #[test]
    fn test_scripted_match_paddle_one_clamps_at_top() {
        // Paddle 1 held up for 1000 frames with a fixed seed: its y
        // strictly decreases to 0 then stays; paddle 2 never moves.
        let held_up = ButtonSet {
            up: true,
            ..Default::default()
        };
        let mut driver = new_driver(held_up, 7);
        let p2_start = driver.state().paddles[1].pos.y;
        let mut prev = driver.state().paddles[0].pos.y;

        for _ in 0..1000 {
            driver.step();
            let y = driver.state().paddles[0].pos.y;
            if prev > 0 {
                assert!(y < prev, "expected strict descent, {prev} -> {y}");
            } else {
                assert_eq!(y, 0);
            }
            prev = y;
            assert_eq!(driver.state().paddles[1].pos.y, p2_start);
        }
        assert_eq!(driver.state().paddles[0].pos.y, 0);
        assert_eq!(driver.state().frame_ticks, 1000);
    }

    #[test]
    fn test_same_seed_same_run() {
        let mut a = new_driver(ButtonSet::default(), 4242);
        let mut b = new_driver(ButtonSet::default(), 4242);
        a.run_frames(300);
        b.run_frames(300);
        assert_eq!(a.state(), b.state());
        assert_eq!(
            a.display().surface().as_raw(),
            b.display().surface().as_raw()
        );
    }
}
