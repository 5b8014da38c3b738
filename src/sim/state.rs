//! Game state and core simulation types
//!
//! Two body kinds exist: one ball and two paddles. Velocity components stay
//! in {-1, 0, 1}; all motion, reflection, and respawn logic is integer
//! arithmetic against the arena bounds. The whole state (RNG included) is
//! serializable so a run can be snapshotted and resumed deterministically.

use glam::{IVec2, ivec2};
use serde::{Deserialize, Serialize};

use super::rng::Lcg;
use crate::consts::*;
use crate::gfx::{Color, Rect};

/// Playfield extent in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arena {
    pub width: i32,
    pub height: i32,
}

impl Arena {
    /// # Panics
    /// Panics if either dimension is not positive.
    pub fn new(width: i32, height: i32) -> Self {
        assert!(width > 0 && height > 0, "arena dimensions must be positive");
        Self { width, height }
    }

    /// Where a square of `size` sits when centered on the arena
    pub fn respawn_point(&self, size: i32) -> IVec2 {
        ivec2(
            (self.width >> 1) - (size >> 1),
            (self.height >> 1) - (size >> 1),
        )
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new(SCREEN_W, SCREEN_H)
    }
}

/// The reflecting square ball
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: IVec2,
    /// Per-frame velocity, each component in {-1, 0, 1}
    pub dir: IVec2,
    /// Side length of the square
    pub size: i32,
    pub color: Color,
}

impl Ball {
    /// Create a ball with a freshly randomized heading
    pub fn new(pos: IVec2, size: i32, color: Color, rng: &mut Lcg) -> Self {
        let mut ball = Self {
            pos,
            dir: IVec2::ZERO,
            size,
            color,
        };
        ball.randomize_heading(rng);
        ball
    }

    /// Re-roll the heading: x until nonzero, y once (0 is a valid result)
    pub fn randomize_heading(&mut self, rng: &mut Lcg) {
        while self.dir.x == 0 {
            self.dir.x = rng.range(-1, 2);
        }
        self.dir.y = rng.range(-1, 2);
    }

    /// Advance one frame: reflect off the top/bottom edges, respawn on
    /// horizontal exit
    ///
    /// Leaving the horizontal bounds is a score event, not a bounce: the
    /// ball re-centers and re-rolls its heading from scratch.
    pub fn advance(&mut self, arena: Arena, rng: &mut Lcg) {
        self.pos.y += self.dir.y;
        if self.pos.y < 0 {
            self.pos.y = 0;
            self.dir.y = -self.dir.y;
        }
        let floor = arena.height - self.size;
        if self.pos.y > floor {
            self.pos.y = floor;
            self.dir.y = -self.dir.y;
        }

        self.pos.x += self.dir.x;
        if self.pos.x < 0 || self.pos.x > arena.width - self.size {
            self.pos = arena.respawn_point(self.size);
            self.dir = IVec2::ZERO;
            self.randomize_heading(rng);
        }
    }

    /// Bounce off a paddle if exactly at its x column with vertical overlap
    ///
    /// The test is exact x equality, so a ball moving more than one pixel
    /// per frame could tunnel past the column; with dir components capped at
    /// one pixel the skip cannot occur. On hit the horizontal sign flips and
    /// the vertical heading re-rolls.
    pub fn deflect(&mut self, paddle: &Paddle, rng: &mut Lcg) {
        let overlaps = self.pos.y < paddle.pos.y + paddle.height
            && self.pos.y + self.size > paddle.pos.y;
        if self.pos.x == paddle.pos.x && overlaps {
            self.dir.x = -self.dir.x;
            self.dir.y = rng.range(-1, 2);
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size, self.size)
    }
}

/// A player-controlled paddle; only y ever changes after creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paddle {
    pub pos: IVec2,
    pub width: i32,
    pub height: i32,
    pub color: Color,
}

impl Paddle {
    pub fn new(pos: IVec2, width: i32, height: i32, color: Color) -> Self {
        Self {
            pos,
            width,
            height,
            color,
        }
    }

    /// Move vertically by `delta`, clamped to the arena
    pub fn slide(&mut self, delta: i32, arena: Arena) {
        self.pos.y = (self.pos.y + delta).clamp(0, arena.height - self.height);
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.width, self.height)
    }
}

/// Complete match state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub arena: Arena,
    pub ball: Ball,
    /// Left paddle first, right paddle second
    pub paddles: [Paddle; 2],
    pub rng: Lcg,
    /// Frames simulated so far
    pub frame_ticks: u64,
}

impl GameState {
    /// Create a match on the given arena with the given seed
    ///
    /// # Panics
    /// Panics if the default entity geometry does not fit the arena.
    pub fn new(arena: Arena, seed: i32) -> Self {
        assert!(
            BALL_SIZE <= arena.width && BALL_SIZE <= arena.height,
            "ball does not fit the arena"
        );
        assert!(PADDLE_HEIGHT <= arena.height, "paddle taller than the arena");
        assert!(
            PADDLE_INSET + PADDLE_WIDTH <= arena.width >> 1,
            "paddles overlap the center"
        );

        let mut rng = Lcg::with_seed(seed);
        let ball = Ball::new(
            ivec2(arena.width >> 1, arena.height >> 1),
            BALL_SIZE,
            BALL_COLOR,
            &mut rng,
        );
        let start_y = (arena.height - PADDLE_HEIGHT) / 2;
        let paddles = [
            Paddle::new(
                ivec2(PADDLE_INSET, start_y),
                PADDLE_WIDTH,
                PADDLE_HEIGHT,
                LEFT_PADDLE_COLOR,
            ),
            Paddle::new(
                ivec2(arena.width - PADDLE_INSET - PADDLE_WIDTH, start_y),
                PADDLE_WIDTH,
                PADDLE_HEIGHT,
                RIGHT_PADDLE_COLOR,
            ),
        ];

        Self {
            arena,
            ball,
            paddles,
            rng,
            frame_ticks: 0,
        }
    }

    /// Serialize the full state to a JSON snapshot
    pub fn snapshot(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Rebuild a state from a snapshot produced by [`GameState::snapshot`]
    pub fn restore(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
