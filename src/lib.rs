//! Vsync Pong - a frame-synced pong loop over a software framebuffer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (RNG, bodies, per-frame step)
//! - `gfx`: Software rasterizer (packed color, surface, lines)
//! - `platform`: Display/input hardware abstraction with software fakes
//! - `driver`: The outer frame loop that owns the vsync wait and pixel writes

pub mod driver;
pub mod gfx;
pub mod platform;
pub mod sim;

pub use driver::Driver;
pub use gfx::{Color, Rect, Surface};
pub use sim::{GameState, TickInput, tick};

/// Game configuration constants (the reference hardware profile)
pub mod consts {
    use crate::gfx::Color;

    /// Visible framebuffer width in pixels
    pub const SCREEN_W: i32 = 240;
    /// Visible framebuffer height in pixels (also the first vblank scanline)
    pub const SCREEN_H: i32 = 160;
    /// Scanlines spent in vertical blank after the visible region
    pub const VBLANK_LINES: u16 = 68;

    /// Ball defaults
    pub const BALL_SIZE: i32 = 10;
    pub const BALL_COLOR: Color = Color::rgb(31, 31, 31);

    /// Paddle defaults - fixed x inset from either screen edge
    pub const PADDLE_WIDTH: i32 = 8;
    pub const PADDLE_HEIGHT: i32 = 40;
    pub const PADDLE_INSET: i32 = 10;
    /// Vertical pixels a paddle moves per held frame
    pub const PADDLE_SPEED: i32 = 2;
    pub const LEFT_PADDLE_COLOR: Color = Color::rgb(31, 0, 15);
    pub const RIGHT_PADDLE_COLOR: Color = Color::rgb(15, 0, 31);

    /// Background (erase) color
    pub const BACKGROUND: Color = Color::rgb(0, 0, 0);
    /// Center net line drawn once at startup
    pub const NET_COLOR: Color = Color::rgb(10, 10, 10);

    /// RNG seed used when none is supplied
    pub const DEFAULT_SEED: i32 = 42;
}
