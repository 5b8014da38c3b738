//! Platform abstraction layer
//!
//! The display and input hardware are external collaborators; the core only
//! sees these traits. Software-backed implementations stand in for the real
//! registers so the whole loop runs and is tested off-hardware.

pub mod display;
pub mod input;
pub mod vsync;

pub use display::{DisplayBackend, SoftwareDisplay, DISPLAY_BG2, DISPLAY_MODE_BITMAP};
pub use input::{Button, ButtonSet, FixedInput, InputSource, ScriptedInput};
pub use vsync::await_vblank;
