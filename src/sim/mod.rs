//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Integer arithmetic only
//! - Seeded RNG only, owned by the state
//! - Fixed per-frame mutation order
//! - No rendering or platform dependencies beyond emitted draw commands

pub mod rng;
pub mod state;
pub mod tick;

pub use rng::Lcg;
pub use state::{Arena, Ball, GameState, Paddle};
pub use tick::{DrawOp, TickInput, tick};
