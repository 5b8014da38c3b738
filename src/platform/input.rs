//! Input collaborator
//!
//! The core treats input as a black box: poll once per frame, then ask
//! which logical buttons are currently held. Debouncing or edge detection,
//! if any, lives behind the trait. The left paddle reads Up/Down, the
//! right paddle reads A/B.

/// The fixed logical button enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Up,
    Down,
    A,
    B,
}

/// Which buttons are held during one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonSet {
    pub up: bool,
    pub down: bool,
    pub a: bool,
    pub b: bool,
}

impl ButtonSet {
    pub fn contains(self, button: Button) -> bool {
        match button {
            Button::Up => self.up,
            Button::Down => self.down,
            Button::A => self.a,
            Button::B => self.b,
        }
    }
}

/// A pollable source of held-button state
pub trait InputSource {
    /// Refresh the held state; call exactly once per frame before reading
    fn poll(&mut self);

    fn is_held(&self, button: Button) -> bool;
}

/// Input that reports the same held set every frame
///
/// The default value holds nothing - an idle player.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedInput(pub ButtonSet);

impl InputSource for FixedInput {
    fn poll(&mut self) {}

    fn is_held(&self, button: Button) -> bool {
        self.0.contains(button)
    }
}

/// Input replayed from a per-frame script
///
/// Each `poll` advances one frame; past the end of the script nothing is
/// held.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: Vec<ButtonSet>,
    cursor: usize,
    current: ButtonSet,
}

impl ScriptedInput {
    pub fn new(frames: Vec<ButtonSet>) -> Self {
        Self {
            frames,
            cursor: 0,
            current: ButtonSet::default(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) {
        self.current = self.frames.get(self.cursor).copied().unwrap_or_default();
        self.cursor += 1;
    }

    fn is_held(&self, button: Button) -> bool {
        self.current.contains(button)
    }
}
