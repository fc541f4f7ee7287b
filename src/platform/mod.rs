//! Platform abstraction layer
//!
//! Backends report which buttons are down; the game only ever asks whether a
//! button was pressed *this frame*.

use serde::{Deserialize, Serialize};

/// Buttons the game listens to. Any of them confirms or fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Button {
    /// Return / Enter
    Confirm,
    /// Primary mouse button or touch
    Pointer,
    /// Space bar
    AltConfirm,
}

impl Button {
    pub const ALL: [Button; 3] = [Button::Confirm, Button::Pointer, Button::AltConfirm];

    fn index(self) -> usize {
        match self {
            Button::Confirm => 0,
            Button::Pointer => 1,
            Button::AltConfirm => 2,
        }
    }
}

/// Per-frame input query
pub trait Input {
    /// True only on the frame the button went down
    fn is_pressed(&self, button: Button) -> bool;
}

/// Turns held-button snapshots into press edges
#[derive(Debug, Clone, Default)]
pub struct EdgeInput {
    held: [bool; 3],
    pressed: [bool; 3],
}

impl EdgeInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed this frame's held state (call once per frame, before `update`)
    pub fn poll(&mut self, is_down: impl Fn(Button) -> bool) {
        for button in Button::ALL {
            let i = button.index();
            let down = is_down(button);
            self.pressed[i] = down && !self.held[i];
            self.held[i] = down;
        }
    }

    pub fn is_held(&self, button: Button) -> bool {
        self.held[button.index()]
    }
}

impl Input for EdgeInput {
    fn is_pressed(&self, button: Button) -> bool {
        self.pressed[button.index()]
    }
}
