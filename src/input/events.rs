//! Toolkit-neutral input events.
//!
//! These mirror the pointer, scroll and key events a desktop UI toolkit
//! delivers, carrying only what the editor reads. All positions are in
//! screen (window) pixels.

use kurbo::{Point, Vec2};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MouseButton {
    #[default]
    Left,
    Middle,
    Right,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub control: bool,
    pub alt: bool,
    pub shift: bool,
    /// Cmd on macOS, the Windows key elsewhere
    pub platform: bool,
}

impl Modifiers {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn command() -> Self {
        Self {
            control: true,
            ..Self::default()
        }
    }

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Self::default()
        }
    }

    /// Ctrl on Linux/Windows or Cmd on macOS: the multi-select and
    /// shortcut modifier
    #[inline]
    pub fn secondary(&self) -> bool {
        self.control || self.platform
    }
}

/// Pointer down, move, up, or cancel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub position: Point,
    pub button: MouseButton,
    pub modifiers: Modifiers,
}

impl PointerEvent {
    pub fn new(position: Point) -> Self {
        Self {
            position,
            button: MouseButton::Left,
            modifiers: Modifiers::none(),
        }
    }

    pub fn at(x: f64, y: f64) -> Self {
        Self::new(Point::new(x, y))
    }

    pub fn with_button(mut self, button: MouseButton) -> Self {
        self.button = button;
        self
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollDelta {
    Pixels(Vec2),
    Lines(Vec2),
}

impl ScrollDelta {
    /// Vertical component; positive scrolls content down (wheel towards the user).
    pub fn y(&self) -> f64 {
        match self {
            ScrollDelta::Pixels(delta) | ScrollDelta::Lines(delta) => delta.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollWheelEvent {
    pub position: Point,
    pub delta: ScrollDelta,
    pub modifiers: Modifiers,
}

impl ScrollWheelEvent {
    pub fn lines(position: Point, dy: f64) -> Self {
        Self {
            position,
            delta: ScrollDelta::Lines(Vec2::new(0.0, dy)),
            modifiers: Modifiers::none(),
        }
    }
}

/// A key press. `key` uses lowercase names: `"z"`, `"delete"`,
/// `"backspace"`, `"escape"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keystroke {
    pub key: String,
    pub modifiers: Modifiers,
}

impl Keystroke {
    pub fn new(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into().to_lowercase(),
            modifiers,
        }
    }

    pub fn plain(key: impl Into<String>) -> Self {
        Self::new(key, Modifiers::none())
    }

    /// Ctrl/Cmd + key
    pub fn command(key: impl Into<String>) -> Self {
        Self::new(key, Modifiers::command())
    }
}

/// A palette entry dropped onto the canvas: the screen position and the
/// JSON payload carried by the drag.
#[derive(Debug, Clone, PartialEq)]
pub struct DropEvent {
    pub position: Point,
    pub payload: String,
}
