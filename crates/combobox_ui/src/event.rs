//! Toolkit events delivered to widgets.
//!
//! Pointer presses arrive twice: first as [`Event::GlobalMousePress`], which
//! every widget receives regardless of position (used for dismissing popups and
//! blurring inputs), then as [`Event::MousePress`] for hit testing. Time
//! advances through [`Event::Tick`] so deferred work never reads the clock on
//! its own.

use serde::{Deserialize, Serialize};
use web_time::Instant;

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

/// Keyboard modifier state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KeyModifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl KeyModifiers {
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    pub const SHIFT: Self = Self {
        shift: true,
        ctrl: false,
        alt: false,
        meta: false,
    };

    pub const CTRL: Self = Self {
        shift: false,
        ctrl: true,
        alt: false,
        meta: false,
    };

    /// Whether any modifier is held.
    pub fn any(&self) -> bool {
        self.shift || self.ctrl || self.alt || self.meta
    }
}

/// Keys widgets react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    // Navigation
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,

    // Editing
    Enter,
    Escape,
    Backspace,
    Delete,
    Tab,
    Space,

    // Letters
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    // Digits
    Key0, Key1, Key2, Key3, Key4, Key5, Key6, Key7, Key8, Key9,
}

/// Events that widgets can respond to.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Mouse button pressed over the target widget
    MousePress {
        button: MouseButton,
        position: (f32, f32),
        modifiers: KeyModifiers,
    },
    /// Mouse button released
    MouseRelease {
        button: MouseButton,
        position: (f32, f32),
        modifiers: KeyModifiers,
    },
    /// Cursor moved
    MouseMove {
        position: (f32, f32),
        modifiers: KeyModifiers,
    },
    /// Wheel scrolled
    MouseScroll {
        delta: (f32, f32),
        position: (f32, f32),
        modifiers: KeyModifiers,
    },
    /// Any mouse press anywhere in the window, sent to every widget before the
    /// targeted [`Event::MousePress`]
    GlobalMousePress {
        button: MouseButton,
        position: (f32, f32),
    },
    /// Key pressed
    KeyPress { key: KeyCode, modifiers: KeyModifiers },
    /// Key released
    KeyRelease { key: KeyCode, modifiers: KeyModifiers },
    /// Committed text (typed characters, IME output)
    TextInput { text: String },
    /// The window lost keyboard focus
    FocusLost,
    /// The cursor left the window
    CursorLeft,
    /// Frame clock
    Tick { now: Instant },
}

impl Event {
    /// Left-button press with no modifiers.
    pub fn click(x: f32, y: f32) -> Self {
        Event::MousePress {
            button: MouseButton::Left,
            position: (x, y),
            modifiers: KeyModifiers::NONE,
        }
    }

    /// Key press with no modifiers.
    pub fn key(key: KeyCode) -> Self {
        Event::KeyPress {
            key,
            modifiers: KeyModifiers::NONE,
        }
    }

    /// Typed text.
    pub fn text(text: impl Into<String>) -> Self {
        Event::TextInput { text: text.into() }
    }

    /// Pointer position carried by the event, if any.
    pub fn position(&self) -> Option<(f32, f32)> {
        match self {
            Event::MousePress { position, .. }
            | Event::MouseRelease { position, .. }
            | Event::MouseMove { position, .. }
            | Event::MouseScroll { position, .. }
            | Event::GlobalMousePress { position, .. } => Some(*position),
            _ => None,
        }
    }
}
