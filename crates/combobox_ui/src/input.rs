//! Translation from winit window events to toolkit [`Event`]s.
//!
//! [`InputTranslator`] tracks the cursor position and modifier state that
//! winit reports separately, so every produced event is self-contained.

use winit::event::{ElementState, MouseButton as WinitMouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{Key, ModifiersState, NamedKey};

use crate::event::{Event, KeyCode, KeyModifiers, MouseButton};

/// Pixels per line for line-based wheel deltas.
const SCROLL_LINE_HEIGHT: f32 = 20.0;

/// Convert a winit logical key to a toolkit key code.
pub fn key_from_winit(key: &Key) -> Option<KeyCode> {
    match key {
        Key::Named(named) => match named {
            NamedKey::ArrowUp => Some(KeyCode::Up),
            NamedKey::ArrowDown => Some(KeyCode::Down),
            NamedKey::ArrowLeft => Some(KeyCode::Left),
            NamedKey::ArrowRight => Some(KeyCode::Right),
            NamedKey::Home => Some(KeyCode::Home),
            NamedKey::End => Some(KeyCode::End),
            NamedKey::PageUp => Some(KeyCode::PageUp),
            NamedKey::PageDown => Some(KeyCode::PageDown),
            NamedKey::Enter => Some(KeyCode::Enter),
            NamedKey::Escape => Some(KeyCode::Escape),
            NamedKey::Backspace => Some(KeyCode::Backspace),
            NamedKey::Delete => Some(KeyCode::Delete),
            NamedKey::Tab => Some(KeyCode::Tab),
            NamedKey::Space => Some(KeyCode::Space),
            _ => None,
        },
        Key::Character(text) => {
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => key_from_char(c),
                _ => None,
            }
        }
        _ => None,
    }
}

fn key_from_char(c: char) -> Option<KeyCode> {
    let key = match c.to_ascii_lowercase() {
        'a' => KeyCode::A,
        'b' => KeyCode::B,
        'c' => KeyCode::C,
        'd' => KeyCode::D,
        'e' => KeyCode::E,
        'f' => KeyCode::F,
        'g' => KeyCode::G,
        'h' => KeyCode::H,
        'i' => KeyCode::I,
        'j' => KeyCode::J,
        'k' => KeyCode::K,
        'l' => KeyCode::L,
        'm' => KeyCode::M,
        'n' => KeyCode::N,
        'o' => KeyCode::O,
        'p' => KeyCode::P,
        'q' => KeyCode::Q,
        'r' => KeyCode::R,
        's' => KeyCode::S,
        't' => KeyCode::T,
        'u' => KeyCode::U,
        'v' => KeyCode::V,
        'w' => KeyCode::W,
        'x' => KeyCode::X,
        'y' => KeyCode::Y,
        'z' => KeyCode::Z,
        '0' => KeyCode::Key0,
        '1' => KeyCode::Key1,
        '2' => KeyCode::Key2,
        '3' => KeyCode::Key3,
        '4' => KeyCode::Key4,
        '5' => KeyCode::Key5,
        '6' => KeyCode::Key6,
        '7' => KeyCode::Key7,
        '8' => KeyCode::Key8,
        '9' => KeyCode::Key9,
        ' ' => KeyCode::Space,
        _ => return None,
    };
    Some(key)
}

/// Convert a winit mouse button.
pub fn mouse_button_from_winit(button: WinitMouseButton) -> MouseButton {
    match button {
        WinitMouseButton::Left => MouseButton::Left,
        WinitMouseButton::Right => MouseButton::Right,
        WinitMouseButton::Middle => MouseButton::Middle,
        WinitMouseButton::Back => MouseButton::Other(3),
        WinitMouseButton::Forward => MouseButton::Other(4),
        WinitMouseButton::Other(n) => MouseButton::Other(n),
    }
}

/// Convert winit modifier state.
pub fn modifiers_from_winit(state: ModifiersState) -> KeyModifiers {
    KeyModifiers {
        shift: state.shift_key(),
        ctrl: state.control_key(),
        alt: state.alt_key(),
        meta: state.super_key(),
    }
}

/// Stateful winit event translator.
#[derive(Debug, Clone, Default)]
pub struct InputTranslator {
    cursor: (f32, f32),
    modifiers: KeyModifiers,
}

impl InputTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last known cursor position.
    pub fn cursor(&self) -> (f32, f32) {
        self.cursor
    }

    pub fn modifiers(&self) -> KeyModifiers {
        self.modifiers
    }

    /// Translate one winit window event.
    pub fn translate(&mut self, event: &WindowEvent) -> Vec<Event> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_moved(position.x as f32, position.y as f32)
            }
            WindowEvent::CursorLeft { .. } => vec![Event::CursorLeft],
            WindowEvent::MouseInput { state, button, .. } => self.mouse_input(*state, *button),
            WindowEvent::MouseWheel { delta, .. } => {
                let delta = match delta {
                    MouseScrollDelta::LineDelta(x, y) => {
                        (x * SCROLL_LINE_HEIGHT, y * SCROLL_LINE_HEIGHT)
                    }
                    MouseScrollDelta::PixelDelta(pos) => (pos.x as f32, pos.y as f32),
                };
                vec![Event::MouseScroll {
                    delta,
                    position: self.cursor,
                    modifiers: self.modifiers,
                }]
            }
            WindowEvent::ModifiersChanged(modifiers) => {
                self.modifiers_changed(modifiers.state());
                Vec::new()
            }
            WindowEvent::KeyboardInput { event, .. } => {
                self.key_input(event.state, &event.logical_key, event.text.as_deref())
            }
            WindowEvent::Focused(false) => vec![Event::FocusLost],
            _ => Vec::new(),
        }
    }

    pub fn cursor_moved(&mut self, x: f32, y: f32) -> Vec<Event> {
        self.cursor = (x, y);
        vec![Event::MouseMove {
            position: self.cursor,
            modifiers: self.modifiers,
        }]
    }

    pub fn modifiers_changed(&mut self, state: ModifiersState) {
        self.modifiers = modifiers_from_winit(state);
    }

    /// Presses produce the global press first, then the targeted one.
    pub fn mouse_input(&self, state: ElementState, button: WinitMouseButton) -> Vec<Event> {
        let button = mouse_button_from_winit(button);
        match state {
            ElementState::Pressed => vec![
                Event::GlobalMousePress {
                    button,
                    position: self.cursor,
                },
                Event::MousePress {
                    button,
                    position: self.cursor,
                    modifiers: self.modifiers,
                },
            ],
            ElementState::Released => vec![Event::MouseRelease {
                button,
                position: self.cursor,
                modifiers: self.modifiers,
            }],
        }
    }

    /// Key presses yield a key event and, for printable input without
    /// Ctrl/Alt/Meta held, the committed text.
    pub fn key_input(&self, state: ElementState, key: &Key, text: Option<&str>) -> Vec<Event> {
        let mut events = Vec::new();
        let code = key_from_winit(key);

        match state {
            ElementState::Pressed => {
                if let Some(key) = code {
                    events.push(Event::KeyPress {
                        key,
                        modifiers: self.modifiers,
                    });
                }
                let command = self.modifiers.ctrl || self.modifiers.alt || self.modifiers.meta;
                if let Some(text) = text {
                    if !command && !text.is_empty() && !text.chars().any(char::is_control) {
                        events.push(Event::TextInput {
                            text: text.to_string(),
                        });
                    }
                }
            }
            ElementState::Released => {
                if let Some(key) = code {
                    events.push(Event::KeyRelease {
                        key,
                        modifiers: self.modifiers,
                    });
                }
            }
        }

        if code.is_none() {
            log::trace!("InputTranslator: unmapped key {:?}", key);
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_keys() {
        assert_eq!(key_from_winit(&Key::Named(NamedKey::ArrowDown)), Some(KeyCode::Down));
        assert_eq!(key_from_winit(&Key::Named(NamedKey::Escape)), Some(KeyCode::Escape));
        assert_eq!(key_from_winit(&Key::Named(NamedKey::F1)), None);
    }

    #[test]
    fn test_character_keys() {
        assert_eq!(key_from_winit(&Key::Character("a".into())), Some(KeyCode::A));
        assert_eq!(key_from_winit(&Key::Character("A".into())), Some(KeyCode::A));
        assert_eq!(key_from_winit(&Key::Character("2".into())), Some(KeyCode::Key2));
        assert_eq!(key_from_winit(&Key::Character("é".into())), None);
        assert_eq!(key_from_winit(&Key::Character("ab".into())), None);
    }

    #[test]
    fn test_mouse_buttons() {
        assert_eq!(mouse_button_from_winit(WinitMouseButton::Left), MouseButton::Left);
        assert_eq!(mouse_button_from_winit(WinitMouseButton::Other(9)), MouseButton::Other(9));
    }

    #[test]
    fn test_modifiers() {
        let mods = modifiers_from_winit(ModifiersState::SHIFT | ModifiersState::CONTROL);
        assert!(mods.shift && mods.ctrl);
        assert!(!mods.alt && !mods.meta);
    }

    #[test]
    fn test_press_emits_global_then_targeted() {
        let mut input = InputTranslator::new();
        input.cursor_moved(12.0, 34.0);
        let events = input.mouse_input(ElementState::Pressed, WinitMouseButton::Left);
        assert_eq!(events.len(), 2);
        assert!(matches!(
            events[0],
            Event::GlobalMousePress { position: (12.0, 34.0), .. }
        ));
        assert!(matches!(
            events[1],
            Event::MousePress { button: MouseButton::Left, position: (12.0, 34.0), .. }
        ));
    }

    #[test]
    fn test_typed_character_produces_key_and_text() {
        let input = InputTranslator::new();
        let events = input.key_input(ElementState::Pressed, &Key::Character("2".into()), Some("2"));
        assert_eq!(events, vec![Event::key(KeyCode::Key2), Event::text("2")]);
    }

    #[test]
    fn test_ctrl_suppresses_text() {
        let mut input = InputTranslator::new();
        input.modifiers_changed(ModifiersState::CONTROL);
        let events = input.key_input(ElementState::Pressed, &Key::Character("a".into()), Some("a"));
        assert_eq!(
            events,
            vec![Event::KeyPress {
                key: KeyCode::A,
                modifiers: KeyModifiers::CTRL
            }]
        );
    }

    #[test]
    fn test_control_text_is_dropped() {
        let input = InputTranslator::new();
        let events = input.key_input(
            ElementState::Pressed,
            &Key::Named(NamedKey::Backspace),
            Some("\u{8}"),
        );
        assert_eq!(events, vec![Event::key(KeyCode::Backspace)]);
    }
}
