//! combobox_ui - widget toolkit slice hosting the combobox
//!
//! Widgets draw into a recording [`Renderer`] and react to toolkit [`Event`]s;
//! [`input`] converts winit window events into those. The [`Combobox`] widget
//! drives the headless state machine from the `combobox` crate.

mod callback;
mod constants;
mod element;
mod event;
pub mod input;
mod layout;
mod macros;
pub mod outside_click;
mod renderer;
mod state;
pub mod text_edit;
mod theme;
mod widget;
mod widgets;

pub use callback::{Callback, SideEffect};
pub use constants::*;
pub use element::Element;
pub use event::{Event, KeyCode, KeyModifiers, MouseButton};
pub use layout::{Bounds, Length, Padding, Size};
pub use outside_click::{ClickOutsideGuard, ClickOutsideRegistry, OutsideClick, SubtreeRef};
pub use renderer::{Color, DrawCommand, Renderer};
pub use state::ComboboxWidgetState;
pub use text_edit::Caret;
pub use theme::{ComboboxStyle, ComboboxStyleSheet, Theme};
pub use widget::{EventResult, Widget};
pub use widgets::{combobox, Combobox, ComboboxGeometry};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::element::Element;
    pub use crate::event::{Event, KeyCode, KeyModifiers, MouseButton};
    pub use crate::layout::{Bounds, Length, Padding, Size};
    pub use crate::renderer::{Color, Renderer};
    pub use crate::state::ComboboxWidgetState;
    pub use crate::widget::{EventResult, Widget};
    pub use crate::widgets::{combobox, Combobox};
    pub use ::combobox::{ComboOption, ComboboxConfig, ComboboxDefinition, OptionFields, OptionSet};
}
