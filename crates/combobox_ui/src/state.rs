//! Externally held widget state
//!
//! Following the toolkit's pattern, the application owns a
//! [`ComboboxWidgetState`], passes it into the widget each frame and stores
//! the copy the widget sends back through its state-change callback.

use ::combobox::{ComboboxConfig, ComboboxDefinition, ComboboxState, Focus, OptionSet};

use crate::text_edit::{char_count, Caret};

/// Everything a combobox widget remembers between frames.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComboboxWidgetState {
    /// Interaction state machine
    pub core: ComboboxState,
    /// Text cursor within the input
    pub caret: Caret,
    /// Rendered option position under the pointer
    pub hovered: Option<usize>,
}

impl ComboboxWidgetState {
    /// State for `config`, optionally preselecting `value`.
    pub fn new(config: &ComboboxConfig, options: &OptionSet, value: Option<&str>) -> Self {
        Self::from_core(config.initial_state(options, value))
    }

    /// State described by a definition file.
    pub fn from_definition(definition: &ComboboxDefinition, options: &OptionSet) -> Self {
        Self::from_core(definition.initial_state(options))
    }

    pub fn from_core(core: ComboboxState) -> Self {
        let caret = Caret::at(char_count(core.display_text()));
        Self {
            core,
            caret,
            hovered: None,
        }
    }

    /// Whether the input or one of its options has keyboard focus.
    pub fn is_focused(&self) -> bool {
        self.core.focus() != Focus::None
    }

    /// Move the caret to the end of the displayed text.
    pub(crate) fn caret_to_end(&mut self) {
        self.caret = Caret::at(char_count(self.core.display_text()));
    }
}
