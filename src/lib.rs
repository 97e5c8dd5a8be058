//! Combobox - a filterable, keyboard-navigable selection input.
//!
//! This crate is the headless core: the option model, debounced filtering,
//! the interaction state machine, keyboard navigation, the accessibility tree
//! and configuration loading. It does no rendering; `combobox_ui` drives it
//! from a widget.
//!
//! ```
//! use combobox::{ComboboxState, OptionSet, SelectionChange};
//!
//! let options = OptionSet::from_strings(["Option 1", "Option 2"]);
//! let mut state = ComboboxState::default();
//!
//! state.open(&options);
//! assert_eq!(state.rendered(), &[0, 1]);
//!
//! let change = state.select(&options, 1);
//! assert_eq!(change, Some(SelectionChange::Selected("Option 2".into())));
//! assert_eq!(state.display_text(), "Option 2");
//! assert!(!state.is_open());
//! ```

pub mod aria;
pub mod config;
pub mod constants;
pub mod debounce;
pub mod error;
pub mod filter;
pub mod navigation;
pub mod option;
pub mod state;

#[cfg(test)]
mod tests;

pub use aria::{AccessibilityNode, AccessibleRole};
pub use config::{ComboboxConfig, ComboboxDefinition};
pub use debounce::Debouncer;
pub use error::{ConfigError, ConfigResult};
pub use filter::filter_options;
pub use navigation::NavKey;
pub use option::{ComboOption, OptionFields, OptionSet};
pub use state::{ComboboxState, Focus, KeyOutcome, SelectionChange};
