//! Shared defaults for the combobox core.

/// Default debounce delay between the last keystroke and filtering, in milliseconds.
pub const DEFAULT_DEBOUNCE_DELAY_MS: u64 = 1;

/// Field name used for both display and identity when none is configured.
pub const DEFAULT_OPTION_FIELD: &str = "name";

/// Placeholder shown when neither a placeholder nor a label is configured.
pub const DEFAULT_PLACEHOLDER: &str = "Choose an option";

/// Glyph drawn on the dropdown toggle when no icon is supplied.
pub const DEFAULT_DROPDOWN_ICON: &str = "▾";

/// Glyph marking the selected option when no icon is supplied.
pub const DEFAULT_SELECTED_ICON: &str = "✓";

/// Current definition file format version.
pub const DEFINITION_VERSION: u32 = 1;
