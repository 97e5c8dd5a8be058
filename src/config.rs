//! Combobox configuration and JSON definition files.
//!
//! [`ComboboxConfig`] is the caller-facing contract of a single combobox:
//! labels, option field names, debounce delay and icon slots. A
//! [`ComboboxDefinition`] bundles a config with its options and an optional
//! initial value so a whole combobox can be described in one JSON document.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_DEBOUNCE_DELAY_MS, DEFAULT_DROPDOWN_ICON, DEFAULT_OPTION_FIELD, DEFAULT_PLACEHOLDER,
    DEFAULT_SELECTED_ICON, DEFINITION_VERSION,
};
use crate::error::{ConfigError, ConfigResult};
use crate::option::{ComboOption, OptionFields, OptionSet};
use crate::state::ComboboxState;

/// Configuration of one combobox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComboboxConfig {
    /// Visible label above the input
    pub label: Option<String>,
    /// Id of the input element; falls back to the label
    pub id: Option<String>,
    /// Placeholder shown while the input is empty
    pub placeholder: Option<String>,
    /// Extra style class, passed through untouched
    pub class_name: Option<String>,
    /// Option field shown and matched against the search text
    pub selection_key: String,
    /// Option field identifying an option
    pub unique_key: String,
    /// Delay between the last keystroke and filtering
    pub debounce_delay_ms: u64,
    /// Draw the selected marker before the option text instead of after it
    pub selected_icon_on_left: bool,
    /// Glyph for the dropdown toggle
    pub dropdown_icon: Option<String>,
    /// Glyph marking the selected option
    pub selected_icon: Option<String>,
}

impl Default for ComboboxConfig {
    fn default() -> Self {
        Self {
            label: None,
            id: None,
            placeholder: None,
            class_name: None,
            selection_key: DEFAULT_OPTION_FIELD.to_string(),
            unique_key: DEFAULT_OPTION_FIELD.to_string(),
            debounce_delay_ms: DEFAULT_DEBOUNCE_DELAY_MS,
            selected_icon_on_left: false,
            dropdown_icon: None,
            selected_icon: None,
        }
    }
}

impl ComboboxConfig {
    /// Create a config with a visible label.
    pub fn labelled(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::default()
        }
    }

    /// Create a config reading options through `fields`.
    pub fn from_fields(fields: &OptionFields) -> Self {
        Self {
            selection_key: fields.selection_key.clone(),
            unique_key: fields.unique_key.clone(),
            ..Self::default()
        }
    }

    /// Placeholder text, falling back to `"Select {label}"` and then to a
    /// generic prompt.
    pub fn placeholder_text(&self) -> String {
        match (&self.placeholder, &self.label) {
            (Some(placeholder), _) => placeholder.clone(),
            (None, Some(label)) => format!("Select {}", label),
            (None, None) => DEFAULT_PLACEHOLDER.to_string(),
        }
    }

    /// Id of the text input.
    pub fn input_id(&self) -> Option<&str> {
        self.id.as_deref().or(self.label.as_deref())
    }

    /// Field names to read from options.
    pub fn fields(&self) -> OptionFields {
        OptionFields::new(&self.selection_key, &self.unique_key)
    }

    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_delay_ms)
    }

    pub fn dropdown_icon(&self) -> &str {
        self.dropdown_icon.as_deref().unwrap_or(DEFAULT_DROPDOWN_ICON)
    }

    pub fn selected_icon(&self) -> &str {
        self.selected_icon.as_deref().unwrap_or(DEFAULT_SELECTED_ICON)
    }

    /// Build an option set from raw options using this config's fields.
    pub fn option_set(&self, options: Vec<ComboOption>) -> OptionSet {
        OptionSet::new(options, self.fields())
    }

    /// Fresh interaction state, optionally preselecting `value`.
    pub fn initial_state(&self, set: &OptionSet, value: Option<&str>) -> ComboboxState {
        match value {
            Some(value) => ComboboxState::with_value(set, value, self.debounce_delay()),
            None => ComboboxState::new(self.debounce_delay()),
        }
    }

    /// Deserialize a config from JSON.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the config to pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// A complete combobox description: config, options and initial value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComboboxDefinition {
    /// Version of the definition format
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub config: ComboboxConfig,

    /// Options in display order
    pub options: Vec<ComboOption>,

    /// Unique key of the initially selected option
    #[serde(default)]
    pub value: Option<String>,
}

fn default_version() -> u32 {
    DEFINITION_VERSION
}

impl ComboboxDefinition {
    /// Create a definition at the current format version.
    pub fn new(config: ComboboxConfig, options: Vec<ComboOption>) -> Self {
        Self {
            version: DEFINITION_VERSION,
            config,
            options,
            value: None,
        }
    }

    /// Preselect the option with unique key `value`.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Parse and validate a definition.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let definition: Self = serde_json::from_str(json)?;
        definition.validate()?;
        Ok(definition)
    }

    /// Read, parse and validate a definition file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let definition = Self::from_json(&json)?;
        log::info!(
            "Loaded combobox definition from {:?} ({} options)",
            path,
            definition.options.len()
        );
        Ok(definition)
    }

    /// Serialize the definition to pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Check version compatibility, option fields and the initial value.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.version > DEFINITION_VERSION {
            return Err(ConfigError::UnsupportedVersion {
                found: self.version,
                supported: DEFINITION_VERSION,
            });
        }

        let set = self.option_set();
        set.validate()?;

        if let Some(value) = &self.value {
            if set.position_of_key(value).is_none() {
                return Err(ConfigError::UnknownValue {
                    value: value.clone(),
                });
            }
        }
        Ok(())
    }

    /// The options as a set keyed by the configured fields.
    pub fn option_set(&self) -> OptionSet {
        self.config.option_set(self.options.clone())
    }

    /// Interaction state with the initial value applied.
    pub fn initial_state(&self, set: &OptionSet) -> ComboboxState {
        self.config.initial_state(set, self.value.as_deref())
    }
}
