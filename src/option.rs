//! Option model for the combobox.
//!
//! Options are supplied by the caller either as plain strings or as records of
//! named string fields. [`OptionFields`] names the record field used for
//! display/search and the field used as the option's identity.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_OPTION_FIELD;
use crate::error::ConfigError;

/// A single selectable option.
///
/// Deserializes from either a JSON string or a JSON object of strings:
///
/// ```
/// use combobox::ComboOption;
///
/// let plain: ComboOption = serde_json::from_str(r#""Option 1""#).unwrap();
/// let record: ComboOption =
///     serde_json::from_str(r#"{"name": "TCP", "value": "tcp"}"#).unwrap();
///
/// assert_eq!(plain.field("anything"), "Option 1");
/// assert_eq!(record.field("value"), "tcp");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ComboOption {
    /// A raw string; both its display text and its identity.
    Plain(String),
    /// A record of named fields.
    Record(BTreeMap<String, String>),
}

impl ComboOption {
    /// Create a plain string option.
    pub fn plain(text: impl Into<String>) -> Self {
        ComboOption::Plain(text.into())
    }

    /// Create a record option from `(field, value)` pairs.
    pub fn record<K, V>(fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        ComboOption::Record(
            fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Look up a field without panicking.
    ///
    /// Plain options answer every field name with their own text.
    pub fn get(&self, field: &str) -> Option<&str> {
        match self {
            ComboOption::Plain(text) => Some(text),
            ComboOption::Record(fields) => fields.get(field).map(String::as_str),
        }
    }

    /// Look up a field.
    ///
    /// # Panics
    ///
    /// Panics if this is a record without `field`. A misconfigured key is a
    /// programming error and must surface during development.
    pub fn field(&self, field: &str) -> &str {
        match self.get(field) {
            Some(value) => value,
            None => panic!(
                "combobox option {:?} has no field named {:?}",
                self, field
            ),
        }
    }
}

impl From<&str> for ComboOption {
    fn from(text: &str) -> Self {
        ComboOption::Plain(text.to_string())
    }
}

impl From<String> for ComboOption {
    fn from(text: String) -> Self {
        ComboOption::Plain(text)
    }
}

/// Which option fields drive display and identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionFields {
    /// Field shown in the input/list and matched against the search text
    #[serde(default = "default_field")]
    pub selection_key: String,
    /// Field identifying an option for selection and list keys
    #[serde(default = "default_field")]
    pub unique_key: String,
}

fn default_field() -> String {
    DEFAULT_OPTION_FIELD.to_string()
}

impl Default for OptionFields {
    fn default() -> Self {
        Self {
            selection_key: default_field(),
            unique_key: default_field(),
        }
    }
}

impl OptionFields {
    /// Create field names for display (`selection_key`) and identity (`unique_key`).
    pub fn new(selection_key: impl Into<String>, unique_key: impl Into<String>) -> Self {
        Self {
            selection_key: selection_key.into(),
            unique_key: unique_key.into(),
        }
    }

    /// Use the same field for display and identity.
    pub fn single(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            selection_key: key.clone(),
            unique_key: key,
        }
    }
}

/// The ordered option list a combobox chooses from.
///
/// Indices into the set are stable for the lifetime of the set; filtered
/// views and keyboard focus refer to options by index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionSet {
    options: Vec<ComboOption>,
    fields: OptionFields,
}

impl OptionSet {
    /// Create a set from options and the fields to read from them.
    pub fn new(options: Vec<ComboOption>, fields: OptionFields) -> Self {
        Self { options, fields }
    }

    /// Create a set of plain string options.
    pub fn from_strings<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            options: options.into_iter().map(|s| ComboOption::Plain(s.into())).collect(),
            fields: OptionFields::default(),
        }
    }

    /// The configured field names.
    pub fn fields(&self) -> &OptionFields {
        &self.fields
    }

    /// All options in caller order.
    pub fn options(&self) -> &[ComboOption] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Option at `index`.
    pub fn get(&self, index: usize) -> Option<&ComboOption> {
        self.options.get(index)
    }

    /// Display text of the option at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range or the option lacks the selection key.
    pub fn display(&self, index: usize) -> &str {
        self.options[index].field(&self.fields.selection_key)
    }

    /// Unique key of the option at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range or the option lacks the unique key.
    pub fn key(&self, index: usize) -> &str {
        self.options[index].field(&self.fields.unique_key)
    }

    /// Index of the option whose unique key equals `key`.
    pub fn position_of_key(&self, key: &str) -> Option<usize> {
        (0..self.options.len()).find(|&i| self.key(i) == key)
    }

    /// Check every option carries both configured fields and that unique keys
    /// are unique.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for (index, option) in self.options.iter().enumerate() {
            for field in [&self.fields.selection_key, &self.fields.unique_key] {
                if option.get(field).is_none() {
                    return Err(ConfigError::MissingField {
                        index,
                        field: field.clone(),
                    });
                }
            }
            let key = self.key(index);
            if !seen.insert(key) {
                return Err(ConfigError::DuplicateKey {
                    key: key.to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stores() -> OptionSet {
        OptionSet::new(
            vec![
                ComboOption::record([("name", "Albertsons"), ("value", "albertsons")]),
                ComboOption::record([("name", "TCP"), ("value", "tcp")]),
                ComboOption::record([("name", "Manscaped"), ("value", "manscaped")]),
            ],
            OptionFields::new("name", "value"),
        )
    }

    #[test]
    fn test_plain_option_answers_any_field() {
        let option = ComboOption::plain("Option 1");
        assert_eq!(option.field(""), "Option 1");
        assert_eq!(option.field("name"), "Option 1");
    }

    #[test]
    fn test_record_display_and_key() {
        let set = stores();
        assert_eq!(set.display(1), "TCP");
        assert_eq!(set.key(1), "tcp");
        assert_eq!(set.position_of_key("manscaped"), Some(2));
        assert_eq!(set.position_of_key("missing"), None);
    }

    #[test]
    #[should_panic(expected = "no field named \"label\"")]
    fn test_missing_field_panics() {
        let set = OptionSet::new(
            vec![ComboOption::record([("name", "TCP")])],
            OptionFields::single("label"),
        );
        let _ = set.display(0);
    }

    #[test]
    fn test_validate_reports_missing_field() {
        let set = OptionSet::new(
            vec![
                ComboOption::record([("name", "A"), ("value", "a")]),
                ComboOption::record([("name", "B")]),
            ],
            OptionFields::new("name", "value"),
        );
        match set.validate() {
            Err(ConfigError::MissingField { index, field }) => {
                assert_eq!(index, 1);
                assert_eq!(field, "value");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_validate_reports_duplicate_key() {
        let set = OptionSet::from_strings(["a", "b", "a"]);
        assert!(matches!(
            set.validate(),
            Err(ConfigError::DuplicateKey { key }) if key == "a"
        ));
        assert!(stores().validate().is_ok());
    }

    #[test]
    fn test_deserialize_mixed_options() {
        let options: Vec<ComboOption> =
            serde_json::from_str(r#"["Option 1", {"name": "Option 2"}]"#).unwrap();
        assert_eq!(options[0], ComboOption::plain("Option 1"));
        assert_eq!(options[1].field("name"), "Option 2");
    }
}
