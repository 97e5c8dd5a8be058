//! Themes and combobox styling
//!
//! [`Theme`] is a small palette with dark and light variants. A
//! [`ComboboxStyle`] is derived from a theme and can be overridden per widget
//! or loaded from JSON.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::renderer::Color;

/// A color palette shared by widgets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Input field background
    pub input_bg: Color,
    /// Input field background when focused
    pub input_bg_focused: Color,

    pub border: Color,
    pub border_focused: Color,

    pub text_primary: Color,
    /// Labels
    pub text_secondary: Color,
    pub text_placeholder: Color,

    /// Focus rings, highlights, selected markers
    pub accent: Color,
    /// Text selection background
    pub selection: Color,
    pub cursor: Color,

    /// Popup background
    pub popup_bg: Color,
    /// Option background under the pointer
    pub option_hover: Color,
    /// Option background with keyboard focus
    pub accent_subtle: Color,
}

impl Theme {
    /// Dark palette
    pub fn dark() -> Self {
        Self {
            input_bg: Color::rgb(0.11, 0.11, 0.14),
            input_bg_focused: Color::rgb(0.14, 0.14, 0.18),
            border: Color::rgb(0.20, 0.20, 0.26),
            border_focused: Color::rgb(0.40, 0.58, 0.98),
            text_primary: Color::rgb(0.95, 0.95, 0.97),
            text_secondary: Color::rgb(0.58, 0.58, 0.65),
            text_placeholder: Color::rgb(0.42, 0.42, 0.50),
            accent: Color::rgb(0.40, 0.58, 0.98),
            selection: Color::rgba(0.40, 0.58, 0.98, 0.25),
            cursor: Color::rgb(0.40, 0.58, 0.98),
            popup_bg: Color::rgba(0.11, 0.11, 0.14, 0.98),
            option_hover: Color::rgba(0.22, 0.22, 0.28, 1.0),
            accent_subtle: Color::rgba(0.40, 0.58, 0.98, 0.18),
        }
    }

    /// Light palette
    pub fn light() -> Self {
        Self {
            input_bg: Color::rgb(0.99, 0.99, 1.0),
            input_bg_focused: Color::rgb(1.0, 1.0, 1.0),
            border: Color::rgb(0.82, 0.82, 0.86),
            border_focused: Color::rgb(0.35, 0.52, 0.92),
            text_primary: Color::rgb(0.12, 0.12, 0.15),
            text_secondary: Color::rgb(0.45, 0.45, 0.52),
            text_placeholder: Color::rgb(0.62, 0.62, 0.68),
            accent: Color::rgb(0.35, 0.52, 0.92),
            selection: Color::rgba(0.35, 0.52, 0.92, 0.2),
            cursor: Color::rgb(0.35, 0.52, 0.92),
            popup_bg: Color::rgb(1.0, 1.0, 1.0),
            option_hover: Color::rgb(0.94, 0.94, 0.97),
            accent_subtle: Color::rgba(0.35, 0.52, 0.92, 0.12),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

/// Colors used by the combobox widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComboboxStyle {
    pub label: Color,
    pub input_bg: Color,
    pub input_bg_focused: Color,
    pub border: Color,
    pub border_focused: Color,
    pub text: Color,
    pub placeholder: Color,
    pub cursor: Color,
    pub selection: Color,
    /// Dropdown toggle glyph
    pub icon: Color,
    pub popup_bg: Color,
    pub popup_border: Color,
    pub option_text: Color,
    pub option_hover: Color,
    pub option_active: Color,
    /// Selected marker glyph
    pub marker: Color,
}

impl ComboboxStyle {
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            label: theme.text_secondary,
            input_bg: theme.input_bg,
            input_bg_focused: theme.input_bg_focused,
            border: theme.border,
            border_focused: theme.border_focused,
            text: theme.text_primary,
            placeholder: theme.text_placeholder,
            cursor: theme.cursor,
            selection: theme.selection,
            icon: theme.text_secondary,
            popup_bg: theme.popup_bg,
            popup_border: theme.border,
            option_text: theme.text_primary,
            option_hover: theme.option_hover,
            option_active: theme.accent_subtle,
            marker: theme.accent,
        }
    }
}

impl Default for ComboboxStyle {
    fn default() -> Self {
        Self::from_theme(&Theme::default())
    }
}

/// Combobox styles keyed by class name.
///
/// A combobox's `class_name` is a whitespace-separated list of opaque class
/// identifiers. The last class with an entry in the sheet wins; without one
/// the base style applies.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ComboboxStyleSheet {
    pub base: ComboboxStyle,
    pub classes: BTreeMap<String, ComboboxStyle>,
}

impl ComboboxStyleSheet {
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            base: ComboboxStyle::from_theme(theme),
            classes: BTreeMap::new(),
        }
    }

    /// Add or replace the style for `class`.
    pub fn with_class(mut self, class: impl Into<String>, style: ComboboxStyle) -> Self {
        self.classes.insert(class.into(), style);
        self
    }

    /// Style for a widget with the given class list.
    pub fn resolve(&self, class_name: Option<&str>) -> &ComboboxStyle {
        class_name
            .into_iter()
            .flat_map(str::split_whitespace)
            .filter_map(|class| self.classes.get(class))
            .last()
            .unwrap_or(&self.base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_follows_theme() {
        let light = ComboboxStyle::from_theme(&Theme::light());
        assert_eq!(light.text, Theme::light().text_primary);
        assert_ne!(light, ComboboxStyle::default());
    }

    #[test]
    fn test_partial_style_json() {
        let style: ComboboxStyle =
            serde_json::from_str(r#"{"marker": {"r": 1.0, "g": 0.0, "b": 0.0, "a": 1.0}}"#).unwrap();
        assert_eq!(style.marker, Color::rgb(1.0, 0.0, 0.0));
        assert_eq!(style.text, ComboboxStyle::default().text);
    }

    #[test]
    fn test_style_sheet_resolves_classes() {
        let compact = ComboboxStyle::from_theme(&Theme::light());
        let mut danger = ComboboxStyle::default();
        danger.border = Color::rgb(0.9, 0.2, 0.2);
        let sheet = ComboboxStyleSheet::default()
            .with_class("compact", compact.clone())
            .with_class("danger", danger.clone());

        assert_eq!(sheet.resolve(None), &ComboboxStyle::default());
        assert_eq!(sheet.resolve(Some("unknown")), &sheet.base);
        assert_eq!(sheet.resolve(Some("compact")), &compact);
        assert_eq!(sheet.resolve(Some("compact  danger")), &danger);
        assert_eq!(sheet.resolve(Some("danger other")), &danger);
    }
}
