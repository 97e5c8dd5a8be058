//! Centralized constants for combobox_ui
//!
//! All magic numbers used for sizing widgets live here.

use crate::layout::Padding;

// =============================================================================
// Typography
// =============================================================================

/// Default font size used across widgets
pub const DEFAULT_FONT_SIZE: f32 = 14.0;

/// Approximate character width as a ratio of font size
/// Used for text measurement approximation
pub const CHAR_WIDTH_FACTOR: f32 = 0.6;

/// Line height as a ratio of font size
pub const LINE_HEIGHT_FACTOR: f32 = 1.2;

/// Line height for a font size
#[inline]
pub fn line_height(font_size: f32) -> f32 {
    font_size * LINE_HEIGHT_FACTOR
}

// =============================================================================
// Spacing
// =============================================================================

/// Compact vertical padding
pub const PADDING_COMPACT: f32 = 6.0;

/// Standard horizontal padding
pub const PADDING_STANDARD: f32 = 8.0;

/// Default padding for the text input
pub const TEXT_INPUT_PADDING: Padding = Padding {
    top: PADDING_COMPACT,
    right: PADDING_STANDARD,
    bottom: PADDING_COMPACT,
    left: PADDING_STANDARD,
};

/// Gap between the label and the input
pub const LABEL_SPACING: f32 = 4.0;

// =============================================================================
// Text Input
// =============================================================================

/// Width of the text cursor
pub const CURSOR_WIDTH: f32 = 1.0;

/// Border stroke width
pub const BORDER_WIDTH: f32 = 1.0;

/// Width below which an input shrinks no further
pub const MIN_INPUT_WIDTH: f32 = 120.0;

// =============================================================================
// Combobox
// =============================================================================

/// Width of the dropdown toggle at the right edge of the input
pub const TOGGLE_WIDTH: f32 = 24.0;

/// Height of each option row in the popup
pub const OPTION_HEIGHT: f32 = 28.0;

/// Gap between the input and the popup
pub const POPUP_GAP: f32 = 2.0;

/// Width reserved for the selected marker in option rows
pub const MARKER_WIDTH: f32 = 20.0;
