//! Draw-command renderer.
//!
//! Widgets describe what to draw; the renderer records it as [`DrawCommand`]s
//! on two layers. Popups draw between [`Renderer::begin_overlay`] and
//! [`Renderer::end_overlay`] so a backend can paint them above every other
//! widget regardless of tree order.

use serde::{Deserialize, Serialize};

use crate::layout::Bounds;

/// RGBA color with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);

    /// Default foreground text
    pub const TEXT_PRIMARY: Color = Color::rgb(0.9, 0.9, 0.92);
    /// Labels and placeholders
    pub const TEXT_SECONDARY: Color = Color::rgb(0.6, 0.6, 0.65);
    pub const BORDER: Color = Color::rgb(0.3, 0.3, 0.35);
    pub const ACCENT: Color = Color::rgb(0.3, 0.5, 0.9);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a different alpha.
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

/// A recorded drawing primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        bounds: Bounds,
        color: Color,
    },
    StrokeRect {
        bounds: Bounds,
        color: Color,
        width: f32,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        size: f32,
        color: Color,
    },
}

impl DrawCommand {
    /// Text content, for text commands.
    pub fn text(&self) -> Option<&str> {
        match self {
            DrawCommand::Text { text, .. } => Some(text),
            _ => None,
        }
    }
}

/// Recording renderer with a base layer and an overlay layer.
#[derive(Debug, Default)]
pub struct Renderer {
    base: Vec<DrawCommand>,
    overlay: Vec<DrawCommand>,
    overlay_depth: usize,
    overlay_regions: Vec<Bounds>,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop everything recorded for the previous frame.
    pub fn clear(&mut self) {
        self.base.clear();
        self.overlay.clear();
        self.overlay_regions.clear();
        self.overlay_depth = 0;
    }

    fn push(&mut self, command: DrawCommand) {
        if self.overlay_depth > 0 {
            self.overlay.push(command);
        } else {
            self.base.push(command);
        }
    }

    pub fn fill_rect(&mut self, bounds: Bounds, color: Color) {
        self.push(DrawCommand::FillRect { bounds, color });
    }

    pub fn stroke_rect(&mut self, bounds: Bounds, color: Color, width: f32) {
        self.push(DrawCommand::StrokeRect {
            bounds,
            color,
            width,
        });
    }

    /// Draw text with its top-left corner at `(x, y)`.
    pub fn text(&mut self, text: &str, x: f32, y: f32, size: f32, color: Color) {
        self.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            size,
            color,
        });
    }

    /// Start recording into the overlay layer. Calls nest.
    pub fn begin_overlay(&mut self) {
        self.overlay_depth += 1;
    }

    pub fn end_overlay(&mut self) {
        self.overlay_depth = self.overlay_depth.saturating_sub(1);
    }

    /// Record the screen area an overlay occupies, for hit testing by the host.
    pub fn register_overlay(&mut self, bounds: Bounds) {
        self.overlay_regions.push(bounds);
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.base
    }

    pub fn overlay_commands(&self) -> &[DrawCommand] {
        &self.overlay
    }

    pub fn overlay_regions(&self) -> &[Bounds] {
        &self.overlay_regions
    }

    /// All text drawn this frame, base layer first.
    pub fn texts(&self) -> Vec<&str> {
        self.base
            .iter()
            .chain(self.overlay.iter())
            .filter_map(DrawCommand::text)
            .collect()
    }

    /// Text drawn on the overlay layer.
    pub fn overlay_texts(&self) -> Vec<&str> {
        self.overlay.iter().filter_map(DrawCommand::text).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_go_to_active_layer() {
        let mut renderer = Renderer::new();
        let bounds = Bounds::new(0.0, 0.0, 10.0, 10.0);

        renderer.fill_rect(bounds, Color::BLACK);
        renderer.begin_overlay();
        renderer.text("popup", 0.0, 0.0, 14.0, Color::WHITE);
        renderer.end_overlay();
        renderer.text("base", 0.0, 0.0, 14.0, Color::WHITE);

        assert_eq!(renderer.commands().len(), 2);
        assert_eq!(renderer.overlay_texts(), vec!["popup"]);
        assert_eq!(renderer.texts(), vec!["base", "popup"]);
    }

    #[test]
    fn test_unbalanced_end_overlay_is_harmless() {
        let mut renderer = Renderer::new();
        renderer.end_overlay();
        renderer.text("base", 0.0, 0.0, 14.0, Color::WHITE);
        assert!(renderer.overlay_commands().is_empty());
    }

    #[test]
    fn test_clear() {
        let mut renderer = Renderer::new();
        renderer.begin_overlay();
        renderer.register_overlay(Bounds::new(0.0, 0.0, 1.0, 1.0));
        renderer.text("x", 0.0, 0.0, 14.0, Color::WHITE);
        renderer.clear();
        renderer.text("y", 0.0, 0.0, 14.0, Color::WHITE);
        assert!(renderer.overlay_regions().is_empty());
        assert_eq!(renderer.commands().len(), 1);
    }

    #[test]
    fn test_color_with_alpha() {
        let color = Color::ACCENT.with_alpha(0.5);
        assert_eq!(color.a, 0.5);
        assert_eq!(color.r, Color::ACCENT.r);
    }
}
