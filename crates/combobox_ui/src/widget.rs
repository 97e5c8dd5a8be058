//! Widget trait and related types

use crate::event::Event;
use crate::layout::{Bounds, Size};
use crate::renderer::Renderer;

/// Outcome of handling an event.
#[derive(Debug, Clone, PartialEq)]
pub enum EventResult<M> {
    /// Nothing for the application to do
    None,
    /// A message for the application
    Message(M),
}

impl<M> EventResult<M> {
    pub fn is_none(&self) -> bool {
        matches!(self, EventResult::None)
    }

    /// The message, if any.
    pub fn into_message(self) -> Option<M> {
        match self {
            EventResult::Message(message) => Some(message),
            EventResult::None => None,
        }
    }

    pub fn map<N>(self, f: impl FnOnce(M) -> N) -> EventResult<N> {
        match self {
            EventResult::Message(message) => EventResult::Message(f(message)),
            EventResult::None => EventResult::None,
        }
    }
}

impl<M> From<Option<M>> for EventResult<M> {
    fn from(message: Option<M>) -> Self {
        match message {
            Some(message) => EventResult::Message(message),
            None => EventResult::None,
        }
    }
}

/// The core widget trait that all UI elements implement
pub trait Widget<M> {
    /// Calculate the size this widget wants given available space
    fn layout(&mut self, available: Size) -> Size;

    /// Draw the widget to the renderer
    fn draw(&self, renderer: &mut Renderer, bounds: Bounds);

    /// Handle an event
    fn on_event(&mut self, event: &Event, bounds: Bounds) -> EventResult<M> {
        let _ = (event, bounds);
        EventResult::None
    }

    /// Whether a popup of this widget is showing
    fn has_active_overlay(&self) -> bool {
        false
    }

    /// Area that should receive pointer events, when larger than the layout
    /// bounds (open popups)
    fn capture_bounds(&self, layout_bounds: Bounds) -> Option<Bounds> {
        let _ = layout_bounds;
        None
    }
}
