//! Type-erased widget wrapper and event routing

use crate::event::Event;
use crate::layout::{Bounds, Size};
use crate::renderer::Renderer;
use crate::widget::{EventResult, Widget};

/// A laid-out widget of any type.
///
/// An element remembers where it was placed so a host can route events to
/// it without tracking bounds itself. Pointer presses are routed the way
/// widgets expect: [`Event::GlobalMousePress`] always reaches the widget,
/// [`Event::MousePress`] only when it lands inside the widget's hit area
/// (which grows to cover an open popup).
pub struct Element<M> {
    widget: Box<dyn Widget<M>>,
    bounds: Bounds,
}

impl<M> Element<M> {
    pub fn new<W: Widget<M> + 'static>(widget: W) -> Self {
        Self {
            widget: Box::new(widget),
            bounds: Bounds::default(),
        }
    }

    /// Lay out within `available` and place the result at `origin`.
    pub fn layout(&mut self, available: Size, origin: (f32, f32)) -> Bounds {
        let size = self.widget.layout(available);
        self.bounds = Bounds::new(origin.0, origin.1, size.width, size.height);
        self.bounds
    }

    /// Bounds from the last layout pass.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn draw(&self, renderer: &mut Renderer) {
        self.widget.draw(renderer, self.bounds);
    }

    /// Area receiving pointer presses.
    pub fn hit_bounds(&self) -> Bounds {
        self.widget
            .capture_bounds(self.bounds)
            .unwrap_or(self.bounds)
    }

    pub fn has_active_overlay(&self) -> bool {
        self.widget.has_active_overlay()
    }

    /// Route one event to the widget.
    pub fn dispatch(&mut self, event: &Event) -> EventResult<M> {
        if let Event::MousePress { position, .. } = event {
            if !self.hit_bounds().contains(position.0, position.1) {
                return EventResult::None;
            }
        }
        self.widget.on_event(event, self.bounds)
    }

    /// Route a sequence of events, collecting the messages produced.
    pub fn dispatch_all<'a>(&mut self, events: impl IntoIterator<Item = &'a Event>) -> Vec<M> {
        events
            .into_iter()
            .filter_map(|event| self.dispatch(event).into_message())
            .collect()
    }
}

impl<M> std::fmt::Debug for Element<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Element")
            .field("bounds", &self.bounds)
            .finish_non_exhaustive()
    }
}
