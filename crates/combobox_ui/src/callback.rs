//! Callback wrappers for widget event handlers
//!
//! Widgets hold optional handlers as [`Callback`] (produces an application
//! message) or [`SideEffect`] (runs for its effect and returns nothing).
//!
//! # Examples
//!
//! ```
//! use combobox_ui::{Callback, SideEffect};
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! #[derive(Debug, PartialEq)]
//! enum Message {
//!     Picked(String),
//! }
//!
//! let on_pick: Callback<String, Message> = Callback::new(Message::Picked);
//! assert_eq!(on_pick.call("TCP".into()), Some(Message::Picked("TCP".into())));
//!
//! let count = Rc::new(Cell::new(0));
//! let counter = count.clone();
//! let on_change: SideEffect<Option<String>> = SideEffect::new(move |_| counter.set(counter.get() + 1));
//! on_change.emit(None);
//! assert_eq!(count.get(), 1);
//! ```

use std::fmt;

/// An optional handler mapping a value to a message.
///
/// - `T`: value passed by the widget
/// - `M`: message type returned to the application
pub struct Callback<T, M> {
    f: Option<Box<dyn Fn(T) -> M>>,
}

impl<T, M> Callback<T, M> {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(T) -> M + 'static,
    {
        Self {
            f: Some(Box::new(f)),
        }
    }

    /// Create an empty callback (no handler).
    pub fn none() -> Self {
        Self { f: None }
    }

    /// Call the handler, if one is set.
    pub fn call(&self, value: T) -> Option<M> {
        self.f.as_ref().map(|f| f(value))
    }

    pub fn is_some(&self) -> bool {
        self.f.is_some()
    }

    pub fn is_none(&self) -> bool {
        self.f.is_none()
    }
}

impl<T, M> Default for Callback<T, M> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T, M> fmt::Debug for Callback<T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("set", &self.is_some())
            .finish()
    }
}

/// A handler run for its side effect, invoked synchronously while the widget
/// handles an event.
pub struct SideEffect<T = ()> {
    f: Option<Box<dyn Fn(T)>>,
}

impl<T> SideEffect<T> {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(T) + 'static,
    {
        Self {
            f: Some(Box::new(f)),
        }
    }

    pub fn none() -> Self {
        Self { f: None }
    }

    /// Run the handler, if one is set.
    pub fn emit(&self, value: T) {
        if let Some(ref f) = self.f {
            f(value);
        }
    }

    pub fn is_some(&self) -> bool {
        self.f.is_some()
    }

    pub fn is_none(&self) -> bool {
        self.f.is_none()
    }
}

impl<T> Default for SideEffect<T> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T> fmt::Debug for SideEffect<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SideEffect")
            .field("set", &self.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_empty_callback_returns_none() {
        let callback: Callback<u32, u32> = Callback::none();
        assert!(callback.is_none());
        assert_eq!(callback.call(1), None);
    }

    #[test]
    fn test_callback_maps_value() {
        let callback = Callback::new(|v: u32| v * 2);
        assert_eq!(callback.call(21), Some(42));
    }

    #[test]
    fn test_side_effect_receives_values_in_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let effect = SideEffect::new(move |v: Option<&'static str>| sink.borrow_mut().push(v));

        effect.emit(Some("Option 2"));
        effect.emit(None);
        assert_eq!(*seen.borrow(), vec![Some("Option 2"), None]);

        // Empty side effects are no-ops
        SideEffect::<u8>::none().emit(1);
    }
}
