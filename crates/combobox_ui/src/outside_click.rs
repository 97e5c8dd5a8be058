//! Outside-click detection.
//!
//! Two forms of the same rule, "a pointer press outside a subtree dismisses
//! it":
//!
//! - [`OutsideClick`] is a stateless check for widgets that already receive
//!   [`Event::GlobalMousePress`] and know their own bounds.
//! - [`ClickOutsideRegistry`] is a document-level dispatcher. Components
//!   register a [`SubtreeRef`] plus a callback and keep the returned
//!   [`ClickOutsideGuard`]; dropping the guard deregisters.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::event::Event;
use crate::layout::Bounds;

/// Stateless outside-click checks.
pub struct OutsideClick;

impl OutsideClick {
    /// Whether `position` lies outside every rectangle of `subtree`.
    #[inline]
    pub fn is_outside(position: (f32, f32), subtree: &[Bounds]) -> bool {
        !subtree
            .iter()
            .any(|bounds| bounds.contains(position.0, position.1))
    }

    /// Whether `event` is a global press outside `subtree`.
    pub fn should_dismiss(event: &Event, subtree: &[Bounds]) -> bool {
        match event {
            Event::GlobalMousePress { position, .. } => Self::is_outside(*position, subtree),
            _ => false,
        }
    }
}

/// Shared, updatable set of rectangles making up a rendered subtree.
///
/// The owner updates it after each layout; the registry reads it when a press
/// arrives.
#[derive(Debug, Clone, Default)]
pub struct SubtreeRef(Rc<RefCell<Vec<Bounds>>>);

impl SubtreeRef {
    pub fn new(bounds: Vec<Bounds>) -> Self {
        Self(Rc::new(RefCell::new(bounds)))
    }

    /// Replace the subtree's rectangles.
    pub fn set(&self, bounds: Vec<Bounds>) {
        *self.0.borrow_mut() = bounds;
    }

    pub fn bounds(&self) -> Vec<Bounds> {
        self.0.borrow().clone()
    }

    pub fn contains(&self, position: (f32, f32)) -> bool {
        !OutsideClick::is_outside(position, &self.0.borrow())
    }
}

type OutsideCallback = Rc<dyn Fn((f32, f32))>;

struct Listener {
    id: u64,
    subtree: SubtreeRef,
    callback: OutsideCallback,
}

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<Listener>,
}

impl Listeners {
    fn contains(&self, id: u64) -> bool {
        self.entries.iter().any(|listener| listener.id == id)
    }
}

/// Document-level pointer-down dispatcher.
///
/// Single-threaded; clones share the same listener list.
#[derive(Clone, Default)]
pub struct ClickOutsideRegistry {
    listeners: Rc<RefCell<Listeners>>,
}

impl ClickOutsideRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Call `callback` for every press outside `subtree` until the guard drops.
    #[must_use = "dropping the guard deregisters the listener immediately"]
    pub fn register<F>(&self, subtree: SubtreeRef, callback: F) -> ClickOutsideGuard
    where
        F: Fn((f32, f32)) + 'static,
    {
        let mut listeners = self.listeners.borrow_mut();
        let id = listeners.next_id;
        listeners.next_id += 1;
        listeners.entries.push(Listener {
            id,
            subtree,
            callback: Rc::new(callback),
        });
        log::trace!("ClickOutsideRegistry: registered listener {}", id);

        ClickOutsideGuard {
            id,
            listeners: Rc::downgrade(&self.listeners),
        }
    }

    /// Number of live registrations.
    pub fn len(&self) -> usize {
        self.listeners.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Dispatch a pointer press. Returns how many callbacks ran.
    ///
    /// Callbacks may register or drop guards. Listeners added during dispatch
    /// first see the next press; listeners removed during dispatch are not
    /// called.
    pub fn pointer_down(&self, position: (f32, f32)) -> usize {
        let snapshot: Vec<(u64, SubtreeRef, OutsideCallback)> = self
            .listeners
            .borrow()
            .entries
            .iter()
            .map(|l| (l.id, l.subtree.clone(), l.callback.clone()))
            .collect();

        let mut fired = 0;
        for (id, subtree, callback) in snapshot {
            if !self.listeners.borrow().contains(id) {
                continue;
            }
            if !subtree.contains(position) {
                callback(position);
                fired += 1;
            }
        }
        fired
    }

    /// Dispatch a toolkit event; only global presses count.
    pub fn handle_event(&self, event: &Event) -> usize {
        match event {
            Event::GlobalMousePress { position, .. } => self.pointer_down(*position),
            _ => 0,
        }
    }
}

impl fmt::Debug for ClickOutsideRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClickOutsideRegistry")
            .field("listeners", &self.len())
            .finish()
    }
}

/// Keeps a registration alive; deregisters on drop.
#[derive(Debug)]
pub struct ClickOutsideGuard {
    id: u64,
    listeners: Weak<RefCell<Listeners>>,
}

impl Drop for ClickOutsideGuard {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners
                .borrow_mut()
                .entries
                .retain(|listener| listener.id != self.id);
            log::trace!("ClickOutsideRegistry: dropped listener {}", self.id);
        }
    }
}
