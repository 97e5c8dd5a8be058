//! Reschedulable single-shot deferred action.
//!
//! Every [`Debouncer::schedule`] replaces whatever was pending and restarts the
//! delay, so only the most recent value ever fires. The debouncer holds no
//! timer of its own: the owner polls it with the current time, which keeps it
//! a plain value that can be cloned into widget state and tested without
//! sleeping.

use std::time::Duration;
use web_time::Instant;

/// A pending value and the instant it becomes due.
#[derive(Debug, Clone, PartialEq)]
struct Pending<T> {
    value: T,
    due: Instant,
}

/// Cancel-and-reschedule debouncer for a single value.
#[derive(Debug, Clone, PartialEq)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    /// Create a debouncer that fires `delay` after the last schedule.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Create a debouncer with a delay in milliseconds.
    pub fn from_millis(delay_ms: u64) -> Self {
        Self::new(Duration::from_millis(delay_ms))
    }

    /// The configured delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Change the delay. A value already pending keeps its deadline.
    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    /// Schedule `value`, superseding anything pending.
    pub fn schedule(&mut self, value: T, now: Instant) {
        if self.pending.is_some() {
            log::trace!("Debouncer: superseding pending value");
        }
        self.pending = Some(Pending {
            value,
            due: now + self.delay,
        });
    }

    /// Take the pending value if it is due at `now`.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some(pending) if now >= pending.due => self.pending.take().map(|p| p.value),
            _ => None,
        }
    }

    /// Drop the pending value without firing it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Whether a value is waiting to fire.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending value becomes due, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.due)
    }
}
