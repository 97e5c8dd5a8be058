//! Keyboard focus movement over a rendered option list.
//!
//! Focus is an index into the list currently on screen. Movement never wraps:
//! stepping past either end leaves focus where it is.

/// Keys the combobox reacts to for navigation and selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Up,
    Down,
    Home,
    End,
    Escape,
    Enter,
}

/// First position of a list of `len` items.
#[inline]
pub fn first(len: usize) -> Option<usize> {
    (len > 0).then_some(0)
}

/// Last position of a list of `len` items.
#[inline]
pub fn last(len: usize) -> Option<usize> {
    len.checked_sub(1)
}

/// Position after `current`, or `current` itself at the end.
pub fn next(current: usize, len: usize) -> usize {
    if current + 1 < len {
        current + 1
    } else {
        current
    }
}

/// Position before `current`, or `current` itself at the start.
pub fn previous(current: usize) -> usize {
    current.saturating_sub(1)
}
