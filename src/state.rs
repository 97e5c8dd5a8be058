//! Combobox interaction state machine.
//!
//! [`ComboboxState`] holds everything a combobox instance remembers between
//! events: the search text, whether the dropdown is open, the selected key, the
//! filtered list on screen and which element has keyboard focus. Operations
//! take the [`OptionSet`] explicitly and time as an [`Instant`], so every
//! transition is a plain function of its inputs.

use std::time::Duration;
use web_time::Instant;

use crate::constants::DEFAULT_DEBOUNCE_DELAY_MS;
use crate::debounce::Debouncer;
use crate::filter::filter_options;
use crate::navigation::{self, NavKey};
use crate::option::OptionSet;

/// Which part of the combobox has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The combobox does not have focus
    #[default]
    None,
    /// The text input has focus
    Input,
    /// A rendered option has focus (position within the filtered list)
    Option(usize),
}

/// A selection or deselection produced by a click or Enter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionChange {
    /// An option became selected; carries its unique key
    Selected(String),
    /// The selected option was toggled off
    Cleared,
}

impl SelectionChange {
    /// The value reported to the change callback.
    pub fn value(&self) -> Option<&str> {
        match self {
            SelectionChange::Selected(key) => Some(key),
            SelectionChange::Cleared => None,
        }
    }

    /// Owned form of [`SelectionChange::value`].
    pub fn into_value(self) -> Option<String> {
        match self {
            SelectionChange::Selected(key) => Some(key),
            SelectionChange::Cleared => None,
        }
    }
}

/// Result of a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The key means nothing in the current state
    Ignored,
    /// State changed, no selection change
    Handled,
    /// The key selected or deselected an option
    Changed(SelectionChange),
}

/// Interaction state of one combobox instance.
#[derive(Debug, Clone, PartialEq)]
pub struct ComboboxState {
    search_text: Option<String>,
    is_open: bool,
    selected: Option<String>,
    filtered: Option<Vec<usize>>,
    focus: Focus,
    pending_filter: Debouncer<String>,
}

impl Default for ComboboxState {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_DEBOUNCE_DELAY_MS))
    }
}

impl ComboboxState {
    /// Create an empty state that filters `delay` after the last keystroke.
    pub fn new(delay: Duration) -> Self {
        Self {
            search_text: None,
            is_open: false,
            selected: None,
            filtered: None,
            focus: Focus::None,
            pending_filter: Debouncer::new(delay),
        }
    }

    /// Create a state with `value` preselected.
    ///
    /// The input shows the display text of the option whose unique key is
    /// `value`, or `value` itself if no option has that key.
    pub fn with_value(set: &OptionSet, value: &str, delay: Duration) -> Self {
        let mut state = Self::new(delay);
        state.sync_value(set, Some(value));
        state
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Raw search text; `None` until the user types or selects.
    pub fn search_text(&self) -> Option<&str> {
        self.search_text.as_deref()
    }

    /// Text the input should display.
    pub fn display_text(&self) -> &str {
        self.search_text.as_deref().unwrap_or("")
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Unique key of the selected option.
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Last applied filter result; `None` if the list was never populated or
    /// was discarded by an outside click.
    pub fn filtered(&self) -> Option<&[usize]> {
        self.filtered.as_deref()
    }

    /// Option indices currently on screen (empty while closed).
    pub fn rendered(&self) -> &[usize] {
        if self.is_open {
            self.filtered.as_deref().unwrap_or(&[])
        } else {
            &[]
        }
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Position of the focused option within the rendered list.
    pub fn active_position(&self) -> Option<usize> {
        match self.focus {
            Focus::Option(position) => Some(position),
            _ => None,
        }
    }

    /// Option-set index of the focused option.
    pub fn active_index(&self) -> Option<usize> {
        self.active_position()
            .and_then(|position| self.rendered().get(position).copied())
    }

    /// Whether the option at `index` is the selected one.
    pub fn is_selected(&self, set: &OptionSet, index: usize) -> bool {
        self.selected.as_deref() == Some(set.key(index))
    }

    /// Whether a filter is waiting for its debounce delay.
    pub fn has_pending_filter(&self) -> bool {
        self.pending_filter.is_pending()
    }

    /// When the pending filter becomes due.
    pub fn filter_deadline(&self) -> Option<Instant> {
        self.pending_filter.deadline()
    }

    pub fn debounce_delay(&self) -> Duration {
        self.pending_filter.delay()
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Open the dropdown (input focused) showing every option.
    ///
    /// The input text is left alone; typed text narrows the list only
    /// through the debounced filter.
    pub fn open(&mut self, set: &OptionSet) {
        log::debug!("Combobox: open, {} options", set.len());
        self.filtered = Some(filter_options(set, ""));
        self.is_open = true;
        self.focus = Focus::Input;
    }

    /// Give keyboard focus back to the text input, leaving the list as is.
    pub fn focus_input(&mut self) {
        if self.focus != Focus::Input {
            log::trace!("Combobox: focus input");
        }
        self.focus = Focus::Input;
    }

    /// Change the debounce delay for future keystrokes.
    pub fn set_debounce_delay(&mut self, delay: Duration) {
        self.pending_filter.set_delay(delay);
    }

    /// Close the dropdown, keeping the last filtered list.
    pub fn close(&mut self) {
        if self.is_open {
            log::debug!("Combobox: close");
        }
        self.is_open = false;
        if matches!(self.focus, Focus::Option(_)) {
            self.focus = Focus::Input;
        }
    }

    /// Dropdown toggle button.
    pub fn toggle(&mut self, set: &OptionSet) {
        if self.is_open {
            self.close();
        } else {
            self.open(set);
        }
    }

    /// The input text changed.
    ///
    /// The text is echoed immediately; filtering waits for the debounce delay.
    /// Editing the text drops the selection marker since the input no longer
    /// names the selected option. No change is reported for that.
    pub fn input_changed(&mut self, text: impl Into<String>, now: Instant) {
        let text = text.into();
        log::trace!("Combobox: input '{}'", text);
        self.pending_filter.schedule(text.clone(), now);
        self.search_text = Some(text);
        if self.selected.take().is_some() {
            log::debug!("Combobox: selection marker cleared by edit");
        }
        self.is_open = true;
        self.focus = Focus::Input;
    }

    /// Apply the pending filter if it is due. Returns whether the list changed.
    pub fn tick(&mut self, set: &OptionSet, now: Instant) -> bool {
        let Some(query) = self.pending_filter.poll(now) else {
            return false;
        };
        let filtered = filter_options(set, &query);
        log::debug!(
            "Combobox: filter applied, query='{}', {} matches",
            query,
            filtered.len()
        );
        self.replace_filtered(filtered);
        true
    }

    /// Click on the option at `position` of the rendered list.
    ///
    /// Returns `None` if nothing is rendered at that position.
    pub fn select(&mut self, set: &OptionSet, position: usize) -> Option<SelectionChange> {
        let index = *self.rendered().get(position)?;
        Some(self.select_index(set, index))
    }

    /// Toggle selection of the option at set index `index`.
    pub fn select_index(&mut self, set: &OptionSet, index: usize) -> SelectionChange {
        self.pending_filter.cancel();
        let key = set.key(index);

        if self.selected.as_deref() == Some(key) {
            log::debug!("Combobox: deselect '{}'", key);
            self.selected = None;
            self.search_text = Some(String::new());
            self.refilter(set);
            SelectionChange::Cleared
        } else {
            let key = key.to_string();
            log::debug!("Combobox: select '{}'", key);
            self.search_text = Some(set.display(index).to_string());
            self.selected = Some(key.clone());
            self.is_open = false;
            self.focus = Focus::Input;
            self.refilter(set);
            SelectionChange::Selected(key)
        }
    }

    /// Pointer went down outside the combobox.
    ///
    /// Discards the list and closes; the selection is untouched.
    pub fn click_outside(&mut self) {
        if self.is_open || self.focus != Focus::None {
            log::debug!("Combobox: dismissed by outside click");
        }
        self.pending_filter.cancel();
        self.filtered = None;
        self.is_open = false;
        self.focus = Focus::None;
    }

    /// Keyboard navigation and selection.
    pub fn key_down(&mut self, set: &OptionSet, key: NavKey) -> KeyOutcome {
        match (key, self.focus) {
            (NavKey::Up | NavKey::Down, Focus::Input) => {
                if !self.is_open {
                    self.open(set);
                }
                if let Some(first) = navigation::first(self.rendered().len()) {
                    self.focus = Focus::Option(first);
                }
                KeyOutcome::Handled
            }
            (NavKey::Down, Focus::Option(position)) => {
                self.focus = Focus::Option(navigation::next(position, self.rendered().len()));
                KeyOutcome::Handled
            }
            (NavKey::Up, Focus::Option(position)) => {
                self.focus = Focus::Option(navigation::previous(position));
                KeyOutcome::Handled
            }
            (NavKey::Home, Focus::Option(_)) => {
                if let Some(first) = navigation::first(self.rendered().len()) {
                    self.focus = Focus::Option(first);
                }
                KeyOutcome::Handled
            }
            (NavKey::End, Focus::Option(_)) => {
                if let Some(last) = navigation::last(self.rendered().len()) {
                    self.focus = Focus::Option(last);
                }
                KeyOutcome::Handled
            }
            (NavKey::Escape, Focus::Input | Focus::Option(_)) if self.is_open => {
                log::debug!("Combobox: escape");
                self.pending_filter.cancel();
                self.search_text = Some(String::new());
                self.selected = None;
                self.is_open = false;
                self.focus = Focus::Input;
                self.refilter(set);
                KeyOutcome::Handled
            }
            (NavKey::Enter, Focus::Option(position)) => match self.select(set, position) {
                Some(change) => KeyOutcome::Changed(change),
                None => KeyOutcome::Ignored,
            },
            _ => KeyOutcome::Ignored,
        }
    }

    /// Adopt an externally controlled value without reporting a change.
    pub fn sync_value(&mut self, set: &OptionSet, value: Option<&str>) {
        match value {
            Some(value) => {
                let display = set
                    .position_of_key(value)
                    .map(|index| set.display(index).to_string())
                    .unwrap_or_else(|| value.to_string());
                self.selected = Some(value.to_string());
                self.search_text = Some(display);
            }
            None => {
                self.selected = None;
                self.search_text = Some(String::new());
            }
        }
        self.pending_filter.cancel();
        self.refilter(set);
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    /// Recompute a populated list from the current search text.
    fn refilter(&mut self, set: &OptionSet) {
        if self.filtered.is_some() {
            let filtered = filter_options(set, self.display_text());
            self.replace_filtered(filtered);
        }
    }

    /// Swap in a new list, keeping keyboard focus on the same option when it
    /// is still present and falling back to the input otherwise.
    fn replace_filtered(&mut self, filtered: Vec<usize>) {
        if let Focus::Option(position) = self.focus {
            let focused = self
                .filtered
                .as_ref()
                .and_then(|old| old.get(position).copied());
            self.focus = focused
                .and_then(|index| filtered.iter().position(|&i| i == index))
                .map(Focus::Option)
                .unwrap_or(Focus::Input);
        }
        self.filtered = Some(filtered);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::option::{ComboOption, OptionFields};

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn two() -> OptionSet {
        OptionSet::new(
            vec![
                ComboOption::record([("name", "Option 1")]),
                ComboOption::record([("name", "Option 2")]),
            ],
            OptionFields::single("name"),
        )
    }

    fn three() -> OptionSet {
        OptionSet::from_strings(["Albertsons", "TCP", "Manscaped"])
    }

    #[test]
    fn test_initial_state() {
        let state = ComboboxState::default();
        assert!(!state.is_open());
        assert_eq!(state.search_text(), None);
        assert_eq!(state.display_text(), "");
        assert_eq!(state.selected(), None);
        assert_eq!(state.filtered(), None);
        assert_eq!(state.focus(), Focus::None);
        assert_eq!(state.debounce_delay(), ms(DEFAULT_DEBOUNCE_DELAY_MS));
    }

    #[test]
    fn test_with_value_shows_display_text() {
        let set = OptionSet::new(
            vec![ComboOption::record([("name", "TCP"), ("value", "tcp")])],
            OptionFields::new("name", "value"),
        );
        let state = ComboboxState::with_value(&set, "tcp", ms(1));
        assert_eq!(state.selected(), Some("tcp"));
        assert_eq!(state.display_text(), "TCP");

        let unknown = ComboboxState::with_value(&set, "other", ms(1));
        assert_eq!(unknown.display_text(), "other");
    }

    #[test]
    fn test_open_populates_all_options() {
        let mut state = ComboboxState::default();
        state.open(&two());
        assert!(state.is_open());
        assert_eq!(state.rendered(), &[0, 1]);
        assert_eq!(state.focus(), Focus::Input);
    }

    #[test]
    fn test_toggle_opens_and_closes() {
        let set = two();
        let mut state = ComboboxState::default();
        state.toggle(&set);
        assert!(state.is_open());
        state.toggle(&set);
        assert!(!state.is_open());
        assert!(state.rendered().is_empty());
        // Closing keeps the last list
        assert_eq!(state.filtered(), Some(&[0, 1][..]));
    }

    #[test]
    fn test_typing_echoes_immediately_and_filters_after_delay() {
        let set = two();
        let start = Instant::now();
        let mut state = ComboboxState::new(ms(5));
        state.open(&set);

        state.input_changed("2", start);
        assert_eq!(state.display_text(), "2");
        assert!(state.has_pending_filter());
        assert_eq!(state.rendered(), &[0, 1]);

        assert!(!state.tick(&set, start + ms(4)));
        assert!(state.tick(&set, start + ms(5)));
        assert_eq!(state.rendered(), &[1]);
        assert!(!state.has_pending_filter());
    }

    #[test]
    fn test_latest_keystroke_wins() {
        let set = three();
        let start = Instant::now();
        let mut state = ComboboxState::new(ms(10));
        state.open(&set);

        state.input_changed("a", start);
        state.input_changed("al", start + ms(6));
        // "a" would have been due at 10ms but was superseded
        assert!(!state.tick(&set, start + ms(12)));
        assert!(state.tick(&set, start + ms(16)));
        assert_eq!(state.rendered(), &[0]);
    }

    #[test]
    fn test_typing_clears_selection_marker() {
        let set = two();
        let mut state = ComboboxState::default();
        state.open(&set);
        state.select(&set, 0);
        assert_eq!(state.selected(), Some("Option 1"));

        state.input_changed("Option", Instant::now());
        assert_eq!(state.selected(), None);
        assert!(state.is_open());
    }

    #[test]
    fn test_select_then_toggle_off() {
        let set = two();
        let mut state = ComboboxState::default();
        state.open(&set);

        let change = state.select(&set, 1);
        assert_eq!(change, Some(SelectionChange::Selected("Option 2".into())));
        assert_eq!(state.display_text(), "Option 2");
        assert!(!state.is_open());

        state.open(&set);
        // Reopening lists every option, not just the selected one
        assert_eq!(state.rendered(), &[0, 1]);
        assert!(state.is_selected(&set, 1));
        let change = state.select(&set, 1);
        assert_eq!(change, Some(SelectionChange::Cleared));
        assert_eq!(change.and_then(SelectionChange::into_value), None);
        assert_eq!(state.display_text(), "");
        assert_eq!(state.selected(), None);
        // Cleared text shows the full list again
        assert_eq!(state.rendered(), &[0, 1]);
    }

    #[test]
    fn test_reopen_after_selection_allows_picking_another() {
        let set = three();
        let mut state = ComboboxState::default();
        state.open(&set);
        state.select(&set, 1);
        assert_eq!(state.display_text(), "TCP");

        state.open(&set);
        assert_eq!(state.rendered(), &[0, 1, 2]);
        assert_eq!(
            state.select(&set, 2),
            Some(SelectionChange::Selected("Manscaped".into()))
        );
        assert_eq!(state.display_text(), "Manscaped");
    }

    #[test]
    fn test_open_ignores_unfiltered_text_until_tick() {
        let set = three();
        let start = Instant::now();
        let mut state = ComboboxState::new(ms(5));
        state.input_changed("tc", start);
        state.close();

        state.open(&set);
        assert_eq!(state.rendered(), &[0, 1, 2]);
        assert!(state.tick(&set, start + ms(5)));
        assert_eq!(state.rendered(), &[1]);
    }

    #[test]
    fn test_focus_input_leaves_option() {
        let set = three();
        let mut state = ComboboxState::default();
        state.open(&set);
        state.key_down(&set, NavKey::Down);
        assert_eq!(state.focus(), Focus::Option(0));

        state.focus_input();
        assert_eq!(state.focus(), Focus::Input);
        assert!(state.is_open());
        assert_eq!(state.key_down(&set, NavKey::End), KeyOutcome::Ignored);
    }

    #[test]
    fn test_set_debounce_delay() {
        let mut state = ComboboxState::default();
        state.set_debounce_delay(ms(40));
        assert_eq!(state.debounce_delay(), ms(40));
    }

    #[test]
    fn test_select_out_of_range_is_none() {
        let set = two();
        let mut state = ComboboxState::default();
        assert_eq!(state.select(&set, 0), None);
        state.open(&set);
        assert_eq!(state.select(&set, 5), None);
    }

    #[test]
    fn test_selection_cancels_pending_filter() {
        let set = two();
        let start = Instant::now();
        let mut state = ComboboxState::new(ms(5));
        state.open(&set);
        state.input_changed("Opt", start);
        state.select(&set, 0);
        assert!(!state.has_pending_filter());
        assert!(!state.tick(&set, start + ms(50)));
        assert_eq!(state.display_text(), "Option 1");
    }

    #[test]
    fn test_click_outside_keeps_selection() {
        let set = two();
        let mut state = ComboboxState::default();
        state.open(&set);
        state.select(&set, 0);
        state.open(&set);

        state.click_outside();
        assert!(!state.is_open());
        assert_eq!(state.filtered(), None);
        assert_eq!(state.focus(), Focus::None);
        assert_eq!(state.selected(), Some("Option 1"));
        assert_eq!(state.display_text(), "Option 1");
    }

    #[test]
    fn test_arrow_from_input_focuses_first_item() {
        let set = three();
        let mut state = ComboboxState::default();
        state.open(&set);
        state.close();

        assert_eq!(state.key_down(&set, NavKey::Up), KeyOutcome::Handled);
        assert!(state.is_open());
        assert_eq!(state.focus(), Focus::Option(0));
        assert_eq!(state.active_index(), Some(0));
    }

    #[test]
    fn test_arrow_navigation_does_not_wrap() {
        let set = three();
        let mut state = ComboboxState::default();
        state.open(&set);
        state.key_down(&set, NavKey::Down);

        state.key_down(&set, NavKey::Up);
        assert_eq!(state.active_position(), Some(0));

        state.key_down(&set, NavKey::Down);
        state.key_down(&set, NavKey::Down);
        assert_eq!(state.active_position(), Some(2));
        state.key_down(&set, NavKey::Down);
        assert_eq!(state.active_position(), Some(2));
    }

    #[test]
    fn test_home_end() {
        let set = three();
        let mut state = ComboboxState::default();
        state.open(&set);
        // Home/End are for the text caret while the input has focus
        assert_eq!(state.key_down(&set, NavKey::End), KeyOutcome::Ignored);

        state.key_down(&set, NavKey::Down);
        state.key_down(&set, NavKey::End);
        assert_eq!(state.active_position(), Some(2));
        state.key_down(&set, NavKey::Home);
        assert_eq!(state.active_position(), Some(0));
    }

    #[test]
    fn test_arrow_with_no_matches_keeps_input_focus() {
        let set = three();
        let start = Instant::now();
        let mut state = ComboboxState::new(ms(1));
        state.open(&set);
        state.input_changed("zzz", start);
        state.tick(&set, start + ms(1));

        assert_eq!(state.key_down(&set, NavKey::Down), KeyOutcome::Handled);
        assert_eq!(state.focus(), Focus::Input);
    }

    #[test]
    fn test_escape_clears_everything() {
        let set = three();
        let mut state = ComboboxState::default();
        state.open(&set);
        state.select(&set, 1);
        state.open(&set);
        state.key_down(&set, NavKey::Down);

        assert_eq!(state.key_down(&set, NavKey::Escape), KeyOutcome::Handled);
        assert_eq!(state.display_text(), "");
        assert!(!state.is_open());
        assert_eq!(state.selected(), None);
        assert_eq!(state.focus(), Focus::Input);
    }

    #[test]
    fn test_escape_when_closed_is_ignored() {
        let set = three();
        let mut state = ComboboxState::with_value(&set, "TCP", ms(1));
        state.open(&set);
        state.close();
        assert_eq!(state.key_down(&set, NavKey::Escape), KeyOutcome::Ignored);
        assert_eq!(state.selected(), Some("TCP"));
    }

    #[test]
    fn test_enter_on_focused_item_selects() {
        let set = three();
        let mut state = ComboboxState::default();
        state.open(&set);
        state.key_down(&set, NavKey::Down);
        state.key_down(&set, NavKey::Down);

        // Nothing is selected yet; Enter still selects
        assert_eq!(
            state.key_down(&set, NavKey::Enter),
            KeyOutcome::Changed(SelectionChange::Selected("TCP".into()))
        );
        assert!(!state.is_open());
        assert_eq!(state.focus(), Focus::Input);
    }

    #[test]
    fn test_enter_on_input_is_ignored() {
        let set = three();
        let mut state = ComboboxState::default();
        state.open(&set);
        assert_eq!(state.key_down(&set, NavKey::Enter), KeyOutcome::Ignored);
    }

    #[test]
    fn test_filter_keeps_focus_on_same_option() {
        let set = three();
        let start = Instant::now();
        let mut state = ComboboxState::new(ms(1));
        state.open(&set);
        state.key_down(&set, NavKey::Down);
        state.key_down(&set, NavKey::End);
        assert_eq!(state.active_index(), Some(2));

        // Typing moves focus back to the input
        state.input_changed("scap", start);
        state.tick(&set, start + ms(1));
        assert_eq!(state.focus(), Focus::Input);
        assert_eq!(state.rendered(), &[2]);
    }

    #[test]
    fn test_sync_value() {
        let set = three();
        let mut state = ComboboxState::default();
        state.sync_value(&set, Some("Manscaped"));
        assert_eq!(state.selected(), Some("Manscaped"));
        assert_eq!(state.display_text(), "Manscaped");
        state.sync_value(&set, None);
        assert_eq!(state.selected(), None);
        assert_eq!(state.display_text(), "");
    }
}
