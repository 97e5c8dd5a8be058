//! End-to-end selection scenarios.

use super::harness::Harness;

#[test]
fn test_focus_then_click_option_2() {
    let mut h = Harness::two_options();

    h.focus_input();
    assert!(h.state.is_open());
    assert_eq!(h.rendered_text(), vec!["Option 1", "Option 2"]);

    h.click("Option 2");
    assert!(!h.state.is_open());
    assert_eq!(h.state.display_text(), "Option 2");
    assert_eq!(h.changes, vec![Some("Option 2".to_string())]);
}

#[test]
fn test_typing_filters_after_debounce() {
    let mut h = Harness::two_options();
    h.focus_input();

    h.type_text("2", 0);
    assert_eq!(h.state.display_text(), "2", "input echoes immediately");
    assert_eq!(h.rendered_text().len(), 2, "filter has not run yet");

    h.advance(2);
    assert_eq!(h.rendered_text(), vec!["Option 2"]);
    assert!(h.changes.is_empty(), "typing never fires a change");
}

#[test]
fn test_reclicking_selected_option_clears() {
    let mut h = Harness::two_options();
    h.focus_input();
    h.click("Option 2");

    h.focus_input();
    h.click("Option 2");
    assert_eq!(h.state.display_text(), "");
    assert_eq!(h.state.selected(), None);
    assert_eq!(
        h.changes,
        vec![Some("Option 2".to_string()), None],
        "one change per selection event"
    );
}

#[test]
fn test_reopening_after_selection_lists_everything() {
    let mut h = Harness::two_options();
    h.focus_input();
    h.click("Option 2");

    h.focus_input();
    assert_eq!(h.state.display_text(), "Option 2");
    assert_eq!(h.rendered_text(), vec!["Option 1", "Option 2"]);

    h.click("Option 1");
    assert_eq!(h.state.display_text(), "Option 1");
    assert_eq!(
        h.changes,
        vec![Some("Option 2".to_string()), Some("Option 1".to_string())]
    );
}

#[test]
fn test_outside_click_never_fires() {
    let mut h = Harness::two_options();
    h.focus_input();
    h.click("Option 1");
    h.focus_input();

    h.state.click_outside();
    assert!(!h.state.is_open());
    assert_eq!(h.state.selected(), Some("Option 1"));
    assert_eq!(h.changes.len(), 1);
}

#[test]
fn test_selection_uses_unique_key_and_shows_display() {
    use crate::option::{ComboOption, OptionFields, OptionSet};

    let set = OptionSet::new(
        vec![
            ComboOption::record([("name", "Albertsons"), ("value", "albertsons")]),
            ComboOption::record([("name", "TCP"), ("value", "tcp")]),
        ],
        OptionFields::new("name", "value"),
    );
    let mut h = Harness::new(set, 5);
    h.focus_input();
    h.click("TCP");

    assert_eq!(h.state.display_text(), "TCP");
    assert_eq!(h.state.selected(), Some("tcp"));
    assert_eq!(h.changes, vec![Some("tcp".to_string())]);
}

#[test]
fn test_fast_typing_only_last_filter_applies() {
    let mut h = Harness::new(
        crate::option::OptionSet::from_strings(["Apple", "Apricot", "Banana"]),
        10,
    );
    h.focus_input();

    // Keystrokes arrive faster than the delay
    h.type_text("apr", 3);
    assert_eq!(h.rendered_text().len(), 3);

    h.advance(10);
    assert_eq!(h.rendered_text(), vec!["Apricot"]);
}

#[test]
fn test_no_match_renders_nothing() {
    let mut h = Harness::two_options();
    h.focus_input();
    h.type_text("xyz", 0);
    h.advance(1);
    assert!(h.state.is_open());
    assert!(h.rendered_text().is_empty());
}
