//! Behavioural tests for the combobox core.
//!
//! These drive [`ComboboxState`](crate::ComboboxState) through whole user
//! interactions and check what an embedding application would observe: the
//! input text, the rendered list and the change callback.

mod property_tests;
mod scenario_tests;
