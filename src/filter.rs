//! Search filtering over an option set.

use crate::option::OptionSet;

/// Case-insensitive substring match. An empty query matches everything.
pub fn matches(display: &str, query: &str) -> bool {
    contains_folded(display, &query.to_lowercase())
}

/// Indices of the options whose display field matches `query`, in caller order.
///
/// An empty query yields every index. No match yields an empty list.
pub fn filter_options(set: &OptionSet, query: &str) -> Vec<usize> {
    let query = query.to_lowercase();
    (0..set.len())
        .filter(|&i| contains_folded(set.display(i), &query))
        .collect()
}

/// `display` contains the already lower-cased `query`.
fn contains_folded(display: &str, query: &str) -> bool {
    query.is_empty() || display.to_lowercase().contains(query)
}
