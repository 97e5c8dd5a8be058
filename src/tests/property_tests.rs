//! Filtering properties checked over a spread of inputs.

use crate::filter::filter_options;
use crate::option::OptionSet;

const OPTIONS: &[&str] = &[
    "Albertsons",
    "TCP",
    "Manscaped",
    "tcp/ip",
    "ÄPFEL",
    "",
    "Option 1",
    "Option 2",
];

const QUERIES: &[&str] = &["", "a", "A", "tcp", "Option", "2", "äpf", "zzz", " "];

#[test]
fn test_filter_is_exactly_case_insensitive_containment() {
    let set = OptionSet::from_strings(OPTIONS.iter().copied());
    for query in QUERIES {
        let result = filter_options(&set, query);
        let expected: Vec<usize> = OPTIONS
            .iter()
            .enumerate()
            .filter(|(_, display)| display.to_lowercase().contains(&query.to_lowercase()))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(result, expected, "query {:?}", query);
    }
}

#[test]
fn test_empty_query_is_identity() {
    for len in 0..OPTIONS.len() {
        let set = OptionSet::from_strings(OPTIONS[..len].iter().copied());
        assert_eq!(filter_options(&set, ""), (0..len).collect::<Vec<_>>());
    }
}

#[test]
fn test_results_preserve_order() {
    let set = OptionSet::from_strings(OPTIONS.iter().copied());
    for query in QUERIES {
        let result = filter_options(&set, query);
        assert!(result.windows(2).all(|w| w[0] < w[1]), "query {:?}", query);
    }
}
