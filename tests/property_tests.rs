use proptest::prelude::*;
use textkit::transform::{
    add_prefix_suffix, extract_column, find_and_replace, join_lines, remove_duplicate_lines,
    remove_empty_lines, sort_alphabetical, sort_by_length, sort_numerical, trim_lines,
};
use textkit::{History, ReplaceFlags, Stats};

// Strategy for generating text content with various edge cases
fn text_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        // Empty text
        Just("".to_string()),
        // Single line
        "[a-zA-Z0-9 .!?,;:\\-_]{0,50}",
        // Multiple lines with normal text
        "[a-zA-Z0-9 .!?,;:\\-_\n]{0,200}",
        // Numbers with units
        "([ ]?-?[0-9]{1,4}(\\.[0-9]{1,2})?[a-z]{0,3}\n){0,10}",
        // Unicode text
        "[\u{0020}-\u{007E}\u{00A0}-\u{00FF}\u{4E00}-\u{9FFF}\u{1F600}-\u{1F64F}\n]{0,100}",
        // Lines with only whitespace
        "[ \t]{0,10}\n[ \t]{0,10}\n[a-z]{0,10}",
    ]
}

// Lines without trailing whitespace, so trimming is a no-op on the right
fn untrailed_text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-zA-Z0-9 ,.]{0,12}[a-zA-Z0-9,.]", 0..12).prop_map(|lines| lines.join("\n"))
}

fn distinct_lines_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-zA-Z\u{00C0}-\u{00FF} ]{0,8}", 0..20).prop_map(|lines| {
        let mut seen = std::collections::HashSet::new();
        lines.into_iter().filter(|l| seen.insert(l.clone())).collect()
    })
}

fn line_count(text: &str) -> usize {
    text.split('\n').count()
}

proptest! {
    #[test]
    fn prefix_suffix_identity_survives_join_and_trim(text in untrailed_text_strategy()) {
        let wrapped = add_prefix_suffix(&text, "", "").unwrap();
        let joined = join_lines(&wrapped, "\n").unwrap();
        prop_assert_eq!(trim_lines(&joined).unwrap(), trim_lines(&text).unwrap());
    }

    #[test]
    fn remove_duplicates_is_idempotent(text in text_strategy()) {
        let once = remove_duplicate_lines(&text).unwrap();
        let twice = remove_duplicate_lines(&once).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn descending_sort_reverses_ascending_for_distinct_lines(lines in distinct_lines_strategy()) {
        let text = lines.join("\n");
        let ascending = sort_alphabetical(&text, false).unwrap();
        let descending = sort_alphabetical(&ascending, true).unwrap();
        let mut reversed: Vec<&str> = ascending.split('\n').collect();
        reversed.reverse();
        prop_assert_eq!(descending, reversed.join("\n"));
    }

    #[test]
    fn line_maps_and_sorts_keep_line_count(text in text_strategy(), descending in any::<bool>()) {
        prop_assume!(!text.is_empty());
        let n = line_count(&text);
        prop_assert_eq!(line_count(&add_prefix_suffix(&text, "<", ">").unwrap()), n);
        prop_assert_eq!(line_count(&trim_lines(&text).unwrap()), n);
        prop_assert_eq!(line_count(&sort_alphabetical(&text, descending).unwrap()), n);
        prop_assert_eq!(line_count(&sort_numerical(&text, descending).unwrap()), n);
        prop_assert_eq!(line_count(&sort_by_length(&text, descending).unwrap()), n);
    }

    #[test]
    fn filters_never_add_lines(text in text_strategy()) {
        prop_assume!(!text.is_empty());
        let n = line_count(&text);
        prop_assert!(line_count(&remove_duplicate_lines(&text).unwrap()) <= n);
        prop_assert!(line_count(&remove_empty_lines(&text).unwrap()) <= n);
    }

    #[test]
    fn sorting_is_a_permutation(text in text_strategy(), descending in any::<bool>()) {
        let mut before: Vec<&str> = text.split('\n').collect();
        let sorted = sort_numerical(&text, descending).unwrap();
        let mut after: Vec<&str> = sorted.split('\n').collect();
        before.sort_unstable();
        after.sort_unstable();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn extract_column_never_panics(text in text_strategy(), column in "[-+ ]?[0-9a-z]{0,3}") {
        let _ = extract_column(&text, ",", &column);
    }

    #[test]
    fn literal_find_never_fails(text in text_strategy(), find in "[\\[\\](){}.*+?^$|\\\\a-z]{0,6}") {
        let out = find_and_replace(&text, &find, "x", ReplaceFlags::CASE_SENSITIVE);
        prop_assert!(out.is_ok());
    }

    #[test]
    fn stats_line_count_matches_line_breaks(text in text_strategy()) {
        let stats = Stats::of(&text);
        prop_assert_eq!(stats.lines, line_count(&text));
        prop_assert!(stats.words <= stats.chars);
    }

    #[test]
    fn history_stays_bounded_without_adjacent_repeats(
        edits in prop::collection::vec("[ab]{0,2}", 0..40),
        limit in 1usize..8,
    ) {
        let mut history = History::new(limit);
        for edit in &edits {
            history.record(edit);
        }
        prop_assert!(history.len() <= limit);
        let entries: Vec<&str> = history.iter().collect();
        for pair in entries.windows(2) {
            prop_assert_ne!(pair[0], pair[1]);
        }
    }
}
