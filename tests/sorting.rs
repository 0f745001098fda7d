use std::cmp::Ordering;

use textkit::sort::{leading_number, locale_cmp};
use textkit::transform::{sort_alphabetical, sort_by_length, sort_numerical};

#[test]
fn test_alphabetical_ignores_case_at_first() {
    let out = sort_alphabetical("banana\nApple\ncherry\napple", false).unwrap();
    assert_eq!(out, "apple\nApple\nbanana\ncherry");
}

#[test]
fn test_alphabetical_descending_flips_comparator() {
    let out = sort_alphabetical("banana\nApple\ncherry\napple", true).unwrap();
    assert_eq!(out, "cherry\nbanana\nApple\napple");
}

#[test]
fn test_alphabetical_places_accented_letters_with_base_letter() {
    let out = sort_alphabetical("zebra\néclair\nedam\nEclair\neclair", false).unwrap();
    assert_eq!(out, "eclair\nEclair\néclair\nedam\nzebra");
}

#[test]
fn test_alphabetical_keeps_duplicates_together() {
    let out = sort_alphabetical("b\na\nb\na", false).unwrap();
    assert_eq!(out, "a\na\nb\nb");
}

#[test]
fn test_locale_cmp_only_equal_for_identical_strings() {
    assert_eq!(locale_cmp("same", "same"), Ordering::Equal);
    assert_ne!(locale_cmp("a", "A"), Ordering::Equal);
    // Precomposed and decomposed forms still get a fixed order
    assert_ne!(locale_cmp("\u{e9}", "e\u{301}"), Ordering::Equal);
}

#[test]
fn test_numerical_sort_uses_leading_number() {
    let out = sort_numerical("10\n9\n-1\n2.5kg\nabc\n1e2", false).unwrap();
    assert_eq!(out, "-1\nabc\n2.5kg\n9\n10\n1e2");
}

#[test]
fn test_numerical_sort_descending() {
    let out = sort_numerical("3\n20\n100", true).unwrap();
    assert_eq!(out, "100\n20\n3");
}

#[test]
fn test_numerical_ties_keep_input_order_both_ways() {
    assert_eq!(sort_numerical("x\n0\ny", false).unwrap(), "x\n0\ny");
    assert_eq!(sort_numerical("x\n0\ny", true).unwrap(), "x\n0\ny");
    assert_eq!(sort_numerical("5 b\n1\n5 a", false).unwrap(), "1\n5 b\n5 a");
}

#[test]
fn test_negative_zero_ties_with_lines_without_numbers() {
    assert_eq!(sort_numerical("abc\n-0", false).unwrap(), "abc\n-0");
    assert_eq!(sort_numerical("-0\nabc", true).unwrap(), "-0\nabc");
    assert_eq!(sort_numerical("-0.0kg\n0\nn/a", false).unwrap(), "-0.0kg\n0\nn/a");
    assert!(leading_number("-0").is_sign_positive());
}

#[test]
fn test_leading_number_parsing() {
    assert_eq!(leading_number("  42 apples"), 42.0);
    assert_eq!(leading_number(".5"), 0.5);
    assert_eq!(leading_number("+7"), 7.0);
    assert_eq!(leading_number("-3.25 deg"), -3.25);
    assert_eq!(leading_number("1e3x"), 1000.0);
    assert_eq!(leading_number("3e"), 3.0);
    assert_eq!(leading_number("."), 0.0);
    assert_eq!(leading_number("-"), 0.0);
    assert_eq!(leading_number("n/a"), 0.0);
    assert_eq!(leading_number(""), 0.0);
}

#[test]
fn test_length_sort_is_stable() {
    assert_eq!(sort_by_length("ccc\na\nbb\nd", false).unwrap(), "a\nd\nbb\nccc");
    assert_eq!(sort_by_length("ccc\na\nbb\nd", true).unwrap(), "ccc\nbb\na\nd");
}

#[test]
fn test_length_counts_graphemes() {
    let out = sort_by_length("ab\n\u{1F44D}\u{1F3FD}", false).unwrap();
    assert_eq!(out, "\u{1F44D}\u{1F3FD}\nab");
}

#[test]
fn test_sorting_single_line_is_identity() {
    assert_eq!(sort_alphabetical("only", true).unwrap(), "only");
    assert_eq!(sort_numerical("7", false).unwrap(), "7");
}
