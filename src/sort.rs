//! Line comparators used by the sort tools.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;
use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SortKey {
    Alphabetical,
    Numerical,
    Length,
}

/// Sort the lines of `text` by `key`. The sort is stable; `descending`
/// flips the comparator, so equal lines keep their input order.
pub(crate) fn sort_lines(text: &str, key: SortKey, descending: bool) -> String {
    if text.is_empty() {
        return String::new();
    }
    let mut lines: Vec<&str> = text.split('\n').collect();
    match key {
        SortKey::Alphabetical => lines.sort_by(|a, b| directed(locale_cmp(a, b), descending)),
        SortKey::Numerical => {
            let mut keyed: Vec<(f64, &str)> = lines
                .iter()
                .map(|line| (leading_number(line), *line))
                .collect();
            keyed.sort_by(|(a, _), (b, _)| directed(a.total_cmp(b), descending));
            lines = keyed.into_iter().map(|(_, line)| line).collect();
        }
        SortKey::Length => {
            let mut keyed: Vec<(usize, &str)> = lines
                .iter()
                .map(|line| (line.graphemes(true).count(), *line))
                .collect();
            keyed.sort_by(|(a, _), (b, _)| directed(a.cmp(b), descending));
            lines = keyed.into_iter().map(|(_, line)| line).collect();
        }
    }
    lines.join("\n")
}

fn directed(ordering: Ordering, descending: bool) -> Ordering {
    if descending {
        ordering.reverse()
    } else {
        ordering
    }
}

/// Language-neutral collation approximating a browser's default locale
/// compare: base letters first, then accents, then case (lowercase first).
/// Only identical strings compare equal.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| folded(a).cmp(folded(b)))
        .then_with(|| a.chars().map(char::is_uppercase).cmp(b.chars().map(char::is_uppercase)))
        .then_with(|| a.cmp(b))
}

fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn folded(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

/// The decimal number a line starts with, or 0 when it has none.
///
/// Accepts leading whitespace, a sign, a fraction and an exponent, and
/// ignores whatever follows the number.
pub fn leading_number(line: &str) -> f64 {
    let s = line.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if frac_digits > 0 || int_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return 0.0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end.min(bytes.len())..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    // "1." parses fine; a bare sign never reaches here.
    let n = s[..end].parse::<f64>().unwrap_or(0.0);
    // -0 must tie with lines that have no number
    if n == 0.0 { 0.0 } else { n }
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
