//! Pure line-oriented text transformations.
//!
//! Every function takes the document text and returns a new string. Lines
//! are separated by `\n`. Empty input yields empty output, except
//! [`find_and_replace`] which hands the input back unchanged.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::{NoExpand, Regex, RegexBuilder};

use crate::error::TransformError;
use crate::sort::{self, SortKey};
use crate::types::{ReplaceFlags, ToolParameters};

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s{2,}").expect("whitespace pattern is valid")
});

/// Prepend `prefix` and append `suffix` to every line.
pub fn add_prefix_suffix(text: &str, prefix: &str, suffix: &str) -> Result<String, TransformError> {
    if text.is_empty() {
        return Ok(String::new());
    }
    Ok(map_lines(text, |line| format!("{prefix}{line}{suffix}")))
}

/// Replace every line break with `separator`.
pub fn join_lines(text: &str, separator: &str) -> Result<String, TransformError> {
    if text.is_empty() {
        return Ok(String::new());
    }
    Ok(text.split('\n').collect::<Vec<_>>().join(separator))
}

/// Keep the trimmed field at `column` of every line.
///
/// `column` is the index as typed by the user. An empty `delimiter` splits
/// each line into characters.
pub fn extract_column(text: &str, delimiter: &str, column: &str) -> Result<String, TransformError> {
    if text.is_empty() {
        return Ok(String::new());
    }
    let index = parse_column_index(column)?;
    Ok(map_lines(text, |line| {
        let field = if delimiter.is_empty() {
            line.chars().nth(index).map(String::from)
        } else {
            line.split(delimiter).nth(index).map(String::from)
        };
        field.map(|f| f.trim().to_string()).unwrap_or_default()
    }))
}

/// Parse a column index the way a form field would: leading whitespace and
/// a sign are accepted, anything after the digits is ignored.
pub fn parse_column_index(raw: &str) -> Result<usize, TransformError> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return Err(TransformError::InvalidArgument(format!(
            "column index '{raw}' is not a number"
        )));
    }
    let digits = &rest[..digits_len];
    if negative && digits.bytes().any(|b| b != b'0') {
        return Err(TransformError::InvalidArgument(format!(
            "column index '{raw}' is negative"
        )));
    }
    // Past the last field on every line anyway
    Ok(digits.parse::<usize>().unwrap_or(usize::MAX))
}

/// Keep the first occurrence of every line.
pub fn remove_duplicate_lines(text: &str) -> Result<String, TransformError> {
    if text.is_empty() {
        return Ok(String::new());
    }
    let mut seen = HashSet::new();
    let kept: Vec<&str> = text.split('\n').filter(|line| seen.insert(*line)).collect();
    Ok(kept.join("\n"))
}

/// Drop lines that are empty or whitespace only.
pub fn remove_empty_lines(text: &str) -> Result<String, TransformError> {
    if text.is_empty() {
        return Ok(String::new());
    }
    let kept: Vec<&str> = text
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .collect();
    Ok(kept.join("\n"))
}

pub fn trim_lines(text: &str) -> Result<String, TransformError> {
    if text.is_empty() {
        return Ok(String::new());
    }
    Ok(map_lines(text, |line| line.trim().to_string()))
}

/// Collapse runs of two or more whitespace characters, line breaks
/// included, into a single space.
pub fn remove_extra_whitespace(text: &str) -> Result<String, TransformError> {
    if text.is_empty() {
        return Ok(String::new());
    }
    Ok(WHITESPACE_RUN.replace_all(text, " ").into_owned())
}

pub fn sort_alphabetical(text: &str, descending: bool) -> Result<String, TransformError> {
    Ok(sort::sort_lines(text, SortKey::Alphabetical, descending))
}

pub fn sort_numerical(text: &str, descending: bool) -> Result<String, TransformError> {
    Ok(sort::sort_lines(text, SortKey::Numerical, descending))
}

pub fn sort_by_length(text: &str, descending: bool) -> Result<String, TransformError> {
    Ok(sort::sort_lines(text, SortKey::Length, descending))
}

/// Replace every match of `find`.
///
/// Without [`ReplaceFlags::REGEX`] both `find` and `replace` are literal.
/// In regex mode `replace` may reference captures as `$1`, `${1}`,
/// `${name}`, `$<name>` or `$&` for the whole match, and `$$` is a dollar
/// sign. Any other `$` is kept as is.
pub fn find_and_replace(
    text: &str,
    find: &str,
    replace: &str,
    flags: ReplaceFlags,
) -> Result<String, TransformError> {
    if text.is_empty() || find.is_empty() {
        return Ok(text.to_string());
    }
    let is_regex = flags.contains(ReplaceFlags::REGEX);
    let pattern = if is_regex {
        find.to_string()
    } else {
        regex::escape(find)
    };
    let re = RegexBuilder::new(&pattern)
        .case_insensitive(!flags.contains(ReplaceFlags::CASE_SENSITIVE))
        .build()
        .map_err(|source| TransformError::InvalidPattern {
            pattern: find.to_string(),
            source,
        })?;
    let replaced = if is_regex {
        let template = expand_template(replace, re.captures_len());
        re.replace_all(text, template.as_str())
    } else {
        re.replace_all(text, NoExpand(replace))
    };
    Ok(replaced.into_owned())
}

/// Rewrite a browser-style replacement into `regex` crate syntax.
///
/// `$n` takes at most two digits and only names groups that exist in the
/// pattern, so `$1x` is group 1 then `x`, and `$12` with one group is group
/// 1 then `2`. `group_count` includes the implicit group 0.
fn expand_template(replace: &str, group_count: usize) -> String {
    let mut out = String::with_capacity(replace.len());
    let mut rest = replace;
    while let Some(pos) = rest.find('$') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos + 1..];
        let bytes = tail.as_bytes();
        let consumed = match bytes.first() {
            Some(b'$') => {
                out.push_str("$$");
                1
            }
            Some(b'&') => {
                out.push_str("${0}");
                1
            }
            Some(b'{') => match tail.find('}') {
                Some(close) => {
                    out.push('$');
                    out.push_str(&tail[..=close]);
                    close + 1
                }
                None => {
                    out.push_str("$$");
                    0
                }
            },
            Some(b'<') => match tail.find('>') {
                Some(close) if close > 1 => {
                    out.push_str("${");
                    out.push_str(&tail[1..close]);
                    out.push('}');
                    close + 1
                }
                _ => {
                    out.push_str("$$");
                    0
                }
            },
            Some(d) if d.is_ascii_digit() => {
                let one = usize::from(d - b'0');
                let two = bytes
                    .get(1)
                    .filter(|b| b.is_ascii_digit())
                    .map(|b| one * 10 + usize::from(b - b'0'));
                match two {
                    Some(n) if n >= 1 && n < group_count => {
                        out.push_str(&format!("${{{n}}}"));
                        2
                    }
                    _ if one >= 1 && one < group_count => {
                        out.push_str(&format!("${{{one}}}"));
                        1
                    }
                    _ => {
                        out.push_str("$$");
                        0
                    }
                }
            }
            _ => {
                out.push_str("$$");
                0
            }
        };
        rest = &tail[consumed..];
    }
    out.push_str(rest);
    out
}

fn map_lines(text: &str, f: impl Fn(&str) -> String) -> String {
    text.split('\n').map(f).collect::<Vec<_>>().join("\n")
}

/// Names of the available transformations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    AddPrefixSuffix,
    JoinLines,
    ExtractColumn,
    RemoveDuplicateLines,
    RemoveEmptyLines,
    TrimLines,
    RemoveExtraWhitespace,
    SortAlphabetical,
    SortNumerical,
    SortByLength,
    FindAndReplace,
}

impl Tool {
    pub const ALL: [Tool; 11] = [
        Tool::AddPrefixSuffix,
        Tool::JoinLines,
        Tool::ExtractColumn,
        Tool::RemoveDuplicateLines,
        Tool::RemoveEmptyLines,
        Tool::TrimLines,
        Tool::RemoveExtraWhitespace,
        Tool::SortAlphabetical,
        Tool::SortNumerical,
        Tool::SortByLength,
        Tool::FindAndReplace,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Tool::AddPrefixSuffix => "addPrefixSuffix",
            Tool::JoinLines => "joinLines",
            Tool::ExtractColumn => "extractColumn",
            Tool::RemoveDuplicateLines => "removeDuplicateLines",
            Tool::RemoveEmptyLines => "removeEmptyLines",
            Tool::TrimLines => "trimLines",
            Tool::RemoveExtraWhitespace => "removeExtraWhitespace",
            Tool::SortAlphabetical => "sortAlphabetical",
            Tool::SortNumerical => "sortNumerical",
            Tool::SortByLength => "sortByLength",
            Tool::FindAndReplace => "findAndReplace",
        }
    }

    /// Bind this tool to the current parameter values.
    pub fn with_params(self, params: &ToolParameters) -> Transform {
        match self {
            Tool::AddPrefixSuffix => Transform::AddPrefixSuffix {
                prefix: params.prefix.clone(),
                suffix: params.suffix.clone(),
            },
            Tool::JoinLines => Transform::JoinLines {
                separator: params.join_separator.clone(),
            },
            Tool::ExtractColumn => Transform::ExtractColumn {
                delimiter: params.extract_delimiter.clone(),
                column: params.extract_index.clone(),
            },
            Tool::RemoveDuplicateLines => Transform::RemoveDuplicateLines,
            Tool::RemoveEmptyLines => Transform::RemoveEmptyLines,
            Tool::TrimLines => Transform::TrimLines,
            Tool::RemoveExtraWhitespace => Transform::RemoveExtraWhitespace,
            Tool::SortAlphabetical => Transform::SortAlphabetical {
                descending: params.sort_descending,
            },
            Tool::SortNumerical => Transform::SortNumerical {
                descending: params.sort_descending,
            },
            Tool::SortByLength => Transform::SortByLength {
                descending: params.sort_descending,
            },
            Tool::FindAndReplace => Transform::FindAndReplace {
                find: params.find_text.clone(),
                replace: params.replace_text.clone(),
                flags: params.replace_flags(),
            },
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tool {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tool::ALL
            .into_iter()
            .find(|tool| tool.name() == s)
            .ok_or_else(|| TransformError::InvalidArgument(format!("unknown tool '{s}'")))
    }
}

/// One transformation together with its parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transform {
    AddPrefixSuffix { prefix: String, suffix: String },
    JoinLines { separator: String },
    ExtractColumn { delimiter: String, column: String },
    RemoveDuplicateLines,
    RemoveEmptyLines,
    TrimLines,
    RemoveExtraWhitespace,
    SortAlphabetical { descending: bool },
    SortNumerical { descending: bool },
    SortByLength { descending: bool },
    FindAndReplace {
        find: String,
        replace: String,
        flags: ReplaceFlags,
    },
}

impl Transform {
    pub fn tool(&self) -> Tool {
        match self {
            Transform::AddPrefixSuffix { .. } => Tool::AddPrefixSuffix,
            Transform::JoinLines { .. } => Tool::JoinLines,
            Transform::ExtractColumn { .. } => Tool::ExtractColumn,
            Transform::RemoveDuplicateLines => Tool::RemoveDuplicateLines,
            Transform::RemoveEmptyLines => Tool::RemoveEmptyLines,
            Transform::TrimLines => Tool::TrimLines,
            Transform::RemoveExtraWhitespace => Tool::RemoveExtraWhitespace,
            Transform::SortAlphabetical { .. } => Tool::SortAlphabetical,
            Transform::SortNumerical { .. } => Tool::SortNumerical,
            Transform::SortByLength { .. } => Tool::SortByLength,
            Transform::FindAndReplace { .. } => Tool::FindAndReplace,
        }
    }

    pub fn apply(&self, text: &str) -> Result<String, TransformError> {
        match self {
            Transform::AddPrefixSuffix { prefix, suffix } => add_prefix_suffix(text, prefix, suffix),
            Transform::JoinLines { separator } => join_lines(text, separator),
            Transform::ExtractColumn { delimiter, column } => extract_column(text, delimiter, column),
            Transform::RemoveDuplicateLines => remove_duplicate_lines(text),
            Transform::RemoveEmptyLines => remove_empty_lines(text),
            Transform::TrimLines => trim_lines(text),
            Transform::RemoveExtraWhitespace => remove_extra_whitespace(text),
            Transform::SortAlphabetical { descending } => sort_alphabetical(text, *descending),
            Transform::SortNumerical { descending } => sort_numerical(text, *descending),
            Transform::SortByLength { descending } => sort_by_length(text, *descending),
            Transform::FindAndReplace {
                find,
                replace,
                flags,
            } => find_and_replace(text, find, replace, *flags),
        }
    }
}
