use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ParamError;

/// Visual theme preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The tool tab shown in the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    /// Prefix/suffix and join.
    #[default]
    Lines,
    /// Trimming, deduplication and whitespace cleanup.
    Clean,
    /// Column extraction.
    Extract,
    /// Find and replace.
    Replace,
    /// Sorting.
    Sort,
}

impl Tab {
    pub const ALL: [Tab; 5] = [Tab::Lines, Tab::Clean, Tab::Extract, Tab::Replace, Tab::Sort];

    pub fn as_str(self) -> &'static str {
        match self {
            Tab::Lines => "lines",
            Tab::Clean => "clean",
            Tab::Extract => "extract",
            Tab::Replace => "replace",
            Tab::Sort => "sort",
        }
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::ALL
            .into_iter()
            .find(|tab| tab.as_str() == s)
            .ok_or_else(|| format!("unknown tab '{s}'"))
    }
}

bitflags::bitflags! {
    /// Matching options for find and replace.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct ReplaceFlags: u8 {
        /// Treat the search text as a regular expression.
        const REGEX          = 0b0001;
        /// Match letter case exactly.
        const CASE_SENSITIVE = 0b0010;
    }
}

/// Current values of every tool input, plus the active tab.
///
/// Text fields hold the raw text typed into the host, so `extract_index`
/// stays a string until a transformation needs it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolParameters {
    pub prefix: String,
    pub suffix: String,
    pub join_separator: String,
    pub extract_delimiter: String,
    pub extract_index: String,
    pub find_text: String,
    pub replace_text: String,
    pub is_regex: bool,
    pub is_case_sensitive: bool,
    pub sort_descending: bool,
    pub active_tab: Tab,
}

impl Default for ToolParameters {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            suffix: String::new(),
            join_separator: " ".to_string(),
            extract_delimiter: ",".to_string(),
            extract_index: "0".to_string(),
            find_text: String::new(),
            replace_text: String::new(),
            is_regex: false,
            is_case_sensitive: false,
            sort_descending: false,
            active_tab: Tab::default(),
        }
    }
}

impl ToolParameters {
    pub fn replace_flags(&self) -> ReplaceFlags {
        let mut flags = ReplaceFlags::empty();
        flags.set(ReplaceFlags::REGEX, self.is_regex);
        flags.set(ReplaceFlags::CASE_SENSITIVE, self.is_case_sensitive);
        flags
    }

    /// Set one field from its text form.
    pub fn assign(&mut self, param: Param, value: &str) -> Result<(), ParamError> {
        match param {
            Param::Prefix => self.prefix = value.to_string(),
            Param::Suffix => self.suffix = value.to_string(),
            Param::JoinSeparator => self.join_separator = value.to_string(),
            Param::ExtractDelimiter => self.extract_delimiter = value.to_string(),
            Param::ExtractIndex => self.extract_index = value.to_string(),
            Param::FindText => self.find_text = value.to_string(),
            Param::ReplaceText => self.replace_text = value.to_string(),
            Param::IsRegex => self.is_regex = parse_flag(param, value)?,
            Param::IsCaseSensitive => self.is_case_sensitive = parse_flag(param, value)?,
            Param::SortDescending => self.sort_descending = parse_flag(param, value)?,
        }
        Ok(())
    }
}

fn parse_flag(param: Param, value: &str) -> Result<bool, ParamError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "on" | "yes" => Ok(true),
        "false" | "0" | "off" | "no" => Ok(false),
        _ => Err(ParamError::NotABool {
            param: param.key(),
            value: value.to_string(),
        }),
    }
}

/// One field of [`ToolParameters`] (the tab is selected separately).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Param {
    Prefix,
    Suffix,
    JoinSeparator,
    ExtractDelimiter,
    ExtractIndex,
    FindText,
    ReplaceText,
    IsRegex,
    IsCaseSensitive,
    SortDescending,
}

impl Param {
    /// The storage key of this field.
    pub fn key(self) -> &'static str {
        match self {
            Param::Prefix => "prefix",
            Param::Suffix => "suffix",
            Param::JoinSeparator => "joinSeparator",
            Param::ExtractDelimiter => "extractDelimiter",
            Param::ExtractIndex => "extractIndex",
            Param::FindText => "findText",
            Param::ReplaceText => "replaceText",
            Param::IsRegex => "isRegex",
            Param::IsCaseSensitive => "isCaseSensitive",
            Param::SortDescending => "sortDescending",
        }
    }

    /// Checkbox-style fields; these persist without debouncing.
    pub fn is_flag(self) -> bool {
        matches!(
            self,
            Param::IsRegex | Param::IsCaseSensitive | Param::SortDescending
        )
    }
}

/// How soon a staged change should reach storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistMode {
    /// Discrete actions: write right away.
    Immediate,
    /// High-frequency input: write once the quiet period elapses.
    Debounced,
}

/// Whether the latest staged snapshot has been written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistState {
    Idle,
    Dirty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// A transient message; the host dismisses it after `duration`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    pub duration: Duration,
}
