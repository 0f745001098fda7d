use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::{Theme, ToolParameters};

/// Everything that survives between sessions.
///
/// Stored one field per key so that a missing or malformed key only resets
/// that field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedState {
    pub text: String,
    #[serde(flatten)]
    pub params: ToolParameters,
    pub theme: Theme,
}

impl PersistedState {
    pub const KEYS: [&'static str; 13] = [
        "text",
        "prefix",
        "suffix",
        "joinSeparator",
        "extractDelimiter",
        "extractIndex",
        "findText",
        "replaceText",
        "isRegex",
        "isCaseSensitive",
        "sortDescending",
        "activeTab",
        "theme",
    ];

    pub fn to_entries(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            // Plain strings, bools and unit enums always serialize to an object.
            _ => Map::new(),
        }
    }

    /// Rebuild from stored entries, falling back to the default for every
    /// key that is absent or holds the wrong type.
    pub fn from_entries(entries: &Map<String, Value>) -> Self {
        let d = Self::default();
        Self {
            text: read(entries, "text").unwrap_or(d.text),
            params: ToolParameters {
                prefix: read(entries, "prefix").unwrap_or(d.params.prefix),
                suffix: read(entries, "suffix").unwrap_or(d.params.suffix),
                join_separator: read(entries, "joinSeparator").unwrap_or(d.params.join_separator),
                extract_delimiter: read(entries, "extractDelimiter")
                    .unwrap_or(d.params.extract_delimiter),
                extract_index: read(entries, "extractIndex").unwrap_or(d.params.extract_index),
                find_text: read(entries, "findText").unwrap_or(d.params.find_text),
                replace_text: read(entries, "replaceText").unwrap_or(d.params.replace_text),
                is_regex: read(entries, "isRegex").unwrap_or(d.params.is_regex),
                is_case_sensitive: read(entries, "isCaseSensitive")
                    .unwrap_or(d.params.is_case_sensitive),
                sort_descending: read(entries, "sortDescending").unwrap_or(d.params.sort_descending),
                active_tab: read(entries, "activeTab").unwrap_or(d.params.active_tab),
            },
            theme: read(entries, "theme").unwrap_or(d.theme),
        }
    }
}

fn read<T: DeserializeOwned>(entries: &Map<String, Value>, key: &str) -> Option<T> {
    let value = entries.get(key)?;
    match T::deserialize(value) {
        Ok(v) => Some(v),
        Err(e) => {
            tracing::debug!(key, error = %e, "ignoring malformed stored value");
            None
        }
    }
}
