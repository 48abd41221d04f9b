//! Type definitions for translation datasets

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Keys of a dataset record that are not language codes
pub const RESERVED_KEYS: [&str; 3] = ["id", "alpha2", "alpha3"];

/// On-disk format of a translation dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    Json,
    Yaml,
}

impl DatasetFormat {
    /// Pick the format from a file extension; anything unknown is JSON
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => DatasetFormat::Yaml,
            _ => DatasetFormat::Json,
        }
    }
}

/// One country in a translation dataset
///
/// Every string-valued key outside `RESERVED_KEYS` is a language code whose
/// value is the country's name in that language.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha2: Option<serde_json::Value>,

    /// Kept as a raw value so a malformed code skips only this record
    #[serde(default)]
    pub alpha3: Option<serde_json::Value>,

    #[serde(flatten)]
    pub names: BTreeMap<String, serde_json::Value>,
}

impl DatasetRecord {
    /// Lower-cased alpha-3 code, when present as a non-blank string
    pub fn country_code(&self) -> Option<String> {
        self.alpha3
            .as_ref()
            .and_then(serde_json::Value::as_str)
            .map(|code| code.trim().to_lowercase())
            .filter(|code| !code.is_empty())
    }

    /// (language code, name) pairs with string values
    pub fn translations(&self) -> impl Iterator<Item = (&str, &str)> {
        self.names
            .iter()
            .filter(|(key, _)| !RESERVED_KEYS.contains(&key.as_str()))
            .filter_map(|(key, value)| value.as_str().map(|name| (key.as_str(), name)))
    }
}
