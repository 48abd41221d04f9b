//! Type definitions for the code table module

use crate::error::{CountryNamesError, Result};
use crate::utils::encoding::DEFAULT_ENCODING;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which code table a converter was built from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeKind {
    Country,  // ISO 3166 alpha-3 country codes
    Language, // ISO 639 language codes
}

impl CodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CodeKind::Country => "country",
            CodeKind::Language => "language",
        }
    }
}

impl fmt::Display for CodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of a code table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeEntry {
    /// Lower-cased, non-blank code
    pub code: String,
    /// Display name; the code itself when the table left it empty
    pub display_name: String,
}

/// Column layout of a code table file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableLayout {
    /// Field delimiter (single ASCII character)
    #[serde(default = "default_delimiter")]
    pub delimiter: char,

    /// Zero-based column holding the code
    #[serde(default)]
    pub code_column: usize,

    /// Zero-based column holding the display name
    #[serde(default = "default_name_column")]
    pub name_column: usize,

    /// Skip the first non-blank line
    #[serde(default)]
    pub has_header: bool,

    /// Encoding label understood by encoding_rs
    #[serde(default = "default_encoding")]
    pub encoding: String,
}

fn default_delimiter() -> char {
    '\t'
}

fn default_name_column() -> usize {
    1
}

fn default_encoding() -> String {
    DEFAULT_ENCODING.to_string()
}

impl Default for TableLayout {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            code_column: 0,
            name_column: default_name_column(),
            has_header: false,
            encoding: default_encoding(),
        }
    }
}

impl TableLayout {
    /// Delimiter as the byte the csv reader expects
    pub fn delimiter_byte(&self) -> Result<u8> {
        if self.delimiter.is_ascii() {
            Ok(self.delimiter as u8)
        } else {
            Err(CountryNamesError::config(format!(
                "table delimiter must be an ASCII character, got '{}'",
                self.delimiter
            )))
        }
    }

    /// Number of columns a line needs to yield an entry
    pub fn min_columns(&self) -> usize {
        self.code_column.max(self.name_column) + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let layout = TableLayout::default();
        assert_eq!(layout.delimiter_byte().unwrap(), b'\t');
        assert_eq!(layout.min_columns(), 2);
    }

    #[test]
    fn test_layout_from_yaml() {
        let layout: TableLayout = serde_yaml::from_str("delimiter: ','\nname_column: 0\ncode_column: 2\n").unwrap();
        assert_eq!(layout.delimiter, ',');
        assert_eq!(layout.min_columns(), 3);
        assert!(!layout.has_header);
        assert_eq!(layout.encoding, "utf-8");
    }

    #[test]
    fn test_non_ascii_delimiter_rejected() {
        let layout = TableLayout {
            delimiter: '§',
            ..TableLayout::default()
        };
        assert!(layout.delimiter_byte().is_err());
    }
}
