//! Code table converter implementation

use crate::codes::types::{CodeEntry, CodeKind, TableLayout};
use crate::error::Result;
use crate::utils::encoding::decode_text;
use crate::utils::path::read_resource;
use std::collections::HashMap;
use std::path::Path;

/// Bidirectional code <-> display name lookup over one code table
///
/// Lines are parsed leniently: blank lines are ignored, and lines with too
/// few columns, a blank code or an unbalanced double quote are skipped and
/// counted. Quotes carry no meaning and are kept verbatim. Codes are stored in
/// lower case and keep their table order.
#[derive(Debug, Clone)]
pub struct CodeConverter {
    kind: CodeKind,
    entries: Vec<CodeEntry>,
    /// code -> index into entries
    by_code: HashMap<String, usize>,
    /// display name -> index into entries (first occurrence wins)
    by_name: HashMap<String, usize>,
    skipped: usize,
}

impl CodeConverter {
    fn empty(kind: CodeKind) -> Self {
        Self {
            kind,
            entries: Vec::new(),
            by_code: HashMap::new(),
            by_name: HashMap::new(),
            skipped: 0,
        }
    }

    /// Load a converter from a code table file
    pub fn load_from_file(kind: CodeKind, file_path: &Path, layout: &TableLayout) -> Result<Self> {
        log::info!("Loading {} code table from: {:?}", kind, file_path);

        let data = read_resource(file_path)?;
        let text = decode_text(&data, &layout.encoding)?;
        let converter = Self::parse_str(kind, &text, layout)?;

        if converter.skipped > 0 {
            log::warn!(
                "Skipped {} malformed line(s) in {} code table {:?}",
                converter.skipped,
                kind,
                file_path
            );
        }
        log::info!(
            "Successfully loaded {} code table: {} entries",
            kind,
            converter.entries.len()
        );

        Ok(converter)
    }

    /// Build a converter from in-memory table text
    pub fn parse_str(kind: CodeKind, text: &str, layout: &TableLayout) -> Result<Self> {
        let mut converter = Self::empty(kind);
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(layout.delimiter_byte()?)
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .trim(csv::Trim::All)
            .from_reader(text.as_bytes());

        let mut header_pending = layout.has_header;
        for result in reader.records() {
            let record = match result {
                Ok(record) => record,
                Err(e) => {
                    log::debug!("Unreadable {} table line: {}", kind, e);
                    converter.skipped += 1;
                    continue;
                }
            };
            let line = record.position().map(|p| p.line()).unwrap_or(0);

            if record.iter().all(str::is_empty) {
                continue;
            }
            if header_pending {
                header_pending = false;
                continue;
            }
            if record.len() < layout.min_columns() {
                log::debug!("Line {}: too few columns in {} table", line, kind);
                converter.skipped += 1;
                continue;
            }

            let used = [&record[layout.code_column], &record[layout.name_column]];
            if used.iter().any(|field| field.matches('"').count() % 2 != 0) {
                log::debug!("Line {}: unbalanced quote in {} table", line, kind);
                converter.skipped += 1;
                continue;
            }

            let code = record[layout.code_column].to_lowercase();
            if code.is_empty() {
                log::debug!("Line {}: blank code in {} table", line, kind);
                converter.skipped += 1;
                continue;
            }

            let name = &record[layout.name_column];
            let display_name = if name.is_empty() { code.clone() } else { name.to_string() };
            if !converter.insert(CodeEntry { code, display_name }) {
                log::debug!("Line {}: duplicate code in {} table", line, kind);
                converter.skipped += 1;
            }
        }

        Ok(converter)
    }

    /// Insert an entry; returns false when the code already exists
    fn insert(&mut self, entry: CodeEntry) -> bool {
        if self.by_code.contains_key(&entry.code) {
            return false;
        }
        let index = self.entries.len();
        self.by_code.insert(entry.code.clone(), index);
        self.by_name.entry(entry.display_name.clone()).or_insert(index);
        self.entries.push(entry);
        true
    }

    /// Display name for a code (case-insensitive)
    pub fn from_code(&self, code: &str) -> Option<&str> {
        self.by_code
            .get(&code.trim().to_lowercase())
            .map(|&i| self.entries[i].display_name.as_str())
    }

    /// Code for an exact display name
    pub fn from_name(&self, name: &str) -> Option<&str> {
        self.by_name
            .get(name.trim())
            .map(|&i| self.entries[i].code.as_str())
    }

    /// All codes in table order
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.code.as_str())
    }

    /// All entries in table order
    pub fn entries(&self) -> &[CodeEntry] {
        &self.entries
    }

    pub fn kind(&self) -> CodeKind {
        self.kind
    }

    /// Number of non-blank lines that produced no entry
    pub fn skipped_lines(&self) -> usize {
        self.skipped
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CountryNamesError;
    use std::io::Write;

    const LANGUAGES: &str = "fr\tFrench\nDE\tGerman\n\nes\tSpanish\n";

    fn languages() -> CodeConverter {
        CodeConverter::parse_str(CodeKind::Language, LANGUAGES, &TableLayout::default()).unwrap()
    }

    #[test]
    fn test_parse_simple_table() {
        let conv = languages();
        assert_eq!(conv.len(), 3);
        assert_eq!(conv.skipped_lines(), 0);
        assert_eq!(conv.codes().collect::<Vec<_>>(), vec!["fr", "de", "es"]);
    }

    #[test]
    fn test_codes_are_lowercased() {
        let conv = languages();
        assert_eq!(conv.from_code("de"), Some("German"));
        assert_eq!(conv.from_code("DE"), Some("German"));
        assert_eq!(conv.from_name("German"), Some("de"));
    }

    #[test]
    fn test_round_trip() {
        let conv = languages();
        for code in conv.codes() {
            let name = conv.from_code(code).unwrap();
            assert_eq!(conv.from_name(name), Some(code));
        }
    }

    #[test]
    fn test_unknown_lookups() {
        let conv = languages();
        assert_eq!(conv.from_code("xx"), None);
        assert_eq!(conv.from_name("Klingon"), None);
    }

    #[test]
    fn test_malformed_lines_skipped() {
        let text = "fr\tFrench\njustonecolumn\n   \n\tNoCode\nit\tItalian\n";
        let conv = CodeConverter::parse_str(CodeKind::Language, text, &TableLayout::default()).unwrap();
        assert_eq!(conv.codes().collect::<Vec<_>>(), vec!["fr", "it"]);
        assert_eq!(conv.skipped_lines(), 2);
        assert_eq!(conv.from_name("NoCode"), None);
    }

    #[test]
    fn test_stray_quote_does_not_swallow_following_lines() {
        let text = "fr\tFrench\nxx\t\"Broken\nde\tGerman\nes\tSpanish\n";
        let conv = CodeConverter::parse_str(CodeKind::Language, text, &TableLayout::default()).unwrap();
        assert_eq!(conv.codes().collect::<Vec<_>>(), vec!["fr", "de", "es"]);
        assert_eq!(conv.from_code("de"), Some("German"));
        assert_eq!(conv.from_code("xx"), None);
        assert_eq!(conv.skipped_lines(), 1);
    }

    #[test]
    fn test_quoted_text_kept_verbatim() {
        let text = "ci\t\"Ivory\" Coast\n";
        let conv = CodeConverter::parse_str(CodeKind::Country, text, &TableLayout::default()).unwrap();
        assert_eq!(conv.from_code("ci"), Some("\"Ivory\" Coast"));
    }

    #[test]
    fn test_empty_name_falls_back_to_code() {
        let conv = CodeConverter::parse_str(CodeKind::Country, "xkx\t\n", &TableLayout::default()).unwrap();
        assert_eq!(conv.from_code("xkx"), Some("xkx"));
        assert_eq!(conv.from_name("xkx"), Some("xkx"));
    }

    #[test]
    fn test_duplicate_code_keeps_first() {
        let text = "fr\tFrench\nfr\tFrançais\n";
        let conv = CodeConverter::parse_str(CodeKind::Language, text, &TableLayout::default()).unwrap();
        assert_eq!(conv.len(), 1);
        assert_eq!(conv.from_code("fr"), Some("French"));
        assert_eq!(conv.skipped_lines(), 1);
    }

    #[test]
    fn test_custom_layout_with_header() {
        let text = "Country\tAlpha-2 code\tAlpha-3 code\tNumeric\n\
                    France\tFR\tFRA\t250\n\
                    Germany\tDE\tDEU\t276\n";
        let layout = TableLayout {
            code_column: 2,
            name_column: 0,
            has_header: true,
            ..TableLayout::default()
        };
        let conv = CodeConverter::parse_str(CodeKind::Country, text, &layout).unwrap();
        assert_eq!(conv.codes().collect::<Vec<_>>(), vec!["fra", "deu"]);
        assert_eq!(conv.from_code("FRA"), Some("France"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "fr\tFrance\nde\tGermany\n").unwrap();
        let conv = CodeConverter::load_from_file(CodeKind::Country, file.path(), &TableLayout::default()).unwrap();
        assert_eq!(conv.kind(), CodeKind::Country);
        assert_eq!(conv.from_code("fr"), Some("France"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = CodeConverter::load_from_file(
            CodeKind::Country,
            &dir.path().join("country-codes.txt"),
            &TableLayout::default(),
        )
        .unwrap_err();
        assert!(matches!(err, CountryNamesError::ResourceNotFound(_)));
    }
}
