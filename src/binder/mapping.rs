//! Ordered label -> code mappings shown to the user

use crate::codes::CodeConverter;
use crate::translator::{AliasTable, Translator};
use std::collections::HashMap;

/// Ordered mapping from display label to code
///
/// Labels keep their first insertion position. Inserting an existing label
/// replaces its code in place.
#[derive(Debug, Clone, Default)]
pub struct DisplayMapping {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl DisplayMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Language labels for every language the translator knows
    ///
    /// Codes are alias-normalized; unknown codes are labelled with the code.
    pub fn languages(translator: &dyn Translator, converter: &CodeConverter, aliases: &AliasTable) -> Self {
        let mut mapping = Self::new();
        for raw in translator.language_codes() {
            let code = aliases.normalize(raw);
            if code.is_empty() {
                continue;
            }
            let label = match converter.from_code(&code) {
                Some(name) if !name.trim().is_empty() => name.to_string(),
                _ => code.clone(),
            };
            mapping.insert(label, code);
        }
        mapping
    }

    /// Country labels for every country the translator knows
    ///
    /// Unknown codes are labelled with the upper-cased code.
    pub fn countries(translator: &dyn Translator, converter: &CodeConverter) -> Self {
        let mut mapping = Self::new();
        for raw in translator.country_codes() {
            let code = raw.trim().to_lowercase();
            if code.is_empty() {
                continue;
            }
            let label = match converter.from_code(&code) {
                Some(name) if !name.trim().is_empty() => name.to_string(),
                _ => code.to_uppercase(),
            };
            mapping.insert(label, code);
        }
        mapping
    }

    pub fn insert(&mut self, label: String, code: String) {
        match self.index.get(&label) {
            Some(&i) => self.entries[i].1 = code,
            None => {
                self.index.insert(label.clone(), self.entries.len());
                self.entries.push((label, code));
            }
        }
    }

    /// Code for an exact label
    pub fn code_for(&self, label: &str) -> Option<&str> {
        self.index.get(label).map(|&i| self.entries[i].1.as_str())
    }

    /// Find an entry from user input
    ///
    /// Tries an exact label, then a case-insensitive label, then a code.
    pub fn resolve(&self, input: &str) -> Option<(&str, &str)> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }
        if let Some(&i) = self.index.get(input) {
            return Some(self.entry(i));
        }
        let lowered = input.to_lowercase();
        let position = self
            .entries
            .iter()
            .position(|(label, _)| label.to_lowercase() == lowered)
            .or_else(|| self.entries.iter().position(|(_, code)| code.eq_ignore_ascii_case(input)));
        position.map(|i| self.entry(i))
    }

    fn entry(&self, i: usize) -> (&str, &str) {
        let (label, code) = &self.entries[i];
        (label.as_str(), code.as_str())
    }

    /// First label, the default selection
    pub fn first(&self) -> Option<&str> {
        self.entries.first().map(|(label, _)| label.as_str())
    }

    /// Labels in display order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(label, _)| label.as_str())
    }

    /// (label, code) pairs in display order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(label, code)| (label.as_str(), code.as_str()))
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
    use crate::codes::{CodeKind, TableLayout};
    use crate::translator::DatasetTranslator;

    fn fixtures() -> (DatasetTranslator, CodeConverter, CodeConverter) {
        let dataset = r#"[
            {"alpha3": "fra", "fr": "France", "kr": "프랑스", "xx": "?"},
            {"alpha3": "zzz", "fr": "Inconnu"}
        ]"#;
        let translator = DatasetTranslator::from_json_str(dataset, AliasTable::builtin()).unwrap();
        let countries =
            CodeConverter::parse_str(CodeKind::Country, "fra\tFrance\n", &TableLayout::default()).unwrap();
        let languages = CodeConverter::parse_str(
            CodeKind::Language,
            "fr\tFrench\nko\tKorean\n",
            &TableLayout::default(),
        )
        .unwrap();
        (translator, countries, languages)
    }

    #[test]
    fn test_language_labels() {
        let (translator, _, languages) = fixtures();
        let mapping = DisplayMapping::languages(&translator, &languages, &AliasTable::builtin());
        assert_eq!(mapping.labels().collect::<Vec<_>>(), vec!["French", "Korean", "xx"]);
        assert_eq!(mapping.code_for("Korean"), Some("ko"));
        assert_eq!(mapping.code_for("xx"), Some("xx"));
    }

    #[test]
    fn test_country_labels_fall_back_to_uppercase_code() {
        let (translator, countries, _) = fixtures();
        let mapping = DisplayMapping::countries(&translator, &countries);
        assert_eq!(mapping.labels().collect::<Vec<_>>(), vec!["France", "ZZZ"]);
        assert_eq!(mapping.code_for("ZZZ"), Some("zzz"));
    }

    #[test]
    fn test_insert_keeps_position() {
        let mut mapping = DisplayMapping::new();
        mapping.insert("A".to_string(), "a".to_string());
        mapping.insert("B".to_string(), "b".to_string());
        mapping.insert("A".to_string(), "c".to_string());
        assert_eq!(mapping.iter().collect::<Vec<_>>(), vec![("A", "c"), ("B", "b")]);
    }

    #[test]
    fn test_resolve() {
        let (translator, countries, _) = fixtures();
        let mapping = DisplayMapping::countries(&translator, &countries);
        assert_eq!(mapping.resolve("France"), Some(("France", "fra")));
        assert_eq!(mapping.resolve("france"), Some(("France", "fra")));
        assert_eq!(mapping.resolve("FRA"), Some(("France", "fra")));
        assert_eq!(mapping.resolve("Atlantis"), None);
        assert_eq!(mapping.resolve("  "), None);
    }

    #[test]
    fn test_resolve_non_ascii_label_ignores_case() {
        let mut mapping = DisplayMapping::new();
        mapping.insert("Åland".to_string(), "ala".to_string());
        mapping.insert("Österreich".to_string(), "aut".to_string());
        assert_eq!(mapping.resolve("ÖSTERREICH"), Some(("Österreich", "aut")));
        assert_eq!(mapping.resolve("åland"), Some(("Åland", "ala")));
    }
}
