//! Selection state and rendering
//!
//! The binder holds one language selection and one country selection. Every
//! change re-renders from scratch: there is no cache beyond the mappings built
//! at start-up.

use crate::binder::mapping::DisplayMapping;
use crate::codes::CodeConverter;
use crate::error::{CountryNamesError, Result};
use crate::translator::{AliasTable, Translator};

/// Text rendered when the dataset has no name for the selected pair
pub const NO_TRANSLATION: &str = "No translation found.";

/// Selection state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState<'a> {
    /// A language or a country (or both) is still missing
    Unselected,
    /// Both chosen; holds the selected labels
    Selected { language: &'a str, country: &'a str },
}

/// Result of rendering a complete selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub language: String,
    pub language_code: String,
    pub country: String,
    pub country_code: String,
    /// `None` when the dataset has no name for the pair
    pub translation: Option<String>,
}

impl Rendered {
    /// The translated name, or the placeholder
    pub fn text(&self) -> &str {
        self.translation.as_deref().unwrap_or(NO_TRANSLATION)
    }

    pub fn is_found(&self) -> bool {
        self.translation.is_some()
    }
}

/// Binds the two selections to translator lookups
pub struct Binder {
    translator: Box<dyn Translator>,
    aliases: AliasTable,
    languages: DisplayMapping,
    countries: DisplayMapping,
    language: Option<String>,
    country: Option<String>,
}

impl Binder {
    /// Build both display mappings; starts `Unselected`
    pub fn new(
        translator: Box<dyn Translator>,
        countries: &CodeConverter,
        languages: &CodeConverter,
        aliases: &AliasTable,
    ) -> Self {
        let language_mapping = DisplayMapping::languages(translator.as_ref(), languages, aliases);
        let country_mapping = DisplayMapping::countries(translator.as_ref(), countries);
        log::debug!(
            "Display mappings built: {} languages, {} countries",
            language_mapping.len(),
            country_mapping.len()
        );

        Self {
            translator,
            aliases: aliases.clone(),
            languages: language_mapping,
            countries: country_mapping,
            language: None,
            country: None,
        }
    }

    pub fn languages(&self) -> &DisplayMapping {
        &self.languages
    }

    pub fn countries(&self) -> &DisplayMapping {
        &self.countries
    }

    pub fn state(&self) -> SelectionState<'_> {
        match (&self.language, &self.country) {
            (Some(language), Some(country)) => SelectionState::Selected { language, country },
            _ => SelectionState::Unselected,
        }
    }

    /// Select a language by label or code and re-render
    ///
    /// Legacy language codes are accepted through the alias table. Unknown
    /// input leaves the current selection untouched.
    pub fn select_language(&mut self, input: &str) -> Result<Option<Rendered>> {
        let (label, _) = self
            .languages
            .resolve(input)
            .or_else(|| self.languages.resolve(&self.aliases.normalize(input)))
            .ok_or_else(|| CountryNamesError::unknown_selection("language", input))?;
        self.language = Some(label.to_string());
        Ok(self.render())
    }

    /// Select a country by label or code and re-render
    ///
    /// Unknown input leaves the current selection untouched.
    pub fn select_country(&mut self, input: &str) -> Result<Option<Rendered>> {
        let (label, _) = self
            .countries
            .resolve(input)
            .ok_or_else(|| CountryNamesError::unknown_selection("country", input))?;
        self.country = Some(label.to_string());
        Ok(self.render())
    }

    /// Pre-select the first language and the first country, when present
    pub fn select_first(&mut self) -> Option<Rendered> {
        self.language = self.languages.first().map(str::to_string);
        self.country = self.countries.first().map(str::to_string);
        self.render()
    }

    /// Render the current state; `None` while `Unselected`
    pub fn render(&self) -> Option<Rendered> {
        let SelectionState::Selected { language, country } = self.state() else {
            return None;
        };
        let language_code = self.languages.code_for(language)?;
        let country_code = self.countries.code_for(country)?;

        let translation = self
            .translator
            .translate(country_code, language_code)
            .filter(|name| !name.trim().is_empty())
            .map(str::to_string);
        log::debug!(
            "Rendered {}/{} -> {:?}",
            country_code,
            language_code,
            translation
        );

        Some(Rendered {
            language: language.to_string(),
            language_code: language_code.to_string(),
            country: country.to_string(),
            country_code: country_code.to_string(),
            translation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::{CodeKind, TableLayout};
    use crate::translator::DatasetTranslator;

    fn binder() -> Binder {
        let dataset = r#"[
            {"alpha3": "fra", "fr": "France", "de": "Frankreich", "ko": "프랑스"},
            {"alpha3": "deu", "de": "Deutschland"}
        ]"#;
        let translator = DatasetTranslator::from_json_str(dataset, AliasTable::builtin()).unwrap();
        let countries = CodeConverter::parse_str(
            CodeKind::Country,
            "fra\tFrance\ndeu\tGermany\n",
            &TableLayout::default(),
        )
        .unwrap();
        let languages = CodeConverter::parse_str(
            CodeKind::Language,
            "fr\tFrench\nde\tGerman\nko\tKorean\n",
            &TableLayout::default(),
        )
        .unwrap();
        Binder::new(Box::new(translator), &countries, &languages, &AliasTable::builtin())
    }

    #[test]
    fn test_starts_unselected() {
        let b = binder();
        assert_eq!(b.state(), SelectionState::Unselected);
        assert!(b.render().is_none());
    }

    #[test]
    fn test_partial_selection_does_not_render() {
        let mut b = binder();
        assert!(b.select_language("French").unwrap().is_none());
        assert_eq!(b.state(), SelectionState::Unselected);
    }

    #[test]
    fn test_selecting_both_renders_name() {
        let mut b = binder();
        b.select_language("French").unwrap();
        let rendered = b.select_country("fra").unwrap().unwrap();
        assert_eq!(rendered.text(), "France");
        assert_eq!(rendered.language_code, "fr");
        assert_eq!(rendered.country, "France");
        assert_eq!(
            b.state(),
            SelectionState::Selected { language: "French", country: "France" }
        );
    }

    #[test]
    fn test_missing_pair_renders_placeholder() {
        let mut b = binder();
        b.select_country("Germany").unwrap();
        let rendered = b.select_language("fr").unwrap().unwrap();
        assert!(!rendered.is_found());
        assert_eq!(rendered.text(), "No translation found.");
    }

    #[test]
    fn test_every_change_rerenders() {
        let mut b = binder();
        b.select_language("German").unwrap();
        assert_eq!(b.select_country("France").unwrap().unwrap().text(), "Frankreich");
        assert_eq!(b.select_country("Germany").unwrap().unwrap().text(), "Deutschland");
        assert_eq!(b.select_language("Korean").unwrap().unwrap().text(), "No translation found.");
    }

    #[test]
    fn test_legacy_language_code_selects_canonical() {
        let mut b = binder();
        b.select_country("fra").unwrap();
        let legacy = b.select_language("kr").unwrap().unwrap();
        let canonical = b.select_language("ko").unwrap().unwrap();
        assert_eq!(legacy, canonical);
        assert_eq!(legacy.text(), "프랑스");
        assert_eq!(legacy.language, "Korean");
    }

    #[test]
    fn test_unknown_selection_keeps_state() {
        let mut b = binder();
        b.select_language("French").unwrap();
        b.select_country("France").unwrap();
        let err = b.select_country("Atlantis").unwrap_err();
        assert!(matches!(err, CountryNamesError::UnknownSelection { kind: "country", .. }));
        assert_eq!(b.render().unwrap().text(), "France");
    }

    #[test]
    fn test_select_first() {
        let mut b = binder();
        let rendered = b.select_first().unwrap();
        // languages in dataset order: de, fr, ko (sorted keys of the first record)
        assert_eq!(rendered.language, "German");
        assert_eq!(rendered.country, "France");
        assert_eq!(rendered.text(), "Frankreich");
    }
}
