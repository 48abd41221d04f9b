//! Dataset-backed translator implementation

use crate::error::{CountryNamesError, Result};
use crate::translator::alias::AliasTable;
use crate::translator::traits::Translator;
use crate::translator::types::{DatasetFormat, DatasetRecord};
use crate::utils::encoding::{decode_text, DEFAULT_ENCODING};
use crate::utils::path::read_resource;
use std::collections::HashMap;
use std::path::Path;

/// Translator over a static dataset of country records
///
/// Names are indexed by (country code, language code), both lower-cased
/// and with language aliases applied.
#[derive(Debug, Clone)]
pub struct DatasetTranslator {
    aliases: AliasTable,
    /// (country code, language code) -> translated name
    names: HashMap<(String, String), String>,
    country_codes: Vec<String>,
    language_codes: Vec<String>,
    skipped: usize,
}

impl DatasetTranslator {
    fn empty(aliases: AliasTable) -> Self {
        Self {
            aliases,
            names: HashMap::new(),
            country_codes: Vec::new(),
            language_codes: Vec::new(),
            skipped: 0,
        }
    }

    /// Load a dataset file; the format follows the file extension
    pub fn load_from_file(file_path: &Path, aliases: AliasTable) -> Result<Self> {
        log::info!("Loading translation dataset from: {:?}", file_path);

        let data = read_resource(file_path)?;
        let content = decode_text(&data, DEFAULT_ENCODING)?;

        let translator = match DatasetFormat::from_path(file_path) {
            DatasetFormat::Json => Self::from_json_str(&content, aliases)?,
            DatasetFormat::Yaml => Self::from_yaml_str(&content, aliases)?,
        };

        if translator.skipped > 0 {
            log::warn!(
                "Skipped {} dataset record(s) without a usable alpha3 code in {:?}",
                translator.skipped,
                file_path
            );
        }
        log::info!(
            "Successfully loaded translation dataset: {} countries, {} languages, {} names",
            translator.country_codes.len(),
            translator.language_codes.len(),
            translator.names.len()
        );

        Ok(translator)
    }

    /// Build a translator from a JSON array of records
    pub fn from_json_str(content: &str, aliases: AliasTable) -> Result<Self> {
        let records: Vec<DatasetRecord> = serde_json::from_str(content)?;
        Ok(Self::from_records(records, aliases))
    }

    /// Build a translator from a YAML sequence of records
    pub fn from_yaml_str(content: &str, aliases: AliasTable) -> Result<Self> {
        let records: Vec<DatasetRecord> = serde_yaml::from_str(content)
            .map_err(|e| CountryNamesError::YamlError(format!("failed to parse dataset: {}", e)))?;
        Ok(Self::from_records(records, aliases))
    }

    /// Index parsed records
    pub fn from_records(records: Vec<DatasetRecord>, aliases: AliasTable) -> Self {
        let mut translator = Self::empty(aliases);

        for record in &records {
            let country = match record.country_code() {
                Some(code) => code,
                None => {
                    log::debug!("Dataset record {:?} has no usable alpha3 code", record.id);
                    translator.skipped += 1;
                    continue;
                }
            };

            if !translator.country_codes.contains(&country) {
                translator.country_codes.push(country.clone());
            }

            for (language, name) in record.translations() {
                translator.insert(&country, language, name);
            }
        }

        translator
    }

    fn insert(&mut self, country: &str, language: &str, name: &str) {
        let language = self.aliases.normalize(language);
        if language.is_empty() {
            return;
        }
        if !self.language_codes.contains(&language) {
            self.language_codes.push(language.clone());
        }

        let name = name.trim();
        if name.is_empty() {
            return;
        }
        let key = (country.to_string(), language);
        if self.names.contains_key(&key) {
            log::debug!("Duplicate translation for {:?} ignored", key);
            return;
        }
        self.names.insert(key, name.to_string());
    }

    /// Alias table applied to language codes
    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    /// Number of stored (country, language) names
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Records dropped for lacking a country code
    pub fn skipped_records(&self) -> usize {
        self.skipped
    }
}

impl Translator for DatasetTranslator {
    fn country_codes(&self) -> &[String] {
        &self.country_codes
    }

    fn language_codes(&self) -> &[String] {
        &self.language_codes
    }

    fn translate(&self, country_code: &str, language_code: &str) -> Option<&str> {
        let key = (
            country_code.trim().to_lowercase(),
            self.aliases.normalize(language_code),
        );
        self.names.get(&key).map(String::as_str)
    }
}
