//! Resource loading
//!
//! Loads both code tables and the translation dataset eagerly, before any
//! selection is accepted. A resource left at its default name that is found
//! on neither search path falls back to the copy compiled into the binary;
//! any other missing resource aborts start-up.

use crate::binder::Binder;
use crate::codes::{CodeConverter, CodeKind, TableLayout};
use crate::config::{AppConfig, ResourceConfig};
use crate::error::Result;
use crate::translator::{AliasTable, DatasetTranslator};
use std::path::Path;

const BUNDLED_COUNTRY_CODES: &str = include_str!("../data/country-codes.txt");
const BUNDLED_LANGUAGE_CODES: &str = include_str!("../data/language-codes.txt");
const BUNDLED_DATASET: &str = include_str!("../data/sample.json");

/// Everything loaded at start-up
pub struct Resources {
    pub countries: CodeConverter,
    pub languages: CodeConverter,
    pub translator: DatasetTranslator,
    pub aliases: AliasTable,
}

impl Resources {
    /// Load all resources named by the configuration
    pub fn load(config: &AppConfig) -> Result<Self> {
        let aliases = AliasTable::with_overrides(&config.aliases);
        let defaults = ResourceConfig::default();

        let path = config.country_codes_path()?;
        let countries = if use_bundled(&path, &config.resources.country_codes, &defaults.country_codes) {
            CodeConverter::parse_str(CodeKind::Country, BUNDLED_COUNTRY_CODES, &TableLayout::default())?
        } else {
            CodeConverter::load_from_file(CodeKind::Country, &path, &config.tables.country)?
        };

        let path = config.language_codes_path()?;
        let languages = if use_bundled(&path, &config.resources.language_codes, &defaults.language_codes) {
            CodeConverter::parse_str(CodeKind::Language, BUNDLED_LANGUAGE_CODES, &TableLayout::default())?
        } else {
            CodeConverter::load_from_file(CodeKind::Language, &path, &config.tables.language)?
        };

        let path = config.dataset_path()?;
        let translator = if use_bundled(&path, &config.resources.dataset, &defaults.dataset) {
            DatasetTranslator::from_json_str(BUNDLED_DATASET, aliases.clone())?
        } else {
            DatasetTranslator::load_from_file(&path, aliases.clone())?
        };

        Ok(Self {
            countries,
            languages,
            translator,
            aliases,
        })
    }

    /// Build the selection binder over the loaded resources
    pub fn into_binder(self) -> Binder {
        Binder::new(
            Box::new(self.translator),
            &self.countries,
            &self.languages,
            &self.aliases,
        )
    }
}

/// Whether to use the compiled-in copy of a resource
fn use_bundled(path: &Path, configured: &str, default: &str) -> bool {
    if configured != default || path.exists() {
        return false;
    }
    log::info!("{:?} not found, using bundled {}", path, default);
    true
}
