//! country-names: offline country name translation
//!
//! Looks up a country's localized name for a selected language using ISO
//! country and language code tables and a static translation dataset.

pub mod binder;
pub mod cli;
pub mod codes;
pub mod config;
pub mod error;
pub mod prelude;
pub mod resources;
pub mod translator;
pub mod utils;

// Re-export common types
pub use binder::{Binder, DisplayMapping, Rendered, SelectionState, NO_TRANSLATION};
pub use codes::{CodeConverter, CodeEntry, CodeKind, TableLayout};
pub use config::AppConfig;
pub use error::{CountryNamesError, Result};
pub use resources::Resources;
pub use translator::{AliasTable, DatasetTranslator, Translator};
