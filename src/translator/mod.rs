//! Translator module
//!
//! Looks up a country's name in a given language from a static dataset.
//!
//! # Module Organization
//!
//! - `traits`: The `Translator` trait
//! - `types`: Dataset records and formats
//! - `alias`: Language code alias table
//! - `dataset`: `DatasetTranslator`, the JSON/YAML backed implementation

pub mod alias;
pub mod dataset;
pub mod traits;
pub mod types;

pub use alias::AliasTable;
pub use dataset::DatasetTranslator;
pub use traits::Translator;
pub use types::{DatasetFormat, DatasetRecord};
