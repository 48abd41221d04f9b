//! Code table module
//!
//! Parses the flat country and language code lists into bidirectional
//! code <-> display name mappings.
//!
//! # Module Organization
//!
//! - `types`: Table entries, table kinds and column layouts
//! - `converter`: The `CodeConverter` lookup structure

pub mod converter;
pub mod types;

pub use converter::CodeConverter;
pub use types::{CodeEntry, CodeKind, TableLayout};
