//! Core types and error handling
//!
//! This module re-exports commonly used types and traits for the country-names crate.

pub use crate::binder::{Binder, Rendered, SelectionState};
pub use crate::codes::{CodeConverter, CodeKind};
pub use crate::error::{CountryNamesError, Result};
pub use crate::translator::{AliasTable, Translator};
pub use anyhow::{anyhow, Context};
pub use log::{debug, error, info, warn};
