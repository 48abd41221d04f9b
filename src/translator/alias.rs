//! Language code aliases
//!
//! Some datasets and code lists still carry legacy or non-standard language
//! codes. They are rewritten to their canonical form before indexing and
//! before every lookup.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Built-in alias table (legacy code -> canonical code)
pub static BUILTIN_ALIASES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        // Korean is commonly mislabelled with the country code
        ("kr", "ko"),
    ])
});

/// Alias table used to normalize language codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasTable {
    aliases: HashMap<String, String>,
}

impl AliasTable {
    /// Alias table holding only the built-in aliases
    pub fn builtin() -> Self {
        Self {
            aliases: BUILTIN_ALIASES
                .iter()
                .map(|(alias, canonical)| (alias.to_string(), canonical.to_string()))
                .collect(),
        }
    }

    /// Built-in aliases with `extra` merged over them
    pub fn with_overrides(extra: &HashMap<String, String>) -> Self {
        let mut table = Self::builtin();
        for (alias, canonical) in extra {
            let alias = alias.trim().to_lowercase();
            let canonical = canonical.trim().to_lowercase();
            if alias.is_empty() || canonical.is_empty() {
                log::warn!("Ignoring blank language alias '{}' -> '{}'", alias, canonical);
                continue;
            }
            table.aliases.insert(alias, canonical);
        }
        table
    }

    /// Lower-case `code` and replace it with its canonical form
    ///
    /// Aliases are applied once; they do not chain.
    pub fn normalize(&self, code: &str) -> String {
        let code = code.trim().to_lowercase();
        match self.aliases.get(&code) {
            Some(canonical) => canonical.clone(),
            None => code,
        }
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

impl Default for AliasTable {
    fn default() -> Self {
        Self::builtin()
    }
}
