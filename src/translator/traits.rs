//! Trait definitions for the translator module
//!
//! This module defines the common interface that all translation backends must follow.

/// Common trait for all translator implementations
pub trait Translator {
    /// Known country codes, in dataset order
    fn country_codes(&self) -> &[String];

    /// Known language codes, in first-seen order
    fn language_codes(&self) -> &[String];

    /// Look up the name of a country in a language
    ///
    /// Both codes are matched case-insensitively and the language code is
    /// alias-normalized first. `None` means no translation exists for the
    /// pair, which is not an error.
    fn translate(&self, country_code: &str, language_code: &str) -> Option<&str>;
}
