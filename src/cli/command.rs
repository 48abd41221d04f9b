//! Session command parsing
//!
//! Lines typed in interactive mode (or piped in) are matched against these
//! pre-compiled patterns.

use once_cell::sync::Lazy;
use regex::Regex;

/// `language <label|code>` / `country <label|code>`
static SELECT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(lang|language|country)\s+(.+)$").expect("Failed to compile select regex")
});

/// `list languages` / `list countries`
static LIST_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:list|ls)\s+(languages|langs|countries)$").expect("Failed to compile list regex")
});

/// A parsed session command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Language(String),
    Country(String),
    ListLanguages,
    ListCountries,
    Show,
    Help,
    Quit,
}

/// Parse one input line; `None` for blank or unrecognised input
pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    match line.to_lowercase().as_str() {
        "quit" | "exit" => return Some(Command::Quit),
        "show" => return Some(Command::Show),
        "help" | "?" => return Some(Command::Help),
        _ => {}
    }

    if let Some(caps) = SELECT_RE.captures(line) {
        let value = caps[2].trim().to_string();
        return match caps[1].to_lowercase().as_str() {
            "country" => Some(Command::Country(value)),
            _ => Some(Command::Language(value)),
        };
    }

    if let Some(caps) = LIST_RE.captures(line) {
        return match caps[1].to_lowercase().as_str() {
            "countries" => Some(Command::ListCountries),
            _ => Some(Command::ListLanguages),
        };
    }

    None
}

/// Usage text for the session commands
pub const HELP: &str = "\
Commands:
  language <name|code>   select a language
  country <name|code>    select a country
  list languages         show available languages
  list countries         show available countries
  show                   show the current translation
  quit                   exit";
