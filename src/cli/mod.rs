//! CLI module for country-names
//!
//! This module handles command line argument parsing and drives the
//! selection binder from arguments, a terminal or a pipe.

pub mod command;

use crate::binder::{formatter, Binder, DisplayMapping, Rendered};
use crate::config::AppConfig;
use crate::error::Result;
use crate::resources::Resources;
use clap::Parser;
use command::{parse_command, Command, HELP};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "country-names")]
#[command(version, about = "Look up a country's name in another language from offline ISO code tables")]
#[command(long_about = "country-names shows a country's localized name for a selected language.\n\n\
    Countries and languages may be given by display name or by code. Without\n\
    arguments it reads selection commands from standard input.\n\n\
    Examples:\n  \
    $ country-names fra de\n  \
    $ country-names Germany French\n  \
    $ country-names --list-languages\n  \
    $ printf 'language fr\\ncountry deu\\n' | country-names")]
pub struct Cli {
    /// Country name or alpha-3 code
    #[arg(value_name = "COUNTRY", requires = "language")]
    pub country: Option<String>,

    /// Language name or code
    #[arg(value_name = "LANGUAGE")]
    pub language: Option<String>,

    /// Country code table
    #[arg(long, value_name = "PATH")]
    pub countries: Option<PathBuf>,

    /// Language code table
    #[arg(long, value_name = "PATH")]
    pub languages: Option<PathBuf>,

    /// Translation dataset (JSON or YAML)
    #[arg(long, value_name = "PATH")]
    pub dataset: Option<PathBuf>,

    /// List available languages
    #[arg(long)]
    pub list_languages: bool,

    /// List available countries
    #[arg(long)]
    pub list_countries: bool,

    /// Output JSON
    #[arg(short, long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Show detailed logs
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn run(&self, mut config: AppConfig) -> Result<()> {
        // Apply CLI options to config
        self.apply_to(&mut config);

        let mut binder = Resources::load(&config)?.into_binder();
        let stdout = io::stdout();
        let mut out = stdout.lock();

        if self.list_languages || self.list_countries {
            if self.list_languages {
                write_listing(&mut out, binder.languages(), &config)?;
            }
            if self.list_countries {
                write_listing(&mut out, binder.countries(), &config)?;
            }
            return Ok(());
        }

        if let (Some(country), Some(language)) = (&self.country, &self.language) {
            binder.select_country(country)?;
            if let Some(rendered) = binder.select_language(language)? {
                write_rendered(&mut out, &rendered, &config)?;
            }
            return Ok(());
        }

        let stdin = io::stdin();
        let interactive = atty::is(atty::Stream::Stdin);
        run_session(&mut binder, stdin.lock(), &mut out, &config, interactive)
    }

    /// Override configuration values with command line options
    pub fn apply_to(&self, config: &mut AppConfig) {
        if let Some(path) = &self.countries {
            config.resources.country_codes = path.to_string_lossy().into_owned();
        }
        if let Some(path) = &self.languages {
            config.resources.language_codes = path.to_string_lossy().into_owned();
        }
        if let Some(path) = &self.dataset {
            config.resources.dataset = path.to_string_lossy().into_owned();
        }
        if self.json {
            config.output.json = true;
        }
        if self.no_color {
            config.output.enable_colors = false;
        }
        if self.verbose {
            config.global.verbose = true;
        }
    }
}

/// Read selection commands until input ends or `quit`
///
/// Interactive mode pre-selects the first language and country, prints a
/// banner and a prompt. Unknown selections are reported and the session
/// continues.
pub fn run_session<R: BufRead, W: Write>(
    binder: &mut Binder,
    input: R,
    out: &mut W,
    config: &AppConfig,
    interactive: bool,
) -> Result<()> {
    if interactive {
        writeln!(out, "country-names interactive mode (type help for commands, quit or Ctrl+D to exit)")?;
        if let Some(rendered) = binder.select_first() {
            write_rendered(out, &rendered, config)?;
        }
        prompt(out, interactive)?;
    }

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            prompt(out, interactive)?;
            continue;
        }

        let outcome = match parse_command(&line) {
            Some(Command::Quit) => break,
            Some(Command::Language(value)) => binder.select_language(&value),
            Some(Command::Country(value)) => binder.select_country(&value),
            Some(Command::Show) => Ok(binder.render()),
            Some(Command::ListLanguages) => {
                write_listing(out, binder.languages(), config)?;
                Ok(None)
            }
            Some(Command::ListCountries) => {
                write_listing(out, binder.countries(), config)?;
                Ok(None)
            }
            Some(Command::Help) => {
                writeln!(out, "{}", HELP)?;
                Ok(None)
            }
            None => {
                eprintln!("Unrecognised command: {} (type help for commands)", line.trim());
                Ok(None)
            }
        };

        match outcome {
            Ok(Some(rendered)) => write_rendered(out, &rendered, config)?,
            Ok(None) => {}
            Err(e) if !e.is_fatal() => eprintln!("{}", e),
            Err(e) => return Err(e),
        }
        prompt(out, interactive)?;
    }

    Ok(())
}

fn prompt<W: Write>(out: &mut W, interactive: bool) -> Result<()> {
    if interactive {
        write!(out, "> ")?;
        out.flush()?;
    }
    Ok(())
}

fn write_rendered<W: Write>(out: &mut W, rendered: &Rendered, config: &AppConfig) -> Result<()> {
    if config.output.json {
        writeln!(out, "{}", formatter::format_json(rendered)?)?;
    } else {
        writeln!(out, "{}", formatter::format_text(rendered, config.output.enable_colors))?;
    }
    Ok(())
}

fn write_listing<W: Write>(out: &mut W, mapping: &DisplayMapping, config: &AppConfig) -> Result<()> {
    if config.output.json {
        writeln!(out, "{}", formatter::format_listing_json(mapping)?)?;
    } else {
        write!(out, "{}", formatter::format_listing(mapping))?;
    }
    Ok(())
}
