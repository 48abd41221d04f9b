//! Path utilities for configuration and resource files
//!
//! Handles XDG directory specifications and path resolution. Nothing here
//! creates directories: all resources are read-only.

use crate::error::{CountryNamesError, Result};
use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Directory holding `config.yaml`
///
/// `COUNTRY_NAMES_CONFIG_HOME` wins, then the shared `COUNTRY_NAMES_HOME`,
/// then `country-names` under the platform config directory.
pub fn config_dir() -> Result<PathBuf> {
    env_dir(&["COUNTRY_NAMES_CONFIG_HOME", "COUNTRY_NAMES_HOME"])
        .or_else(|| dirs::config_dir().map(|dir| dir.join("country-names")))
        .ok_or_else(|| CountryNamesError::config("cannot determine configuration directory"))
}

/// Directory searched for relative code table and dataset paths
///
/// `COUNTRY_NAMES_DATA_HOME` wins, then `COUNTRY_NAMES_HOME`, then
/// `country-names` under the platform data directory. Resources left at
/// their default names fall back to the bundled copies when absent here.
pub fn data_dir() -> Result<PathBuf> {
    env_dir(&["COUNTRY_NAMES_DATA_HOME", "COUNTRY_NAMES_HOME"])
        .or_else(|| dirs::data_dir().map(|dir| dir.join("country-names")))
        .ok_or_else(|| CountryNamesError::config("cannot determine data directory"))
}

/// First of `vars` that is set to a non-empty value
fn env_dir(vars: &[&str]) -> Option<PathBuf> {
    vars.iter()
        .filter_map(|var| env::var_os(var))
        .find(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Get the path to the config file
pub fn config_file() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.yaml"))
}

/// Expand tilde (~) in path
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

/// Resolve a configured resource path
///
/// Absolute paths are used as-is. Relative paths are used as-is when they
/// exist relative to the working directory, otherwise they are looked up in
/// the data directory.
pub fn resolve_resource(path: &str) -> Result<PathBuf> {
    let expanded = expand_tilde(path);
    if expanded.is_absolute() || expanded.exists() {
        return Ok(expanded);
    }
    Ok(data_dir()?.join(expanded))
}

/// Read a resource file, mapping a missing file to `ResourceNotFound`
pub fn read_resource(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CountryNamesError::ResourceNotFound(path.to_path_buf()),
        _ => CountryNamesError::IoError(e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_expand_tilde() {
        let path = expand_tilde("~/test");
        if dirs::home_dir().is_some() {
            assert!(!path.to_string_lossy().starts_with('~'));
        }
        assert_eq!(expand_tilde("plain/file.txt"), PathBuf::from("plain/file.txt"));
    }

    #[test]
    fn test_env_dir_skips_unset_vars() {
        assert_eq!(env_dir(&[]), None);
        assert_eq!(env_dir(&["COUNTRY_NAMES_UNSET_FOR_TEST"]), None);
    }

    #[test]
    fn test_resolve_absolute_path_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("sample.json");
        let resolved = resolve_resource(file.to_str().unwrap()).unwrap();
        assert_eq!(resolved, file);
    }

    #[test]
    fn test_read_resource_missing() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("country-codes.txt");
        let err = read_resource(&missing).unwrap_err();
        assert!(matches!(err, CountryNamesError::ResourceNotFound(p) if p == missing));
    }

    #[test]
    fn test_read_resource_existing() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "fr\tFrance").unwrap();
        let bytes = read_resource(file.path()).unwrap();
        assert_eq!(bytes, b"fr\tFrance");
    }
}
