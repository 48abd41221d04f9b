//! Character encoding utilities
//!
//! Code tables are plain text files that are not always UTF-8. Resources are
//! read as bytes and decoded here, with BOM sniffing.

use crate::error::{CountryNamesError, Result};
use encoding_rs::Encoding;

/// Default encoding label for code tables
pub const DEFAULT_ENCODING: &str = "utf-8";

/// Decode resource bytes using the encoding named by `label`
///
/// A byte order mark overrides the label. Invalid sequences are replaced
/// with U+FFFD rather than failing the load.
pub fn decode_text(data: &[u8], label: &str) -> Result<String> {
    let encoding = Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| CountryNamesError::encoding(format!("unknown encoding label '{}'", label)))?;

    let (cow, encoding_used, had_errors) = encoding.decode(data);

    if had_errors {
        log::debug!(
            "Decoding as {} replaced malformed sequences",
            encoding_used.name()
        );
    }

    Ok(cow.into_owned())
}
