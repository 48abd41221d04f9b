//! Shared helpers for paths and text decoding

pub mod encoding;
pub mod path;
