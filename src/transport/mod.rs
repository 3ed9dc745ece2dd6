//! Payload transport
//!
//! The engine produces and consumes plain Base64 strings. A `PayloadCodec`
//! moves such a string to and from a file, whether as text or as a rendered
//! barcode image. The engine never sees which one is in use.

pub mod text;

use std::path::{Path, PathBuf};

use crate::error::SeedlockResult;

pub use text::TextPayloadCodec;

/// Writes and reads encrypted payloads
pub trait PayloadCodec {
    /// File extension, including the leading dot, this codec writes
    fn extension(&self) -> &str;

    /// Store a payload at `path`
    fn write_payload(&self, payload: &str, path: &Path) -> SeedlockResult<()>;

    /// Recover a payload from `path`
    fn read_payload(&self, path: &Path) -> SeedlockResult<String>;
}

/// Turn user input into an output path
///
/// Empty input selects `default_name`; otherwise `extension` is appended
/// unless the name already ends with it (case-insensitive).
pub fn normalize_output_path(input: &str, default_name: &str, extension: &str) -> PathBuf {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return PathBuf::from(default_name);
    }

    if trimmed.to_lowercase().ends_with(&extension.to_lowercase()) {
        PathBuf::from(trimmed)
    } else {
        PathBuf::from(format!("{}{}", trimmed, extension))
    }
}
