//! Plain-text payload files

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{SeedlockError, SeedlockResult};

use super::PayloadCodec;

/// Stores the Base64 payload as a one-line UTF-8 text file
#[derive(Debug, Clone, Copy, Default)]
pub struct TextPayloadCodec;

impl PayloadCodec for TextPayloadCodec {
    fn extension(&self) -> &str {
        ".txt"
    }

    fn write_payload(&self, payload: &str, path: &Path) -> SeedlockResult<()> {
        fs::write(path, format!("{}\n", payload)).map_err(|e| {
            SeedlockError::Io(format!("Failed to write {}: {}", path.display(), e))
        })?;
        info!(path = %path.display(), "payload written");
        Ok(())
    }

    fn read_payload(&self, path: &Path) -> SeedlockResult<String> {
        let contents = fs::read_to_string(path).map_err(|e| {
            SeedlockError::Io(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let payload = contents.trim();
        if payload.is_empty() {
            return Err(SeedlockError::Io(format!(
                "No payload found in {}",
                path.display()
            )));
        }
        Ok(payload.to_string())
    }
}
