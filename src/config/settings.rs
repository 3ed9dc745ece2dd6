//! User settings for seedlock
//!
//! Persisted as JSON. Every field has a default so older or hand-edited files
//! keep loading.

use serde::{Deserialize, Serialize};

use super::paths::SeedlockPaths;
use crate::error::SeedlockError;

/// User settings for seedlock
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// File the encrypted payload is written to when no name is given
    #[serde(default = "default_output_file")]
    pub default_output_file: String,

    /// Require a valid BIP-39 phrase before encrypting
    #[serde(default = "default_enforce_seed_phrase")]
    pub enforce_seed_phrase: bool,

    /// tracing filter used when neither RUST_LOG nor -v is given
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_output_file() -> String {
    "seed_payload.txt".to_string()
}

fn default_enforce_seed_phrase() -> bool {
    true
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_output_file: default_output_file(),
            enforce_seed_phrase: default_enforce_seed_phrase(),
            log_filter: default_log_filter(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &SeedlockPaths) -> Result<Self, SeedlockError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                SeedlockError::Io(format!("Failed to read settings file: {}", e))
            })?;

            serde_json::from_str(&contents).map_err(|e| {
                SeedlockError::Config(format!("Failed to parse settings file: {}", e))
            })
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Load settings, falling back to defaults when they can't be read
    ///
    /// The load error is returned alongside so it can be reported once
    /// logging is up.
    pub fn load_or_default(paths: &SeedlockPaths) -> (Self, Option<SeedlockError>) {
        match Self::load_or_create(paths) {
            Ok(settings) => (settings, None),
            Err(e) => (Settings::default(), Some(e)),
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SeedlockPaths) -> Result<(), SeedlockError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            SeedlockError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            SeedlockError::Io(format!("Failed to write settings file: {}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.default_output_file, "seed_payload.txt");
        assert!(settings.enforce_seed_phrase);
        assert_eq!(settings.log_filter, "warn");
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SeedlockPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SeedlockPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            default_output_file: "vault.txt".into(),
            enforce_seed_phrase: false,
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_corrupt_file_falls_back_to_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SeedlockPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{ not json").unwrap();

        let (settings, err) = Settings::load_or_default(&paths);
        assert_eq!(settings, Settings::default());
        assert!(matches!(err, Some(SeedlockError::Config(_))));

        std::fs::write(paths.settings_file(), r#"{ "log_filter": "info" }"#).unwrap();
        let (settings, err) = Settings::load_or_default(&paths);
        assert_eq!(settings.log_filter, "info");
        assert!(err.is_none());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SeedlockPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{ "log_filter": "debug" }"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.log_filter, "debug");
        assert!(loaded.enforce_seed_phrase);
    }

    #[test]
    fn test_corrupt_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SeedlockPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, SeedlockError::Config(_)));
    }
}
