//! Path management for seedlock
//!
//! ## Path Resolution Order
//!
//! 1. `SEEDLOCK_CONFIG_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/seedlock` or `~/.config/seedlock`
//! 3. Windows: `%APPDATA%\seedlock`

use std::path::PathBuf;

use crate::error::SeedlockError;

/// Environment variable overriding the configuration directory
pub const CONFIG_DIR_ENV: &str = "SEEDLOCK_CONFIG_DIR";

/// Manages all paths used by seedlock
#[derive(Debug, Clone)]
pub struct SeedlockPaths {
    base_dir: PathBuf,
}

impl SeedlockPaths {
    /// Resolve the configuration directory
    ///
    /// # Errors
    ///
    /// Returns an error if no home or application data directory can be
    /// determined.
    pub fn new() -> Result<Self, SeedlockError> {
        let base_dir = match std::env::var(CONFIG_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create SeedlockPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the configuration directory exists
    pub fn ensure_directories(&self) -> Result<(), SeedlockError> {
        std::fs::create_dir_all(&self.base_dir).map_err(|e| {
            SeedlockError::Io(format!("Failed to create config directory: {}", e))
        })
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, SeedlockError> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        if !xdg.is_empty() {
            return Ok(PathBuf::from(xdg).join("seedlock"));
        }
    }
    let home = std::env::var("HOME")
        .map_err(|_| SeedlockError::Config("Could not determine HOME directory".into()))?;
    Ok(PathBuf::from(home).join(".config").join("seedlock"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, SeedlockError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| SeedlockError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("seedlock"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SeedlockPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var(CONFIG_DIR_ENV, custom_path);
        let paths = SeedlockPaths::new().unwrap();
        env::remove_var(CONFIG_DIR_ENV);

        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SeedlockPaths::with_base_dir(temp_dir.path().join("nested").join("seedlock"));

        paths.ensure_directories().unwrap();
        assert!(paths.base_dir().exists());
    }
}
