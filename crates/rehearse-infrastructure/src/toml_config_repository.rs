//! TOML-based ConfigRepository implementation

use crate::atomic_toml::AtomicTomlFile;
use crate::paths::RehearsePaths;
use rehearse_core::config::{ConfigRepository, RehearseConfig};
use rehearse_core::Result;
use std::path::{Path, PathBuf};

/// Stores the scoring tables and narrative templates in a TOML file.
///
/// Responsibilities:
/// - Load the config, falling back to defaults when the file is absent or empty
/// - Validate everything that was read before handing it out
/// - Save atomically
pub struct TomlConfigRepository {
    file: AtomicTomlFile<RehearseConfig>,
}

impl TomlConfigRepository {
    /// Creates a repository at the default path (~/.config/rehearse/config.toml)
    pub fn new() -> Result<Self> {
        Ok(Self::with_path(RehearsePaths::config_file()?))
    }

    /// Creates a repository with a custom config path (for testing)
    pub fn with_path(config_path: PathBuf) -> Self {
        Self {
            file: AtomicTomlFile::new(config_path),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

impl ConfigRepository for TomlConfigRepository {
    fn load(&self) -> Result<RehearseConfig> {
        match self.file.load()? {
            Some(config) => {
                config.validate()?;
                tracing::debug!(path = %self.path().display(), "Loaded config");
                Ok(config)
            }
            None => {
                tracing::info!(path = %self.path().display(), "No config file; using defaults");
                Ok(RehearseConfig::default())
            }
        }
    }

    fn save(&self, config: &RehearseConfig) -> Result<()> {
        config.validate()?;
        self.file.save(config)
    }
}
