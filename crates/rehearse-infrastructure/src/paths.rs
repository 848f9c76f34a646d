//! Path management for rehearse configuration files.
//!
//! ```text
//! ~/.config/rehearse/          # Config directory (platform config dir)
//! └── config.toml              # Scoring tables and narrative templates
//! ```

use rehearse_core::{RehearseError, Result};
use std::path::PathBuf;

const APP_DIR: &str = "rehearse";
const CONFIG_FILE: &str = "config.toml";

pub struct RehearsePaths;

impl RehearsePaths {
    /// Returns the rehearse configuration directory.
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| RehearseError::config("Cannot find config directory"))
    }

    /// Returns the path of the main config file.
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }
}
