use anyhow::{Context, Result};
use rehearse_infrastructure::TomlConfigRepository;
use std::path::PathBuf;

/// Opens the config repository at `path`, or at the default location.
pub fn open_repository(path: Option<PathBuf>) -> Result<TomlConfigRepository> {
    match path {
        Some(path) => Ok(TomlConfigRepository::with_path(path)),
        None => TomlConfigRepository::new().context("Failed to resolve config path"),
    }
}
