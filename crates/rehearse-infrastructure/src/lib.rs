//! File-backed implementations of the rehearse-core repository traits.

pub mod atomic_toml;
pub mod paths;
pub mod toml_config_repository;

pub use paths::RehearsePaths;
pub use toml_config_repository::TomlConfigRepository;
