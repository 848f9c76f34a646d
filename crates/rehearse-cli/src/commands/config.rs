use anyhow::{Context, Result, bail};
use rehearse_core::config::{ConfigRepository, RehearseConfig};
use rehearse_infrastructure::TomlConfigRepository;

pub fn show(repo: &TomlConfigRepository) -> Result<()> {
    let config = repo
        .load()
        .with_context(|| format!("Failed to load config from {}", repo.path().display()))?;

    let text = toml::to_string_pretty(&config).context("Failed to render config as TOML")?;
    print!("{}", text);
    Ok(())
}

pub fn init(repo: &TomlConfigRepository, force: bool) -> Result<()> {
    if repo.path().exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            repo.path().display()
        );
    }

    repo.save(&RehearseConfig::default())
        .with_context(|| format!("Failed to write config to {}", repo.path().display()))?;

    println!("✓ Wrote default config to {}", repo.path().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_refuses_to_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        let repo = TomlConfigRepository::with_path(dir.path().join("config.toml"));

        init(&repo, false).unwrap();
        assert!(init(&repo, false).is_err());
        assert!(init(&repo, true).is_ok());
        assert_eq!(repo.load().unwrap(), RehearseConfig::default());
    }
}
