use rehearse_core::config::{ConfigRepository, RehearseConfig};
use rehearse_core::scoring::Pillar;
use rehearse_core::session::Message;
use rehearse_infrastructure::TomlConfigRepository;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_defaults_when_file_missing() {
    // Use temporary directory for test
    let temp_dir = TempDir::new().unwrap();
    let repo = TomlConfigRepository::with_path(temp_dir.path().join("config.toml"));

    let config = repo.load().expect("Should fall back to defaults");
    assert_eq!(config, RehearseConfig::default());
}

#[test]
fn test_save_and_load_config() {
    let temp_dir = TempDir::new().unwrap();
    let repo = TomlConfigRepository::with_path(temp_dir.path().join("config.toml"));

    let mut config = RehearseConfig::default();
    config.scoring.objection_topics.push("security".to_string());
    config.narrative.lost_opportunity = "{persona} never called back; {company} went elsewhere.".to_string();

    repo.save(&config).expect("Should save config");
    let loaded = repo.load().expect("Should load config");

    assert_eq!(loaded, config);
}

#[test]
fn test_loaded_tables_drive_scoring() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[scoring]
objection_topics = ["precio"]

[[scoring.pillar]]
pillar = "rapport"
keywords = ["entiendo"]
compliment = "Excelente."
improvement_hint = "Escucha más."
"#,
    )
    .unwrap();

    let config = TomlConfigRepository::with_path(path).load().unwrap();
    let scorer = config.build_scorer().unwrap();
    let board = scorer.score(&[
        Message::system("Eres Dana."),
        Message::user("Entiendo, ¿y el precio?"),
    ]);

    assert_eq!(board.sub_score(Pillar::Rapport), 20.0 / 3.0);
    assert_eq!(board.objections().uncovered, vec!["precio".to_string()]);
    assert!(board.narrative_detail().starts_with("Rapport: Escucha más."));
}

#[test]
fn test_invalid_file_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[[scoring.pillar]]
pillar = "close"
keywords = ["demo"]
compliment = "a"
improvement_hint = "b"

[[scoring.pillar]]
pillar = "close"
keywords = ["trial"]
compliment = "a"
improvement_hint = "b"
"#,
    )
    .unwrap();

    let err = TomlConfigRepository::with_path(path).load().unwrap_err();
    assert!(err.is_config());
}

#[test]
fn test_unknown_pillar_is_serialization_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[[scoring.pillar]]
pillar = "closing"
keywords = ["demo"]
compliment = "a"
improvement_hint = "b"
"#,
    )
    .unwrap();

    let err = TomlConfigRepository::with_path(path).load().unwrap_err();
    assert!(err.is_serialization());
}
