use quizdeck::config::{Config, ConfigError, ConfigStore};
use tempfile::TempDir;

#[test]
fn missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("config.toml")).unwrap();

    assert_eq!(config.deck.path, None);
    assert_eq!(config.study.tick_ms, 250);
    assert_eq!(config.study.deck_cache_ttl_secs, 300);
    assert!(config.session.persist);
}

#[test]
fn partial_file_fills_in_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"[deck]
path = "/decks/rust.toml"

[study]
tick_ms = 100
"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(
        config.deck.path.as_deref(),
        Some(std::path::Path::new("/decks/rust.toml"))
    );
    assert_eq!(config.study.tick_ms, 100);
    assert_eq!(config.study.deck_cache_ttl_secs, 300);
    assert!(config.session.persist);
}

#[test]
fn zero_tick_fails_validation() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[study]\ntick_ms = 0\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn invalid_toml_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[study\ntick_ms = ").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn store_reload_replaces_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[study]\ntick_ms = 100\n").unwrap();

    let store = ConfigStore::new(Config::load_from(&path).unwrap(), path.clone());
    assert_eq!(store.get().study.tick_ms, 100);

    std::fs::write(&path, "[study]\ntick_ms = 50\n").unwrap();
    store.reload().unwrap();
    assert_eq!(store.get().study.tick_ms, 50);
    assert_eq!(store.path(), path.as_path());
}

#[test]
fn store_reload_failure_keeps_old_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[study]\ntick_ms = 100\n").unwrap();

    let store = ConfigStore::new(Config::load_from(&path).unwrap(), path.clone());

    std::fs::write(&path, "[study]\ntick_ms = 0\n").unwrap();
    assert!(store.reload().is_err());
    assert_eq!(store.get().study.tick_ms, 100);
}
