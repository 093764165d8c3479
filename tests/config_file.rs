use std::fs;

use material_estimator::config::{load_or_default, Config, ConfigError};

#[test]
fn missing_file_gives_defaults_and_is_not_created() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("estimator.toml");
    let cfg = load_or_default(&path).unwrap();
    assert_eq!(cfg, Config::default());
    assert!(!path.exists());
}

#[test]
fn file_values_are_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("estimator.toml");
    fs::write(
        &path,
        "[input]\nstrict = true\n\n[locales]\ndir = \"packs\"\n\n[log]\nfilter = \"debug\"\n",
    )
    .unwrap();
    let cfg = load_or_default(&path).unwrap();
    assert!(cfg.input.strict);
    assert_eq!(cfg.locales.dir.as_deref(), Some("packs"));
    assert_eq!(cfg.log.filter, "debug");
}

#[test]
fn malformed_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("estimator.toml");
    fs::write(&path, "[input\nstrict = ").unwrap();
    assert!(matches!(load_or_default(&path), Err(ConfigError::Parse(_))));
}
