use std::fs;
use tilegraph::config::{Config, ConfigSource};

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tilegraph.toml");
    fs::write(
        &path,
        "[map]\npath = \"levels/cave.json\"\n\n[logging]\nlevel = \"debug\"\n",
    )
    .unwrap();

    let config = Config::load_from(&path);
    assert_eq!(config.map.path, "levels/cave.json");
    assert_eq!(config.logging.level, "debug");
    assert!(config.display.render_ascii);
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_from(dir.path().join("nope.toml"));
    assert_eq!(config, Config::default());
}

#[test]
fn test_broken_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tilegraph.toml");
    fs::write(&path, "[display]\nrender_ascii = \"yes please\"\n").unwrap();

    assert_eq!(Config::load_from(&path), Config::default());
}

#[test]
fn test_read_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let (config, source) = Config::read_from(dir.path().join("nope.toml"));

    assert_eq!(config, Config::default());
    assert!(matches!(source, ConfigSource::Missing(_)));
    assert!(!source.is_fallback());
}

#[test]
fn test_read_reports_parse_failure() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tilegraph.toml");
    fs::write(&path, "[logging\nlevel = ").unwrap();

    let (config, source) = Config::read_from(&path);
    assert_eq!(config, Config::default());
    match &source {
        ConfigSource::Invalid { path: p, .. } => assert_eq!(p, &path),
        other => panic!("expected Invalid, got {:?}", other),
    }
    assert!(source.is_fallback());
}

#[test]
fn test_read_reports_unreadable_path() {
    // A directory exists but can't be read as a file
    let dir = tempfile::tempdir().unwrap();
    let (config, source) = Config::read_from(dir.path());

    assert_eq!(config, Config::default());
    assert!(matches!(source, ConfigSource::Unreadable { .. }));
    assert!(source.is_fallback());
}

#[test]
fn test_read_reports_loaded_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tilegraph.toml");
    fs::write(&path, "[display]\nrender_ascii = false\n").unwrap();

    let (config, source) = Config::read_from(&path);
    assert!(!config.display.render_ascii);
    assert!(matches!(source, ConfigSource::Loaded(_)));
}
