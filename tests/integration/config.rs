//! Configuration file integration tests

use pascal_lattice::util::config::{load_config_from, save_config_to, ConfigError, GenerateConfig};
use pascal_lattice::Mode;

#[test]
fn test_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let config = GenerateConfig {
        depth: 8,
        max_value: 20,
        mode: Mode::Minimize,
        seed: Some(99),
        ..GenerateConfig::default()
    };
    save_config_to(&config, &path).unwrap();

    let loaded = load_config_from(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_config_from(&dir.path().join("absent.toml"));
    assert!(matches!(result, Err(ConfigError::IoError(_))));
}

#[test]
fn test_load_malformed_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "depth = \"deep\"").unwrap();
    assert!(matches!(
        load_config_from(&path),
        Err(ConfigError::ParseError(_))
    ));
}
