//! Configuration loading tests

use hrm_domain::Error;
use hrm_domain::constants::{CPU_HISTORY_LEN, CPU_SAMPLE_INTERVAL_MS};
use hrm_infrastructure::config::{AppConfig, ConfigLoader, CpuMode};
use hrm_infrastructure::constants::{DEFAULT_MEMINFO_PATH, DEFAULT_POWER_SUPPLY_DIR};
use std::path::PathBuf;
use std::time::Duration;

// Unique prefix so the host environment never leaks into these tests
const TEST_ENV_PREFIX: &str = "HRM_CONFIG_TEST_UNSET";

fn loader_for(path: &std::path::Path) -> ConfigLoader {
    ConfigLoader::new()
        .with_config_path(path)
        .with_env_prefix(TEST_ENV_PREFIX)
}

#[test]
fn test_defaults() {
    let config = AppConfig::default();
    assert_eq!(config.cpu.mode, CpuMode::Rolling);
    assert_eq!(config.cpu.sample_interval_ms, CPU_SAMPLE_INTERVAL_MS);
    assert_eq!(config.cpu.history_len, CPU_HISTORY_LEN);
    assert_eq!(config.sources.meminfo_path, PathBuf::from(DEFAULT_MEMINFO_PATH));
    assert_eq!(
        config.sources.power_supply_dir,
        PathBuf::from(DEFAULT_POWER_SUPPLY_DIR)
    );
    assert_eq!(config.battery.default_name, "BAT0");
    assert_eq!(config.cpu.warmup(), Duration::from_millis(1000));
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = loader_for(&dir.path().join("hrm.toml")).load().unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_partial_toml_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hrm.toml");
    std::fs::write(
        &path,
        r#"
[cpu]
mode = "instant"
sample_interval_ms = 250

[sources]
meminfo_path = "/host/proc/meminfo"

[battery]
default_name = "BAT1"
"#,
    )
    .unwrap();

    let config = loader_for(&path).load().unwrap();
    assert_eq!(config.cpu.mode, CpuMode::Instant);
    assert_eq!(config.cpu.sample_interval(), Duration::from_millis(250));
    assert_eq!(config.cpu.history_len, CPU_HISTORY_LEN);
    assert_eq!(
        config.sources.meminfo_path,
        PathBuf::from("/host/proc/meminfo")
    );
    assert_eq!(
        config.sources.power_supply_dir,
        PathBuf::from(DEFAULT_POWER_SUPPLY_DIR)
    );
    assert_eq!(config.battery.default_name, "BAT1");
}

#[test]
fn test_zero_interval_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hrm.toml");
    std::fs::write(&path, "[cpu]\nsample_interval_ms = 0\n").unwrap();

    let err = loader_for(&path).load().unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
}

#[test]
fn test_zero_history_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hrm.toml");
    std::fs::write(&path, "[cpu]\nhistory_len = 0\n").unwrap();

    let err = loader_for(&path).load().unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
}

#[test]
fn test_invalid_log_level_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hrm.toml");
    std::fs::write(&path, "[logging]\nlevel = \"loud\"\n").unwrap();

    let err = loader_for(&path).load().unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
}

#[test]
fn test_unknown_mode_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hrm.toml");
    std::fs::write(&path, "[cpu]\nmode = \"sometimes\"\n").unwrap();

    assert!(loader_for(&path).load().is_err());
}

#[test]
fn test_save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hrm.toml");

    let mut config = AppConfig::default();
    config.cpu.history_len = 20;
    config.disk.default_path = PathBuf::from("/home");

    let loader = loader_for(&path);
    loader.save_to_file(&config, &path).unwrap();
    assert_eq!(loader.load().unwrap(), config);
}
