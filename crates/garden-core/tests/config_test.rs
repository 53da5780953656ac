use std::io::Write;

use garden_core::config::*;
use garden_core::GardenError;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = GardenConfig::from_toml("").unwrap();

    assert_eq!(config.decay.recompute_interval_ms, 60_000);
    assert_eq!(config.decay.low_moisture_threshold, 5.0);
    assert_eq!(config.storage.db_path, "garden.db");
    assert_eq!(config.storage.busy_timeout_ms, 5_000);
    assert_eq!(config.observability.log_level, "info");
    assert!(!config.observability.json);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[decay]
recompute_interval_ms = 1000

[storage]
db_path = "/var/lib/garden/plants.db"
"#;
    let config = GardenConfig::from_toml(toml).unwrap();
    assert_eq!(config.decay.recompute_interval_ms, 1000);
    // Non-overridden fields keep defaults
    assert_eq!(config.decay.low_moisture_threshold, 5.0);
    assert_eq!(config.storage.db_path, "/var/lib/garden/plants.db");
    assert_eq!(config.storage.busy_timeout_ms, 5_000);
}

#[test]
fn config_rejects_zero_recompute_interval() {
    let err = GardenConfig::from_toml("[decay]\nrecompute_interval_ms = 0\n").unwrap_err();
    assert!(matches!(err, GardenError::InvalidConfig { .. }));
}

#[test]
fn config_rejects_threshold_out_of_range() {
    let err = GardenConfig::from_toml("[decay]\nlow_moisture_threshold = 150.0\n").unwrap_err();
    assert!(err.to_string().contains("low_moisture_threshold"));
}

#[test]
fn config_rejects_malformed_toml() {
    let err = GardenConfig::from_toml("[decay\n").unwrap_err();
    assert!(matches!(err, GardenError::InvalidConfig { .. }));
}

#[test]
fn config_load_reads_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[observability]\nlog_level = \"debug\"\njson = true").unwrap();
    let config = GardenConfig::load(file.path()).unwrap();
    assert_eq!(config.observability.log_level, "debug");
    assert!(config.observability.json);
}

#[test]
fn config_load_missing_file_is_config_error() {
    let err = GardenConfig::load(std::path::Path::new("/nonexistent/garden.toml")).unwrap_err();
    assert!(matches!(err, GardenError::InvalidConfig { .. }));
}

#[test]
fn decay_config_exposes_duration() {
    let config = DecayConfig::default();
    assert_eq!(config.recompute_interval(), std::time::Duration::from_secs(60));
}
