//! Configuration loading and validation

use std::fs;
use std::path::Path;

use vulnerable_app::config::app::load_config_from;
use vulnerable_app::config::{AppConfig, ConfigError, Validate};

fn write(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).unwrap();
}

#[test]
fn test_defaults_without_files() {
    let dir = tempfile::tempdir().unwrap();

    let config = load_config_from(dir.path()).unwrap();

    assert_eq!(config.app.name, "vulnerable-app");
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.database.path, "vulnerable.db");
    assert_eq!(config.observability.log_level, "info");
}

#[test]
fn test_default_file_overrides_builtin_values() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "default.toml",
        r#"
[server]
port = 9090

[database]
path = "/tmp/training.db"
"#,
    );

    let config = load_config_from(dir.path()).unwrap();

    assert_eq!(config.server.port, 9090);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.database.path, "/tmp/training.db");
    assert_eq!(config.database.url(), "sqlite:///tmp/training.db?mode=rwc");
}

#[test]
fn test_local_file_overrides_default_file() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "default.toml",
        r#"
[server]
host = "127.0.0.1"
port = 9090
"#,
    );
    write(
        dir.path(),
        "local.toml",
        r#"
[server]
port = 9191
workers = 2

[observability]
log_level = "debug"
"#,
    );

    let config = load_config_from(dir.path()).unwrap();

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 9191);
    assert_eq!(config.server.workers, Some(2));
    assert_eq!(config.observability.log_level, "debug");
}

#[test]
fn test_invalid_port_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "default.toml", "[server]\nport = 0\n");

    let error = load_config_from(dir.path()).unwrap_err();

    assert!(matches!(error, ConfigError::ValidationError(_)), "{error}");
}

#[test]
fn test_malformed_file_is_a_load_error() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "default.toml", "[server\nport = ");

    let error = load_config_from(dir.path()).unwrap_err();

    assert!(matches!(error, ConfigError::Load(_)), "{error}");
}

#[test]
fn test_empty_database_path_is_rejected() {
    let mut config = AppConfig::default();
    config.database.path = String::new();

    assert!(config.validate().is_err());
}
