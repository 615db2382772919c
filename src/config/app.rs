use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ConfigError, DatabaseConfig, ObservabilityConfig, ServerConfig, Validate};

/// Top-level application configuration that aggregates all config modules
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Application metadata
    #[serde(default)]
    pub app: AppMetadata,
    /// Server configuration (host, port, workers)
    #[serde(default)]
    pub server: ServerConfig,
    /// Store file location
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Logging configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// Application metadata configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppMetadata {
    /// Application name
    #[serde(default = "default_app_name")]
    pub name: String,
    /// Application version
    #[serde(default = "default_app_version")]
    pub version: String,
}

fn default_app_name() -> String {
    "vulnerable-app".to_string()
}

fn default_app_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

impl Default for AppMetadata {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            version: default_app_version(),
        }
    }
}

impl Validate for AppMetadata {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.name.is_empty() {
            return Err(ConfigError::ValidationError("app.name cannot be empty".to_string()));
        }
        if self.version.is_empty() {
            return Err(ConfigError::ValidationError("app.version cannot be empty".to_string()));
        }
        Ok(())
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        self.app.validate()?;
        self.server.validate()?;
        self.database.validate()?;
        self.observability.validate()?;
        Ok(())
    }
}

/// Load configuration from the `config/` directory under the working directory
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(Path::new("config"))
}

/// Load configuration from files in `dir`
///
/// Later layers override earlier ones:
/// 1. `{dir}/default.toml`
/// 2. `{dir}/local.toml` (git-ignored, developer overrides)
///
/// Both files are optional; missing keys fall back to built-in defaults.
/// Host and port are deliberately not read from the environment.
pub fn load_config_from(dir: &Path) -> Result<AppConfig, ConfigError> {
    use config::{Config, File};

    let config = Config::builder()
        .add_source(File::from(dir.join("default")).required(false))
        .add_source(File::from(dir.join("local")).required(false))
        .build()?;

    let app_config: AppConfig = config.try_deserialize()?;

    app_config.validate()?;

    Ok(app_config)
}
