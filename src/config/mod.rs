pub mod app;
pub mod database;
pub mod observability;
pub mod server;

use thiserror::Error;

pub use app::{AppConfig, AppMetadata};
pub use database::DatabaseConfig;
pub use observability::ObservabilityConfig;
pub use server::ServerConfig;

/// Errors raised while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Checks a configuration section for values the server cannot start with
pub trait Validate {
    fn validate(&self) -> Result<(), ConfigError>;
}

/// Load the application configuration from the `config/` directory
pub fn load() -> Result<AppConfig, ConfigError> {
    app::load_config()
}
