use serde::{Deserialize, Serialize};

use super::{ConfigError, Validate};

/// Location of the SQLite store file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// Path of the store file, relative paths resolve against the working directory
    #[serde(default = "default_path")]
    pub path: String,
}

fn default_path() -> String {
    "vulnerable.db".to_string()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

impl DatabaseConfig {
    /// Connection URL, creating the file on first open
    pub fn url(&self) -> String {
        format!("sqlite://{}?mode=rwc", self.path)
    }
}

impl Validate for DatabaseConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.path.is_empty() {
            return Err(ConfigError::ValidationError("database.path cannot be empty".to_string()));
        }
        Ok(())
    }
}
