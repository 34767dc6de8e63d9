//! Application configuration structures.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application name and metadata.
    #[serde(default)]
    pub app: AppMetadata,

    /// Document store configuration.
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Collection schema configuration.
    #[serde(default)]
    pub schema: SchemaConfig,

    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// Application metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppMetadata {
    /// Application name.
    pub name: String,
    /// Application version.
    pub version: String,
    /// Environment (development, test, production).
    pub environment: String,
}

impl Default for AppMetadata {
    fn default() -> Self {
        Self {
            name: "edutask".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Document store (MongoDB) configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Connection string.
    pub url: String,
    /// Database name.
    pub name: String,
    /// Application name reported to the server.
    pub app_name: Option<String>,
    /// Minimum connection pool size.
    pub min_pool_size: u32,
    /// Maximum connection pool size.
    pub max_pool_size: u32,
    /// Connection timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Server selection timeout in seconds.
    pub server_selection_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "mongodb://localhost:27017".to_string(),
            name: "edutask".to_string(),
            app_name: Some("edutask".to_string()),
            min_pool_size: 0,
            max_pool_size: 10,
            connect_timeout_secs: 10,
            server_selection_timeout_secs: 30,
        }
    }
}

impl DatabaseConfig {
    /// Returns the connect timeout as a Duration.
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Returns the server selection timeout as a Duration.
    #[must_use]
    pub const fn server_selection_timeout(&self) -> Duration {
        Duration::from_secs(self.server_selection_timeout_secs)
    }
}

/// Collection schema configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaConfig {
    /// Directory holding one `<collection>.json` schema per collection.
    pub directory: String,
    /// Collections to bootstrap on startup.
    pub collections: Vec<String>,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            directory: "./schemas".to_string(),
            collections: vec!["todo".to_string(), "user".to_string()],
        }
    }
}

impl SchemaConfig {
    /// Returns the schema file path for a collection.
    #[must_use]
    pub fn schema_path(&self, collection: &str) -> PathBuf {
        Path::new(&self.directory).join(format!("{}.json", collection))
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
    /// Log format (json, pretty).
    pub log_format: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: "pretty".to_string(),
        }
    }
}

impl ObservabilityConfig {
    /// Returns true if logs should be emitted as JSON lines.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.log_format.eq_ignore_ascii_case("json")
    }
}
