//! Configuration loading for the Roster service.
//!
//! Configuration lives in an optional `roster-config.yaml` in the working
//! directory. Every field has a default, so an absent file or a partial
//! one is fine. When loaded through [`ServiceConfig::load`], two
//! environment variables override the file:
//!
//! - `ROSTER_DATABASE_PATH` overrides `database.path`
//! - `ROSTER_GENERATION_URL` overrides `generation.base_url`

use std::path::Path;

use roster_api::ServerConfig;
use roster_db::SqliteConfig;
use roster_genai::GenerationConfig;
use serde::Deserialize;

/// Default config file name, relative to the working directory.
pub const CONFIG_FILE: &str = "roster-config.yaml";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level service configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ServiceConfig {
    /// Listen address.
    #[serde(default)]
    pub server: ServerSection,

    /// `SQLite` database location.
    #[serde(default)]
    pub database: DatabaseSection,

    /// Text-generation service.
    #[serde(default)]
    pub generation: GenerationConfig,
}

impl ServiceConfig {
    /// Load configuration from a YAML file. Env overrides are not applied.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Parse configuration from a YAML string. Env overrides are not applied.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yml::from_str(yaml)?)
    }

    /// Load `roster-config.yaml` if present, defaults otherwise, then apply
    /// environment overrides.
    ///
    /// # Errors
    ///
    /// See [`ServiceConfig::from_file`].
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new(CONFIG_FILE), |key| std::env::var(key).ok())
    }

    /// Load `path` if it exists, defaults otherwise, then apply overrides
    /// from `lookup`.
    ///
    /// # Errors
    ///
    /// See [`ServiceConfig::from_file`].
    pub fn load_from(
        path: &Path,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            Self::from_file(path)?
        } else {
            tracing::info!(file = %path.display(), "Config file not found, using defaults");
            Self::default()
        };
        config.apply_overrides(lookup);
        Ok(config)
    }

    /// Override settings from an arbitrary variable lookup.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("ROSTER_DATABASE_PATH") {
            self.database.path = val;
        }
        if let Some(val) = lookup("ROSTER_GENERATION_URL") {
            self.generation.base_url = val;
        }
    }

    /// Server settings in the form the API crate expects.
    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            host: self.server.host.clone(),
            port: self.server.port,
        }
    }

    /// Database settings in the form the data layer expects.
    pub fn sqlite_config(&self) -> SqliteConfig {
        SqliteConfig::new(&self.database.path).with_max_connections(self.database.max_connections)
    }
}

/// `server:` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerSection {
    /// Bind host.
    #[serde(default = "default_host")]
    pub host: String,

    /// Bind port.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// `database:` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DatabaseSection {
    /// Database file path.
    #[serde(default = "default_database_path")]
    pub path: String,

    /// Pool size.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

impl Default for DatabaseSection {
    fn default() -> Self {
        Self {
            path: default_database_path(),
            max_connections: default_max_connections(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_owned()
}

const fn default_port() -> u16 {
    8080
}

fn default_database_path() -> String {
    "./students.db".to_owned()
}

const fn default_max_connections() -> u32 {
    1
}
