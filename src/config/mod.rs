//! Configuration loading and management

use crate::core::error::ConfigError;
use serde::{Deserialize, Serialize};
use url::Url;

/// Environment variable naming the YAML configuration file
pub const CONFIG_PATH_ENV: &str = "HATEOAS_CONFIG";

/// Listener settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    /// The `host:port` string to bind
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Link generation settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinksConfig {
    /// Absolute origin prefixed to every generated href
    /// (e.g., "http://localhost:8080"). Hrefs are path-only when unset.
    #[serde(default)]
    pub base_url: Option<String>,
}

impl LinksConfig {
    /// The base URL without trailing slashes, or an empty string
    pub fn href_prefix(&self) -> &str {
        self.base_url
            .as_deref()
            .map(|url| url.trim_end_matches('/'))
            .unwrap_or("")
    }

    /// Check that the base URL, if any, can prefix generated hrefs
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Some(value) = &self.base_url else {
            return Ok(());
        };

        let invalid = |reason| ConfigError::InvalidBaseUrl {
            value: value.clone(),
            reason,
        };

        let url = Url::parse(value).map_err(|source| ConfigError::UnparsableBaseUrl {
            value: value.clone(),
            source,
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid("scheme must be http or https"));
        }
        if url.host_str().is_none_or(str::is_empty) {
            return Err(invalid("must name a host"));
        }
        if url.query().is_some() || url.fragment().is_some() {
            return Err(invalid("must not contain a query or a fragment"));
        }
        // The parser percent-encodes these, so check the raw value
        if value.contains(['{', '}']) {
            return Err(invalid("must not contain placeholders"));
        }
        if value.contains(char::is_whitespace) {
            return Err(invalid("must not contain whitespace"));
        }
        Ok(())
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub links: LinksConfig,

    /// Load the demonstration data set at startup
    #[serde(default = "default_seed")]
    pub seed: bool,
}

fn default_seed() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::default_config()
    }
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.links.validate()?;
        Ok(config)
    }

    /// Load from the file named by `HATEOAS_CONFIG`, or use the defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => {
                tracing::info!("Loading configuration from {}", path);
                Self::from_yaml_file(&path)
            }
            Err(_) => Ok(Self::default_config()),
        }
    }

    /// Default configuration: localhost:8080, path-only links, seeding on
    pub fn default_config() -> Self {
        Self {
            server: ServerConfig::default(),
            links: LinksConfig::default(),
            seed: default_seed(),
        }
    }
}
