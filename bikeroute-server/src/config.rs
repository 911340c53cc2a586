//! Server configuration: TOML file, then `HOST`/`PORT` environment, then CLI flags.

use std::path::{Path, PathBuf};

use bikeroute_core::{DEFAULT_PATH_COUNT, NetworkConfig};
use clap::Parser;
use serde::Deserialize;

/// HTTP service answering bikeway route alternatives between two coordinates
#[derive(Debug, Parser)]
#[command(name = "bikeroute-server", version, about)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Network export to load (GeoJSON or CSV), overrides `network.path`
    #[arg(long, env = "BIKEROUTE_NETWORK")]
    pub network: Option<PathBuf>,

    /// Bind host
    #[arg(long, env = "HOST")]
    pub host: Option<String>,

    /// Bind port
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// The single browser origin allowed by CORS
    pub allowed_origin: String,
    /// Alternatives requested per query
    pub path_count: usize,
    pub request_timeout_secs: u64,
    pub max_concurrent_requests: usize,
    pub network: Option<NetworkConfig>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            allowed_origin: "http://localhost:9080".to_string(),
            path_count: DEFAULT_PATH_COUNT,
            request_timeout_secs: 30,
            max_concurrent_requests: 256,
            network: None,
        }
    }
}

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl ServerConfig {
    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Build the effective configuration for a command line
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(cli);
        config.validate()?;
        Ok(config)
    }

    fn apply_overrides(&mut self, cli: &Cli) {
        if let Some(host) = &cli.host {
            self.host.clone_from(host);
        }
        if let Some(port) = cli.port {
            self.port = port;
        }
        if let Some(path) = &cli.network {
            match &mut self.network {
                Some(network) => network.path.clone_from(path),
                None => self.network = Some(NetworkConfig::new(path.clone())),
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.network.is_none() {
            return Err(ConfigError::Invalid(
                "no network configured, set `network.path` or pass --network".to_string(),
            ));
        }
        if self.path_count == 0 {
            return Err(ConfigError::Invalid("path_count must be at least 1".to_string()));
        }
        if self.max_concurrent_requests == 0 {
            return Err(ConfigError::Invalid(
                "max_concurrent_requests must be at least 1".to_string(),
            ));
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "request_timeout_secs must be at least 1".to_string(),
            ));
        }
        if self.allowed_origin.parse::<axum::http::HeaderValue>().is_err() {
            return Err(ConfigError::Invalid(format!(
                "allowed_origin '{}' is not a valid header value",
                self.allowed_origin
            )));
        }
        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
