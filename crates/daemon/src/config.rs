//! Web host configuration
//!
//! Layered as defaults, then an optional TOML/YAML file, then `WEE__*`
//! environment variables (`WEE__SERVER__PORT=8080`).

use std::net::SocketAddr;
use std::path::Path;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{DaemonError, Result};

/// Files looked up when no explicit config path is given
const CONFIG_SEARCH_PATHS: [&str; 2] = ["wee.toml", "config/wee.toml"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory holding the compiled web client
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
    /// File served for client-side routes
    #[serde(default = "default_static_index")]
    pub static_index: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub cors_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the REST API, including its `/api` prefix
    #[serde(default = "default_upstream")]
    pub upstream: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    3000
}

fn default_static_dir() -> String {
    "dist".to_string()
}

fn default_static_index() -> String {
    "index.html".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_upstream() -> String {
    "https://apiweeurl.onrender.com/api".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
            static_index: default_static_index(),
            log_level: default_log_level(),
            cors_enabled: false,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            upstream: default_upstream(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Settings {
    /// Load configuration from the default search paths and the environment
    pub fn load() -> Result<Self> {
        let mut builder = Config::builder().add_source(Config::try_from(&Self::default())?);

        for path in CONFIG_SEARCH_PATHS {
            if Path::new(path).exists() {
                builder = builder.add_source(File::with_name(path).required(false));
            }
        }

        let config = builder.add_source(env_source()).build()?;
        Ok(config.try_deserialize()?)
    }

    /// Load configuration from a specific file, still letting the environment override it
    pub fn load_from_file(path: &str) -> Result<Self> {
        let config = Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            .add_source(File::with_name(path))
            .add_source(env_source())
            .build()?;
        Ok(config.try_deserialize()?)
    }

    /// Apply command-line/environment overrides for the port and the API URL
    #[must_use]
    pub fn with_overrides(mut self, port: Option<u16>, upstream: Option<String>) -> Self {
        if let Some(port) = port {
            self.server.port = port;
        }
        if let Some(upstream) = upstream.filter(|url| !url.trim().is_empty()) {
            self.api.upstream = upstream;
        }
        self
    }

    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| {
                DaemonError::InvalidConfig(format!(
                    "invalid bind address {}:{}: {e}",
                    self.server.host, self.server.port
                ))
            })
    }

    /// Upstream base without a trailing slash
    pub fn upstream_base(&self) -> &str {
        self.api.upstream.trim_end_matches('/')
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("WEE")
        .separator("__")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.server.port, 3000);
        assert_eq!(settings.server.static_dir, "dist");
        assert_eq!(settings.api.upstream, "https://apiweeurl.onrender.com/api");
        assert_eq!(
            settings.bind_addr().unwrap(),
            "0.0.0.0:3000".parse().unwrap()
        );
    }

    #[test]
    fn test_load_from_file_keeps_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[server]\nport = 8081\n\n[api]\nupstream = \"http://localhost:4000/api/\"").unwrap();

        let settings = Settings::load_from_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(settings.server.port, 8081);
        assert_eq!(settings.server.static_index, "index.html");
        assert_eq!(settings.upstream_base(), "http://localhost:4000/api");
    }

    #[test]
    fn test_overrides() {
        let settings = Settings::default()
            .with_overrides(Some(9000), Some("http://api.local/api".into()));
        assert_eq!(settings.server.port, 9000);
        assert_eq!(settings.api.upstream, "http://api.local/api");

        let untouched = Settings::default().with_overrides(None, Some("  ".into()));
        assert_eq!(untouched, Settings::default());
    }

    #[test]
    fn test_invalid_host() {
        let mut settings = Settings::default();
        settings.server.host = "not a host".into();
        assert!(matches!(
            settings.bind_addr(),
            Err(DaemonError::InvalidConfig(_))
        ));
    }
}
