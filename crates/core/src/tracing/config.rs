//! Configuration for log output

use serde::{Deserialize, Serialize};

/// Log output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstrumentationConfig {
    /// Service name recorded on startup
    pub service_name: String,
    /// Filter directive used when `RUST_LOG` is unset (e.g. "info", "wee_daemon=debug")
    pub log_level: String,
    /// Include thread ids and names in each line
    #[serde(default)]
    pub thread_details: bool,
}

impl Default for InstrumentationConfig {
    fn default() -> Self {
        Self {
            service_name: "wee".to_string(),
            log_level: "info".to_string(),
            thread_details: false,
        }
    }
}

impl InstrumentationConfig {
    /// Configuration for a named service at the given level
    pub fn new(service_name: impl Into<String>, log_level: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            log_level: log_level.into(),
            ..Self::default()
        }
    }

    /// Verbose configuration for local development
    pub fn dev() -> Self {
        Self {
            service_name: "wee-dev".to_string(),
            log_level: "debug".to_string(),
            thread_details: true,
        }
    }
}
