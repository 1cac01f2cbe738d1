use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::{error, warn};

#[derive(Debug, Error)]
pub enum DaemonError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("Upstream answered {0}")]
    UpstreamStatus(u16),

    #[error("Short link not found: {0}")]
    LinkNotFound(String),
}

pub type Result<T> = std::result::Result<T, DaemonError>;

impl IntoResponse for DaemonError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::LinkNotFound(code) => {
                warn!("Unknown short link requested: {code}");
                StatusCode::NOT_FOUND
            }
            Self::Upstream(_) | Self::UpstreamStatus(_) => {
                error!("{self}");
                StatusCode::BAD_GATEWAY
            }
            Self::Config(_) | Self::InvalidConfig(_) | Self::Io(_) => {
                error!("{self}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, self.to_string()).into_response()
    }
}
