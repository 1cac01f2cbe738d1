//! Wee API client

pub mod admin;
pub mod api;
pub mod auth;
pub mod error;
pub mod links;
pub mod session;

use error::ClientError;
use serde::de::DeserializeOwned;
use wee_core::models::MessageResponse;

pub(crate) const USER_AGENT: &str = concat!("wee-client/", env!("CARGO_PKG_VERSION"));

/// Turn a response into `T`, mapping non-2xx statuses to [`ClientError`]
pub(crate) async fn read_json<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let status = response.status();

    if status.is_success() {
        Ok(response.json().await?)
    } else {
        let message = response.text().await.unwrap_or_else(|_| status.to_string());
        Err(ClientError::from_status(status, message))
    }
}

/// Like [`read_json`] for endpoints whose success body may be empty or plain text
pub(crate) async fn read_message(
    response: reqwest::Response,
) -> Result<MessageResponse, ClientError> {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    if !status.is_success() {
        let message = if body.is_empty() {
            status.to_string()
        } else {
            body
        };
        return Err(ClientError::from_status(status, message));
    }

    if body.trim().is_empty() {
        return Ok(MessageResponse::default());
    }
    Ok(serde_json::from_str(&body).unwrap_or_else(|_| MessageResponse {
        message: Some(body),
    }))
}
