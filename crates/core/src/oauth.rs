//! Google OAuth callback handling
//!
//! After the provider round trip the API redirects back to the client with a
//! `response` query parameter holding URL-encoded JSON.

use serde::Deserialize;

use crate::error::{CoreError, CoreResult};
use crate::session::{Session, SessionUser};

/// Query parameter carrying the auth payload
pub const RESPONSE_PARAM: &str = "response";

/// Session lifetime assumed when the callback does not state one
pub const DEFAULT_EXPIRES_IN_SECONDS: u64 = 86_400;

#[derive(Debug, Deserialize)]
struct CallbackPayload {
    #[serde(default)]
    token: Option<String>,
    #[serde(default)]
    user: Option<SessionUser>,
    #[serde(rename = "expiresIn", default)]
    expires_in: Option<u64>,
    #[serde(default)]
    message: Option<String>,
}

/// Build a session from a callback query string such as `?response=%7B...%7D`
///
/// Returns `Ok(None)` when the query has no `response` parameter, and an
/// error when the payload is present but unusable.
pub fn session_from_query(query: &str, now_ms: i64) -> CoreResult<Option<Session>> {
    let query = query.strip_prefix('?').unwrap_or(query);
    let Some(raw) = url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == RESPONSE_PARAM)
        .map(|(_, value)| value.into_owned())
    else {
        return Ok(None);
    };

    let payload: CallbackPayload = serde_json::from_str(&raw)?;
    let token = payload.token.filter(|token| !token.is_empty());
    let (Some(token), Some(user)) = (token, payload.user) else {
        return Err(CoreError::invalid_input(
            "OAuth response is missing token or user",
        ));
    };

    Ok(Some(Session {
        token,
        user_id: user.id,
        user: Some(user),
        message: payload.message,
        expires_in_seconds: Some(payload.expires_in.unwrap_or(DEFAULT_EXPIRES_IN_SECONDS)),
        issued_at: Some(now_ms),
        ..Session::default()
    }))
}
