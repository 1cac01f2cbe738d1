//! Client configuration and initialization

use crate::auth::error_handler;
use crate::config::AppConfig;
use crate::storage::BrowserStorage;
use once_cell::sync::Lazy;
use std::sync::Mutex;
use tracing::warn;
use web_sys::window;
use wee_core::session::SessionStore;
pub use wee_http::client::error::ClientError;
use wee_http::client::session::{Navigator, SessionClient};
use wee_http::client::api::WeeClientBuilder;

/// Global client instance
static SESSION_CLIENT: Lazy<Mutex<Option<SessionClient>>> = Lazy::new(|| Mutex::new(None));

/// Origin the app is served from, e.g. `https://wee.example`
pub fn origin() -> String {
    window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Routes through the registered router callback, falling back to a full page load
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, route: &str) {
        if error_handler::navigate(route) {
            return;
        }
        navigate_hard(route);
    }
}

/// Full page navigation, used where the router is not available
pub fn navigate_hard(href: &str) {
    if let Some(window) = window() {
        if let Err(e) = window.location().set_href(href) {
            warn!("Navigation to {href} failed: {e:?}");
        }
    }
}

/// Get the shared client, creating it on first use
pub fn session_client() -> Result<SessionClient, ClientError> {
    let mut client_lock = SESSION_CLIENT
        .lock()
        .map_err(|_| ClientError::Configuration("client lock poisoned".into()))?;

    if let Some(client) = client_lock.as_ref() {
        return Ok(client.clone());
    }

    let api = WeeClientBuilder::new()
        .base_url(format!("{}{}", origin(), AppConfig::API_PREFIX))
        .build()?;
    let store = SessionStore::new(BrowserStorage);
    store.purge_legacy_users();

    let client = SessionClient::new(api, store, BrowserNavigator);
    *client_lock = Some(client.clone());
    Ok(client)
}
