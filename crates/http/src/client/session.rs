//! Session-aware client
//!
//! Reads the bearer token from the persisted session on every request and
//! reacts to 401 responses by clearing the session and sending the user to
//! the login route.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::warn;
use wee_core::models::MessageResponse;
use wee_core::session::{Session, SessionStore};

use super::error::ClientError;
use super::api::WeeClient;

/// Route shown after the session is torn down by a 401
pub const LOGIN_ROUTE: &str = "/login";

/// Route shown after an explicit logout
pub const HOME_ROUTE: &str = "/";

/// Moves the user to another route
///
/// The browser implementation routes in-app when a router is mounted; tests record calls.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: &str);
}

/// API client bound to a session store and a navigator
#[derive(Clone)]
pub struct SessionClient {
    api: WeeClient,
    store: SessionStore,
    navigator: Arc<dyn Navigator>,
}

impl std::fmt::Debug for SessionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionClient")
            .field("base_url", &self.api.base_url())
            .finish_non_exhaustive()
    }
}

impl SessionClient {
    pub fn new(
        api: WeeClient,
        store: SessionStore,
        navigator: impl Navigator + 'static,
    ) -> Self {
        Self {
            api,
            store,
            navigator: Arc::new(navigator),
        }
    }

    pub fn base_url(&self) -> &str {
        self.api.base_url()
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn current_session(&self) -> Option<Session> {
        self.store.current_session()
    }

    /// Request builder carrying the bearer token of the current session, if any
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        match self.store.token() {
            Some(token) => self.api.request_with_token(method, path, &token),
            None => self.api.request(method, path),
        }
    }

    /// Execute a request, tearing the session down on 401
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let result = self.api.execute(request).await;
        self.guard(result)
    }

    /// Execute a request whose body is an optional `{ message }`, tearing the session down on 401
    pub async fn execute_message(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<MessageResponse, ClientError> {
        let result = self.api.execute_message(request).await;
        self.guard(result)
    }

    fn guard<T>(&self, result: Result<T, ClientError>) -> Result<T, ClientError> {
        if matches!(&result, Err(e) if e.is_unauthorized()) {
            self.handle_unauthorized();
        }
        result
    }

    /// Clear the session and go to the login route
    pub fn handle_unauthorized(&self) {
        warn!("Received 401, clearing session");
        self.store.clear();
        self.navigator.navigate(LOGIN_ROUTE);
    }

    /// Clear the session and go home
    pub fn logout(&self) {
        self.store.clear();
        self.navigator.navigate(HOME_ROUTE);
    }
}
