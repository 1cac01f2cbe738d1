//! Link endpoints

use reqwest::Method;
use tracing::error;
use wee_core::models::{Link, MessageResponse, NewLink, UserLinks, UserProfile};
use wee_core::shortcode::{generate_short_code, short_url};

use super::error::ClientError;
use super::session::SessionClient;

impl SessionClient {
    pub async fn create_link(&self, link: &NewLink) -> Result<MessageResponse, ClientError> {
        let request = self.request(Method::POST, "/links").json(link);
        self.execute_message(request)
            .await
            .inspect_err(|e| error!("Failed to create link: {e}"))
    }

    /// Generate a code for `original_url` and register it
    ///
    /// The short URL is built against `origin`. The owner is the current
    /// session's user, when there is one. A blank URL is ignored.
    pub async fn shorten(
        &self,
        original_url: &str,
        origin: &str,
    ) -> Result<Option<NewLink>, ClientError> {
        let original_url = original_url.trim();
        if original_url.is_empty() {
            return Ok(None);
        }

        let code = generate_short_code();
        let link = NewLink {
            original_url: original_url.to_string(),
            short_url: short_url(origin, &code),
            short_code: code,
            owner_id: self.current_session().and_then(|session| session.user_id()),
        };
        self.create_link(&link).await?;
        Ok(Some(link))
    }

    /// Look a link up by its short code
    pub async fn get_link(&self, code: &str) -> Result<Link, ClientError> {
        let request = self.request(Method::GET, &format!("/links/{code}"));
        self.execute(request)
            .await
            .inspect_err(|e| error!("Failed to fetch link {code}: {e}"))
    }

    pub async fn delete_link(&self, id: i64) -> Result<MessageResponse, ClientError> {
        let request = self.request(Method::DELETE, &format!("/links/{id}"));
        self.execute_message(request)
            .await
            .inspect_err(|e| error!("Failed to delete link {id}: {e}"))
    }

    pub async fn user_links(&self, user_id: i64) -> Result<UserLinks, ClientError> {
        let request = self.request(Method::GET, &format!("/usuarios/{user_id}/enlaces"));
        self.execute(request)
            .await
            .inspect_err(|e| error!("Failed to fetch links of user {user_id}: {e}"))
    }

    /// Links owned by the logged-in user
    pub async fn own_links(&self) -> Result<UserLinks, ClientError> {
        let user_id = self
            .current_session()
            .and_then(|session| session.user_id())
            .ok_or_else(|| ClientError::AuthenticationFailed("no active session".into()))?;
        self.user_links(user_id).await
    }

    pub async fn user_profile(&self, user_id: i64) -> Result<UserProfile, ClientError> {
        let request = self.request(Method::GET, &format!("/usuarios/{user_id}"));
        self.execute(request)
            .await
            .inspect_err(|e| error!("Failed to fetch user {user_id}: {e}"))
    }
}
