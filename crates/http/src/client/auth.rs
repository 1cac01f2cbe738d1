//! Authentication endpoints

use reqwest::Method;
use tracing::{debug, error};
use wee_core::models::{
    Credentials, CurrentUser, ForgotPasswordRequest, MessageResponse, RegisterRequest,
};
use wee_core::session::Session;

use super::error::ClientError;
use super::session::SessionClient;

impl SessionClient {
    /// Log in. The response becomes the stored session when it carries a token.
    pub async fn login(&self, credentials: &Credentials) -> Result<Option<Session>, ClientError> {
        let request = self.request(Method::POST, "/auth/login").json(credentials);
        let response: Session = self
            .execute(request)
            .await
            .inspect_err(|e| error!("Login failed: {e}"))?;
        self.establish(response)
    }

    /// Register a new account. Persisted the same way as [`Self::login`].
    pub async fn register(&self, fields: &RegisterRequest) -> Result<Option<Session>, ClientError> {
        let request = self.request(Method::POST, "/auth/register").json(fields);
        let response: Session = self
            .execute(request)
            .await
            .inspect_err(|e| error!("Registration failed: {e}"))?;
        self.establish(response)
    }

    fn establish(&self, response: Session) -> Result<Option<Session>, ClientError> {
        let session = self.store().establish(response)?;
        if session.is_none() {
            debug!("Auth response carried no token, session left untouched");
        }
        Ok(session)
    }

    /// The current user as the server sees it
    pub async fn me(&self) -> Result<CurrentUser, ClientError> {
        let request = self.request(Method::GET, "/auth/me");
        self.execute(request)
            .await
            .inspect_err(|e| error!("Failed to fetch current user: {e}"))
    }

    /// Ask for a password recovery mail
    pub async fn forgot_password(&self, email: &str) -> Result<MessageResponse, ClientError> {
        let body = ForgotPasswordRequest {
            email: email.to_string(),
        };
        let request = self
            .request(Method::POST, "/auth/forgot-password")
            .json(&body);
        self.execute_message(request)
            .await
            .inspect_err(|e| error!("Password recovery failed: {e}"))
    }

    /// Where the browser goes to start Google sign-in
    pub fn google_login_url(&self) -> String {
        format!("{}/auth/google", self.base_url())
    }
}
