//! Persisted session record and the store that guards it
//!
//! The session is a single JSON object kept under [`SESSION_KEY`]. It is read
//! and replaced wholesale; nothing mutates it in place.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, warn};

use crate::error::{CoreError, CoreResult};

/// Storage key holding the serialized session
pub const SESSION_KEY: &str = "currentUser";

/// Storage key of the superseded local-only user list
pub const LEGACY_USERS_KEY: &str = "users";

/// Key/value backend for the session record
///
/// The browser implementation wraps `localStorage`; tests use [`MemoryStorage`].
pub trait SessionStorage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> CoreResult<()>;
    fn remove(&self, key: &str);
}

/// In-memory storage backend
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> CoreResult<()> {
        self.entries
            .lock()
            .map_err(|_| CoreError::storage("memory storage lock poisoned"))?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

/// Role used for UI gating only; enforcement happens server-side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Standard,
}

impl Role {
    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("admin") {
            Self::Admin
        } else {
            Self::Standard
        }
    }
}

/// Identity nested under `user` in auth responses
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "rol", default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// The persisted authentication record
///
/// Identity is read from the nested `user` object; the top-level `userId`,
/// `rol`, `email` and `username` fields are only consulted as fallbacks for
/// older response shapes. Fields the client does not know about are kept so
/// the full auth response survives a round trip through storage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub token: String,
    #[serde(
        default,
        deserialize_with = "lenient_user",
        skip_serializing_if = "Option::is_none"
    )]
    pub user: Option<SessionUser>,
    #[serde(rename = "userId", default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(rename = "rol", default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Lifetime in seconds
    #[serde(rename = "expiresIn", default, skip_serializing_if = "Option::is_none")]
    pub expires_in_seconds: Option<u64>,
    /// Issue time in epoch milliseconds
    #[serde(rename = "timestamp", default, skip_serializing_if = "Option::is_none")]
    pub issued_at: Option<i64>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// Some legacy responses carry `user` as a plain string.
fn lenient_user<'de, D>(deserializer: D) -> Result<Option<SessionUser>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Object(_) => Ok(serde_json::from_value(value).ok()),
        _ => Ok(None),
    }
}

impl Session {
    pub fn has_token(&self) -> bool {
        !self.token.is_empty()
    }

    pub fn user_id(&self) -> Option<i64> {
        self.user
            .as_ref()
            .and_then(|user| user.id)
            .or(self.user_id)
    }

    /// Role string, preferring `user.rol` over the top-level `rol`
    pub fn role(&self) -> Option<&str> {
        self.user
            .as_ref()
            .and_then(|user| user.role.as_deref())
            .filter(|role| !role.is_empty())
            .or_else(|| self.role.as_deref().filter(|role| !role.is_empty()))
    }

    pub fn role_kind(&self) -> Role {
        self.role().map_or(Role::Standard, Role::from_name)
    }

    pub fn is_admin(&self) -> bool {
        self.role_kind() == Role::Admin
    }

    pub fn email(&self) -> Option<&str> {
        self.user
            .as_ref()
            .and_then(|user| user.email.as_deref())
            .or(self.email.as_deref())
    }

    pub fn username(&self) -> Option<&str> {
        self.user
            .as_ref()
            .and_then(|user| user.username.as_deref())
            .or(self.username.as_deref())
    }

    /// Name shown in greetings and the user menu
    pub fn display_name(&self) -> &str {
        self.username()
            .or_else(|| self.email())
            .unwrap_or("user")
    }

    /// Upper-cased first letter used for the avatar bubble
    pub fn initial(&self) -> String {
        self.email()
            .or_else(|| self.username())
            .and_then(|value| value.chars().next())
            .map_or_else(|| "?".to_string(), |c| c.to_uppercase().to_string())
    }

    /// Expiry instant in epoch milliseconds, when both issue time and lifetime are known
    pub fn expires_at(&self) -> Option<i64> {
        let issued_at = self.issued_at?;
        let lifetime = i64::try_from(self.expires_in_seconds?).ok()?;
        Some(issued_at.saturating_add(lifetime.saturating_mul(1000)))
    }

    pub fn is_expired_at(&self, now_ms: i64) -> bool {
        self.expires_at().is_some_and(|expires_at| now_ms > expires_at)
    }

    /// Route a freshly authenticated user lands on
    pub fn landing_route(&self) -> &'static str {
        if self.is_admin() {
            "/admin"
        } else {
            "/dashboard"
        }
    }
}

/// Current time in epoch milliseconds
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Reads, writes and expires the persisted session
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore").finish_non_exhaustive()
    }
}

impl SessionStore {
    pub fn new(storage: impl SessionStorage + 'static) -> Self {
        Self {
            storage: Arc::new(storage),
        }
    }

    pub fn from_shared(storage: Arc<dyn SessionStorage>) -> Self {
        Self { storage }
    }

    /// Current session, if one is stored, parsable, carries a token and has not expired
    pub fn current_session(&self) -> Option<Session> {
        self.current_session_at(now_ms())
    }

    /// Same as [`Self::current_session`] against an explicit clock.
    /// An expired session is removed from storage.
    pub fn current_session_at(&self, now_ms: i64) -> Option<Session> {
        let raw = self.storage.get(SESSION_KEY)?;
        let session: Session = match serde_json::from_str(&raw) {
            Ok(session) => session,
            Err(e) => {
                warn!("Ignoring unparsable stored session: {e}");
                return None;
            }
        };

        if !session.has_token() {
            return None;
        }

        if session.is_expired_at(now_ms) {
            debug!("Stored session expired, removing it");
            self.clear();
            return None;
        }

        Some(session)
    }

    /// Bearer token of the current session
    pub fn token(&self) -> Option<String> {
        self.current_session().map(|session| session.token)
    }

    /// Replace the stored session
    pub fn save(&self, session: &Session) -> CoreResult<()> {
        let serialized = serde_json::to_string(session)?;
        self.storage.set(SESSION_KEY, &serialized)
    }

    /// Persist an auth response as the new session if it carries a token
    pub fn establish(&self, response: Session) -> CoreResult<Option<Session>> {
        self.establish_at(response, now_ms())
    }

    /// Same as [`Self::establish`] against an explicit clock. The issue time
    /// is always the local clock, whatever the server sent.
    pub fn establish_at(&self, mut response: Session, now_ms: i64) -> CoreResult<Option<Session>> {
        if !response.has_token() {
            return Ok(None);
        }
        response.issued_at = Some(now_ms);
        self.save(&response)?;
        Ok(Some(response))
    }

    pub fn clear(&self) {
        self.storage.remove(SESSION_KEY);
    }

    /// Drop the user list left behind by the old local-only login
    pub fn purge_legacy_users(&self) {
        if self.storage.get(LEGACY_USERS_KEY).is_some() {
            debug!("Removing legacy local user list");
            self.storage.remove(LEGACY_USERS_KEY);
        }
    }
}
