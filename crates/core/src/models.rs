//! Wire types exchanged with the Wee REST API
//!
//! The API speaks Spanish field names; Rust-side names are English and mapped
//! with serde renames.

use serde::{Deserialize, Serialize};

use crate::pagination::Identified;

/// A shortened link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub id: i64,
    #[serde(rename = "enlace_largo")]
    pub original_url: String,
    #[serde(rename = "enlace_acortado")]
    pub short_url: String,
    #[serde(rename = "cod_enlace", default, skip_serializing_if = "Option::is_none")]
    pub short_code: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(rename = "usuario_id", default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<i64>,
}

impl Link {
    /// Short code of the link, derived from the short URL for rows that
    /// predate the `cod_enlace` column
    pub fn code(&self) -> &str {
        match self.short_code.as_deref() {
            Some(code) if !code.is_empty() => code,
            _ => crate::shortcode::code_from_short_url(&self.short_url),
        }
    }
}

impl Identified for Link {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Request body for `POST /links`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewLink {
    #[serde(rename = "enlace_largo")]
    pub original_url: String,
    #[serde(rename = "enlace_acortado")]
    pub short_url: String,
    #[serde(rename = "cod_enlace")]
    pub short_code: String,
    #[serde(rename = "usuario_id", skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<i64>,
}

/// Response of `GET /usuarios/{id}/enlaces`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserLinks {
    #[serde(default)]
    pub total_enlaces: Option<usize>,
    #[serde(rename = "enlaces", default)]
    pub links: Vec<Link>,
}

/// A user as listed in the admin view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(rename = "rol", default)]
    pub role: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl User {
    /// Case-insensitive match against username or email
    pub fn matches(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        let term = term.to_lowercase();
        self.username.to_lowercase().contains(&term) || self.email.to_lowercase().contains(&term)
    }

    pub fn is_admin(&self) -> bool {
        self.role.eq_ignore_ascii_case("admin")
    }
}

impl Identified for User {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Response of `GET /usuarios/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(rename = "nombre_usuario", alias = "username", default)]
    pub username: String,
}

/// Response of `GET /auth/me`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "rol", default)]
    pub role: Option<String>,
}

impl CurrentUser {
    pub fn is_admin(&self) -> bool {
        self.role
            .as_deref()
            .is_some_and(|role| role.eq_ignore_ascii_case("admin"))
    }
}

/// Support ticket lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    Open,
    InProgress,
    Resolved,
    Closed,
}

impl TicketStatus {
    pub const ALL: [Self; 4] = [Self::Open, Self::InProgress, Self::Resolved, Self::Closed];

    /// Wire value
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in_progress",
            Self::Resolved => "resolved",
            Self::Closed => "closed",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::InProgress => "In progress",
            Self::Resolved => "Resolved",
            Self::Closed => "Closed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketPriority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl TicketPriority {
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Urgent => "Urgent",
        }
    }
}

/// A support ticket as seen by admins
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportTicket {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub subject: String,
    #[serde(default)]
    pub message: String,
    pub status: TicketStatus,
    #[serde(default)]
    pub priority: TicketPriority,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub admin_notes: Option<String>,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub assigned_to: Option<i64>,
    #[serde(default)]
    pub user_email: Option<String>,
    #[serde(default)]
    pub assigned_admin_email: Option<String>,
}

impl SupportTicket {
    pub fn was_updated(&self) -> bool {
        self.updated_at != self.created_at
    }
}

impl Identified for SupportTicket {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Response of `GET /admin/support`
///
/// A missing or malformed `tickets` field is treated as an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TicketList {
    pub tickets: Vec<SupportTicket>,
}

impl<'de> Deserialize<'de> for TicketList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        let tickets = match value.get("tickets") {
            Some(serde_json::Value::Array(_)) => {
                serde_json::from_value(value["tickets"].clone()).map_err(serde::de::Error::custom)?
            }
            _ => Vec::new(),
        };
        Ok(Self { tickets })
    }
}

/// Request body for `PUT /admin/support/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateTicketRequest {
    pub status: TicketStatus,
}

/// Local-credential login request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Registration request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

/// Generic `{ "message": ... }` body returned by several endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Render an API timestamp as a short date, falling back to the raw value
pub fn format_date(raw: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .or_else(|_| {
            chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
                .map(|dt| dt.format("%Y-%m-%d").to_string())
        })
        .unwrap_or_else(|_| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn link_deserializes_from_api_names() {
        let link: Link = serde_json::from_value(json!({
            "id": 7,
            "enlace_largo": "https://example.com/a/very/long/path",
            "enlace_acortado": "https://wee.example/wee/Ab3dE9",
            "cod_enlace": "Ab3dE9",
            "created_at": "2025-05-01T10:00:00Z",
            "updated_at": "2025-05-01T10:00:00Z",
            "usuario_id": 3
        }))
        .unwrap();

        assert_eq!(link.id, 7);
        assert_eq!(link.original_url, "https://example.com/a/very/long/path");
        assert_eq!(link.code(), "Ab3dE9");
        assert_eq!(link.owner_id, Some(3));
    }

    #[test]
    fn link_code_falls_back_to_short_url() {
        let link: Link = serde_json::from_value(json!({
            "id": 1,
            "enlace_largo": "https://example.com",
            "enlace_acortado": "https://wee.example/wee/zzTop1"
        }))
        .unwrap();

        assert_eq!(link.code(), "zzTop1");
    }

    #[test]
    fn new_link_omits_missing_owner() {
        let body = serde_json::to_value(NewLink {
            original_url: "https://example.com".into(),
            short_url: "http://localhost/wee/abc123".into(),
            short_code: "abc123".into(),
            owner_id: None,
        })
        .unwrap();

        assert_eq!(
            body,
            json!({
                "enlace_largo": "https://example.com",
                "enlace_acortado": "http://localhost/wee/abc123",
                "cod_enlace": "abc123"
            })
        );
    }

    #[test]
    fn ticket_list_tolerates_missing_tickets() {
        let list: TicketList = serde_json::from_value(json!({ "total": 0 })).unwrap();
        assert!(list.tickets.is_empty());

        let list: TicketList = serde_json::from_value(json!({ "tickets": "nope" })).unwrap();
        assert!(list.tickets.is_empty());
    }

    #[test]
    fn ticket_list_parses_statuses() {
        let list: TicketList = serde_json::from_value(json!({
            "tickets": [{
                "id": 4,
                "subject": "Broken link",
                "message": "It 404s",
                "status": "in_progress",
                "priority": "urgent",
                "created_at": "2025-01-01T00:00:00Z",
                "updated_at": "2025-01-02T00:00:00Z",
                "user_id": 9,
                "assigned_to": null,
                "user_email": "ana@example.com",
                "assigned_admin_email": null
            }]
        }))
        .unwrap();

        let ticket = &list.tickets[0];
        assert_eq!(ticket.status, TicketStatus::InProgress);
        assert_eq!(ticket.priority, TicketPriority::Urgent);
        assert!(ticket.was_updated());
    }

    #[test]
    fn ticket_status_round_trips_wire_value() {
        for status in TicketStatus::ALL {
            assert_eq!(TicketStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(TicketStatus::parse("pending"), None);
    }

    #[test]
    fn user_search_is_case_insensitive() {
        let user = User {
            id: 1,
            username: "JuanPerez".into(),
            email: "juan@Example.com".into(),
            role: "user".into(),
            created_at: String::new(),
            updated_at: String::new(),
        };

        assert!(user.matches(""));
        assert!(user.matches("juanp"));
        assert!(user.matches("EXAMPLE"));
        assert!(!user.matches("ana"));
    }

    #[test]
    fn profile_accepts_both_name_fields() {
        let spanish: UserProfile =
            serde_json::from_value(json!({ "id": 2, "nombre_usuario": "ana" })).unwrap();
        let english: UserProfile = serde_json::from_value(json!({ "username": "ana" })).unwrap();
        assert_eq!(spanish.username, "ana");
        assert_eq!(english.username, "ana");
    }

    #[test]
    fn format_date_handles_known_and_unknown_formats() {
        assert_eq!(format_date("2025-03-04T12:30:00Z"), "2025-03-04");
        assert_eq!(format_date("2025-03-04 12:30:00"), "2025-03-04");
        assert_eq!(format_date("yesterday"), "yesterday");
    }
}
