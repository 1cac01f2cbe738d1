//! Integration tests for the Wee HTTP client

#![cfg(feature = "client")]

use std::sync::{Arc, Mutex};

use serde_json::json;
use wee_core::models::{Credentials, TicketStatus};
use wee_core::session::{MemoryStorage, SESSION_KEY, SessionStorage, SessionStore};
use wee_http::client::api::{WeeClient, WeeClientBuilder};
use wee_http::client::error::ClientError;
use wee_http::client::session::{LOGIN_ROUTE, Navigator, SessionClient};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Clone, Default)]
struct RecordingNavigator {
    routes: Arc<Mutex<Vec<String>>>,
}

impl RecordingNavigator {
    fn routes(&self) -> Vec<String> {
        self.routes.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: &str) {
        self.routes.lock().unwrap().push(route.to_string());
    }
}

struct Harness {
    server: MockServer,
    storage: MemoryStorage,
    navigator: RecordingNavigator,
    client: SessionClient,
}

async fn harness() -> Harness {
    let server = MockServer::start().await;
    let storage = MemoryStorage::new();
    let navigator = RecordingNavigator::default();
    let client = SessionClient::new(
        WeeClient::new(server.uri()).unwrap(),
        SessionStore::new(storage.clone()),
        navigator.clone(),
    );
    Harness {
        server,
        storage,
        navigator,
        client,
    }
}

fn logged_in(storage: &MemoryStorage, rol: &str) {
    let session = json!({
        "token": "session-token",
        "user": { "id": 7, "username": "ana", "email": "ana@example.com", "rol": rol }
    });
    storage.set(SESSION_KEY, &session.to_string()).unwrap();
}

#[tokio::test]
async fn test_builder_requires_base_url() {
    let result = WeeClientBuilder::new().build();
    assert!(matches!(result, Err(ClientError::Configuration(_))));

    let client = WeeClientBuilder::new()
        .base_url("http://localhost:3000/api/")
        .build()
        .unwrap();
    assert_eq!(client.base_url(), "http://localhost:3000/api");
}

#[tokio::test]
async fn test_bearer_token_attached_from_session() {
    let h = harness().await;
    logged_in(&h.storage, "user");

    Mock::given(method("GET"))
        .and(path("/usuarios/7/enlaces"))
        .and(header("authorization", "Bearer session-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "usuario_id": 7,
            "total_enlaces": 1,
            "enlaces": [{
                "id": 1,
                "enlace_largo": "https://example.com/a/long/path",
                "enlace_acortado": "http://localhost:3000/wee/abc123",
                "created_at": "2024-05-01T10:00:00Z",
                "updated_at": "2024-05-01T10:00:00Z",
                "usuario_id": 7
            }]
        })))
        .expect(1)
        .mount(&h.server)
        .await;

    let links = h.client.own_links().await.unwrap();
    assert_eq!(links.links.len(), 1);
    assert_eq!(links.links[0].code(), "abc123");
}

#[tokio::test]
async fn test_no_bearer_without_session() {
    let h = harness().await;

    Mock::given(method("GET"))
        .and(path("/links/abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 3,
            "enlace_largo": "https://example.com",
            "enlace_acortado": "http://localhost:3000/wee/abc123",
            "cod_enlace": "abc123"
        })))
        .mount(&h.server)
        .await;

    let link = h.client.get_link("abc123").await.unwrap();
    assert_eq!(link.original_url, "https://example.com");

    let requests = h.server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_login_persists_session_with_token() {
    let h = harness().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({ "username": "ana", "password": "secret" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "fresh",
            "user": { "id": 7, "username": "ana", "rol": "admin" },
            "expiresIn": 3600
        })))
        .mount(&h.server)
        .await;

    let credentials = Credentials {
        username: "ana".into(),
        password: "secret".into(),
    };
    let session = h.client.login(&credentials).await.unwrap().unwrap();
    assert!(session.is_admin());
    assert!(session.issued_at.is_some());

    let stored = h.client.current_session().unwrap();
    assert_eq!(stored.token, "fresh");
    assert_eq!(stored.landing_route(), "/admin");
}

#[tokio::test]
async fn test_login_without_token_does_not_persist() {
    let h = harness().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "message": "check your mail" })),
        )
        .mount(&h.server)
        .await;

    let credentials = Credentials {
        username: "ana".into(),
        password: "secret".into(),
    };
    assert!(h.client.login(&credentials).await.unwrap().is_none());
    assert!(h.storage.get(SESSION_KEY).is_none());
}

#[tokio::test]
async fn test_unauthorized_clears_session_on_any_endpoint() {
    for (verb, route) in [
        ("GET", "/usuarios"),
        ("DELETE", "/links/4"),
        ("GET", "/admin/support"),
    ] {
        let h = harness().await;
        logged_in(&h.storage, "admin");

        Mock::given(method(verb))
            .and(path(route))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({ "message": "Token expired" })),
            )
            .mount(&h.server)
            .await;

        let err = match route {
            "/usuarios" => h.client.list_users().await.map(|_| ()).unwrap_err(),
            "/links/4" => h.client.delete_link(4).await.map(|_| ()).unwrap_err(),
            _ => h.client.list_tickets().await.map(|_| ()).unwrap_err(),
        };

        assert!(err.is_unauthorized());
        assert_eq!(err.user_message("fallback"), "Token expired");
        assert!(h.storage.get(SESSION_KEY).is_none(), "{route}");
        assert_eq!(h.navigator.routes(), vec![LOGIN_ROUTE.to_string()]);
    }
}

#[tokio::test]
async fn test_other_errors_keep_session() {
    let h = harness().await;
    logged_in(&h.storage, "admin");

    Mock::given(method("GET"))
        .and(path("/usuarios"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&h.server)
        .await;

    let err = h.client.list_users().await.unwrap_err();
    assert!(matches!(err, ClientError::ServerError { status: 500, .. }));
    assert!(h.client.current_session().is_some());
    assert!(h.navigator.routes().is_empty());
}

#[tokio::test]
async fn test_ticket_list_tolerates_missing_array() {
    let h = harness().await;
    logged_in(&h.storage, "admin");

    Mock::given(method("GET"))
        .and(path("/admin/support"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "tickets": null })))
        .mount(&h.server)
        .await;

    assert!(h.client.list_tickets().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_ticket_status_sends_status() {
    let h = harness().await;
    logged_in(&h.storage, "admin");

    Mock::given(method("PUT"))
        .and(path("/admin/support/12"))
        .and(body_json(json!({ "status": "in_progress" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "updated" })))
        .expect(1)
        .mount(&h.server)
        .await;

    let response = h
        .client
        .update_ticket_status(12, TicketStatus::InProgress)
        .await
        .unwrap();
    assert_eq!(response.message.as_deref(), Some("updated"));
}

#[tokio::test]
async fn test_shorten_posts_generated_code() {
    let h = harness().await;
    logged_in(&h.storage, "user");

    Mock::given(method("POST"))
        .and(path("/links"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&h.server)
        .await;

    let link = h
        .client
        .shorten("  https://example.com/very/long  ", "http://localhost:3000")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(link.short_code.len(), 6);
    assert_eq!(
        link.short_url,
        format!("http://localhost:3000/wee/{}", link.short_code)
    );

    let requests = h.server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["enlace_largo"], "https://example.com/very/long");
    assert_eq!(body["cod_enlace"], link.short_code.as_str());
    assert_eq!(body["usuario_id"], 7);
}

#[tokio::test]
async fn test_shorten_ignores_blank_input() {
    let h = harness().await;
    assert!(h.client.shorten("   ", "http://x").await.unwrap().is_none());
    assert!(h.server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_forgot_password_and_google_url() {
    let h = harness().await;

    Mock::given(method("POST"))
        .and(path("/auth/forgot-password"))
        .and(body_json(json!({ "email": "ana@example.com" })))
        .respond_with(ResponseTemplate::new(200))
        .mount(&h.server)
        .await;

    let response = h.client.forgot_password("ana@example.com").await.unwrap();
    assert!(response.message.is_none());
    assert_eq!(
        h.client.google_login_url(),
        format!("{}/auth/google", h.server.uri())
    );
}

#[tokio::test]
async fn test_logout_goes_home() {
    let h = harness().await;
    logged_in(&h.storage, "user");

    h.client.logout();
    assert!(h.client.current_session().is_none());
    assert_eq!(h.navigator.routes(), vec!["/".to_string()]);
}

#[tokio::test]
async fn test_delete_link_sends_bearer_delete() {
    let h = harness().await;
    logged_in(&h.storage, "user");

    Mock::given(method("DELETE"))
        .and(path("/links/4"))
        .and(header("authorization", "Bearer session-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "deleted" })))
        .expect(1)
        .mount(&h.server)
        .await;

    let response = h.client.delete_link(4).await.unwrap();
    assert_eq!(response.message.as_deref(), Some("deleted"));
    assert!(h.client.current_session().is_some());
    assert!(h.navigator.routes().is_empty());
}

#[tokio::test]
async fn test_delete_link_failure_surfaces_server_message() {
    let h = harness().await;
    logged_in(&h.storage, "user");

    Mock::given(method("DELETE"))
        .and(path("/links/99"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "message": "Link not found" })),
        )
        .mount(&h.server)
        .await;

    let err = h.client.delete_link(99).await.unwrap_err();
    assert!(matches!(err, ClientError::NotFound(_)));
    assert_eq!(err.user_message("Could not delete"), "Link not found");
    assert!(h.client.current_session().is_some());
}

#[tokio::test]
async fn test_list_and_delete_users() {
    let h = harness().await;
    logged_in(&h.storage, "admin");

    Mock::given(method("GET"))
        .and(path("/usuarios"))
        .and(header("authorization", "Bearer session-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "username": "ana", "email": "ana@example.com", "rol": "admin" },
            { "id": 2, "username": "luis", "email": "luis@example.com", "rol": "user" }
        ])))
        .expect(1)
        .mount(&h.server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/usuarios/2"))
        .and(header("authorization", "Bearer session-token"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&h.server)
        .await;

    let users = h.client.list_users().await.unwrap();
    assert_eq!(users.len(), 2);
    assert!(users[0].is_admin());
    assert_eq!(users[1].email, "luis@example.com");

    let response = h.client.delete_user(2).await.unwrap();
    assert!(response.message.is_none());
}

#[tokio::test]
async fn test_delete_user_forbidden_keeps_session() {
    let h = harness().await;
    logged_in(&h.storage, "user");

    Mock::given(method("DELETE"))
        .and(path("/usuarios/2"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({ "error": "Admins only" })))
        .mount(&h.server)
        .await;

    let err = h.client.delete_user(2).await.unwrap_err();
    assert!(matches!(err, ClientError::Forbidden(_)));
    assert_eq!(err.user_message("Could not delete"), "Admins only");
    assert!(h.client.current_session().is_some());
    assert!(h.navigator.routes().is_empty());
}

#[tokio::test]
async fn test_delete_user_unauthorized_tears_session_down() {
    let h = harness().await;
    logged_in(&h.storage, "admin");

    Mock::given(method("DELETE"))
        .and(path("/usuarios/2"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&h.server)
        .await;

    let err = h.client.delete_user(2).await.unwrap_err();
    assert!(err.is_unauthorized());
    assert!(h.storage.get(SESSION_KEY).is_none());
    assert_eq!(h.navigator.routes(), vec![LOGIN_ROUTE.to_string()]);
}

#[tokio::test]
async fn test_user_links_and_profile_for_admin_view() {
    let h = harness().await;
    logged_in(&h.storage, "admin");

    Mock::given(method("GET"))
        .and(path("/usuarios/12/enlaces"))
        .and(header("authorization", "Bearer session-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_enlaces": 0,
            "enlaces": []
        })))
        .expect(1)
        .mount(&h.server)
        .await;

    Mock::given(method("GET"))
        .and(path("/usuarios/12"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "id": 12, "nombre_usuario": "marta" })),
        )
        .expect(1)
        .mount(&h.server)
        .await;

    let links = h.client.user_links(12).await.unwrap();
    assert!(links.links.is_empty());
    assert_eq!(links.total_enlaces, Some(0));

    let profile = h.client.user_profile(12).await.unwrap();
    assert_eq!(profile.username, "marta");
}

#[tokio::test]
async fn test_own_links_without_session_skips_request() {
    let h = harness().await;

    let err = h.client.own_links().await.unwrap_err();
    assert!(matches!(err, ClientError::AuthenticationFailed(_)));
    assert!(h.server.received_requests().await.unwrap().is_empty());
    assert!(h.navigator.routes().is_empty());
}
