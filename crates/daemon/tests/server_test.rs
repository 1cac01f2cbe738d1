//! Integration tests for the web host: redirects, API proxy and static serving

use std::net::SocketAddr;

use reqwest::StatusCode;
use serde_json::json;
use tempfile::TempDir;
use tokio::net::TcpListener;
use wee_daemon::{HttpServer, Settings};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct TestServer {
    addr: SocketAddr,
    upstream: MockServer,
    _static_dir: TempDir,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn start_test_server() -> TestServer {
    let upstream = MockServer::start().await;

    let static_dir = tempfile::tempdir().unwrap();
    std::fs::write(
        static_dir.path().join("index.html"),
        "<html><body>wee app</body></html>",
    )
    .unwrap();
    std::fs::write(static_dir.path().join("app.js"), "console.log('wee');").unwrap();

    let mut settings = Settings::default();
    settings.server.host = "127.0.0.1".to_string();
    settings.server.static_dir = static_dir.path().to_string_lossy().into_owned();
    settings.api.upstream = format!("{}/api", upstream.uri());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = HttpServer::new(settings).unwrap();

    let handle = tokio::spawn(async move {
        server
            .serve(listener, std::future::pending())
            .await
            .unwrap();
    });

    TestServer {
        addr,
        upstream,
        _static_dir: static_dir,
        handle,
    }
}

fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_health() {
    let server = start_test_server().await;
    let response = client().get(server.url("/health")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), "OK");
}

#[tokio::test]
async fn test_short_link_redirects() {
    let server = start_test_server().await;

    Mock::given(method("GET"))
        .and(path("/api/links/abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "enlace_largo": "https://example.com/some/long/page",
            "enlace_acortado": "http://localhost:3000/wee/abc123",
            "cod_enlace": "abc123"
        })))
        .expect(1)
        .mount(&server.upstream)
        .await;

    let response = client().get(server.url("/wee/abc123")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response.headers()["location"],
        "https://example.com/some/long/page"
    );
}

#[tokio::test]
async fn test_unknown_short_link_is_404() {
    let server = start_test_server().await;

    Mock::given(method("GET"))
        .and(path("/api/links/nope00"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server.upstream)
        .await;

    let response = client().get(server.url("/wee/nope00")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_upstream_failure_is_502() {
    let server = start_test_server().await;

    Mock::given(method("GET"))
        .and(path("/api/links/abc123"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server.upstream)
        .await;

    let response = client().get(server.url("/wee/abc123")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_api_proxy_forwards_auth_and_query() {
    let server = start_test_server().await;

    Mock::given(method("GET"))
        .and(path("/api/usuarios"))
        .and(query_param("page", "2"))
        .and(header("authorization", "Bearer abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": 1 }])))
        .expect(1)
        .mount(&server.upstream)
        .await;

    let response = client()
        .get(server.url("/api/usuarios?page=2"))
        .header("authorization", "Bearer abc")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response.headers()["content-type"]
            .to_str()
            .unwrap()
            .starts_with("application/json")
    );
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, json!([{ "id": 1 }]));
}

#[tokio::test]
async fn test_api_proxy_forwards_body_and_status() {
    let server = start_test_server().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({ "username": "ana", "password": "x" })))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "message": "bad credentials" })),
        )
        .mount(&server.upstream)
        .await;

    let response = client()
        .post(server.url("/api/auth/login"))
        .json(&json!({ "username": "ana", "password": "x" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["message"], "bad credentials");
}

#[tokio::test]
async fn test_static_files_and_route_fallback() {
    let server = start_test_server().await;

    let asset = client().get(server.url("/app.js")).send().await.unwrap();
    assert_eq!(asset.status(), StatusCode::OK);
    assert_eq!(asset.text().await.unwrap(), "console.log('wee');");

    let route = client().get(server.url("/dashboard")).send().await.unwrap();
    assert_eq!(route.status(), StatusCode::OK);
    assert!(route.text().await.unwrap().contains("wee app"));
}

#[tokio::test]
async fn test_api_proxy_relays_redirect_and_cookies() {
    let server = start_test_server().await;

    Mock::given(method("GET"))
        .and(path("/api/auth/google"))
        .and(header("cookie", "sid=abc"))
        .respond_with(
            ResponseTemplate::new(302)
                .insert_header("location", "https://accounts.google.com/o/oauth2/auth?x=1")
                .insert_header("set-cookie", "oauth_state=xyz; Path=/; HttpOnly"),
        )
        .expect(1)
        .mount(&server.upstream)
        .await;

    let response = client()
        .get(server.url("/api/auth/google"))
        .header("cookie", "sid=abc")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response.headers()["location"],
        "https://accounts.google.com/o/oauth2/auth?x=1"
    );
    assert_eq!(
        response.headers()["set-cookie"],
        "oauth_state=xyz; Path=/; HttpOnly"
    );
}
