//! Request handlers: short-link redirects, the API proxy and health

use axum::body::Bytes;
use axum::extract::{Path, RawQuery, State};
use axum::http::{HeaderMap, Method, StatusCode, header};
use axum::response::{IntoResponse, Response};
use tracing::debug;
use wee_core::models::Link;

use crate::error::{DaemonError, Result};
use crate::server::AppState;

/// Request headers passed through to the REST API
const FORWARDED_HEADERS: [header::HeaderName; 4] = [
    header::AUTHORIZATION,
    header::CONTENT_TYPE,
    header::ACCEPT,
    header::COOKIE,
];

/// Connection-scoped response headers that must not be relayed
const HOP_BY_HOP_HEADERS: [header::HeaderName; 8] = [
    header::CONNECTION,
    header::CONTENT_LENGTH,
    header::PROXY_AUTHENTICATE,
    header::PROXY_AUTHORIZATION,
    header::TE,
    header::TRAILER,
    header::TRANSFER_ENCODING,
    header::UPGRADE,
];

/// Upstream response headers worth relaying to the browser
fn relayed_headers(upstream: &HeaderMap) -> HeaderMap {
    let mut relayed = HeaderMap::with_capacity(upstream.len());
    for (name, value) in upstream {
        if HOP_BY_HOP_HEADERS.contains(name) || name.as_str() == "keep-alive" {
            continue;
        }
        relayed.append(name.clone(), value.clone());
    }
    relayed
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "OK"
}

/// `GET /wee/{code}`: answer `302 Found` pointing at the long URL
pub async fn resolve_short_link(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Response> {
    let url = format!("{}/links/{code}", state.settings.upstream_base());
    let response = state.http.get(&url).send().await?;

    let status = response.status();
    if status == StatusCode::NOT_FOUND {
        return Err(DaemonError::LinkNotFound(code));
    }
    if !status.is_success() {
        return Err(DaemonError::UpstreamStatus(status.as_u16()));
    }

    let link: Link = response.json().await?;
    debug!("Resolved {code} to {}", link.original_url);
    Ok((StatusCode::FOUND, [(header::LOCATION, link.original_url)]).into_response())
}

/// `ANY /api/{*path}`: forward to the REST API and relay its answer
pub async fn proxy_api(
    State(state): State<AppState>,
    Path(path): Path<String>,
    method: Method,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response> {
    let mut url = format!("{}/{}", state.settings.upstream_base(), path);
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        url.push('?');
        url.push_str(&query);
    }
    debug!("Proxying {method} {url}");

    let mut request = state.http.request(method, &url);
    for name in FORWARDED_HEADERS {
        if let Some(value) = headers.get(&name) {
            request = request.header(name, value.clone());
        }
    }
    if !body.is_empty() {
        request = request.body(body);
    }

    let upstream = request.send().await?;
    let status = upstream.status();
    let relayed = relayed_headers(upstream.headers());
    let bytes = upstream.bytes().await?;

    Ok((status, relayed, bytes).into_response())
}
