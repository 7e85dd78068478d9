//! Backend relay for `/api`, `/media`, and `/auth`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser only talks to this host. REST calls arrive as `/api/...` and
//! are forwarded with the prefix removed; media files and the backend's
//! OAuth endpoints keep their paths. Status, headers, and body come back
//! unchanged except for hop-by-hop headers.
//!
//! ERROR HANDLING
//! ==============
//! An unreachable or failing backend answers `502 Bad Gateway`. Oversized
//! request bodies are rejected with `413` by the body-limit layer before the
//! handler runs.

#[cfg(test)]
#[path = "relay_test.rs"]
mod relay_test;

use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Prefix the storefront puts in front of backend REST paths.
pub const API_PREFIX: &str = "/api";

const HOP_BY_HOP: [&str; 10] = [
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
    "host",
    "content-length",
];

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("HTTP client build failed: {0}")]
    ClientBuild(String),
    #[error("backend request failed: {0}")]
    Upstream(String),
    #[error("backend response unreadable: {0}")]
    UpstreamBody(String),
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_GATEWAY, self.to_string()).into_response()
    }
}

/// Backend URL for a storefront request path.
pub fn upstream_url(backend: &str, path: &str, query: Option<&str>) -> String {
    let path = match path.strip_prefix(API_PREFIX) {
        Some(rest) if rest.starts_with('/') => rest,
        _ => path,
    };
    match query.filter(|q| !q.is_empty()) {
        Some(query) => format!("{backend}{path}?{query}"),
        None => format!("{backend}{path}"),
    }
}

pub fn is_hop_by_hop(name: &str) -> bool {
    HOP_BY_HOP.iter().any(|h| name.eq_ignore_ascii_case(h))
}

/// Copy of `headers` without hop-by-hop entries.
pub fn forwardable(headers: &HeaderMap) -> HeaderMap {
    headers
        .iter()
        .filter(|(name, _)| !is_hop_by_hop(name.as_str()))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}

pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    match relay(&state, method, &uri, &headers, body).await {
        Ok(response) => response,
        Err(err) => {
            tracing::warn!(error = %err, path = %uri.path(), "relay failed");
            err.into_response()
        }
    }
}

async fn relay(
    state: &AppState,
    method: Method,
    uri: &Uri,
    headers: &HeaderMap,
    body: Bytes,
) -> Result<Response, RelayError> {
    let url = upstream_url(&state.config.backend_url, uri.path(), uri.query());
    let upstream = state
        .http
        .request(method.clone(), &url)
        .headers(forwardable(headers))
        .body(body)
        .send()
        .await
        .map_err(|e| RelayError::Upstream(e.to_string()))?;

    let status = upstream.status();
    let headers = forwardable(upstream.headers());
    let bytes = upstream
        .bytes()
        .await
        .map_err(|e| RelayError::UpstreamBody(e.to_string()))?;
    tracing::debug!(%method, %url, status = status.as_u16(), "relayed");

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    Ok(response)
}
