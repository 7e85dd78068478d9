use axum::Router;
use axum::routing::get;

use super::*;
use crate::config::ServerConfig;

fn config(backend_url: String) -> ServerConfig {
    ServerConfig { port: 0, backend_url, body_limit_bytes: 1024, upstream_timeout_secs: 5 }
}

async fn spawn_backend(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

// =============================================================
// URL / header helpers
// =============================================================

#[test]
fn api_prefix_is_stripped() {
    assert_eq!(
        upstream_url("http://backend", "/api/shoeDetails/", Some("page=2&ordering=-id")),
        "http://backend/shoeDetails/?page=2&ordering=-id"
    );
    assert_eq!(upstream_url("http://backend", "/api/login/", None), "http://backend/login/");
}

#[test]
fn media_and_auth_paths_are_kept() {
    assert_eq!(upstream_url("http://backend", "/media/shoes/a.png", None), "http://backend/media/shoes/a.png");
    assert_eq!(
        upstream_url("http://backend", "/auth/api/login/google/", Some("code=x")),
        "http://backend/auth/api/login/google/?code=x"
    );
}

#[test]
fn lookalike_prefix_is_not_stripped() {
    assert_eq!(upstream_url("http://backend", "/apiary/", Some("")), "http://backend/apiary/");
}

#[test]
fn hop_by_hop_headers_are_dropped() {
    let mut headers = HeaderMap::new();
    headers.insert("authorization", "Token abc".parse().unwrap());
    headers.insert("connection", "keep-alive".parse().unwrap());
    headers.insert("Host", "storefront".parse().unwrap());
    let kept = forwardable(&headers);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept.get("authorization").unwrap(), "Token abc");
    assert!(is_hop_by_hop("Transfer-Encoding"));
    assert!(!is_hop_by_hop("content-type"));
}

// =============================================================
// Forwarding
// =============================================================

#[tokio::test]
async fn forwards_request_and_returns_backend_response() {
    let backend = Router::new().route(
        "/shoeDetails/",
        get(|headers: HeaderMap, uri: Uri| async move {
            let auth = headers.get("authorization").and_then(|v| v.to_str().ok()).unwrap_or("").to_owned();
            (StatusCode::OK, format!("{auth}|{}", uri.query().unwrap_or("")))
        }),
    );
    let state = AppState::new(config(spawn_backend(backend).await)).unwrap();

    let mut headers = HeaderMap::new();
    headers.insert("authorization", "Token abc".parse().unwrap());
    let response = forward(
        State(state),
        Method::GET,
        "/api/shoeDetails/?page=3".parse().unwrap(),
        headers,
        Bytes::new(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
    assert_eq!(&body[..], b"Token abc|page=3");
}

#[tokio::test]
async fn backend_errors_pass_through() {
    let backend = Router::new().route(
        "/login/",
        axum::routing::post(|| async { (StatusCode::BAD_REQUEST, r#"{"non_field_errors":["nope"]}"#) }),
    );
    let state = AppState::new(config(spawn_backend(backend).await)).unwrap();

    let response =
        forward(State(state), Method::POST, "/api/login/".parse().unwrap(), HeaderMap::new(), Bytes::from("{}")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn redirects_are_not_followed() {
    let backend = Router::new().route(
        "/auth/api/login/google/",
        get(|| async { axum::response::Redirect::temporary("/google-redirect-handler?token=t") }),
    );
    let state = AppState::new(config(spawn_backend(backend).await)).unwrap();

    let response = forward(
        State(state),
        Method::GET,
        "/auth/api/login/google/".parse().unwrap(),
        HeaderMap::new(),
        Bytes::new(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers().get("location").unwrap(), "/google-redirect-handler?token=t");
}

#[tokio::test]
async fn unreachable_backend_is_bad_gateway() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let state = AppState::new(config(format!("http://{addr}"))).unwrap();

    let response =
        forward(State(state), Method::GET, "/api/shoeDetails/1/".parse().unwrap(), HeaderMap::new(), Bytes::new())
            .await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}
