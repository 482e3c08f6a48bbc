use std::sync::Arc;

use api_client::{ApiConfig, MemoryTokenStore, RolesClient, TokenStore};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common;

/// Mock roles endpoint that reports back the Authorization header it saw.
fn auth_echo_router() -> Router {
    Router::new().route(
        "/accounts/roles/",
        get(|headers: HeaderMap| async move {
            let auth = headers
                .get("authorization")
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);
            Json(json!({ "authorization": auth }))
        }),
    )
}

#[tokio::test]
async fn get_roles_returns_body_verbatim() {
    let roles_body = json!([
        {"id": 1, "name": "admin"},
        {"id": 2, "name": "staff"},
        {"id": 3, "name": "delivery"}
    ]);
    let response = roles_body.clone();
    let app = Router::new().route(
        "/accounts/roles/",
        get(move || async move { Json(response) }),
    );
    let api = common::serve(app).await;

    let tokens = Arc::new(MemoryTokenStore::new());
    tokens.set("tok");
    let client = RolesClient::new(&ApiConfig::new(&api.base_url), tokens);

    assert_eq!(client.get_roles().await.unwrap(), roles_body);
}

#[tokio::test]
async fn get_roles_attaches_token_current_at_call_time() {
    let api = common::serve(auth_echo_router()).await;

    let tokens = Arc::new(MemoryTokenStore::new());
    let client = RolesClient::new(&ApiConfig::new(&api.base_url), tokens.clone());

    tokens.set("token-one");
    let first = client.get_roles().await.unwrap();
    assert_eq!(first["authorization"], json!("Bearer token-one"));

    // Swapping the stored token between calls must be reflected immediately
    tokens.set("token-two");
    let second = client.get_roles().await.unwrap();
    assert_eq!(second["authorization"], json!("Bearer token-two"));
}

#[tokio::test]
async fn get_roles_without_token_sends_no_auth_header() {
    let api = common::serve(auth_echo_router()).await;

    let tokens = Arc::new(MemoryTokenStore::new());
    let client = RolesClient::new(&ApiConfig::new(&api.base_url), tokens);

    let body = client.get_roles().await.unwrap();
    assert_eq!(body["authorization"], Value::Null);
}

#[tokio::test]
async fn get_roles_passes_json_error_body_through() {
    let error_body = json!({"detail": "Authentication credentials were not provided."});
    let response = error_body.clone();
    let app = Router::new().route(
        "/accounts/roles/",
        get(move || async move { (StatusCode::UNAUTHORIZED, Json(response)) }),
    );
    let api = common::serve(app).await;

    let tokens = Arc::new(MemoryTokenStore::new());
    let client = RolesClient::new(&ApiConfig::new(&api.base_url), tokens);

    let err = client.get_roles().await.unwrap_err();
    assert_eq!(err.status, Some(401));
    assert_eq!(err.body, error_body);
}

#[tokio::test]
async fn get_roles_normalizes_non_json_failures() {
    let app = Router::new().route(
        "/accounts/roles/",
        get(|| async { (StatusCode::BAD_GATEWAY, "upstream down") }),
    );
    let api = common::serve(app).await;

    let tokens = Arc::new(MemoryTokenStore::new());
    tokens.set("tok");
    let client = RolesClient::new(&ApiConfig::new(&api.base_url), tokens);

    let err = client.get_roles().await.unwrap_err();
    assert_eq!(err.status, Some(502));
    assert_eq!(err.body, json!({"detail": "Unknown error fetching roles"}));

    // Transport failures normalize the same way
    let tokens = Arc::new(MemoryTokenStore::new());
    let client = RolesClient::new(&ApiConfig::new(common::unreachable_base_url()), tokens);
    let err = client.get_roles().await.unwrap_err();
    assert_eq!(err.status, None);
    assert_eq!(err.body, json!({"detail": "Unknown error fetching roles"}));
}
