use api_client::{ApiConfig, AuthClient};
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common;

fn client_for(base_url: &str) -> AuthClient {
    AuthClient::new(&ApiConfig::new(base_url))
}

#[tokio::test]
async fn login_resolves_with_exact_success_body() {
    let success_body = json!({
        "access": "tok-abc",
        "refresh": "tok-def",
        "user": {"id": 1, "display_name": "Amina", "email": "amina@shop.test", "role": "admin"}
    });
    let response = success_body.clone();
    let app = Router::new().route(
        "/api/accounts/login/",
        post(move || async move { Json(response) }),
    );
    let api = common::serve(app).await;

    let result = client_for(&api.base_url).login("amina", "pw").await;

    assert_eq!(result.unwrap(), success_body);
}

#[tokio::test]
async fn login_sends_credential_pair_as_json() {
    let app = Router::new().route(
        "/api/accounts/login/",
        post(|Json(body): Json<Value>| async move { Json(body) }),
    );
    let api = common::serve(app).await;

    let echoed = client_for(&api.base_url)
        .login("amina", "s3cret")
        .await
        .unwrap();

    assert_eq!(echoed, json!({"username": "amina", "password": "s3cret"}));
}

#[tokio::test]
async fn login_rejects_with_exact_json_error_body() {
    let error_body = json!({"detail": "Invalid username or password"});
    let response = error_body.clone();
    let app = Router::new().route(
        "/api/accounts/login/",
        post(move || async move { (StatusCode::UNAUTHORIZED, Json(response)) }),
    );
    let api = common::serve(app).await;

    let err = client_for(&api.base_url)
        .login("amina", "wrong")
        .await
        .unwrap_err();

    assert_eq!(err.status, Some(401));
    assert_eq!(err.body, error_body);
}

#[tokio::test]
async fn login_normalizes_non_json_error_body() {
    let app = Router::new().route(
        "/api/accounts/login/",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "<html>boom</html>") }),
    );
    let api = common::serve(app).await;

    let err = client_for(&api.base_url)
        .login("amina", "pw")
        .await
        .unwrap_err();

    assert_eq!(err.status, Some(500));
    assert_eq!(err.body, json!({"detail": "Unknown error during login"}));
}

#[tokio::test]
async fn login_normalizes_transport_failure() {
    let err = client_for(&common::unreachable_base_url())
        .login("amina", "pw")
        .await
        .unwrap_err();

    assert_eq!(err.status, None);
    assert_eq!(err.body, json!({"detail": "Unknown error during login"}));
}

#[tokio::test]
async fn login_field_error_bodies_pass_through_unmodified() {
    // DRF-style per-field validation payload, no top-level detail
    let error_body = json!({"username": ["This field may not be blank."]});
    let response = error_body.clone();
    let app = Router::new().route(
        "/api/accounts/login/",
        post(move || async move { (StatusCode::BAD_REQUEST, Json(response)) }),
    );
    let api = common::serve(app).await;

    let err = client_for(&api.base_url).login("", "pw").await.unwrap_err();

    assert_eq!(err.status, Some(400));
    assert_eq!(err.body, error_body);
}
