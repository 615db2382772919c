//! JSON listing endpoints

use actix_web::http::StatusCode;
use actix_web::test::{TestRequest, call_service, read_body_json};
use serde_json::{Value, json};

#[actix_web::test]
async fn test_users_endpoint_returns_seeded_users() {
    let (service, _store, _dir) = vulnerable_app::service!();

    let req = TestRequest::get().uri("/api/users").to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = read_body_json(resp).await;
    assert_eq!(
        body,
        json!([
            {"id": 1, "username": "admin", "email": "admin@example.com"},
            {"id": 2, "username": "user1", "email": "user1@example.com"},
        ])
    );
}

#[actix_web::test]
async fn test_users_endpoint_never_exposes_passwords() {
    let (service, _store, _dir) = vulnerable_app::service!();

    let req = TestRequest::get().uri("/api/users").to_request();
    let resp = call_service(&service, req).await;

    let body: Vec<Value> = read_body_json(resp).await;
    for user in body {
        let keys: Vec<_> = user.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys.len(), 3);
        assert!(user.get("password").is_none());
    }
}

#[actix_web::test]
async fn test_posts_endpoint_returns_seeded_posts() {
    let (service, _store, _dir) = vulnerable_app::service!();

    let req = TestRequest::get().uri("/api/posts").to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = read_body_json(resp).await;
    assert_eq!(
        body,
        json!([
            {"id": 1, "title": "Welcome", "content": "This is a vulnerable application for testing"},
            {"id": 2, "title": "Test Post", "content": "This is a test post"},
        ])
    );
}

#[actix_web::test]
async fn test_listing_fails_with_server_error_when_store_is_gone() {
    let (service, _store, dir) = vulnerable_app::service!();

    // Make the store path unopenable by replacing the file with a directory
    let path = dir.path().join("vulnerable.db");
    std::fs::remove_file(&path).unwrap();
    std::fs::create_dir(&path).unwrap();

    let req = TestRequest::get().uri("/api/users").to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = read_body_json(resp).await;
    assert_eq!(body, json!({"error": "Internal server error"}));
}

#[actix_web::test]
async fn test_openapi_document_is_served() {
    let (service, _store, _dir) = vulnerable_app::service!();

    let req = TestRequest::get().uri("/api.json").to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = read_body_json(resp).await;
    assert!(body["openapi"].as_str().unwrap().starts_with("3."));
    assert!(body["paths"]["/api/users"].is_object());
    assert!(body["paths"]["/login"]["post"].is_object());
}
