use super::*;
use crate::config::ServerConfig;
use client::config::RuntimeConfig;

const ANN_COOKIE: &str = r#"{"id":1,"name":"Ann","avatar":null}"#;

fn test_state() -> AppState {
    AppState::new(ServerConfig { port: 0, cookie_secure: false, runtime: RuntimeConfig::default() })
}

fn jar_with(value: &str) -> CookieJar {
    CookieJar::new().add(Cookie::new(SESSION_COOKIE, value.to_owned()))
}

// =============================================================================
// session_user
// =============================================================================

#[test]
fn session_user_without_cookie_is_unauthenticated() {
    let err = session_user(&CookieJar::new()).unwrap_err();
    assert!(matches!(err, ServerError::Unauthenticated));
    assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
}

#[test]
fn session_user_with_empty_cookie_is_unauthenticated() {
    assert!(matches!(session_user(&jar_with("")), Err(ServerError::Unauthenticated)));
}

#[test]
fn session_user_decodes_valid_cookie() {
    let user = session_user(&jar_with(ANN_COOKIE)).unwrap();
    assert_eq!(user, User { id: 1, name: "Ann".to_owned(), avatar: None });
}

#[test]
fn session_user_rejects_malformed_cookie() {
    let err = session_user(&jar_with("{nope")).unwrap_err();
    assert!(matches!(err, ServerError::InvalidSession(_)));
    assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
}

// =============================================================================
// handlers
// =============================================================================

#[tokio::test]
async fn current_returns_user_envelope() {
    let Json(resp) = current(jar_with(ANN_COOKIE)).await.unwrap();
    assert!(resp.ok);
    assert_eq!(resp.data.name, "Ann");
}

#[tokio::test]
async fn current_rejects_missing_cookie_with_401() {
    let resp = current(CookieJar::new()).await.unwrap_err().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn clear_expires_session_cookie() {
    let resp = clear(State(test_state()), jar_with(ANN_COOKIE)).await.into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let set_cookie = resp
        .headers()
        .get(axum::http::header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    assert!(set_cookie.starts_with("user="), "set-cookie: {set_cookie}");
    assert!(set_cookie.contains("Max-Age=0"), "set-cookie: {set_cookie}");
}
