//! Session routes: inspect and clear the cookie-backed session.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use client::net::types::{ApiResponse, User};
use client::util::auth::parse_session_cookie;
use client::util::cookie::SESSION_COOKIE;
use time::Duration;

use crate::error::ServerError;
use crate::state::AppState;

/// Validated user from the request's session cookie.
pub(crate) fn session_user(jar: &CookieJar) -> Result<User, ServerError> {
    let raw = jar.get(SESSION_COOKIE).map(Cookie::value).filter(|v| !v.is_empty());
    parse_session_cookie(raw)?.ok_or(ServerError::Unauthenticated)
}

/// `GET /api/session`: current user from the `user` cookie.
pub async fn current(jar: CookieJar) -> Result<Json<ApiResponse<User>>, ServerError> {
    let user = session_user(&jar).inspect_err(|e| {
        if matches!(e, ServerError::InvalidSession(_)) {
            tracing::warn!(error = %e, "rejected session cookie");
        }
    })?;
    Ok(Json(ApiResponse::success("", user)))
}

/// `DELETE /api/session`: expire the `user` cookie.
pub async fn clear(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let cookie = Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .same_site(SameSite::Lax)
        .secure(state.config.cookie_secure)
        .max_age(Duration::ZERO);

    tracing::info!("session cleared");
    (
        StatusCode::OK,
        jar.add(cookie),
        Json(ApiResponse::success(state.config.runtime.success_message.clone(), serde_json::Value::Null)),
    )
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
