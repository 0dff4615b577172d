//! Route guard: cookie-backed session sync plus auth redirects.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs before every navigation (server render and client-side route change).
//! It rewrites the session slot from the persisted `user` cookie, then applies
//! two rules: signed-out visitors only see `/`, signed-in users skip `/` and
//! land on `/chats`.
//!
//! ERROR HANDLING
//! ==============
//! A cookie that fails to decode or validate is logged and treated exactly
//! like a missing cookie, so a tampered value never becomes a session.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::net::types::User;
use crate::state::session::{SessionContext, SessionState};
use crate::util::cookie::read_session_cookie;

pub const ROOT_PATH: &str = "/";
pub const HOME_PATH: &str = "/chats";

/// Why a persisted session could not be restored.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("invalid session cookie: {0}")]
    InvalidSessionCookie(String),
}

/// Outcome of guarding one navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Proceed,
    Redirect(&'static str),
}

/// Decode and validate the raw cookie value.
///
/// `None` input means no session and is not an error.
///
/// # Errors
///
/// Returns [`SessionError::InvalidSessionCookie`] when the value is not a JSON
/// user or fails [`User::validate`].
pub fn parse_session_cookie(raw: Option<&str>) -> Result<Option<User>, SessionError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let user: User =
        serde_json::from_str(raw).map_err(|e| SessionError::InvalidSessionCookie(e.to_string()))?;
    user.validate()
        .map_err(|reason| SessionError::InvalidSessionCookie(reason.to_owned()))?;
    Ok(Some(user))
}

/// Like [`parse_session_cookie`], but an invalid cookie degrades to no session.
pub fn session_user_from_cookie(raw: Option<&str>) -> Option<User> {
    parse_session_cookie(raw).unwrap_or_else(|e| {
        log::warn!("discarding session cookie: {e}");
        None
    })
}

/// Redirect policy for an already-synced session.
pub fn decide(user: Option<&User>, path: &str) -> GuardDecision {
    match (user, path == ROOT_PATH) {
        (None, false) => GuardDecision::Redirect(ROOT_PATH),
        (Some(_), true) => GuardDecision::Redirect(HOME_PATH),
        _ => GuardDecision::Proceed,
    }
}

/// Sync `state` from the cookie, then decide. The write happens on every
/// call, redirect or not.
pub fn guard_navigation(state: &mut SessionState, raw_cookie: Option<&str>, path: &str) -> GuardDecision {
    state.user = session_user_from_cookie(raw_cookie);
    decide(state.user.as_ref(), path)
}

/// Run the guard for `path` against the live session and the current cookie.
///
/// A disposed session slot cannot be written, but the policy still applies
/// to the cookie alone.
pub fn run_guard(session: SessionContext, path: &str) -> GuardDecision {
    let raw = read_session_cookie();
    session
        .update(|state| guard_navigation(state, raw.as_deref(), path))
        .unwrap_or_else(|| decide(session_user_from_cookie(raw.as_deref()).as_ref(), path))
}

/// Guards every route change under the enclosing `<Router>`.
///
/// Renders a router `<Redirect>` when the guard refuses the navigation: a
/// 302 during SSR, a client-side navigation after hydration.
#[component]
pub fn RouteGuard() -> impl IntoView {
    let session = SessionContext::expect();
    let location = use_location();

    move || {
        let path = location.pathname.get();
        match run_guard(session, &path) {
            GuardDecision::Proceed => ().into_any(),
            GuardDecision::Redirect(to) => {
                log::debug!("route guard: {path} -> {to}");
                view! { <Redirect path=to/> }.into_any()
            }
        }
    }
}
