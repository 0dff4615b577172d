//! REST helpers for the external chat API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since the
//! backend is only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`; pages map failures onto the
//! configured `errorMessage` instead of panicking during hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Chat, Message};
#[cfg(feature = "hydrate")]
use super::types::ApiResponse;

/// Failure talking to the chat API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Request(String),

    /// The backend answered with a non-2xx status.
    #[error("request failed with status {0}")]
    Status(u16),

    /// The body was not a valid envelope for the expected payload.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// The envelope reported `ok: false`.
    #[error("{0}")]
    Rejected(String),

    /// Called outside the browser.
    #[error("not available on server")]
    Unavailable,
}

fn base(api_url: &str) -> &str {
    api_url.trim_end_matches('/')
}

/// Host route that expires the session cookie server-side.
pub const SESSION_ENDPOINT: &str = "/api/session";

pub fn chats_endpoint(api_url: &str) -> String {
    format!("{}/chats", base(api_url))
}

pub fn messages_endpoint(api_url: &str, chat_id: i64) -> String {
    format!("{}/chats/{chat_id}/messages", base(api_url))
}

/// Fetch the chats visible to the current user.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn fetch_chats(api_url: &str) -> Result<Vec<Chat>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_envelope(&chats_endpoint(api_url)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = api_url;
        Err(ApiError::Unavailable)
    }
}

/// Fetch the messages of one chat, oldest first as delivered by the backend.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn fetch_messages(api_url: &str, chat_id: i64) -> Result<Vec<Message>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_envelope(&messages_endpoint(api_url, chat_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api_url, chat_id);
        Err(ApiError::Unavailable)
    }
}

/// Ask the host to expire the `user` cookie, including an `HttpOnly` one the
/// page cannot touch.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn end_session() -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(SESSION_ENDPOINT)
            .credentials(web_sys::RequestCredentials::SameOrigin)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        let envelope: ApiResponse = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        envelope.into_result().map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
async fn get_envelope<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::get(url)
        .credentials(web_sys::RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    let envelope: ApiResponse<T> = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
    envelope.into_result()
}
