//! Wire DTOs for the external chat API.
//!
//! DESIGN
//! ======
//! These are transfer shapes only. They mirror the backend's camelCase JSON
//! so serde round-trips stay lossless; nothing in this crate creates or
//! mutates them beyond decoding.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use super::api::ApiError;

/// A chat participant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Backend user identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Avatar image URL, if the user has one.
    #[serde(default)]
    pub avatar: Option<String>,
}

impl User {
    /// Structural checks a decoded user must pass before it is trusted as a
    /// session identity.
    ///
    /// # Errors
    ///
    /// Returns a short reason when the id is not positive or the name is blank.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.id <= 0 {
            return Err("user id must be positive");
        }
        if self.name.trim().is_empty() {
            return Err("user name must not be blank");
        }
        Ok(())
    }

    /// Up to two uppercase initials for avatar placeholders.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// One chat message. Its parent chat is implied by the endpoint it came from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: i64,
    /// Author, embedded in full.
    pub user: User,
    pub content: String,
    /// ISO 8601 creation timestamp as sent by the backend.
    pub created_at: String,
}

/// A conversation thread.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chat {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub avatar: String,
    /// Group chats have more than two participants.
    pub is_group: bool,
}

/// Generic envelope every backend response is wrapped in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T = serde_json::Value> {
    pub ok: bool,
    pub message: String,
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// Successful envelope around `data`.
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self { ok: true, message: message.into(), data }
    }

    /// Unwrap the payload, surfacing `ok == false` as [`ApiError::Rejected`].
    ///
    /// # Errors
    ///
    /// Returns the backend's message when the envelope reports failure.
    pub fn into_result(self) -> Result<T, ApiError> {
        if self.ok { Ok(self.data) } else { Err(ApiError::Rejected(self.message)) }
    }
}

impl ApiResponse<serde_json::Value> {
    /// Failure envelope with a `null` payload.
    pub fn failure(message: impl Into<String>) -> Self {
        Self { ok: false, message: message.into(), data: serde_json::Value::Null }
    }
}
