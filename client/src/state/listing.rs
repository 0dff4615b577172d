//! Load state for API-backed lists (chats, messages).

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

use crate::config::RuntimeConfig;
use crate::net::api::ApiError;

/// Progress of one list fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Listing<T> {
    Loading,
    Loaded(Vec<T>),
    Failed(ApiError),
}

impl<T> Default for Listing<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> Listing<T> {
    pub fn from_result(result: Result<Vec<T>, ApiError>) -> Self {
        match result {
            Ok(items) => Self::Loaded(items),
            Err(e) => {
                log::warn!("list fetch failed: {e}");
                Self::Failed(e)
            }
        }
    }

    /// Loaded items, empty while loading or after a failure.
    pub fn items(&self) -> &[T] {
        match self {
            Self::Loaded(items) => items,
            _ => &[],
        }
    }

    /// Feedback line to show instead of (or above) the list, if any.
    ///
    /// Backend rejections carry their own message; every other failure maps
    /// onto the configured generic error.
    pub fn status_message(&self, config: &RuntimeConfig) -> Option<String> {
        match self {
            Self::Loading => None,
            Self::Loaded(items) if items.is_empty() => Some(config.no_results_message.clone()),
            Self::Loaded(_) => None,
            Self::Failed(ApiError::Rejected(message)) if !message.trim().is_empty() => Some(message.clone()),
            Self::Failed(_) => Some(config.error_message.clone()),
        }
    }
}
