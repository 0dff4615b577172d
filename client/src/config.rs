//! Public runtime configuration shared by the server and the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host server builds this from its environment and embeds it in the SSR
//! shell as a JSON `<script>`; hydration reads the same blob back so both
//! renders see identical values.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

/// DOM id of the `<script>` element carrying the serialized config.
pub const RUNTIME_CONFIG_ELEMENT_ID: &str = "runtime-config";

pub const DEFAULT_ERROR_MESSAGE: &str = "An unknown error has occurred";
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Action has been performed successfully";
pub const DEFAULT_NO_RESULTS_MESSAGE: &str = "No results found";

/// UI feedback strings plus the base URLs of the external chat backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RuntimeConfig {
    pub error_message: String,
    pub success_message: String,
    pub no_results_message: String,
    /// Base URL of the REST API. Empty means same origin.
    pub api_url: String,
    /// Base URL of the real-time transport.
    pub ws_url: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            error_message: DEFAULT_ERROR_MESSAGE.to_owned(),
            success_message: DEFAULT_SUCCESS_MESSAGE.to_owned(),
            no_results_message: DEFAULT_NO_RESULTS_MESSAGE.to_owned(),
            api_url: String::new(),
            ws_url: String::new(),
        }
    }
}

impl RuntimeConfig {
    /// Serialize for embedding inside a `<script type="application/json">`.
    ///
    /// `<` is escaped so a value can never close the surrounding tag.
    pub fn to_script_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| "{}".to_owned())
            .replace('<', "\\u003c")
    }

    /// Parse the embedded blob, falling back to defaults on malformed input.
    pub fn from_script_json(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_else(|e| {
            log::warn!("runtime config unreadable, using defaults: {e}");
            Self::default()
        })
    }

    /// Read the config embedded by the server into the current document.
    #[cfg(feature = "hydrate")]
    pub fn from_document() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(RUNTIME_CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        match raw {
            Some(raw) => Self::from_script_json(&raw),
            None => Self::default(),
        }
    }

    /// URL of the external login flow that sets the `user` cookie.
    pub fn login_url(&self) -> String {
        format!("{}/auth/login", self.api_url.trim_end_matches('/'))
    }
}
