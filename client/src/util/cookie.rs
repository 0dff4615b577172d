//! Access to the persisted `user` session cookie.
//!
//! SYSTEM CONTEXT
//! ==============
//! The cookie is written by the external login flow as percent-encoded JSON.
//! In the browser it is read from `document.cookie`; during SSR from the
//! request's `Cookie` header. Both go through [`find_cookie`] so decoding is
//! identical on either side.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

use ::cookie::Cookie;

/// Name of the cookie carrying the serialized session user.
pub const SESSION_COOKIE: &str = "user";

/// Look up `name` in a `Cookie` header style string and percent-decode it.
///
/// Empty values count as absent.
pub fn find_cookie(header: &str, name: &str) -> Option<String> {
    Cookie::split_parse_encoded(header)
        .filter_map(Result::ok)
        .find(|c| c.name() == name)
        .map(|c| c.value_trimmed().to_owned())
        .filter(|value| !value.is_empty())
}

/// Raw (decoded) value of the session cookie for the current navigation.
pub fn read_session_cookie() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let doc = web_sys::window()?
            .document()?
            .dyn_into::<web_sys::HtmlDocument>()
            .ok()?;
        let raw = doc.cookie().ok()?;
        find_cookie(&raw, SESSION_COOKIE)
    }
    #[cfg(all(feature = "ssr", not(feature = "hydrate")))]
    {
        let parts = leptos::prelude::use_context::<http::request::Parts>()?;
        let header = parts
            .headers
            .get_all(http::header::COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .collect::<Vec<_>>()
            .join("; ");
        find_cookie(&header, SESSION_COOKIE)
    }
    #[cfg(not(any(feature = "hydrate", feature = "ssr")))]
    {
        None
    }
}

/// Expire the session cookie in the browser. No-op on the server.
pub fn clear_session_cookie() {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(doc) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok())
        else {
            return;
        };
        if let Err(e) = doc.set_cookie(&format!("{SESSION_COOKIE}=; Max-Age=0; Path=/")) {
            log::warn!("failed to expire session cookie: {e:?}");
        }
    }
}
