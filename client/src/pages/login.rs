//! Landing page at `/`, the only route open to signed-out visitors.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::config::RuntimeConfig;

/// Query flag set by the logout action.
pub(crate) const SIGNED_OUT_PARAM: &str = "signed_out";

pub(crate) fn signed_out_path() -> String {
    format!("/?{SIGNED_OUT_PARAM}=1")
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let config = expect_context::<RuntimeConfig>();
    let query = use_query_map();
    let login_url = config.login_url();
    let success_message = config.success_message.clone();

    let signed_out = move || query.with(|q| q.get(SIGNED_OUT_PARAM).is_some());

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Chat App"</h1>
                <p class="login-card__subtitle">"Sign in to see your conversations"</p>
                <Show when=signed_out>
                    <p class="login-message login-message--success">{success_message.clone()}</p>
                </Show>
                // Full page load: the login flow lives outside this app.
                <a href=login_url class="login-button" rel="external">
                    "Sign in"
                </a>
            </div>
        </div>
    }
}
