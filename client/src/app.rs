//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::{RUNTIME_CONFIG_ELEMENT_ID, RuntimeConfig};
use crate::pages::{chat::ChatPage, chats::ChatsPage, login::LoginPage};
use crate::state::session::SessionContext;
use crate::util::auth::RouteGuard;

/// HTML shell rendered on the server for SSR + hydration.
///
/// Embeds `config` so the hydrated app starts from the same values.
pub fn shell(options: LeptosOptions, config: RuntimeConfig) -> impl IntoView {
    let config_json = config.to_script_json();
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script id=RUNTIME_CONFIG_ELEMENT_ID type="application/json" inner_html=config_json></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App config/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the session boundary: one [`SessionContext`] is created here per
/// rendered app and dropped with it.
#[component]
pub fn App(config: RuntimeConfig) -> impl IntoView {
    provide_meta_context();

    provide_context(config);
    SessionContext::provide();

    view! {
        <Title text="Chat App"/>

        <Router>
            <RouteGuard/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LoginPage/>
                <Route path=StaticSegment("chats") view=ChatsPage/>
                <Route path=(StaticSegment("chats"), ParamSegment("id")) view=ChatPage/>
            </Routes>
        </Router>
    }
}
