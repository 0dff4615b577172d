//! Chat list page at `/chats`, the signed-in landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetches the chat inventory from the external API once hydrated and owns
//! the logout action, which is the session's teardown boundary.

#[cfg(test)]
#[path = "chats_test.rs"]
mod chats_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::RuntimeConfig;
use crate::net::types::Chat;
use crate::pages::login::signed_out_path;
use crate::state::listing::Listing;
use crate::state::session::SessionContext;
use crate::util::cookie::clear_session_cookie;

pub fn chat_href(chat: &Chat) -> String {
    format!("/chats/{}", chat.id)
}

/// Group chats first, then by name, so the list order is stable across fetches.
pub fn sort_chats(chats: &mut [Chat]) {
    chats.sort_by(|a, b| b.is_group.cmp(&a.is_group).then_with(|| a.name.cmp(&b.name)));
}

#[component]
pub fn ChatsPage() -> impl IntoView {
    let config = expect_context::<RuntimeConfig>();
    let session = SessionContext::expect();
    let navigate = use_navigate();
    let chats = RwSignal::new(Listing::<Chat>::Loading);

    #[cfg(feature = "hydrate")]
    {
        let api_url = config.api_url.clone();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_chats(&api_url).await.map(|mut list| {
                sort_chats(&mut list);
                list
            });
            chats.set(Listing::from_result(result));
        });
    }

    let on_logout = move |_| {
        clear_session_cookie();
        session.clear();
        let navigate = navigate.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Err(e) = crate::net::api::end_session().await {
                log::warn!("server logout failed: {e}");
            }
            navigate(&signed_out_path(), NavigateOptions::default());
        });
        #[cfg(not(feature = "hydrate"))]
        navigate(&signed_out_path(), NavigateOptions::default());
    };

    let greeting = move || session.user().map(|user| format!("Signed in as {}", user.name)).unwrap_or_default();
    let status = move || chats.with(|listing| listing.status_message(&config));

    view! {
        <div class="chats-page">
            <header class="chats-page__header">
                <h1>"Chats"</h1>
                <span class="chats-page__user">{greeting}</span>
                <button class="chats-page__logout" on:click=on_logout>
                    "Log out"
                </button>
            </header>
            {move || status().map(|message| view! { <p class="chats-page__status">{message}</p> })}
            <ul class="chat-list">
                <For
                    each=move || chats.with(|listing| listing.items().to_vec())
                    key=|chat: &Chat| chat.id
                    children=move |chat| {
                        let href = chat_href(&chat);
                        let Chat { name, avatar, is_group, .. } = chat;
                        let avatar = (!avatar.is_empty()).then_some(avatar);
                        view! {
                            <li class="chat-list__item">
                                <a href=href>
                                    {avatar.map(|src| view! { <img class="chat-list__avatar" src=src alt=""/> })}
                                    <span class="chat-list__name">{name}</span>
                                    {is_group.then(|| view! { <span class="chat-list__badge">"Group"</span> })}
                                </a>
                            </li>
                        }
                    }
                />
            </ul>
        </div>
    }
}
