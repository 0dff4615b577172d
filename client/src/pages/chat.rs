//! Single conversation page at `/chats/:id`.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::config::RuntimeConfig;
use crate::net::types::{Message, User};
use crate::state::listing::Listing;
use crate::state::session::SessionContext;

/// Parse the `:id` route segment. Ids are positive integers.
pub fn parse_chat_id(raw: Option<&str>) -> Option<i64> {
    raw?.trim().parse::<i64>().ok().filter(|id| *id > 0)
}

pub fn is_own_message(message: &Message, current: Option<&User>) -> bool {
    current.is_some_and(|user| user.id == message.user.id)
}

/// Avatar image for `user`, or `None` when the page should draw initials.
pub fn avatar_src(user: &User) -> Option<&str> {
    user.avatar.as_deref().map(str::trim).filter(|src| !src.is_empty())
}

/// `HH:MM` from an ISO 8601 timestamp, or the raw value if it has no time part.
pub fn short_time(created_at: &str) -> &str {
    created_at
        .split_once('T')
        .and_then(|(_, time)| time.get(..5))
        .unwrap_or(created_at)
}

#[component]
pub fn ChatPage() -> impl IntoView {
    let config = expect_context::<RuntimeConfig>();
    let session = SessionContext::expect();
    let params = use_params_map();
    let messages = RwSignal::new(Listing::<Message>::Loading);

    let chat_id = move || params.with(|p| parse_chat_id(p.get("id").as_deref()));

    #[cfg(feature = "hydrate")]
    {
        let api_url = config.api_url.clone();
        Effect::new(move || {
            let Some(id) = chat_id() else {
                return;
            };
            messages.set(Listing::Loading);
            let api_url = api_url.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_messages(&api_url, id).await;
                messages.set(Listing::from_result(result));
            });
        });
    }

    let title = move || chat_id().map_or_else(|| "Chat".to_owned(), |id| format!("Chat #{id}"));
    let status = move || match chat_id() {
        Some(_) => messages.with(|listing| listing.status_message(&config)),
        None => Some(config.error_message.clone()),
    };

    view! {
        <div class="chat-page">
            <header class="chat-page__header">
                <a href="/chats" class="chat-page__back">"Back"</a>
                <h1>{title}</h1>
            </header>
            {move || status().map(|message| view! { <p class="chat-page__status">{message}</p> })}
            <ol class="message-list">
                <For
                    each=move || messages.with(|listing| listing.items().to_vec())
                    key=|message: &Message| message.id
                    children=move |message| {
                        let own = is_own_message(&message, session.user_untracked().as_ref());
                        let class = if own { "message message--own" } else { "message" };
                        let time = short_time(&message.created_at).to_owned();
                        let avatar = match avatar_src(&message.user) {
                            Some(src) => view! { <img class="message__avatar" src=src.to_owned() alt=""/> }.into_any(),
                            None => view! { <span class="message__avatar message__avatar--initials">{message.user.initials()}</span> }.into_any(),
                        };
                        let Message { user, content, .. } = message;
                        view! {
                            <li class=class>
                                {avatar}
                                <span class="message__author">{user.name}</span>
                                <p class="message__content">{content}</p>
                                <time class="message__time">{time}</time>
                            </li>
                        }
                    }
                />
            </ol>
        </div>
    }
}
