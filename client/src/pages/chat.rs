//! Chat page: header with connectivity status above the conversation.

use leptos::prelude::*;

use crate::components::chat_panel::ChatPanel;
use crate::components::status_bar::StatusBar;
use crate::state::chat::ChatState;

#[component]
pub fn ChatPage() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    // Single health check when the page mounts in the browser.
    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let connected = crate::net::api::check_connection().await;
            chat.update(|c| c.set_connected(connected));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = chat;
    });

    view! {
        <div class="chat-page">
            <div class="chat-card">
                <header class="chat-card__header">
                    <h1 class="chat-card__title">"Product Makers"</h1>
                    <p class="chat-card__subtitle">"Product Innovation with AI: Prototyping"</p>
                    <StatusBar/>
                </header>
                <ChatPanel/>
            </div>
        </div>
    }
}
