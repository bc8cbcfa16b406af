//! Chat panel: conversation history plus the message input.
//!
//! SYSTEM CONTEXT
//! ==============
//! Submits go through `ChatState::begin_submit`, which refuses while a reply
//! is pending, so at most one relay request is ever in flight. Every turn is
//! rendered as sanitized markdown.

#[cfg(test)]
#[path = "chat_panel_test.rs"]
mod chat_panel_test;

use leptos::prelude::*;

use crate::state::chat::{ChatMessage, ChatRole, ChatState};
use crate::util::markdown::render_markdown_html;

/// Conversation history and prompt input.
#[component]
pub fn ChatPanel() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest turn (or the typing indicator) in view.
    Effect::new(move || {
        let _ = chat.with(|c| (c.messages.len(), c.loading));

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let text = input.get_untracked();
        let Some(prompt) = chat.try_update(|c| c.begin_submit(&text)).flatten() else {
            return;
        };
        input.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::send_message(&prompt).await {
                Ok(response) => chat.update(|c| c.complete_success(response)),
                Err(e) => {
                    log::error!("chat request failed: {e}");
                    chat.update(|c| c.complete_failure(&e));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = prompt;
    };

    let loading = move || chat.with(|c| c.loading);
    let can_send = move || !loading() && !input.with(|t| t.trim().is_empty());

    view! {
        <div class="chat-panel">
            <div class="chat-panel__messages" node_ref=messages_ref>
                {move || chat.with(|c| c.messages.iter().map(message_view).collect::<Vec<_>>())}

                {move || {
                    loading()
                        .then(|| {
                            view! {
                                <div class="chat-panel__row">
                                    <div class="chat-panel__bubble chat-panel__typing">
                                        <span class="chat-panel__typing-dot"></span>
                                        <span class="chat-panel__typing-dot"></span>
                                        <span class="chat-panel__typing-dot"></span>
                                    </div>
                                </div>
                            }
                        })
                }}
            </div>

            <form class="chat-panel__input-row" on:submit=on_submit>
                <input
                    class="chat-panel__input"
                    type="text"
                    placeholder="Type your message here..."
                    disabled=loading
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                />
                <button class="btn btn--primary chat-panel__send" type="submit" disabled=move || !can_send()>
                    "Send"
                </button>
            </form>
        </div>
    }
}

fn message_view(msg: &ChatMessage) -> impl IntoView + use<> {
    let is_user = msg.role == ChatRole::User;
    let bubble = bubble_class(msg.role);
    let rendered = render_markdown_html(&msg.content);

    view! {
        <div class="chat-panel__row" class:chat-panel__row--user=is_user>
            <div class=bubble>
                <div class="chat-panel__markdown" inner_html=rendered></div>
            </div>
        </div>
    }
}

pub(crate) fn bubble_class(role: ChatRole) -> &'static str {
    match role {
        ChatRole::User => "chat-panel__bubble chat-panel__bubble--user",
        ChatRole::Assistant => "chat-panel__bubble chat-panel__bubble--assistant",
        ChatRole::Error => "chat-panel__bubble chat-panel__bubble--error",
    }
}
