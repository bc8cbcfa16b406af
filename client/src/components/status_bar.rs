//! Connection indicator for the chat header.

#[cfg(test)]
#[path = "status_bar_test.rs"]
mod status_bar_test;

use leptos::prelude::*;

use crate::state::chat::ChatState;

/// Status line showing whether the inference server answered last time.
#[component]
pub fn StatusBar() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let connected = move || chat.with(|c| c.connected);

    view! {
        <div class="status-bar">
            <span class="status-bar__dot" class:status-bar__dot--connected=connected></span>
            <span class="status-bar__label" class:status-bar__label--connected=connected>
                {move || status_label(connected())}
            </span>
        </div>
    }
}

pub(crate) fn status_label(connected: bool) -> &'static str {
    if connected { "Connected to Ollama" } else { "Not connected" }
}
