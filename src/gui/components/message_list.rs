use dioxus::prelude::*;

use crate::gui::components::charts::ChartBlock;
use crate::gui::hooks::AnalyticsChatHandle;
use crate::gui::models::{ChatMessage, MessageRole};
use crate::gui::styles::theme::{get_message_class, CssClasses};

/// Scrollable, insertion-ordered message area.
#[component]
pub fn MessageList(chat_handle: AnalyticsChatHandle) -> Element {
    let conversation = chat_handle.conversation.read();
    let is_loading = *chat_handle.is_loading.read();

    rsx! {
        div {
            class: CssClasses::MESSAGE_LIST,

            for message in conversation.messages().iter() {
                MessageRow {
                    key: "{message.id}",
                    message: message.clone(),
                }
            }

            if is_loading {
                div {
                    class: "chat-message assistant pending",
                    div {
                        class: CssClasses::MESSAGE_CONTENT,
                        span { class: "typing-indicator", "…" }
                        "Looking at the data"
                    }
                }
            }
        }
    }
}

/// One chat bubble, with the chart block for assistant answers that
/// carry a structured payload.
#[component]
fn MessageRow(message: ChatMessage) -> Element {
    let role_label = match message.role {
        MessageRole::User => "You",
        MessageRole::Assistant => "Analytics",
    };

    rsx! {
        div {
            class: get_message_class(&message.role),

            div {
                class: CssClasses::MESSAGE_HEADER,
                span {
                    class: CssClasses::MESSAGE_AUTHOR,
                    "{role_label}"
                }
                span {
                    class: CssClasses::MESSAGE_TIMESTAMP,
                    "{message.display_time()}"
                }
            }

            div {
                class: CssClasses::MESSAGE_CONTENT,
                "{message.content}"
            }

            if let Some(data) = message.data.clone() {
                ChartBlock {
                    data,
                    chart_type: message.chart_type,
                }
            }
        }
    }
}
