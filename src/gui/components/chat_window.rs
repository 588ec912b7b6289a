use dioxus::prelude::*;

use crate::gui::{
    components::{InputBar, MessageList},
    hooks::use_analytics_chat,
    styles::theme::{get_embedded_css, CssClasses},
};

/// Top-level window: header, message list, input bar.
#[component]
pub fn ChatWindow() -> Element {
    let chat_handle = use_analytics_chat();

    rsx! {
        // Inject the stylesheet into the document head.
        document::Style {
            {get_embedded_css()}
        }

        div {
            class: "main-window",
            style: "
                min-height: 100vh;
                background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
                font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
                padding: 20px;
                box-sizing: border-box;
                display: flex;
                flex-direction: column;
            ",

            div {
                class: CssClasses::APP_HEADER,
                style: "
                    text-align: center;
                    margin-bottom: 20px;
                    background: rgba(255, 255, 255, 0.1);
                    border-radius: 16px;
                    padding: 16px;
                    backdrop-filter: blur(10px);
                    border: 1px solid rgba(255, 255, 255, 0.2);
                ",

                h1 {
                    style: "
                        font-size: clamp(1.5rem, 4vw, 2.2rem);
                        color: white;
                        margin: 0 0 6px 0;
                        font-weight: 700;
                        text-shadow: 0 2px 4px rgba(0, 0, 0, 0.3);
                    ",
                    "📊 Insight Chat"
                }

                p {
                    style: "
                        color: rgba(255, 255, 255, 0.9);
                        margin: 0;
                        font-size: clamp(0.85rem, 2vw, 1rem);
                    ",
                    "Ask questions about your analytics data in plain language"
                }
            }

            div {
                class: "chat-panel",
                style: "
                    flex: 1;
                    display: flex;
                    flex-direction: column;
                    background: white;
                    border-radius: 12px;
                    overflow: hidden;
                    box-shadow: 0 4px 12px rgba(0,0,0,0.15);
                ",

                MessageList { chat_handle }
                InputBar { chat_handle }
            }
        }
    }
}
