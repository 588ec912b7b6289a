use crate::gui::hooks::AnalyticsChatHandle;
use crate::gui::styles::theme::{get_button_class, CssClasses};
use crate::gui::utils::can_submit_query;
use dioxus::prelude::*;

/// Question input plus send button.
///
/// The button disables while the input is blank or a request is already
/// in flight, so a second submission during loading is a no-op.
#[component]
pub fn InputBar(chat_handle: AnalyticsChatHandle) -> Element {
    let mut query_input = use_signal(String::new);

    let is_loading = *chat_handle.is_loading.read();
    let can_submit = can_submit_query(is_loading, &query_input.read());

    let submit = {
        move |_| {
            let text = query_input.read().clone();
            if !can_submit_query(*chat_handle.is_loading.read(), &text) {
                return;
            }
            chat_handle.submit_query(text);
            query_input.set(String::new());
        }
    };

    rsx! {
        div {
            class: CssClasses::INPUT_SECTION,

            div {
                class: CssClasses::FORM_GROUP,
                style: "display: flex; gap: 8px; align-items: center;",

                input {
                    class: CssClasses::FORM_INPUT,
                    r#type: "text",
                    placeholder: "Ask about your analytics data...",
                    value: "{query_input}",
                    readonly: is_loading,
                    oninput: move |event| {
                        query_input.set(event.value());
                    },
                }

                button {
                    class: get_button_class("primary", !can_submit),
                    disabled: !can_submit,
                    onclick: submit,

                    if is_loading {
                        "⏳ Asking..."
                    } else {
                        "➤ Ask"
                    }
                }
            }

            if is_loading {
                div {
                    style: "font-size: 12px; color: #7f8c8d; margin-top: 4px;",
                    "One question at a time - waiting for the current answer."
                }
            }
        }
    }
}
