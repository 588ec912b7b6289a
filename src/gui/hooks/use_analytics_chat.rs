//! Custom hook for the analytics chat conversation.
//!
//! Owns the conversation signal and the single in-flight request flag,
//! and drives the service's primary/fallback chain from UI submissions.

use dioxus::prelude::*;

use crate::gui::models::Conversation;
use crate::gui::services::get_global_service;
use crate::gui::utils::{can_submit_query, is_submittable_query, query_preview};

/// Handle passed down to the chat components.
#[derive(Clone, Copy)]
pub struct AnalyticsChatHandle {
    /// Append-only conversation shown in the message list.
    pub conversation: Signal<Conversation>,
    /// True while a question is in flight. The input bar disables the
    /// send button off this flag; that is the single-flight guard.
    pub is_loading: Signal<bool>,
}

impl PartialEq for AnalyticsChatHandle {
    fn eq(&self, _other: &Self) -> bool {
        // Signals carry interior mutability; treat props as always changed.
        false
    }
}

impl AnalyticsChatHandle {
    /// Submit one question. Empty input and submissions while a request
    /// is pending are no-ops.
    pub fn submit_query(&self, input: String) {
        if !can_submit_query(*self.is_loading.read(), &input) {
            if is_submittable_query(&input) {
                tracing::debug!("🚫 Ignoring submission while a request is in flight");
            } else {
                tracing::debug!("🚫 Ignoring empty query submission");
            }
            return;
        }

        let query = input.trim().to_string();
        let mut conversation = self.conversation;
        let mut is_loading = self.is_loading;

        tracing::info!(preview = %query_preview(&query), "💬 Submitting analytics question");

        conversation.with_mut(|c| c.push_user(query.clone()));
        is_loading.set(true);

        spawn(async move {
            let service_arc = get_global_service();
            let (answer, source) = {
                let service = service_arc.lock().await;
                service.ask(&query).await
            };

            tracing::debug!(source = ?source, "📨 Appending assistant answer");
            conversation.with_mut(|c| c.push(answer));
            is_loading.set(false);
        });
    }
}

/// Hook initializing the conversation with the welcome message.
pub fn use_analytics_chat() -> AnalyticsChatHandle {
    let conversation = use_signal(Conversation::new);
    let is_loading = use_signal(|| false);

    AnalyticsChatHandle {
        conversation,
        is_loading,
    }
}
