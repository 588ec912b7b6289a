//! Custom hooks bridging the analytics service and Dioxus components.

pub mod use_analytics_chat;

pub use use_analytics_chat::{use_analytics_chat, AnalyticsChatHandle};
