// Core modules
pub mod config_manager;
pub mod models;
pub mod services;
pub mod utils;

// Dioxus UI components
pub mod components;
pub mod hooks;
pub mod styles;

pub use models::{ChatMessage, Conversation, MessageRole};
pub use services::{
    get_global_service, install_global_service, AnalyticsChatService, AnswerSource,
};

pub use components::ChatWindow;
