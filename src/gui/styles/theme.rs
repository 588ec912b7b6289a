//! Theme and style helpers.

use crate::gui::models::MessageRole;

/// CSS class name constants.
pub struct CssClasses;

impl CssClasses {
    // Application
    pub const APP: &'static str = "app";
    pub const MAIN_WINDOW: &'static str = "main-window";

    // Header
    pub const APP_HEADER: &'static str = "app-header";

    // Input section
    pub const INPUT_SECTION: &'static str = "input-section";
    pub const FORM_GROUP: &'static str = "form-group";
    pub const FORM_INPUT: &'static str = "form-input";

    // Buttons
    pub const BTN: &'static str = "btn";
    pub const BTN_PRIMARY: &'static str = "btn-primary";
    pub const BTN_SECONDARY: &'static str = "btn-secondary";

    // Messages
    pub const MESSAGE_LIST: &'static str = "message-list";
    pub const CHAT_MESSAGE: &'static str = "chat-message";
    pub const MESSAGE_HEADER: &'static str = "message-header";
    pub const MESSAGE_AUTHOR: &'static str = "message-author";
    pub const MESSAGE_TIMESTAMP: &'static str = "message-timestamp";
    pub const MESSAGE_CONTENT: &'static str = "message-content";

    // Errors
    pub const ERROR_MESSAGE: &'static str = "error-message";
}

/// CSS class for a chat bubble by author role.
pub fn get_message_class(role: &MessageRole) -> String {
    format!("{} {}", CssClasses::CHAT_MESSAGE, role.as_str())
}

/// CSS class for a button variant, with the disabled modifier.
pub fn get_button_class(variant: &str, disabled: bool) -> String {
    let base_class = CssClasses::BTN;
    let variant_class = match variant {
        "primary" => CssClasses::BTN_PRIMARY,
        "secondary" => CssClasses::BTN_SECONDARY,
        _ => CssClasses::BTN_PRIMARY,
    };

    let mut classes = format!("{} {}", base_class, variant_class);
    if disabled {
        classes.push_str(" disabled");
    }
    classes
}

/// Embedded stylesheet injected into the document head.
pub fn get_embedded_css() -> &'static str {
    include_str!("theme.css")
}
