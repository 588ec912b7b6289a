pub mod api;
pub mod gui;

// Re-export the main error type for convenience
pub use api::analytics::AnalyticsError;

// Re-export the client and wire types
pub use api::analytics::{AnalyticsBackend, AnalyticsResponse, ChartType, HttpAnalyticsClient};
pub use api::auth::{AuthToken, TokenStore};

// Re-export conversation model
pub use gui::models::{ChatMessage, Conversation, MessageRole};
pub use gui::services::{AnalyticsChatService, AnswerSource};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_structure() {
        // The main types stay accessible from the crate root.
        assert!(std::any::type_name::<HttpAnalyticsClient>().contains("HttpAnalyticsClient"));
        assert!(std::any::type_name::<Conversation>().contains("Conversation"));
    }

    #[test]
    fn test_chart_type_re_export() {
        let _: Option<ChartType> = ChartType::from_tag("bar");
        assert_eq!(ChartType::Bar.as_str(), "bar");
    }

    #[test]
    fn test_error_type_re_exported() {
        let error = AnalyticsError::MissingToken("no token file".to_string());
        assert!(error.to_string().contains("no token file"));
    }
}
