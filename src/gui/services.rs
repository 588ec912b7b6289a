//! Chat service wiring the conversation to the analytics backend.
//!
//! One global service instance is shared across components, mirroring the
//! single conversation the window shows. The dispatch chain is fixed:
//! primary endpoint, one fallback attempt against the simple endpoint,
//! then the static error answer.

use std::sync::{Arc, OnceLock};
use tokio::sync::Mutex;

use crate::api::analytics::{AnalyticsBackend, AnalyticsResponse, HttpAnalyticsClient};
use crate::api::auth::TokenStore;
use crate::gui::config_manager::AppConfig;
use crate::gui::models::{ChatMessage, ERROR_ANSWER};

/// Outcome of one dispatched question, tagged with which tier answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerSource {
    Primary,
    Fallback,
    /// Both endpoints rejected; the answer is the fixed error string.
    Failed,
}

/// Drives the request/fallback/error chain for one question at a time.
pub struct AnalyticsChatService {
    backend: Box<dyn AnalyticsBackend>,
}

impl AnalyticsChatService {
    pub fn new(backend: Box<dyn AnalyticsBackend>) -> Self {
        Self { backend }
    }

    /// Build the production service from the loaded configuration.
    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let token_store = TokenStore::new()?;
        let client = HttpAnalyticsClient::new(config.api.base_url.clone(), token_store);
        Ok(Self::new(Box::new(client)))
    }

    /// Send one question through the chain and produce the assistant
    /// message to append.
    ///
    /// The caller is expected to have rejected empty input already; a
    /// blank query here still short-circuits to the error answer rather
    /// than hitting the network.
    pub async fn ask(&self, query: &str) -> (ChatMessage, AnswerSource) {
        let query = query.trim();
        if query.is_empty() {
            tracing::warn!("⚠️ Blank query reached the dispatcher, answering with error");
            return (ChatMessage::assistant(ERROR_ANSWER), AnswerSource::Failed);
        }

        match self.backend.query(query).await {
            Ok(response) => {
                self.log_response("primary", &response);
                (ChatMessage::from_response(response), AnswerSource::Primary)
            }
            Err(primary_err) => {
                // Only the initial failure is logged; the fallback result
                // speaks for itself.
                tracing::error!(error = %primary_err, "❌ Primary analytics query failed, trying simple endpoint");

                match self.backend.simple_query(query).await {
                    Ok(response) => {
                        self.log_response("fallback", &response);
                        (ChatMessage::from_response(response), AnswerSource::Fallback)
                    }
                    Err(fallback_err) => {
                        tracing::error!(error = %fallback_err, "❌ Fallback analytics query failed");
                        (ChatMessage::assistant(ERROR_ANSWER), AnswerSource::Failed)
                    }
                }
            }
        }
    }

    fn log_response(&self, tier: &str, response: &AnalyticsResponse) {
        tracing::info!(
            tier = tier,
            chart_type = response.chart_type.as_deref().unwrap_or("none"),
            has_data = response.data.is_some(),
            "✅ Analytics answer received"
        );
    }
}

/// Global service singleton shared by the chat hook.
static GLOBAL_SERVICE: OnceLock<Arc<Mutex<AnalyticsChatService>>> = OnceLock::new();

/// Install the service built at startup. Later calls are ignored.
pub fn install_global_service(service: AnalyticsChatService) {
    if GLOBAL_SERVICE.set(Arc::new(Mutex::new(service))).is_err() {
        tracing::warn!("⚠️ Global analytics service already installed");
    }
}

/// Access the global service, building a config-default one on first use
/// if startup did not install one (keeps component tests self-contained).
pub fn get_global_service() -> Arc<Mutex<AnalyticsChatService>> {
    GLOBAL_SERVICE
        .get_or_init(|| {
            let config = AppConfig::default();
            let service = AnalyticsChatService::from_config(&config)
                .unwrap_or_else(|e| {
                    tracing::error!("❌ Failed to build analytics service: {e}");
                    // Degenerate client; every request will fail and
                    // surface the fixed error answer.
                    AnalyticsChatService::new(Box::new(HttpAnalyticsClient::new(
                        config.api.base_url.clone(),
                        TokenStore::with_path("token"),
                    )))
                });
            Arc::new(Mutex::new(service))
        })
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::analytics::AnalyticsError;
    use async_trait::async_trait;
    use std::sync::Mutex as StdMutex;

    /// Scripted backend recording which endpoints saw which queries.
    struct StubBackend {
        primary_ok: bool,
        fallback_ok: bool,
        calls: StdMutex<Vec<(String, String)>>,
    }

    impl StubBackend {
        fn new(primary_ok: bool, fallback_ok: bool) -> Self {
            Self {
                primary_ok,
                fallback_ok,
                calls: StdMutex::new(Vec::new()),
            }
        }

        fn respond(ok: bool, tier: &str) -> Result<AnalyticsResponse, AnalyticsError> {
            if ok {
                Ok(AnalyticsResponse {
                    answer: format!("{tier} answer"),
                    ..Default::default()
                })
            } else {
                Err(AnalyticsError::Status(
                    reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                ))
            }
        }
    }

    #[async_trait]
    impl AnalyticsBackend for Arc<StubBackend> {
        async fn query(&self, text: &str) -> Result<AnalyticsResponse, AnalyticsError> {
            self.calls
                .lock()
                .unwrap()
                .push(("primary".to_string(), text.to_string()));
            StubBackend::respond(self.primary_ok, "primary")
        }

        async fn simple_query(&self, text: &str) -> Result<AnalyticsResponse, AnalyticsError> {
            self.calls
                .lock()
                .unwrap()
                .push(("fallback".to_string(), text.to_string()));
            StubBackend::respond(self.fallback_ok, "fallback")
        }
    }

    fn service_with(stub: &Arc<StubBackend>) -> AnalyticsChatService {
        AnalyticsChatService::new(Box::new(stub.clone()))
    }

    #[tokio::test]
    async fn test_primary_success_skips_fallback() {
        let stub = Arc::new(StubBackend::new(true, true));
        let service = service_with(&stub);

        let (message, source) = service.ask("how many orders today?").await;
        assert_eq!(source, AnswerSource::Primary);
        assert_eq!(message.content, "primary answer");

        let calls = stub.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "primary");
    }

    #[tokio::test]
    async fn test_fallback_gets_same_query_text() {
        let stub = Arc::new(StubBackend::new(false, true));
        let service = service_with(&stub);

        let (message, source) = service.ask("weekly revenue by region").await;
        assert_eq!(source, AnswerSource::Fallback);
        assert_eq!(message.content, "fallback answer");

        let calls = stub.calls.lock().unwrap();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], ("primary".to_string(), "weekly revenue by region".to_string()));
        assert_eq!(calls[1], ("fallback".to_string(), "weekly revenue by region".to_string()));
    }

    #[tokio::test]
    async fn test_double_failure_yields_fixed_error() {
        let stub = Arc::new(StubBackend::new(false, false));
        let service = service_with(&stub);

        let (message, source) = service.ask("anything").await;
        assert_eq!(source, AnswerSource::Failed);
        assert_eq!(message.content, ERROR_ANSWER);
        assert!(message.data.is_none());
        assert!(message.chart_type.is_none());
    }

    #[tokio::test]
    async fn test_blank_query_never_hits_backend() {
        let stub = Arc::new(StubBackend::new(true, true));
        let service = service_with(&stub);

        let (_, source) = service.ask("   ").await;
        assert_eq!(source, AnswerSource::Failed);
        assert!(stub.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_query_is_trimmed_before_dispatch() {
        let stub = Arc::new(StubBackend::new(true, true));
        let service = service_with(&stub);

        service.ask("  top products  ").await;
        let calls = stub.calls.lock().unwrap();
        assert_eq!(calls[0].1, "top products");
    }
}
