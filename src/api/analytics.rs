//! Analytics query backend client.
//!
//! Sends natural-language questions to the admin analytics service and
//! decodes the answer payload. The primary endpoint understands full
//! questions; the secondary "simple" endpoint is a reduced variant used
//! as a one-shot fallback by the chat service.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::api::auth::TokenStore;

/// Relative path of the primary query endpoint.
pub const QUERY_ENDPOINT: &str = "/admin/analytics/query";
/// Relative path of the fallback endpoint.
pub const SIMPLE_QUERY_ENDPOINT: &str = "/admin/analytics/simple-query";

#[derive(thiserror::Error, Debug)]
pub enum AnalyticsError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Decoding failed: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Server returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("No auth token available: {0}")]
    MissingToken(String),
}

/// Chart rendering mode declared by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    #[display("bar")]
    Bar,
    #[display("pie")]
    Pie,
    #[display("line")]
    Line,
    #[display("table")]
    Table,
}

impl ChartType {
    /// Parse the backend's tag. Unknown tags map to `None`, which the
    /// renderer treats as the raw table dump.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "bar" => Some(ChartType::Bar),
            "pie" => Some(ChartType::Pie),
            "line" => Some(ChartType::Line),
            "table" => Some(ChartType::Table),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartType::Bar => "bar",
            ChartType::Pie => "pie",
            ChartType::Line => "line",
            ChartType::Table => "table",
        }
    }
}

/// Request body for both endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest {
    pub query: String,
}

/// Response payload of both analytics endpoints.
///
/// `chart_type` stays a plain string on the wire so an unrecognized tag
/// degrades to the table dump instead of failing the whole decode.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyticsResponse {
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    #[serde(default, rename = "chartType", skip_serializing_if = "Option::is_none")]
    pub chart_type: Option<String>,
    #[serde(default, rename = "queryType", skip_serializing_if = "Option::is_none")]
    pub query_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl AnalyticsResponse {
    /// Resolved chart type, `None` for absent or unknown tags.
    pub fn resolved_chart_type(&self) -> Option<ChartType> {
        self.chart_type.as_deref().and_then(ChartType::from_tag)
    }
}

/// Backend abstraction so the chat service can be exercised without a
/// network. Mirrors the two endpoints one-to-one.
#[async_trait]
pub trait AnalyticsBackend: Send + Sync {
    /// POST the question to the primary query endpoint.
    async fn query(&self, text: &str) -> Result<AnalyticsResponse, AnalyticsError>;

    /// POST the same question to the simplified fallback endpoint.
    async fn simple_query(&self, text: &str) -> Result<AnalyticsResponse, AnalyticsError>;
}

/// reqwest-backed client for the admin analytics service.
#[derive(Debug, Clone)]
pub struct HttpAnalyticsClient {
    base_url: String,
    token_store: TokenStore,
    http_client: reqwest::Client,
}

impl HttpAnalyticsClient {
    pub fn new(base_url: impl Into<String>, token_store: TokenStore) -> Self {
        Self {
            base_url: base_url.into(),
            token_store,
            http_client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post_query(
        &self,
        endpoint: &str,
        text: &str,
    ) -> Result<AnalyticsResponse, AnalyticsError> {
        let token = self
            .token_store
            .load()
            .map_err(|e| AnalyticsError::MissingToken(e.to_string()))?;

        let url = format!("{}{}", self.base_url.trim_end_matches('/'), endpoint);
        let body = QueryRequest {
            query: text.to_string(),
        };

        tracing::debug!(url = %url, query_len = text.len(), "📡 Sending analytics query");

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(token.as_str())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(status = %status, url = %url, "📡 Analytics query rejected");
            return Err(AnalyticsError::Status(status));
        }

        // Decode from the body text so malformed JSON reports as a
        // Decode error rather than a transport failure.
        let body_text = response.text().await?;
        let payload: AnalyticsResponse = serde_json::from_str(&body_text)?;

        tracing::debug!(
            answer_len = payload.answer.len(),
            chart_type = payload.chart_type.as_deref().unwrap_or("none"),
            has_data = payload.data.is_some(),
            "📨 Analytics response received"
        );

        Ok(payload)
    }
}

#[async_trait]
impl AnalyticsBackend for HttpAnalyticsClient {
    async fn query(&self, text: &str) -> Result<AnalyticsResponse, AnalyticsError> {
        self.post_query(QUERY_ENDPOINT, text).await
    }

    async fn simple_query(&self, text: &str) -> Result<AnalyticsResponse, AnalyticsError> {
        self.post_query(SIMPLE_QUERY_ENDPOINT, text).await
    }
}
