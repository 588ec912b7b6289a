//! Outbound API surface: the analytics query client and the local
//! bearer-token store it authenticates with.

pub mod analytics;
pub mod auth;

pub use analytics::{
    AnalyticsBackend, AnalyticsError, AnalyticsResponse, ChartType, HttpAnalyticsClient,
    QueryRequest,
};
pub use auth::{AuthToken, TokenStore};
