//! EmbeddedClient — in-process dashboard client
//!
//! Runs the server's handlers directly against a `DashboardContext`, no
//! network needed.

use async_trait::async_trait;
use axum::extract::{Query, State};
use std::sync::Arc;

use sales_efficiency::http::handler::{
    correlations_handler, org_handler, search_handler, status_handler, summary_handler,
};
use sales_efficiency::http::{CorrelationParams, SearchParams};
use sales_efficiency::{DashboardContext, Dataset};

use crate::client::DashboardClient;
use crate::error::SdkResult;
use crate::models::{
    CorrelationResponse, OrgResponse, SearchResponse, StatusResponse, SummaryResponse,
};

/// In-process client that wraps a `DashboardContext` directly.
///
/// No network overhead; responses are produced by the same handlers the HTTP
/// server uses. Ideal for tests and embedded applications.
pub struct EmbeddedClient {
    context: Arc<DashboardContext>,
}

impl EmbeddedClient {
    /// Create an EmbeddedClient over the built-in sample dataset
    pub fn builtin() -> SdkResult<Self> {
        Ok(Self::with_context(Arc::new(DashboardContext::builtin()?)))
    }

    /// Create an EmbeddedClient over a dataset of your own
    pub fn from_dataset(dataset: Dataset) -> SdkResult<Self> {
        Ok(Self::with_context(Arc::new(DashboardContext::build(dataset)?)))
    }

    /// Create an EmbeddedClient wrapping an existing context
    pub fn with_context(context: Arc<DashboardContext>) -> Self {
        Self { context }
    }

    /// Get a reference to the underlying context
    pub fn context(&self) -> &Arc<DashboardContext> {
        &self.context
    }

    fn state(&self) -> State<Arc<DashboardContext>> {
        State(Arc::clone(&self.context))
    }
}

#[async_trait]
impl DashboardClient for EmbeddedClient {
    async fn summary(&self) -> SdkResult<SummaryResponse> {
        Ok(summary_handler(self.state()).await.0)
    }

    async fn org(&self) -> SdkResult<OrgResponse> {
        Ok(org_handler(self.state()).await.0)
    }

    async fn correlations(&self, dept_id: Option<&str>) -> SdkResult<CorrelationResponse> {
        let params = CorrelationParams {
            dept_id: dept_id.map(str::to_string),
        };
        Ok(correlations_handler(self.state(), Some(Query(params))).await.0)
    }

    async fn search(&self, query: &str) -> SdkResult<SearchResponse> {
        let params = SearchParams {
            query: Some(query.to_string()),
        };
        Ok(search_handler(self.state(), Some(Query(params))).await.0)
    }

    async fn status(&self) -> SdkResult<StatusResponse> {
        Ok(status_handler(self.state()).await.0)
    }
}
