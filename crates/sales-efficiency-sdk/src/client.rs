//! DashboardClient trait — the unified interface for embedded and remote modes

use async_trait::async_trait;
use crate::error::SdkResult;
use crate::models::{
    CorrelationResponse, OrgResponse, SearchResponse, StatusResponse, SummaryResponse,
};

/// Unified client interface for the dashboard API.
///
/// Implemented by:
/// - `EmbeddedClient` — in-process, no network (for tests and embedded use)
/// - `RemoteClient` — connects to a running server via HTTP
#[async_trait]
pub trait DashboardClient: Send + Sync {
    /// Summary cards and the default department
    async fn summary(&self) -> SdkResult<SummaryResponse>;

    /// The aggregated org tree
    async fn org(&self) -> SdkResult<OrgResponse>;

    /// Correlations for a department (`None` = root)
    async fn correlations(&self, dept_id: Option<&str>) -> SdkResult<CorrelationResponse>;

    /// Departments whose name or leader contains `query`
    async fn search(&self, query: &str) -> SdkResult<SearchResponse>;

    /// Get server status
    async fn status(&self) -> SdkResult<StatusResponse>;

    /// Ping the server
    async fn ping(&self) -> SdkResult<String> {
        let status = self.status().await?;
        if status.status == "healthy" {
            Ok("PONG".to_string())
        } else {
            Err(crate::error::SdkError::Unhealthy(status.status))
        }
    }
}
