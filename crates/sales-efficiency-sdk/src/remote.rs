//! RemoteClient — network client for a running dashboard server
//!
//! Connects via HTTP to the dashboard API.

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::client::DashboardClient;
use crate::error::{SdkError, SdkResult};
use crate::models::{
    CorrelationResponse, OrgResponse, SearchResponse, StatusResponse, SummaryResponse,
};

/// Network client that connects to a running dashboard server.
pub struct RemoteClient {
    http_base_url: String,
    http_client: Client,
}

impl RemoteClient {
    /// Create a new RemoteClient connecting to the given HTTP base URL.
    ///
    /// # Example
    /// ```no_run
    /// # use sales_efficiency_sdk::RemoteClient;
    /// let client = RemoteClient::new("http://localhost:5001");
    /// ```
    pub fn new(http_base_url: &str) -> Self {
        Self {
            http_base_url: http_base_url.trim_end_matches('/').to_string(),
            http_client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.http_base_url
    }

    /// Full URL of an API path, with one optional query parameter
    fn url(&self, path: &str, param: Option<(&str, &str)>) -> String {
        match param {
            Some((key, value)) => format!(
                "{}/api/{}?{}={}",
                self.http_base_url,
                path,
                key,
                utf8_percent_encode(value, NON_ALPHANUMERIC)
            ),
            None => format!("{}/api/{}", self.http_base_url, path),
        }
    }

    /// Execute a GET request and decode the JSON body
    async fn get<T: DeserializeOwned>(&self, url: &str) -> SdkResult<T> {
        let response = self.http_client.get(url).send().await?;

        let status = response.status();
        if status.is_success() {
            let bytes = response.bytes().await?;
            Ok(serde_json::from_slice(&bytes)?)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(SdkError::Status {
                status: status.as_u16(),
                body,
            })
        }
    }
}

#[async_trait]
impl DashboardClient for RemoteClient {
    async fn summary(&self) -> SdkResult<SummaryResponse> {
        self.get(&self.url("summary", None)).await
    }

    async fn org(&self) -> SdkResult<OrgResponse> {
        self.get(&self.url("org", None)).await
    }

    async fn correlations(&self, dept_id: Option<&str>) -> SdkResult<CorrelationResponse> {
        let url = self.url("correlations", dept_id.map(|id| ("deptId", id)));
        self.get(&url).await
    }

    async fn search(&self, query: &str) -> SdkResult<SearchResponse> {
        self.get(&self.url("search", Some(("query", query)))).await
    }

    async fn status(&self) -> SdkResult<StatusResponse> {
        self.get(&self.url("status", None)).await
    }
}
