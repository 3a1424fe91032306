//! JSON bodies of the dashboard API
//!
//! Shared by the server handlers and the SDK clients.

use crate::correlation::CorrelationEntry;
use crate::org::{DepartmentNode, MetricSummary};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// `GET /api/summary`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    pub metrics: Vec<MetricSummary>,
    pub default_dept_id: String,
}

/// `GET /api/org`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrgResponse {
    pub tree: DepartmentNode,
}

/// `GET /api/correlations`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrelationResponse {
    pub dept_id: String,
    pub metrics: Vec<CorrelationEntry>,
}

/// `GET /api/search`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub matched_departments: Vec<String>,
}

/// `GET /api/status`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    /// Health status ("healthy")
    pub status: String,
    pub version: String,
    /// Number of departments in the org tree
    pub departments: usize,
    pub loaded_at: DateTime<Utc>,
}

/// Query string of `GET /api/correlations`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CorrelationParams {
    #[serde(rename = "deptId")]
    pub dept_id: Option<String>,
}

/// Query string of `GET /api/search`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
}
