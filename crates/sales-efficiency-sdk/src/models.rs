//! Data models for the dashboard SDK
//!
//! The API bodies are the server's own serde types, so both clients decode
//! exactly what the handlers encode.

pub use sales_efficiency::http::models::{
    CorrelationResponse, OrgResponse, SearchResponse, StatusResponse, SummaryResponse,
};
pub use sales_efficiency::{
    BreakdownItem, CorrelationDetail, CorrelationEntry, DepartmentDetail, DepartmentNode,
    DeptStatus, Direction, HistoryPoint, MetricDetail, MetricPoint, MetricSummary, Trend,
};
