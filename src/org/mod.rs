//! Organization tree data model
//!
//! - Department nodes with leaders, status, narrative detail and metrics
//! - Metric points shared by the tree and the flat summary cards

pub mod metric;
pub mod node;

// Re-export main types
pub use metric::{HistoryPoint, MetricDetail, MetricPoint, MetricSummary, Trend, REVENUE_PER_COST};
pub use node::{DepartmentDetail, DepartmentNode, DeptStatus, PreOrder};
