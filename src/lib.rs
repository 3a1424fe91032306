//! Sales Efficiency Dashboard backend
//!
//! A read-only analytics service for a sales efficiency (人效) dashboard:
//! an organization tree with headcount-weighted metric rollups, flat summary
//! cards, and correlation / root-cause data inherited down the tree.
//!
//! # Architecture
//!
//! - `org`: department tree and metric types
//! - `dataset`: declarative JSON dataset (built-in or loaded from a directory)
//! - `algo`: rollup, parent index and search over the tree
//! - `correlation`: correlation entries and nearest-ancestor resolution
//! - `context`: the read-only `DashboardContext` built once at startup
//! - `http`: axum routes serving the context
//!
//! Everything is computed before the listener is bound. Afterwards the context
//! is immutable and shared between requests without locks.
//!
//! ## Example Usage
//!
//! ```rust
//! use sales_efficiency::DashboardContext;
//!
//! let ctx = DashboardContext::builtin().unwrap();
//!
//! // Root headcount is the sum of all leaves
//! assert_eq!(ctx.tree().headcount, 180);
//!
//! // "east-a" has no correlations of its own and inherits from an ancestor
//! let inherited = ctx.correlations("east-a");
//! assert_eq!(inherited, ctx.correlations("hq"));
//!
//! // Case-insensitive search over names and leaders
//! assert!(ctx.search("张").contains(&"south".to_string()));
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod config;
pub mod context;
pub mod correlation;
pub mod dataset;
pub mod http;
pub mod org;

// Re-export main types for convenience
pub use algo::{aggregate, search, sync_root_with_summary, ParentIndex, Rollup};
pub use config::ServerConfig;
pub use context::DashboardContext;
pub use correlation::{
    BreakdownItem, CorrelationDetail, CorrelationEntry, CorrelationResolver, Direction,
};
pub use dataset::{Dataset, DatasetError, DatasetResult};
pub use http::{HttpServer, SharedContext};
pub use org::{
    DepartmentDetail, DepartmentNode, DeptStatus, HistoryPoint, MetricDetail, MetricPoint,
    MetricSummary, Trend, REVENUE_PER_COST,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
