//! Sales Efficiency SDK — Client library for the sales efficiency dashboard
//!
//! Provides two client implementations:
//!
//! - **`EmbeddedClient`** — In-process, no network. Runs the server's handlers
//!   directly over a `DashboardContext`. Ideal for tests and embedded applications.
//!
//! - **`RemoteClient`** — Connects to a running dashboard server via HTTP.
//!
//! Both implement the `DashboardClient` trait for a unified API.
//!
//! # Quick Start
//!
//! ```rust
//! use sales_efficiency_sdk::{DashboardClient, EmbeddedClient};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = EmbeddedClient::builtin().unwrap();
//!
//!     let org = client.org().await.unwrap();
//!     println!("{} people under {}", org.tree.headcount, org.tree.name);
//!
//!     let found = client.search("张").await.unwrap();
//!     println!("Matched {:?}", found.matched_departments);
//! }
//! ```

pub mod client;
pub mod embedded;
pub mod error;
pub mod models;
pub mod remote;

// ============================================================
// Core SDK types
// ============================================================

pub use client::DashboardClient;
pub use embedded::EmbeddedClient;
pub use error::{SdkError, SdkResult};
pub use remote::RemoteClient;
pub use models::{
    CorrelationResponse, OrgResponse, SearchResponse, StatusResponse, SummaryResponse,
};

// ============================================================
// Domain types (re-exported from the dashboard core)
// ============================================================

pub use sales_efficiency::{
    CorrelationEntry, DashboardContext, Dataset, DepartmentNode, DeptStatus, Direction,
    MetricPoint, MetricSummary,
};

/// SDK version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
