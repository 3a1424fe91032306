//! HTTP JSON API for the dashboard
//!
//! All routes are `GET`, read-only and CORS permissive.

pub mod handler;
pub mod models;
pub mod server;

pub use handler::SharedContext;
pub use models::{
    CorrelationParams, CorrelationResponse, OrgResponse, SearchParams, SearchResponse,
    StatusResponse, SummaryResponse,
};
pub use server::{router, HttpServer};
