//! HTTP handlers for the dashboard API
//!
//! Every handler answers 200 with best-effort data: missing parameters are
//! defaulted and unknown departments fall back to the root's correlations.

use super::models::{
    CorrelationParams, CorrelationResponse, OrgResponse, SearchParams, SearchResponse,
    StatusResponse, SummaryResponse,
};
use crate::context::DashboardContext;
use axum::extract::{Query, State};
use axum::Json;
use std::sync::Arc;
use tracing::debug;

/// Handler state: the read-only context, shared without locks
pub type SharedContext = Arc<DashboardContext>;

/// Summary cards and the department the dashboard opens on
pub async fn summary_handler(State(ctx): State<SharedContext>) -> Json<SummaryResponse> {
    Json(SummaryResponse {
        metrics: ctx.summary().to_vec(),
        default_dept_id: ctx.default_dept_id().to_string(),
    })
}

/// The full aggregated org tree
pub async fn org_handler(State(ctx): State<SharedContext>) -> Json<OrgResponse> {
    Json(OrgResponse {
        tree: ctx.tree().clone(),
    })
}

/// Correlations for `deptId` (default: root), inherited from the nearest
/// ancestor when the department has none of its own
pub async fn correlations_handler(
    State(ctx): State<SharedContext>,
    params: Option<Query<CorrelationParams>>,
) -> Json<CorrelationResponse> {
    let params = params.map(|Query(p)| p).unwrap_or_default();
    let dept_id = params
        .dept_id
        .unwrap_or_else(|| ctx.default_dept_id().to_string());

    let metrics = ctx.correlations(&dept_id).to_vec();
    debug!("Resolved {} correlations for '{}'", metrics.len(), dept_id);

    Json(CorrelationResponse { dept_id, metrics })
}

/// Departments whose name or leader contains `query`
pub async fn search_handler(
    State(ctx): State<SharedContext>,
    params: Option<Query<SearchParams>>,
) -> Json<SearchResponse> {
    let params = params.map(|Query(p)| p).unwrap_or_default();
    let query = params.query.unwrap_or_default();

    let matched_departments = ctx.search(&query);
    debug!("Search {:?} matched {} departments", query, matched_departments.len());

    Json(SearchResponse { matched_departments })
}

/// Handler for system status
pub async fn status_handler(State(ctx): State<SharedContext>) -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "healthy".to_string(),
        version: crate::VERSION.to_string(),
        departments: ctx.department_count(),
        loaded_at: ctx.loaded_at(),
    })
}
