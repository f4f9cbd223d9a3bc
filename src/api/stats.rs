//! Statistics endpoints

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::AppResult;

use super::AuthenticatedUser;

/// Dashboard statistics
#[derive(Serialize, ToSchema)]
pub struct StatsResponse {
    /// Total number of records
    pub total: i64,
    pub by_device_kind: Vec<StatEntry>,
    pub by_org_unit: Vec<StatEntry>,
    /// Only sites in use, plus "unassigned"
    pub by_site: Vec<StatEntry>,
    pub by_impact_level: Vec<StatEntry>,
    /// Records whose configuration is backed up
    pub with_backup: i64,
    /// Maintenance entries across all records
    pub maintenance_entries: i64,
    /// Most recent save of any record
    pub last_update: Option<DateTime<Utc>>,
}

#[derive(Serialize, ToSchema)]
pub struct StatEntry {
    pub label: String,
    pub value: i64,
}

/// Get dashboard statistics
#[utoipa::path(
    get,
    path = "/stats",
    tag = "stats",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Dashboard statistics", body = StatsResponse)
    )
)]
pub async fn get_stats(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<StatsResponse>> {
    claims.require_read_equipment()?;
    let stats = state.services.stats.get_stats().await?;
    Ok(Json(stats))
}
