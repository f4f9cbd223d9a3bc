//! Equipment API endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    models::{
        equipment::{EquipmentFields, EquipmentQuery, EquipmentRecord, MaintenanceEntry},
        import_report::{ImportReport, ImportRequest},
    },
};

use super::{ApiJson, ApiPath, ApiQuery, AuthenticatedUser};

/// List equipment, optionally filtered
#[utoipa::path(
    get,
    path = "/equipment",
    tag = "equipment",
    security(("bearer_auth" = [])),
    params(EquipmentQuery),
    responses(
        (status = 200, description = "Equipment list in registration order", body = Vec<EquipmentRecord>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_equipment(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    ApiQuery(query): ApiQuery<EquipmentQuery>,
) -> AppResult<Json<Vec<EquipmentRecord>>> {
    claims.require_read_equipment()?;
    let equipment = state.services.equipment.filter(&query).await?;
    Ok(Json(equipment))
}

/// Get equipment by ID
#[utoipa::path(
    get,
    path = "/equipment/{id}",
    tag = "equipment",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Equipment details", body = EquipmentRecord),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn get_equipment(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    ApiPath(id): ApiPath<String>,
) -> AppResult<Json<EquipmentRecord>> {
    claims.require_read_equipment()?;
    let equipment = state.services.equipment.get_by_id(&id).await?;
    Ok(Json(equipment))
}

/// Register equipment
#[utoipa::path(
    post,
    path = "/equipment",
    tag = "equipment",
    security(("bearer_auth" = [])),
    request_body = EquipmentFields,
    responses(
        (status = 201, description = "Equipment created", body = EquipmentRecord),
        (status = 400, description = "Hostname or device kind missing"),
        (status = 403, description = "Read-only user")
    )
)]
pub async fn create_equipment(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    ApiJson(data): ApiJson<EquipmentFields>,
) -> AppResult<(StatusCode, Json<EquipmentRecord>)> {
    claims.require_write_equipment()?;
    let equipment = state.services.equipment.create(data).await?;
    Ok((StatusCode::CREATED, Json(equipment)))
}

/// Replace equipment fields
#[utoipa::path(
    put,
    path = "/equipment/{id}",
    tag = "equipment",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Equipment ID")),
    request_body = EquipmentFields,
    responses(
        (status = 200, description = "Equipment updated", body = EquipmentRecord),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn update_equipment(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    ApiPath(id): ApiPath<String>,
    ApiJson(data): ApiJson<EquipmentFields>,
) -> AppResult<Json<EquipmentRecord>> {
    claims.require_write_equipment()?;
    let equipment = state.services.equipment.update(&id, data).await?;
    Ok(Json(equipment))
}

/// Delete equipment
#[utoipa::path(
    delete,
    path = "/equipment/{id}",
    tag = "equipment",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Equipment ID")),
    responses(
        (status = 204, description = "Equipment deleted"),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn delete_equipment(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    ApiPath(id): ApiPath<String>,
) -> AppResult<StatusCode> {
    claims.require_write_equipment()?;
    state.services.equipment.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Append a maintenance entry
#[utoipa::path(
    post,
    path = "/equipment/{id}/maintenance",
    tag = "equipment",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Equipment ID")),
    request_body = MaintenanceEntry,
    responses(
        (status = 201, description = "Entry appended", body = EquipmentRecord)
    )
)]
pub async fn append_maintenance(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    ApiPath(id): ApiPath<String>,
    ApiJson(entry): ApiJson<MaintenanceEntry>,
) -> AppResult<(StatusCode, Json<EquipmentRecord>)> {
    claims.require_write_equipment()?;
    let equipment = state.services.equipment.append_maintenance(&id, entry).await?;
    Ok((StatusCode::CREATED, Json(equipment)))
}

/// Remove a maintenance entry by position
#[utoipa::path(
    delete,
    path = "/equipment/{id}/maintenance/{position}",
    tag = "equipment",
    security(("bearer_auth" = [])),
    params(
        ("id" = String, Path, description = "Equipment ID"),
        ("position" = usize, Path, description = "Zero-based entry position")
    ),
    responses(
        (status = 200, description = "Entry removed", body = EquipmentRecord),
        (status = 404, description = "Equipment or entry not found")
    )
)]
pub async fn remove_maintenance(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    ApiPath((id, position)): ApiPath<(String, usize)>,
) -> AppResult<Json<EquipmentRecord>> {
    claims.require_write_equipment()?;
    let equipment = state.services.equipment.remove_maintenance(&id, position).await?;
    Ok(Json(equipment))
}

/// Import already-parsed rows
#[utoipa::path(
    post,
    path = "/equipment/import",
    tag = "equipment",
    security(("bearer_auth" = [])),
    request_body = ImportRequest,
    responses(
        (status = 200, description = "Import report", body = ImportReport)
    )
)]
pub async fn import_equipment(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    ApiJson(request): ApiJson<ImportRequest>,
) -> AppResult<Json<ImportReport>> {
    claims.require_write_equipment()?;
    let report = state.services.equipment.import(request.records).await?;
    Ok(Json(report))
}
