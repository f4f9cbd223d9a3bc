//! OpenAPI documentation

use axum::Router;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{equipment, health, sites, stats};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Hoja de Vida API",
        version = "1.0.0",
        description = "Network equipment lifecycle registry REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Equipment
        equipment::list_equipment,
        equipment::get_equipment,
        equipment::create_equipment,
        equipment::update_equipment,
        equipment::delete_equipment,
        equipment::append_maintenance,
        equipment::remove_maintenance,
        equipment::import_equipment,
        // Sites
        sites::site_options,
        // Stats
        stats::get_stats,
    ),
    components(
        schemas(
            // Equipment
            crate::models::equipment::EquipmentRecord,
            crate::models::equipment::EquipmentFields,
            crate::models::equipment::MaintenanceEntry,
            crate::models::import_report::ImportRequest,
            crate::models::import_report::ImportReport,
            crate::models::import_report::SkippedRow,
            crate::models::enums::DeviceKind,
            crate::models::enums::OrgUnit,
            crate::models::enums::ImpactLevel,
            crate::models::enums::MaintenanceKind,
            crate::models::enums::BackupFlag,
            crate::models::site::Site,
            // Sites
            sites::SiteOptionsResponse,
            // Stats
            stats::StatsResponse,
            stats::StatEntry,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "equipment", description = "Equipment lifecycle records"),
        (name = "sites", description = "Installation site rules"),
        (name = "stats", description = "Dashboard statistics")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_equipment_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/equipment"));
        assert!(doc.paths.paths.contains_key("/equipment/{id}/maintenance/{position}"));
        assert!(doc.paths.paths.contains_key("/site-options"));
    }
}
