//! Site options endpoint

use axum::Json;
use serde::Serialize;
use serde_with::{serde_as, NoneAsEmptyString};
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::{
        equipment::SiteOptionsQuery,
        site::{reconcile_site, valid_sites, Site},
    },
};

use super::{ApiQuery, AuthenticatedUser};

#[serde_as]
#[derive(Serialize, ToSchema)]
pub struct SiteOptionsResponse {
    /// Sites valid for the unit and device kind
    #[schema(value_type = Vec<String>)]
    pub sites: Vec<Site>,
    /// The submitted site if still valid, otherwise empty
    #[serde_as(as = "NoneAsEmptyString")]
    #[schema(value_type = String)]
    pub site: Option<Site>,
}

/// Valid sites for an organizational unit and device kind
#[utoipa::path(
    get,
    path = "/site-options",
    tag = "sites",
    security(("bearer_auth" = [])),
    params(SiteOptionsQuery),
    responses(
        (status = 200, description = "Valid sites", body = SiteOptionsResponse)
    )
)]
pub async fn site_options(
    AuthenticatedUser(claims): AuthenticatedUser,
    ApiQuery(query): ApiQuery<SiteOptionsQuery>,
) -> AppResult<Json<SiteOptionsResponse>> {
    claims.require_read_equipment()?;
    Ok(Json(SiteOptionsResponse {
        sites: valid_sites(query.org_unit, query.device_kind).to_vec(),
        site: reconcile_site(query.site, query.org_unit, query.device_kind),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DeviceKind, OrgUnit};

    #[test]
    fn test_dropped_site_serializes_empty() {
        let response = SiteOptionsResponse {
            sites: valid_sites(Some(OrgUnit::UnitB), Some(DeviceKind::Firewall)).to_vec(),
            site: reconcile_site(Some(Site::Rrhh), Some(OrgUnit::UnitB), Some(DeviceKind::Firewall)),
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["site"], "");
    }
}
