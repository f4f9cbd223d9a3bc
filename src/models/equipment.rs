//! Equipment lifecycle record ("hoja de vida") model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, NoneAsEmptyString};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::enums::{BackupFlag, DeviceKind, ImpactLevel, MaintenanceKind, OrgUnit};
use super::site::{reconcile_site, Site};

/// One maintenance event. Entries have no identity beyond their position.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct MaintenanceEntry {
    #[serde_as(as = "NoneAsEmptyString")]
    #[schema(value_type = String, format = Date)]
    pub date: Option<NaiveDate>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(rename = "type")]
    #[schema(value_type = String)]
    pub kind: Option<MaintenanceKind>,
    pub description: String,
    pub responsible: String,
}

/// Every user-editable field of a record.
///
/// Used as the body of create, update and import requests. Optional enums
/// and dates travel as `""` when blank.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct EquipmentFields {
    /// Human-facing sheet id, generated when left blank
    pub sheet_id: String,

    // Classification
    #[validate(length(min = 1, message = "Hostname is required"))]
    pub hostname: String,
    #[serde_as(as = "NoneAsEmptyString")]
    #[validate(required(message = "Device kind is required"))]
    #[schema(value_type = String)]
    pub device_kind: Option<DeviceKind>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[schema(value_type = String)]
    pub org_unit: Option<OrgUnit>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[schema(value_type = String)]
    pub site: Option<Site>,

    // Descriptive
    pub ip: String,
    pub brand: String,
    pub model: String,
    pub serial: String,
    pub supplier: String,
    pub location: String,
    #[serde_as(as = "NoneAsEmptyString")]
    #[schema(value_type = String, format = Date)]
    pub purchase_date: Option<NaiveDate>,

    // Technical
    pub processor: String,
    pub memory: String,
    pub operating_system: String,
    pub firmware_version: String,
    #[serde_as(as = "NoneAsEmptyString")]
    #[schema(value_type = String)]
    pub backup: Option<BackupFlag>,
    pub function: String,

    // Risk
    pub dependencies: String,
    pub outage_impact: String,
    #[serde_as(as = "NoneAsEmptyString")]
    #[schema(value_type = String)]
    pub impact_level: Option<ImpactLevel>,
    pub innate_defects: String,

    // Administrative contacts
    pub admin_users: String,
    pub admin_email: String,
    pub admin_role: String,

    // Supplier contacts
    pub supplier_contact_name: String,
    pub supplier_contact_role: String,
    pub supplier_phone: String,
    pub supplier_phone_alt: String,
    pub supplier_email: String,
    pub supplier_responsible: String,
    #[serde_as(as = "NoneAsEmptyString")]
    #[schema(value_type = String, format = Date)]
    pub delivery_date: Option<NaiveDate>,
    pub warranty: String,
    #[serde_as(as = "NoneAsEmptyString")]
    #[schema(value_type = String, format = Date)]
    pub termination_date: Option<NaiveDate>,

    pub maintenance: Vec<MaintenanceEntry>,
}

impl EquipmentFields {
    /// Trim identifying text and drop a site that is no longer valid
    pub fn normalize(&mut self) {
        self.hostname = self.hostname.trim().to_string();
        self.sheet_id = self.sheet_id.trim().to_string();
        self.reconcile_site();
    }

    /// Clear the site if it is not valid for the current unit and kind
    pub fn reconcile_site(&mut self) {
        self.site = reconcile_site(self.site, self.org_unit, self.device_kind);
    }
}

/// Equipment lifecycle record as stored
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct EquipmentRecord {
    /// Opaque identifier, never reassigned
    pub id: String,
    #[serde(flatten)]
    pub fields: EquipmentFields,
    /// Day the record was registered
    pub registered_on: NaiveDate,
    /// Last save
    pub updated_at: DateTime<Utc>,
    /// Creation instant, used for ordering
    pub created_at: DateTime<Utc>,
}

impl EquipmentRecord {
    /// Values searched by free-text filtering, in a fixed order
    fn searchable(&self) -> [&str; 8] {
        let f = &self.fields;
        [
            &f.hostname,
            &f.ip,
            &f.brand,
            &f.model,
            &f.location,
            &f.serial,
            f.org_unit.map(|u| u.as_str()).unwrap_or(""),
            f.site.map(|s| s.as_str()).unwrap_or(""),
        ]
    }

    /// True if any searchable field contains `needle`, which must already be lowercase
    pub fn matches_text(&self, needle: &str) -> bool {
        needle.is_empty()
            || self
                .searchable()
                .iter()
                .any(|value| value.to_lowercase().contains(needle))
    }

    /// Free-text match ANDed with an optional exact device kind
    pub fn matches(&self, query: &EquipmentQuery) -> bool {
        let kind_ok = match query.device_kind {
            Some(kind) => self.fields.device_kind == Some(kind),
            None => true,
        };
        kind_ok && self.matches_text(&query.needle())
    }
}

/// Equipment list filter
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EquipmentQuery {
    /// Case-insensitive text searched in hostname, ip, brand, model,
    /// location, serial, org unit and site
    pub q: Option<String>,
    /// Exact device kind
    #[serde(default)]
    #[serde_as(as = "NoneAsEmptyString")]
    #[param(value_type = Option<String>)]
    pub device_kind: Option<DeviceKind>,
}

impl EquipmentQuery {
    pub fn needle(&self) -> String {
        self.q.as_deref().unwrap_or("").trim().to_lowercase()
    }
}

/// Site options lookup
#[serde_as]
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SiteOptionsQuery {
    #[serde(default)]
    #[serde_as(as = "NoneAsEmptyString")]
    #[param(value_type = Option<String>)]
    pub org_unit: Option<OrgUnit>,
    #[serde(default)]
    #[serde_as(as = "NoneAsEmptyString")]
    #[param(value_type = Option<String>)]
    pub device_kind: Option<DeviceKind>,
    /// Currently selected site, checked against the computed set
    #[serde(default)]
    #[serde_as(as = "NoneAsEmptyString")]
    #[param(value_type = Option<String>)]
    pub site: Option<Site>,
}
