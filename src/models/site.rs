//! Installation sites and the rule deciding which ones are valid
//!
//! The valid set depends on the organizational unit, and for the primary
//! unit also on the device kind: switches of unit B may be installed in RRHH.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::enums::{DeviceKind, OrgUnit};

/// Physical installation site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Site {
    #[serde(rename = "site-6")]
    Site6,
    #[serde(rename = "itawi")]
    Itawi,
    #[serde(rename = "site-a")]
    SiteA,
    #[serde(rename = "site-b")]
    SiteB,
    #[serde(rename = "site-c")]
    SiteC,
    #[serde(rename = "RRHH")]
    Rrhh,
    #[serde(rename = "site-d")]
    SiteD,
}

impl Site {
    pub fn as_str(&self) -> &'static str {
        match self {
            Site::Site6 => "site-6",
            Site::Itawi => "itawi",
            Site::SiteA => "site-a",
            Site::SiteB => "site-b",
            Site::SiteC => "site-c",
            Site::Rrhh => "RRHH",
            Site::SiteD => "site-d",
        }
    }
}

impl std::fmt::Display for Site {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Site {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "site-6" => Ok(Site::Site6),
            "itawi" => Ok(Site::Itawi),
            "site-a" => Ok(Site::SiteA),
            "site-b" => Ok(Site::SiteB),
            "site-c" => Ok(Site::SiteC),
            "rrhh" => Ok(Site::Rrhh),
            "site-d" => Ok(Site::SiteD),
            _ => Err(format!("Invalid site: {}", s)),
        }
    }
}

const UNIT_A_SITES: &[Site] = &[Site::Site6, Site::Itawi];
const UNIT_B_SITES: &[Site] = &[Site::SiteA, Site::SiteB, Site::SiteC];
const UNIT_B_SWITCH_SITES: &[Site] = &[Site::SiteA, Site::SiteB, Site::SiteC, Site::Rrhh];
const UNIT_C_SITES: &[Site] = &[Site::SiteD];

/// Sites valid for the given organizational unit and device kind, in display order
pub fn valid_sites(org_unit: Option<OrgUnit>, device_kind: Option<DeviceKind>) -> &'static [Site] {
    match (org_unit, device_kind) {
        (None, _) => &[],
        (Some(OrgUnit::UnitA), _) => UNIT_A_SITES,
        (Some(OrgUnit::UnitB), Some(DeviceKind::Switch)) => UNIT_B_SWITCH_SITES,
        (Some(OrgUnit::UnitB), _) => UNIT_B_SITES,
        (Some(OrgUnit::UnitC), _) => UNIT_C_SITES,
    }
}

/// Keep `site` only if it is still valid after a change of unit or kind
pub fn reconcile_site(
    site: Option<Site>,
    org_unit: Option<OrgUnit>,
    device_kind: Option<DeviceKind>,
) -> Option<Site> {
    site.filter(|s| valid_sites(org_unit, device_kind).contains(s))
}
