//! Classification enums shared by equipment records
//!
//! Every enum serializes to the plain string stored in the record collection
//! and parses back case-insensitively.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// DeviceKind
// ---------------------------------------------------------------------------

/// Kind of network device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum DeviceKind {
    #[serde(rename = "switch")]
    Switch,
    #[serde(rename = "firewall")]
    Firewall,
    #[serde(rename = "router")]
    Router,
    #[serde(rename = "access-point")]
    AccessPoint,
}

impl DeviceKind {
    pub const ALL: [DeviceKind; 4] = [
        DeviceKind::Switch,
        DeviceKind::Firewall,
        DeviceKind::Router,
        DeviceKind::AccessPoint,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceKind::Switch => "switch",
            DeviceKind::Firewall => "firewall",
            DeviceKind::Router => "router",
            DeviceKind::AccessPoint => "access-point",
        }
    }
}

impl std::fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for DeviceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "switch" => Ok(DeviceKind::Switch),
            "firewall" => Ok(DeviceKind::Firewall),
            "router" => Ok(DeviceKind::Router),
            "access-point" | "access_point" | "ap" => Ok(DeviceKind::AccessPoint),
            _ => Err(format!("Invalid device kind: {}", s)),
        }
    }
}

// ---------------------------------------------------------------------------
// OrgUnit
// ---------------------------------------------------------------------------

/// Organizational unit (legal entity) owning the device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum OrgUnit {
    #[serde(rename = "unit A")]
    UnitA,
    /// Primary unit; the only one with a device-kind dependent site
    #[serde(rename = "unit B")]
    UnitB,
    #[serde(rename = "unit C")]
    UnitC,
}

impl OrgUnit {
    pub const ALL: [OrgUnit; 3] = [OrgUnit::UnitA, OrgUnit::UnitB, OrgUnit::UnitC];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrgUnit::UnitA => "unit A",
            OrgUnit::UnitB => "unit B",
            OrgUnit::UnitC => "unit C",
        }
    }
}

impl std::fmt::Display for OrgUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for OrgUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "unit a" | "unit-a" => Ok(OrgUnit::UnitA),
            "unit b" | "unit-b" => Ok(OrgUnit::UnitB),
            "unit c" | "unit-c" => Ok(OrgUnit::UnitC),
            _ => Err(format!("Invalid organizational unit: {}", s)),
        }
    }
}

// ---------------------------------------------------------------------------
// ImpactLevel
// ---------------------------------------------------------------------------

/// Impact of an outage of the device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ImpactLevel {
    Critical,
    High,
    Medium,
    Low,
}

impl ImpactLevel {
    pub const ALL: [ImpactLevel; 4] = [
        ImpactLevel::Critical,
        ImpactLevel::High,
        ImpactLevel::Medium,
        ImpactLevel::Low,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ImpactLevel::Critical => "critical",
            ImpactLevel::High => "high",
            ImpactLevel::Medium => "medium",
            ImpactLevel::Low => "low",
        }
    }
}

impl std::fmt::Display for ImpactLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ImpactLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "critical" => Ok(ImpactLevel::Critical),
            "high" => Ok(ImpactLevel::High),
            "medium" => Ok(ImpactLevel::Medium),
            "low" => Ok(ImpactLevel::Low),
            _ => Err(format!("Invalid impact level: {}", s)),
        }
    }
}

// ---------------------------------------------------------------------------
// MaintenanceKind
// ---------------------------------------------------------------------------

/// Type of a maintenance log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum MaintenanceKind {
    PreventiveLogical,
    PreventivePhysical,
    Corrective,
    Update,
    Review,
}

impl MaintenanceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaintenanceKind::PreventiveLogical => "preventive-logical",
            MaintenanceKind::PreventivePhysical => "preventive-physical",
            MaintenanceKind::Corrective => "corrective",
            MaintenanceKind::Update => "update",
            MaintenanceKind::Review => "review",
        }
    }
}

impl std::fmt::Display for MaintenanceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for MaintenanceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "preventive-logical" => Ok(MaintenanceKind::PreventiveLogical),
            "preventive-physical" => Ok(MaintenanceKind::PreventivePhysical),
            "corrective" => Ok(MaintenanceKind::Corrective),
            "update" => Ok(MaintenanceKind::Update),
            "review" => Ok(MaintenanceKind::Review),
            _ => Err(format!("Invalid maintenance type: {}", s)),
        }
    }
}

// ---------------------------------------------------------------------------
// BackupFlag
// ---------------------------------------------------------------------------

/// Whether the device configuration is backed up ("si" / "no")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum BackupFlag {
    #[serde(rename = "si")]
    Yes,
    #[serde(rename = "no")]
    No,
}

impl BackupFlag {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackupFlag::Yes => "si",
            BackupFlag::No => "no",
        }
    }
}

impl std::fmt::Display for BackupFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for BackupFlag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "si" | "sí" | "yes" => Ok(BackupFlag::Yes),
            "no" => Ok(BackupFlag::No),
            _ => Err(format!("Invalid backup flag: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_kind_wire_names() {
        for kind in DeviceKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
            assert_eq!(kind.as_str().parse::<DeviceKind>().unwrap(), kind);
        }
        assert_eq!("SWITCH".parse::<DeviceKind>().unwrap(), DeviceKind::Switch);
        assert!("hub".parse::<DeviceKind>().is_err());
    }

    #[test]
    fn test_org_unit_parsing() {
        assert_eq!("unit B".parse::<OrgUnit>().unwrap(), OrgUnit::UnitB);
        assert_eq!("UNIT-c".parse::<OrgUnit>().unwrap(), OrgUnit::UnitC);
        assert_eq!(
            serde_json::to_string(&OrgUnit::UnitA).unwrap(),
            "\"unit A\""
        );
    }

    #[test]
    fn test_backup_flag() {
        assert_eq!("si".parse::<BackupFlag>().unwrap(), BackupFlag::Yes);
        assert_eq!(serde_json::to_string(&BackupFlag::No).unwrap(), "\"no\"");
    }

    #[test]
    fn test_maintenance_kind_kebab_case() {
        assert_eq!(
            serde_json::to_string(&MaintenanceKind::PreventivePhysical).unwrap(),
            "\"preventive-physical\""
        );
    }
}
