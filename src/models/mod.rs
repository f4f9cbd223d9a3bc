//! Data models for Hoja de Vida

pub mod enums;
pub mod equipment;
pub mod import_report;
pub mod site;
pub mod user;

// Re-export commonly used types
pub use enums::{BackupFlag, DeviceKind, ImpactLevel, MaintenanceKind, OrgUnit};
pub use equipment::{EquipmentFields, EquipmentQuery, EquipmentRecord, MaintenanceEntry};
pub use import_report::{ImportReport, ImportRequest, SkippedRow};
pub use site::Site;
pub use user::{Role, UserClaims};
