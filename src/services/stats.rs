//! Dashboard statistics computed from the stored records

use std::collections::HashMap;

use crate::{
    api::stats::{StatEntry, StatsResponse},
    error::AppResult,
    models::{
        enums::{BackupFlag, DeviceKind, ImpactLevel, OrgUnit},
        equipment::EquipmentRecord,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct StatsService {
    repository: Repository,
}

/// Count records per label, keeping `labels` order and appending "unassigned"
/// when some records have no value
fn tally<'a, F>(records: &'a [EquipmentRecord], labels: &[&'static str], key: F) -> Vec<StatEntry>
where
    F: Fn(&'a EquipmentRecord) -> Option<&'static str>,
{
    let mut counts: HashMap<Option<&'static str>, i64> = HashMap::new();
    for record in records {
        *counts.entry(key(record)).or_default() += 1;
    }

    let mut entries: Vec<StatEntry> = labels
        .iter()
        .map(|label| StatEntry {
            label: label.to_string(),
            value: counts.get(&Some(*label)).copied().unwrap_or(0),
        })
        .collect();
    if let Some(&unassigned) = counts.get(&None) {
        entries.push(StatEntry {
            label: "unassigned".to_string(),
            value: unassigned,
        });
    }
    entries
}

impl StatsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn get_stats(&self) -> AppResult<StatsResponse> {
        let records = self.repository.equipment.list().await?;
        Ok(Self::summarize(&records))
    }

    pub fn summarize(records: &[EquipmentRecord]) -> StatsResponse {
        let kinds: Vec<&'static str> = DeviceKind::ALL.iter().map(|k| k.as_str()).collect();
        let units: Vec<&'static str> = OrgUnit::ALL.iter().map(|u| u.as_str()).collect();
        let levels: Vec<&'static str> = ImpactLevel::ALL.iter().map(|l| l.as_str()).collect();

        let mut sites: Vec<&'static str> = records
            .iter()
            .filter_map(|r| r.fields.site.map(|s| s.as_str()))
            .collect();
        sites.sort_unstable();
        sites.dedup();

        StatsResponse {
            total: records.len() as i64,
            by_device_kind: tally(records, &kinds, |r| r.fields.device_kind.map(|k| k.as_str())),
            by_org_unit: tally(records, &units, |r| r.fields.org_unit.map(|u| u.as_str())),
            by_site: tally(records, &sites, |r| r.fields.site.map(|s| s.as_str())),
            by_impact_level: tally(records, &levels, |r| r.fields.impact_level.map(|l| l.as_str())),
            with_backup: records
                .iter()
                .filter(|r| r.fields.backup == Some(BackupFlag::Yes))
                .count() as i64,
            maintenance_entries: records
                .iter()
                .map(|r| r.fields.maintenance.len() as i64)
                .sum(),
            last_update: records.iter().map(|r| r.updated_at).max(),
        }
    }
}
