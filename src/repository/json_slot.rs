//! Single-slot JSON file store
//!
//! The whole collection lives in one file as a JSON array of records. Every
//! mutation reads the slot, applies the keyed change and writes the slot back
//! through a temporary file and a rename.

use std::path::PathBuf;

use async_trait::async_trait;
use indexmap::IndexMap;
use tokio::sync::Mutex;

use super::RecordStore;
use crate::{
    error::{AppError, AppResult},
    models::equipment::EquipmentRecord,
};

/// Parse slot content. Empty content is an empty collection.
pub fn decode_collection(bytes: &[u8]) -> AppResult<Vec<EquipmentRecord>> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_slice(bytes)?)
}

pub fn encode_collection<'a, I>(records: I) -> AppResult<Vec<u8>>
where
    I: IntoIterator<Item = &'a EquipmentRecord>,
{
    let records: Vec<&EquipmentRecord> = records.into_iter().collect();
    Ok(serde_json::to_vec_pretty(&records)?)
}

pub struct JsonSlotStore {
    path: PathBuf,
    // serializes read-modify-write cycles within this process
    lock: Mutex<()>,
}

impl JsonSlotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    async fn read_slot(&self) -> AppResult<IndexMap<String, EquipmentRecord>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("Slot {} absent, treating as empty", self.path.display());
                return Ok(IndexMap::new());
            }
            Err(e) => return Err(e.into()),
        };
        let mut records = IndexMap::new();
        for record in decode_collection(&bytes)? {
            if records.contains_key(&record.id) {
                return Err(AppError::Internal(format!(
                    "Slot {} holds equipment id {} more than once",
                    self.path.display(),
                    record.id
                )));
            }
            records.insert(record.id.clone(), record);
        }
        Ok(records)
    }

    async fn write_slot(&self, records: &IndexMap<String, EquipmentRecord>) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let bytes = encode_collection(records.values())?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &bytes).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        tracing::debug!(
            "Wrote {} records to {}",
            records.len(),
            self.path.display()
        );
        Ok(())
    }
}

#[async_trait]
impl RecordStore for JsonSlotStore {
    async fn load(&self) -> AppResult<Vec<EquipmentRecord>> {
        let _guard = self.lock.lock().await;
        Ok(self.read_slot().await?.into_values().collect())
    }

    async fn upsert(&self, record: &EquipmentRecord) -> AppResult<()> {
        let _guard = self.lock.lock().await;
        let mut records = self.read_slot().await?;
        records.insert(record.id.clone(), record.clone());
        self.write_slot(&records).await
    }

    async fn remove(&self, id: &str) -> AppResult<bool> {
        let _guard = self.lock.lock().await;
        let mut records = self.read_slot().await?;
        if records.shift_remove(id).is_none() {
            return Ok(false);
        }
        self.write_slot(&records).await?;
        Ok(true)
    }

    fn name(&self) -> &'static str {
        "json_file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DeviceKind, EquipmentFields, MaintenanceEntry, MaintenanceKind, OrgUnit, Site};
    use chrono::{NaiveDate, TimeZone, Utc};

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("hojavida-test-{}-{}", name, uuid::Uuid::new_v4()))
            .join("slot.json")
    }

    fn rec(id: &str, hostname: &str) -> EquipmentRecord {
        EquipmentRecord {
            id: id.to_string(),
            fields: EquipmentFields {
                sheet_id: format!("HV-{}", id),
                hostname: hostname.to_string(),
                device_kind: Some(DeviceKind::Switch),
                org_unit: Some(OrgUnit::UnitB),
                site: Some(Site::Rrhh),
                purchase_date: NaiveDate::from_ymd_opt(2022, 1, 31),
                maintenance: vec![
                    MaintenanceEntry {
                        kind: Some(MaintenanceKind::Corrective),
                        description: "PSU swap".to_string(),
                        ..Default::default()
                    },
                    MaintenanceEntry::default(),
                ],
                ..Default::default()
            },
            registered_on: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 3, 2, 10, 0, 0).unwrap(),
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_missing_slot_is_empty() {
        let store = JsonSlotStore::new(scratch_path("missing"));
        assert!(store.load().await.unwrap().is_empty());
        assert!(!store.remove("nope").await.unwrap());
    }

    #[tokio::test]
    async fn test_reload_reproduces_collection() {
        let path = scratch_path("reload");
        let records = vec![rec("1", "SW-A"), rec("2", "SW-B"), rec("3", "SW-C")];
        {
            let store = JsonSlotStore::new(&path);
            for r in &records {
                store.upsert(r).await.unwrap();
            }
        }
        let reopened = JsonSlotStore::new(&path);
        assert_eq!(reopened.load().await.unwrap(), records);

        assert!(reopened.remove("2").await.unwrap());
        let ids: Vec<String> = reopened.load().await.unwrap().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["1", "3"]);

        let _ = tokio::fs::remove_dir_all(path.parent().unwrap()).await;
    }

    #[tokio::test]
    async fn test_malformed_slot_is_an_error() {
        let path = scratch_path("malformed");
        tokio::fs::create_dir_all(path.parent().unwrap()).await.unwrap();
        tokio::fs::write(&path, b"[{\"id\": ").await.unwrap();

        let store = JsonSlotStore::new(&path);
        assert!(matches!(store.load().await, Err(AppError::Serialization(_))));

        let _ = tokio::fs::remove_dir_all(path.parent().unwrap()).await;
    }

    #[tokio::test]
    async fn test_duplicate_ids_are_an_error() {
        let path = scratch_path("duplicate");
        tokio::fs::create_dir_all(path.parent().unwrap()).await.unwrap();
        let bytes = encode_collection([&rec("1", "SW-A"), &rec("1", "SW-B")]).unwrap();
        tokio::fs::write(&path, &bytes).await.unwrap();

        let store = JsonSlotStore::new(&path);
        assert!(matches!(store.load().await, Err(AppError::Internal(_))));
        assert!(store.upsert(&rec("2", "SW-C")).await.is_err());
        assert_eq!(tokio::fs::read(&path).await.unwrap(), bytes);

        let _ = tokio::fs::remove_dir_all(path.parent().unwrap()).await;
    }

    #[test]
    fn test_decode_tolerates_blank_and_missing_fields() {
        assert!(decode_collection(b"  \n").unwrap().is_empty());

        let records = decode_collection(br#"[{"id": "x1", "hostname": "FW-1", "device_kind": "firewall", "site": ""}]"#).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].fields.device_kind, Some(DeviceKind::Firewall));
        assert_eq!(records[0].fields.site, None);
        assert!(records[0].fields.maintenance.is_empty());
    }
}
