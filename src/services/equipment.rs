//! Equipment record service
//!
//! Owns the record lifecycle: validation, identity and timestamps, site
//! reconciliation, filtering and positional maintenance edits.

use chrono::{DateTime, Utc};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        equipment::{EquipmentFields, EquipmentQuery, EquipmentRecord, MaintenanceEntry},
        import_report::{ImportReport, SkippedRow},
    },
    repository::Repository,
};

/// Timestamp-derived sheet id used when the creator leaves it blank
fn generate_sheet_id(now: DateTime<Utc>) -> String {
    format!("HV-{}", now.timestamp_millis())
}

#[derive(Clone)]
pub struct EquipmentService {
    repository: Repository,
}

impl EquipmentService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<EquipmentRecord>> {
        self.repository.equipment.list().await
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<EquipmentRecord> {
        self.repository.equipment.get_by_id(id).await
    }

    /// Records matching the query, in collection order
    pub async fn filter(&self, query: &EquipmentQuery) -> AppResult<Vec<EquipmentRecord>> {
        let records = self.list().await?;
        Ok(records.into_iter().filter(|r| r.matches(query)).collect())
    }

    pub async fn create(&self, data: EquipmentFields) -> AppResult<EquipmentRecord> {
        let _guard = self.repository.equipment.lock_writes().await;
        self.create_locked(data).await
    }

    /// Caller must hold the write lock
    async fn create_locked(&self, mut data: EquipmentFields) -> AppResult<EquipmentRecord> {
        data.normalize();
        data.validate()?;

        let now = Utc::now();
        if data.sheet_id.is_empty() {
            data.sheet_id = generate_sheet_id(now);
        }

        let record = EquipmentRecord {
            id: Uuid::new_v4().to_string(),
            fields: data,
            registered_on: now.date_naive(),
            updated_at: now,
            created_at: now,
        };
        self.repository.equipment.insert(&record).await?;

        tracing::info!(
            "Registered equipment {} ({}) as {}",
            record.fields.hostname,
            record.fields.sheet_id,
            record.id
        );
        Ok(record)
    }

    /// Replace every editable field of a record.
    ///
    /// Identity, registration date and creation time are kept; a blank
    /// sheet id keeps the previous one.
    pub async fn update(&self, id: &str, mut data: EquipmentFields) -> AppResult<EquipmentRecord> {
        data.normalize();
        data.validate()?;

        let _guard = self.repository.equipment.lock_writes().await;
        let mut record = self.get_by_id(id).await?;
        if data.sheet_id.is_empty() {
            data.sheet_id = std::mem::take(&mut record.fields.sheet_id);
        }
        record.fields = data;
        self.save(record).await
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let _guard = self.repository.equipment.lock_writes().await;
        self.repository.equipment.delete(id).await?;
        tracing::info!("Deleted equipment {}", id);
        Ok(())
    }

    /// Append a maintenance entry; blank entries are accepted
    pub async fn append_maintenance(
        &self,
        id: &str,
        entry: MaintenanceEntry,
    ) -> AppResult<EquipmentRecord> {
        let _guard = self.repository.equipment.lock_writes().await;
        let mut record = self.get_by_id(id).await?;
        record.fields.maintenance.push(entry);
        self.save(record).await
    }

    /// Remove the maintenance entry at `position`
    pub async fn remove_maintenance(&self, id: &str, position: usize) -> AppResult<EquipmentRecord> {
        let _guard = self.repository.equipment.lock_writes().await;
        let mut record = self.get_by_id(id).await?;
        if position >= record.fields.maintenance.len() {
            return Err(AppError::NotFound(format!(
                "Maintenance entry {} not found on equipment {}",
                position, id
            )));
        }
        record.fields.maintenance.remove(position);
        self.save(record).await
    }

    /// Create every valid row; invalid rows are reported and skipped
    pub async fn import(&self, rows: Vec<EquipmentFields>) -> AppResult<ImportReport> {
        let mut report = ImportReport::default();
        let _guard = self.repository.equipment.lock_writes().await;
        for (row, fields) in rows.into_iter().enumerate() {
            match self.create_locked(fields).await {
                Ok(record) => report.created.push(record.id),
                Err(AppError::Validation(reason)) => {
                    tracing::warn!("Import row {} skipped: {}", row, reason);
                    report.skipped.push(SkippedRow { row, reason });
                }
                Err(e) => return Err(e),
            }
        }
        tracing::info!(
            "Import finished: {} created, {} skipped",
            report.created.len(),
            report.skipped.len()
        );
        Ok(report)
    }

    /// Caller must hold the write lock
    async fn save(&self, mut record: EquipmentRecord) -> AppResult<EquipmentRecord> {
        record.updated_at = Utc::now();
        self.repository.equipment.replace(&record).await?;
        Ok(record)
    }
}
