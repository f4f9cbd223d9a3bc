//! Equipment record access on top of the record store

use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

use super::RecordStore;
use crate::{
    error::{AppError, AppResult},
    models::equipment::EquipmentRecord,
};

#[derive(Clone)]
pub struct EquipmentRepository {
    store: Arc<dyn RecordStore>,
    // held across read-modify-write sequences; shared by all clones
    writes: Arc<Mutex<()>>,
}

impl EquipmentRepository {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            store,
            writes: Arc::new(Mutex::new(())),
        }
    }

    /// Serialize a mutation: lookups and writes done while the guard lives
    /// cannot interleave with another mutation
    pub async fn lock_writes(&self) -> MutexGuard<'_, ()> {
        self.writes.lock().await
    }

    /// All records in insertion order
    pub async fn list(&self) -> AppResult<Vec<EquipmentRecord>> {
        self.store.load().await
    }

    /// Get a record by id
    pub async fn get_by_id(&self, id: &str) -> AppResult<EquipmentRecord> {
        self.store
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))
    }

    /// Append a new record; its id must not be in use
    pub async fn insert(&self, record: &EquipmentRecord) -> AppResult<()> {
        if self.store.get(&record.id).await?.is_some() {
            return Err(AppError::Internal(format!(
                "Equipment id {} already in use",
                record.id
            )));
        }
        self.store.upsert(record).await
    }

    /// Replace an existing record in place
    pub async fn replace(&self, record: &EquipmentRecord) -> AppResult<()> {
        if self.store.get(&record.id).await?.is_none() {
            return Err(AppError::NotFound(format!("Equipment {} not found", record.id)));
        }
        self.store.upsert(record).await
    }

    /// Delete a record
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        if !self.store.remove(id).await? {
            return Err(AppError::NotFound(format!("Equipment {} not found", id)));
        }
        Ok(())
    }
}
