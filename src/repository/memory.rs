//! In-memory record store

use async_trait::async_trait;
use indexmap::IndexMap;
use tokio::sync::RwLock;

use super::RecordStore;
use crate::{error::AppResult, models::equipment::EquipmentRecord};

/// Records kept in process memory, lost on restart
#[derive(Default)]
pub struct MemoryStore {
    records: RwLock<IndexMap<String, EquipmentRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<EquipmentRecord>) -> Self {
        Self {
            records: RwLock::new(records.into_iter().map(|r| (r.id.clone(), r)).collect()),
        }
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn load(&self) -> AppResult<Vec<EquipmentRecord>> {
        Ok(self.records.read().await.values().cloned().collect())
    }

    async fn get(&self, id: &str) -> AppResult<Option<EquipmentRecord>> {
        Ok(self.records.read().await.get(id).cloned())
    }

    async fn upsert(&self, record: &EquipmentRecord) -> AppResult<()> {
        self.records
            .write()
            .await
            .insert(record.id.clone(), record.clone());
        Ok(())
    }

    async fn remove(&self, id: &str) -> AppResult<bool> {
        // shift_remove keeps the relative order of the remaining records
        Ok(self.records.write().await.shift_remove(id).is_some())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
