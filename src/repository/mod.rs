//! Repository layer for record persistence
//!
//! Storage is injected as a [`RecordStore`]; the backend is picked from
//! configuration at startup and tests use [`memory::MemoryStore`].

pub mod equipment;
pub mod json_slot;
pub mod memory;
pub mod postgres;

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    config::{AppConfig, StorageBackend},
    error::AppResult,
    models::equipment::EquipmentRecord,
};

/// Keyed persistence of equipment records.
///
/// `load` returns records in insertion order. `upsert` keeps the position of
/// an existing id and appends a new one.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn load(&self) -> AppResult<Vec<EquipmentRecord>>;

    async fn get(&self, id: &str) -> AppResult<Option<EquipmentRecord>> {
        Ok(self.load().await?.into_iter().find(|r| r.id == id))
    }

    async fn upsert(&self, record: &EquipmentRecord) -> AppResult<()>;

    /// Returns false when no record had this id
    async fn remove(&self, id: &str) -> AppResult<bool>;

    /// Backend name, for logs and readiness
    fn name(&self) -> &'static str;
}

/// Main repository struct holding the record store
#[derive(Clone)]
pub struct Repository {
    pub store: Arc<dyn RecordStore>,
    pub equipment: equipment::EquipmentRepository,
}

impl Repository {
    /// Create a new repository over the given store
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            equipment: equipment::EquipmentRepository::new(store.clone()),
            store,
        }
    }

    /// Open the backend selected in configuration
    pub async fn from_config(config: &AppConfig) -> AppResult<Self> {
        let store: Arc<dyn RecordStore> = match config.storage.backend {
            StorageBackend::Memory => Arc::new(memory::MemoryStore::new()),
            StorageBackend::JsonFile => Arc::new(json_slot::JsonSlotStore::new(config.slot_path())),
            StorageBackend::Postgres => {
                Arc::new(postgres::PgStore::connect(&config.database).await?)
            }
        };
        tracing::info!("Using {} record storage", store.name());
        Ok(Self::new(store))
    }
}
