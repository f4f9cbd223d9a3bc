//! PostgreSQL record store, one JSONB document per record

use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, types::Json, Pool, Postgres};

use super::RecordStore;
use crate::{
    config::DatabaseConfig,
    error::{AppError, AppResult},
    models::equipment::EquipmentRecord,
};

#[derive(Clone)]
pub struct PgStore {
    pool: Pool<Postgres>,
}

impl PgStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Connect and bring the schema up to date
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect(&config.url)
            .await?;

        tracing::info!("Connected to database");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to run database migrations: {}", e)))?;

        tracing::info!("Database migrations completed");

        Ok(Self::new(pool))
    }
}

#[async_trait]
impl RecordStore for PgStore {
    async fn load(&self) -> AppResult<Vec<EquipmentRecord>> {
        let rows: Vec<(Json<EquipmentRecord>,)> =
            sqlx::query_as("SELECT data FROM equipment_records ORDER BY position")
                .fetch_all(&self.pool)
                .await?;
        Ok(rows.into_iter().map(|(Json(record),)| record).collect())
    }

    async fn get(&self, id: &str) -> AppResult<Option<EquipmentRecord>> {
        let row: Option<(Json<EquipmentRecord>,)> =
            sqlx::query_as("SELECT data FROM equipment_records WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.map(|(Json(record),)| record))
    }

    async fn upsert(&self, record: &EquipmentRecord) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO equipment_records (id, data, created_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (id) DO UPDATE
            SET data = EXCLUDED.data, modif_date = NOW()
            "#,
        )
        .bind(&record.id)
        .bind(Json(record))
        .bind(record.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn remove(&self, id: &str) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM equipment_records WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    fn name(&self) -> &'static str {
        "postgres"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DeviceKind, EquipmentFields};

    // Needs a live database: DATABASE_URL=... cargo test -- --ignored
    #[tokio::test]
    #[ignore]
    async fn test_upsert_and_remove() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL not set");
        let store = PgStore::connect(&DatabaseConfig {
            url,
            max_connections: 2,
            min_connections: 1,
        })
        .await
        .expect("Failed to connect to database");

        let mut record = EquipmentRecord {
            id: uuid::Uuid::new_v4().to_string(),
            fields: EquipmentFields {
                hostname: "PG-SW-01".to_string(),
                device_kind: Some(DeviceKind::Switch),
                ..Default::default()
            },
            ..Default::default()
        };
        store.upsert(&record).await.unwrap();
        record.fields.brand = "Aruba".to_string();
        store.upsert(&record).await.unwrap();

        let loaded = store.get(&record.id).await.unwrap().unwrap();
        assert_eq!(loaded.fields.brand, "Aruba");

        assert!(store.remove(&record.id).await.unwrap());
        assert!(store.get(&record.id).await.unwrap().is_none());
    }
}
