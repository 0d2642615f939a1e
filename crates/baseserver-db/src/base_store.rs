//! `PostgreSQL`-backed [`BaseStore`] over the `base_data` table.
//!
//! Uses [`sqlx`] with runtime query construction (not compile-time checked)
//! so no live database is needed at build time. All queries are
//! parameterized.

use async_trait::async_trait;
use baseserver_types::{BaseId, BasePatch, BaseRecord, NewBase};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::DbError;
use crate::store::BaseStore;

/// Operations on the `base_data` table.
#[derive(Clone)]
pub struct PgBaseStore {
    pool: PgPool,
}

impl PgBaseStore {
    /// Create a store bound to a connection pool.
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BaseStore for PgBaseStore {
    async fn list(&self) -> Result<Vec<BaseRecord>, DbError> {
        let rows = sqlx::query_as::<_, BaseRow>(
            r"SELECT id, name, comment
              FROM base_data
              ORDER BY seq ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(BaseRecord::from).collect())
    }

    async fn get(&self, id: BaseId) -> Result<Option<BaseRecord>, DbError> {
        let row = sqlx::query_as::<_, BaseRow>(
            r"SELECT id, name, comment
              FROM base_data
              WHERE id = $1",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(BaseRecord::from))
    }

    async fn insert(&self, new: NewBase) -> Result<BaseRecord, DbError> {
        let row = sqlx::query_as::<_, BaseRow>(
            r"INSERT INTO base_data (name, comment)
              VALUES ($1, $2)
              RETURNING id, name, comment",
        )
        .bind(&new.name)
        .bind(&new.comment)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(id = %row.id, "Inserted base record");

        Ok(row.into())
    }

    async fn update(&self, id: BaseId, patch: BasePatch) -> Result<Option<BaseRecord>, DbError> {
        // NULL parameters keep the stored value.
        let row = sqlx::query_as::<_, BaseRow>(
            r"UPDATE base_data
              SET name = COALESCE($2, name),
                  comment = COALESCE($3, comment)
              WHERE id = $1
              RETURNING id, name, comment",
        )
        .bind(id.into_inner())
        .bind(patch.name)
        .bind(patch.comment)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(BaseRecord::from))
    }

    async fn delete(&self, id: BaseId) -> Result<bool, DbError> {
        let result = sqlx::query(r"DELETE FROM base_data WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), DbError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// A row from the `base_data` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BaseRow {
    /// Record UUID.
    pub id: Uuid,
    /// Record name.
    pub name: String,
    /// Record comment.
    pub comment: String,
}

impl From<BaseRow> for BaseRecord {
    fn from(row: BaseRow) -> Self {
        Self {
            id: BaseId::from(row.id),
            name: row.name,
            comment: row.comment,
        }
    }
}
