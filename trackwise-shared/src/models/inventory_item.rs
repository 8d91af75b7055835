/// Inventory item model and repository
///
/// # Schema
///
/// ```sql
/// CREATE TABLE inventory_items (
///     id INTEGER PRIMARY KEY,
///     name VARCHAR(100) NOT NULL,
///     quantity INTEGER NOT NULL
/// );
/// ```
///
/// Quantities are not range-checked; negative stock is stored as given.

use crate::error::{StoreError, StoreResult};
use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::debug;

const RESOURCE: &str = "inventory item";

/// Inventory item record
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct InventoryItem {
    /// Generated surrogate key
    pub id: i64,

    /// Item name (not unique)
    pub name: String,

    /// Units on hand
    pub quantity: i64,
}

/// Input for creating an inventory item
#[derive(Debug, Clone)]
pub struct CreateInventoryItem {
    pub name: String,
    pub quantity: i64,
}

/// Partial update for an inventory item
#[derive(Debug, Clone, Default)]
pub struct UpdateInventoryItem {
    pub name: Option<String>,
    pub quantity: Option<i64>,
}

/// Storage operations for inventory items
#[async_trait]
pub trait InventoryRepository: Send + Sync {
    async fn create(&self, data: CreateInventoryItem) -> StoreResult<InventoryItem>;

    async fn get(&self, id: i64) -> StoreResult<InventoryItem>;

    /// Lists every item in id order
    async fn list(&self) -> StoreResult<Vec<InventoryItem>>;

    /// Applies a partial update
    async fn update(&self, id: i64, data: UpdateInventoryItem) -> StoreResult<InventoryItem>;

    async fn delete(&self, id: i64) -> StoreResult<()>;
}

/// [`InventoryRepository`] backed by a SQLite pool
#[derive(Debug, Clone)]
pub struct SqliteInventoryRepository {
    pool: SqlitePool,
}

impl SqliteInventoryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn not_found(id: i64) -> StoreError {
        StoreError::NotFound {
            resource: RESOURCE,
            id,
        }
    }
}

#[async_trait]
impl InventoryRepository for SqliteInventoryRepository {
    async fn create(&self, data: CreateInventoryItem) -> StoreResult<InventoryItem> {
        let item = sqlx::query_as::<_, InventoryItem>(
            r#"
            INSERT INTO inventory_items (name, quantity)
            VALUES (?, ?)
            RETURNING id, name, quantity
            "#,
        )
        .bind(data.name)
        .bind(data.quantity)
        .fetch_one(&self.pool)
        .await?;

        debug!(item_id = item.id, quantity = item.quantity, "Inserted inventory item");
        Ok(item)
    }

    async fn get(&self, id: i64) -> StoreResult<InventoryItem> {
        sqlx::query_as::<_, InventoryItem>(
            "SELECT id, name, quantity FROM inventory_items WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Self::not_found(id))
    }

    async fn list(&self) -> StoreResult<Vec<InventoryItem>> {
        let items = sqlx::query_as::<_, InventoryItem>(
            "SELECT id, name, quantity FROM inventory_items ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    async fn update(&self, id: i64, data: UpdateInventoryItem) -> StoreResult<InventoryItem> {
        let item = sqlx::query_as::<_, InventoryItem>(
            r#"
            UPDATE inventory_items
            SET name = COALESCE(?, name),
                quantity = COALESCE(?, quantity)
            WHERE id = ?
            RETURNING id, name, quantity
            "#,
        )
        .bind(data.name)
        .bind(data.quantity)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Self::not_found(id))?;

        debug!(item_id = id, "Updated inventory item");
        Ok(item)
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM inventory_items WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Self::not_found(id));
        }

        debug!(item_id = id, "Deleted inventory item");
        Ok(())
    }
}
