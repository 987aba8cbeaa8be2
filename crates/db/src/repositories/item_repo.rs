//! Repository for the `items` table.

use inventory_core::types::DbId;
use sqlx::PgPool;

use crate::models::item::{ItemChanges, ItemRow, NewItem};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, price, quantity, created_at, updated_at";

/// Provides CRUD operations for items.
pub struct ItemRepo;

impl ItemRepo {
    /// Insert a new item, returning the created row.
    ///
    /// Both timestamps come from the same `NOW()` so they are equal.
    pub async fn create(pool: &PgPool, input: &NewItem) -> Result<ItemRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO items (name, description, price, quantity, created_at, updated_at)
             VALUES ($1, $2, $3, $4, NOW(), NOW())
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ItemRow>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.price)
            .bind(input.quantity)
            .fetch_one(pool)
            .await
    }

    /// Find an item by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ItemRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM items WHERE id = $1");
        sqlx::query_as::<_, ItemRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all items, oldest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<ItemRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM items ORDER BY created_at ASC, id ASC");
        sqlx::query_as::<_, ItemRow>(&query).fetch_all(pool).await
    }

    /// Apply `changes` to an item and bump `updated_at`.
    ///
    /// `updated_at` moves even when `changes` is empty. `clock_timestamp()`
    /// is used instead of `NOW()` so the value advances past any earlier
    /// write. Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        changes: &ItemChanges,
    ) -> Result<Option<ItemRow>, sqlx::Error> {
        let query = format!(
            "UPDATE items SET
                name = COALESCE($2, name),
                description = CASE WHEN $3 THEN $4 ELSE description END,
                price = COALESCE($5, price),
                quantity = COALESCE($6, quantity),
                updated_at = GREATEST(clock_timestamp(), created_at)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ItemRow>(&query)
            .bind(id)
            .bind(&changes.name)
            .bind(changes.description.is_some())
            .bind(changes.description.clone().flatten())
            .bind(changes.price)
            .bind(changes.quantity)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete an item by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Total number of stored items.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM items")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
