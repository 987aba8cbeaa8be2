//! Handlers for the item procedures.

use inventory_core::error::CoreError;
use inventory_core::item::{self, CreateItem, DeleteResult, Item, ItemId, UpdateItem};
use inventory_core::types::DbId;
use inventory_db::models::item::{ItemChanges, NewItem};
use inventory_db::repositories::ItemRepo;
use inventory_db::DbPool;

use crate::error::{AppError, AppResult};

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: item::ENTITY,
        id,
    })
}

/// `createItem`: insert a row and return it with a numeric price.
pub async fn create_item(pool: &DbPool, input: CreateItem) -> AppResult<Item> {
    let new_item = NewItem::try_from(input)?;
    let row = ItemRepo::create(pool, &new_item).await?;

    tracing::info!(item_id = row.id, name = %row.name, "Item created");
    Ok(row.into())
}

/// `getItems`: every item, oldest first.
pub async fn get_items(pool: &DbPool) -> AppResult<Vec<Item>> {
    let rows = ItemRepo::list(pool).await?;
    Ok(rows.into_iter().map(Item::from).collect())
}

/// `getItem`: a missing id is `None`, not an error.
pub async fn get_item(pool: &DbPool, input: ItemId) -> AppResult<Option<Item>> {
    let row = ItemRepo::find_by_id(pool, input.id).await?;
    Ok(row.map(Item::from))
}

/// `updateItem`: patch the present fields and always bump `updated_at`.
///
/// Existence check and write are one `UPDATE ... RETURNING`, so a missing
/// row surfaces as `NotFound` without a separate lookup.
pub async fn update_item(pool: &DbPool, input: UpdateItem) -> AppResult<Item> {
    let id = input.id;
    let touch_only = input.is_touch_only();
    let changes = ItemChanges::try_from(input)?;

    let row = ItemRepo::update(pool, id, &changes)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(item_id = id, touch_only, "Item updated");
    Ok(row.into())
}

/// `deleteItem`: hard delete. The `DELETE` row count is authoritative.
pub async fn delete_item(pool: &DbPool, input: ItemId) -> AppResult<DeleteResult> {
    let deleted = ItemRepo::delete(pool, input.id).await?;
    if !deleted {
        return Err(not_found(input.id));
    }

    tracing::info!(item_id = input.id, "Item deleted");
    Ok(DeleteResult { success: true })
}
