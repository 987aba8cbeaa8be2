//! Item row model and write DTOs.

use inventory_core::error::CoreError;
use inventory_core::item::{CreateItem, Item, UpdateItem};
use inventory_core::price;
use inventory_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use sqlx::FromRow;

/// A row from the `items` table.
#[derive(Debug, Clone, FromRow)]
pub struct ItemRow {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub quantity: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<ItemRow> for Item {
    fn from(row: ItemRow) -> Self {
        Item {
            id: row.id,
            name: row.name,
            description: row.description,
            price: price::to_number(row.price),
            quantity: row.quantity,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Values for a new row, with the price already in fixed-point form.
#[derive(Debug, Clone)]
pub struct NewItem {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub quantity: i32,
}

impl TryFrom<CreateItem> for NewItem {
    type Error = CoreError;

    fn try_from(input: CreateItem) -> Result<Self, Self::Error> {
        Ok(NewItem {
            price: price::to_fixed(input.price)?,
            name: input.name,
            description: input.description,
            quantity: input.quantity,
        })
    }
}

/// Partial update for an existing row. `None` leaves a column untouched.
#[derive(Debug, Clone, Default)]
pub struct ItemChanges {
    pub name: Option<String>,
    /// `Some(None)` clears the description.
    pub description: Option<Option<String>>,
    pub price: Option<Decimal>,
    pub quantity: Option<i32>,
}

impl TryFrom<UpdateItem> for ItemChanges {
    type Error = CoreError;

    fn try_from(input: UpdateItem) -> Result<Self, Self::Error> {
        Ok(ItemChanges {
            price: input.price.map(price::to_fixed).transpose()?,
            name: input.name,
            description: input.description,
            quantity: input.quantity,
        })
    }
}
