//! Local item list kept in step with the server.
//!
//! Every operation asks the server first and only touches `items` once the
//! server has confirmed the change. A failure leaves `items` as it was and
//! records a message the UI can show with a retry prompt.

use inventory_core::item::{CreateItem, Item, UpdateItem};
use inventory_core::types::DbId;

use crate::client::RpcClient;
use crate::error::ClientError;

pub const LOAD_FAILED: &str = "Failed to load items. Please try again.";
pub const CREATE_FAILED: &str = "Failed to create item. Please try again.";
pub const UPDATE_FAILED: &str = "Failed to update item. Please try again.";
pub const DELETE_FAILED: &str = "Failed to delete item. Please try again.";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemListState {
    pub items: Vec<Item>,
    /// Message from the last failed operation, cleared when the next one
    /// starts.
    pub error: Option<String>,
}

impl ItemListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the list with the server's.
    pub async fn load(&mut self, client: &RpcClient) -> Result<(), ClientError> {
        self.error = None;
        match client.get_items().await {
            Ok(items) => {
                self.items = items;
                Ok(())
            }
            Err(e) => Err(self.fail("load", LOAD_FAILED, e)),
        }
    }

    pub async fn create(
        &mut self,
        client: &RpcClient,
        input: &CreateItem,
    ) -> Result<Item, ClientError> {
        self.error = None;
        match client.create_item(input).await {
            Ok(item) => {
                self.apply_created(item.clone());
                Ok(item)
            }
            Err(e) => Err(self.fail("create", CREATE_FAILED, e)),
        }
    }

    pub async fn update(
        &mut self,
        client: &RpcClient,
        input: &UpdateItem,
    ) -> Result<Item, ClientError> {
        self.error = None;
        match client.update_item(input).await {
            Ok(item) => {
                self.apply_updated(item.clone());
                Ok(item)
            }
            Err(e) => Err(self.fail("update", UPDATE_FAILED, e)),
        }
    }

    pub async fn delete(&mut self, client: &RpcClient, id: DbId) -> Result<(), ClientError> {
        self.error = None;
        match client.delete_item(id).await {
            Ok(_) => {
                self.apply_deleted(id);
                Ok(())
            }
            Err(e) => Err(self.fail("delete", DELETE_FAILED, e)),
        }
    }

    /// Append a confirmed new item.
    pub fn apply_created(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Swap in the confirmed version of an item, keeping its position.
    pub fn apply_updated(&mut self, item: Item) {
        if let Some(slot) = self.items.iter_mut().find(|i| i.id == item.id) {
            *slot = item;
        }
    }

    pub fn apply_deleted(&mut self, id: DbId) {
        self.items.retain(|i| i.id != id);
    }

    fn fail(&mut self, operation: &str, message: &str, err: ClientError) -> ClientError {
        tracing::warn!(operation, error = %err, "Item operation failed");
        self.error = Some(message.to_string());
        err
    }
}
