//! Client side of the inventory service.
//!
//! [`RpcClient`] calls the `/rpc/{procedure}` endpoint over HTTP and
//! [`ItemListState`] keeps the item list a UI renders from, changing it
//! only after the server has confirmed each operation.

pub mod client;
pub mod error;
pub mod state;

pub use client::RpcClient;
pub use error::ClientError;
pub use state::ItemListState;
