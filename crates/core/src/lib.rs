//! Domain types shared by the inventory server, its store, and its clients.

pub mod error;
pub mod item;
pub mod price;
pub mod rpc;
pub mod types;
