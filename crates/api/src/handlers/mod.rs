//! Procedure handlers.
//!
//! Handlers are plain async functions: they take the pool explicitly plus
//! already-decoded input, delegate to the repository in `inventory_db`, and
//! map errors via [`AppError`](crate::error::AppError). The RPC router in
//! [`crate::routes::rpc`] is the only caller in production.

pub mod health;
pub mod item;
