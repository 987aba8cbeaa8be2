//! Row structs and write DTOs for the store.
//!
//! Rows derive `FromRow`; conversion into the wire types from
//! `inventory_core` happens here so callers never see fixed-point prices.

pub mod item;
