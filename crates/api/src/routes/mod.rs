//! Route definitions.
//!
//! ```text
//! /health                          GET   liveness + database status
//!
//! /rpc/healthcheck                 GET   healthcheck
//! /rpc/getItems                    GET   list items
//! /rpc/getItem?input={"id":1}      GET   single item or null
//! /rpc/createItem                  POST  create item
//! /rpc/updateItem                  POST  patch item
//! /rpc/deleteItem                  POST  delete item
//! ```

pub mod health;
pub mod rpc;
