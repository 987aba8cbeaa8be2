//! Catalogue of the remote procedures the server exposes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// Whether a procedure reads (`GET`) or writes (`POST`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcedureKind {
    Query,
    Mutation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Procedure {
    Healthcheck,
    CreateItem,
    GetItems,
    GetItem,
    UpdateItem,
    DeleteItem,
}

impl Procedure {
    pub const ALL: [Procedure; 6] = [
        Procedure::Healthcheck,
        Procedure::CreateItem,
        Procedure::GetItems,
        Procedure::GetItem,
        Procedure::UpdateItem,
        Procedure::DeleteItem,
    ];

    /// The name used in the URL path, e.g. `/rpc/createItem`.
    pub fn name(self) -> &'static str {
        match self {
            Procedure::Healthcheck => "healthcheck",
            Procedure::CreateItem => "createItem",
            Procedure::GetItems => "getItems",
            Procedure::GetItem => "getItem",
            Procedure::UpdateItem => "updateItem",
            Procedure::DeleteItem => "deleteItem",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    pub fn kind(self) -> ProcedureKind {
        match self {
            Procedure::Healthcheck | Procedure::GetItems | Procedure::GetItem => {
                ProcedureKind::Query
            }
            Procedure::CreateItem | Procedure::UpdateItem | Procedure::DeleteItem => {
                ProcedureKind::Mutation
            }
        }
    }
}

impl fmt::Display for Procedure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of `healthcheck`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// `ok` when the store is reachable, `degraded` otherwise.
    pub status: String,
    pub timestamp: Timestamp,
    pub version: String,
    pub db_healthy: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for procedure in Procedure::ALL {
            assert_eq!(Procedure::from_name(procedure.name()), Some(procedure));
        }
    }

    #[test]
    fn unknown_and_miscased_names_are_rejected() {
        assert_eq!(Procedure::from_name("dropTable"), None);
        assert_eq!(Procedure::from_name("CreateItem"), None);
    }

    #[test]
    fn reads_are_queries_and_writes_are_mutations() {
        assert_eq!(Procedure::GetItem.kind(), ProcedureKind::Query);
        assert_eq!(Procedure::GetItems.kind(), ProcedureKind::Query);
        assert_eq!(Procedure::Healthcheck.kind(), ProcedureKind::Query);
        assert_eq!(Procedure::CreateItem.kind(), ProcedureKind::Mutation);
        assert_eq!(Procedure::UpdateItem.kind(), ProcedureKind::Mutation);
        assert_eq!(Procedure::DeleteItem.kind(), ProcedureKind::Mutation);
    }
}
