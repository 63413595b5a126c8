//! Patch graph representation.
//!
//! This module provides the data model built up while parsing the
//! notation: the [`Patch`] root aggregate with its modules, ports,
//! connections and comments, plus the connection-kind registry.

mod graph;
mod types;

pub use graph::{Connection, Module, Patch, PortRef};
pub use types::{ConnectionId, ConnectionKind, KindLookup, FALLBACK_KIND, OPERATOR_KINDS};
