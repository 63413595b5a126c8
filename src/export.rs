//! JSON export of a finished patch.
//!
//! The export is a read-only document view over a [`Patch`]: top-level
//! `info` (format version), `modules` (parameters plus
//! `connections.out` / `connections.in` per module) and `comments`.
//! Map keys come from `BTreeMap`s, so the rendered document is
//! deterministic for a given patch.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::Result;
use crate::patch::{Connection, Module, Patch};

/// Serializable document view of a patch.
#[derive(Debug, Serialize)]
pub struct PatchDocument<'a> {
    info: Info<'a>,
    modules: BTreeMap<&'a str, ModuleDocument<'a>>,
    comments: &'a [String],
}

#[derive(Debug, Serialize)]
struct Info<'a> {
    patchbook_version: &'a str,
}

#[derive(Debug, Serialize)]
struct ModuleDocument<'a> {
    parameters: &'a BTreeMap<String, String>,
    connections: ConnectionsDocument<'a>,
}

#[derive(Debug, Serialize)]
struct ConnectionsDocument<'a> {
    #[serde(rename = "out")]
    outputs: &'a BTreeMap<String, Vec<Connection>>,
    #[serde(rename = "in")]
    inputs: &'a BTreeMap<String, Connection>,
}

impl<'a> PatchDocument<'a> {
    /// Build the document view for a patch.
    pub fn new(patch: &'a Patch) -> Self {
        Self {
            info: Info {
                patchbook_version: &patch.version,
            },
            modules: patch
                .modules
                .iter()
                .map(|(name, module)| (name.as_str(), ModuleDocument::new(module)))
                .collect(),
            comments: &patch.comments,
        }
    }
}

impl<'a> ModuleDocument<'a> {
    fn new(module: &'a Module) -> Self {
        Self {
            parameters: &module.parameters,
            connections: ConnectionsDocument {
                outputs: &module.outputs,
                inputs: &module.inputs,
            },
        }
    }
}

/// Render a patch as a compact JSON string.
pub fn to_json(patch: &Patch) -> Result<String> {
    Ok(serde_json::to_string(&PatchDocument::new(patch))?)
}

/// Render a patch as pretty-printed JSON.
pub fn to_json_pretty(patch: &Patch) -> Result<String> {
    Ok(serde_json::to_string_pretty(&PatchDocument::new(patch))?)
}
