//! Patch graph structure.

use std::collections::BTreeMap;

use serde::Serialize;

use super::types::{ConnectionId, ConnectionKind};

/// One endpoint of a connection: a module name and a port name on it.
///
/// Names are stored lower-cased and trimmed, as extracted from the
/// notation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortRef {
    /// Module name
    pub module: String,
    /// Port name on that module
    pub port: String,
}

impl PortRef {
    /// Create a port reference.
    pub fn new(module: impl Into<String>, port: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            port: port.into(),
        }
    }
}

/// One directed link between an output port and an input port.
///
/// Every connection is recorded twice: once on the source module's
/// output port and once on the destination module's input port. The
/// two records share `id`, `kind` and `voice`; `peer` holds the other
/// endpoint, so the output-side record points at the destination and
/// the input-side record points back at the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Connection {
    /// Patch-wide unique id, increasing in parse order
    pub id: ConnectionId,
    /// Semantic kind of the signal
    pub kind: ConnectionKind,
    /// Voice label in effect when the connection was declared
    pub voice: String,
    /// The opposite endpoint of the link
    pub peer: PortRef,
}

/// A named unit of the patch graph: parameters plus input/output ports.
///
/// Modules are created lazily on first reference from a connection
/// endpoint or a parameter assignment, never speculatively. A module
/// that was only ever a parameter target has empty port maps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Module {
    /// Parameter values; a later assignment to the same name overwrites
    pub parameters: BTreeMap<String, String>,
    /// Outgoing connections per output port; one port may fan out to
    /// many destinations
    pub outputs: BTreeMap<String, Vec<Connection>>,
    /// Incoming connection per input port; at most one — a later
    /// connection into an occupied port replaces the earlier record
    pub inputs: BTreeMap<String, Connection>,
}

/// The complete parsed patch: modules, connections, comments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch {
    /// Notation format identifier
    pub version: String,
    /// All modules referenced by the patch, keyed by name
    pub modules: BTreeMap<String, Module>,
    /// Free-text comments in file order
    pub comments: Vec<String>,
}

impl Patch {
    /// Create an empty patch.
    pub fn new() -> Self {
        Self {
            version: crate::PATCHBOOK_VERSION.to_string(),
            modules: BTreeMap::new(),
            comments: Vec::new(),
        }
    }

    /// Append a free-text comment.
    pub fn add_comment(&mut self, text: impl Into<String>) {
        self.comments.push(text.into());
    }

    /// Get a module by name, creating it empty if absent.
    pub fn module_mut(&mut self, name: &str) -> &mut Module {
        self.modules.entry(name.to_string()).or_default()
    }

    /// Look up a module by name.
    pub fn module(&self, name: &str) -> Option<&Module> {
        self.modules.get(name)
    }

    /// Assign a parameter on a module, creating the module if absent.
    /// Re-assigning an existing name overwrites the previous value.
    pub fn set_parameter(&mut self, module: &str, name: &str, value: &str) {
        self.module_mut(module)
            .parameters
            .insert(name.to_string(), value.to_string());
    }

    /// Record a directed connection from an output port to an input
    /// port.
    ///
    /// Creates both endpoint modules as needed and writes the paired
    /// records in one step: the source side is appended to the output
    /// port's fan-out list, the destination side replaces whatever the
    /// input port held before.
    pub fn connect(
        &mut self,
        id: ConnectionId,
        kind: ConnectionKind,
        voice: &str,
        source: PortRef,
        target: PortRef,
    ) {
        let out_record = Connection {
            id,
            kind,
            voice: voice.to_string(),
            peer: target.clone(),
        };
        let in_record = Connection {
            id,
            kind,
            voice: voice.to_string(),
            peer: source.clone(),
        };

        self.module_mut(&source.module)
            .outputs
            .entry(source.port)
            .or_default()
            .push(out_record);
        self.module_mut(&target.module)
            .inputs
            .insert(target.port, in_record);
    }
}

impl Default for Patch {
    fn default() -> Self {
        Self::new()
    }
}
