//! Incremental patch builder.
//!
//! The builder consumes classified lines one at a time and mutates a
//! [`Patch`] it exclusively owns. It carries the only cross-line
//! state of the notation: the voice in effect, the module that
//! parameter continuations attach to, and the connection counter.
//! Both context values are overwritten, never stacked, by the next
//! matching line of their kind — processing order is the file order.

use tracing::{debug, trace};

use super::classify::{LineClassifier, LineForm};
use crate::error::ParseWarning;
use crate::patch::{ConnectionId, ConnectionKind, Patch};

/// Voice recorded on connections declared before any voice label.
pub const VOICE_NONE: &str = "none";

/// Result of a completed parse: the model plus any non-fatal warnings
/// collected along the way.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed {
    /// The finished patch graph
    pub patch: Patch,
    /// Line-level warnings; never fatal, the patch is well formed
    pub warnings: Vec<ParseWarning>,
}

/// Stateful builder driving patch construction from input lines.
pub struct PatchBuilder {
    classifier: LineClassifier,
    patch: Patch,
    voice: String,
    bare_module: Option<String>,
    next_connection_id: u32,
    line_no: usize,
    warnings: Vec<ParseWarning>,
}

impl PatchBuilder {
    /// Create a builder with an empty patch and default context.
    pub fn new() -> Self {
        Self {
            classifier: LineClassifier::new(),
            patch: Patch::new(),
            voice: VOICE_NONE.to_string(),
            bare_module: None,
            next_connection_id: 1,
            line_no: 0,
            warnings: Vec::new(),
        }
    }

    /// Consume one raw input line.
    pub fn feed_line(&mut self, line: &str) {
        self.line_no += 1;
        let form = self.classifier.classify(line);
        trace!(line = self.line_no, ?form, "classified line");

        match form {
            LineForm::Comment { text } => {
                debug!(line = self.line_no, %text, "comment");
                self.patch.add_comment(text);
            }
            LineForm::Voice { label } => {
                debug!(line = self.line_no, voice = %label, "voice label");
                self.voice = label;
            }
            LineForm::Connection {
                source,
                operator,
                target,
            } => {
                let lookup = ConnectionKind::from_operator(&operator);
                if !lookup.is_known() {
                    self.warnings.push(ParseWarning::UnknownOperator {
                        token: operator,
                        line: self.line_no,
                    });
                }
                let id = ConnectionId(self.next_connection_id);
                self.next_connection_id += 1;
                debug!(
                    line = self.line_no,
                    %id,
                    kind = %lookup.kind(),
                    voice = %self.voice,
                    source = %source.module,
                    source_port = %source.port,
                    target = %target.module,
                    target_port = %target.port,
                    "connection"
                );
                self.patch
                    .connect(id, lookup.kind(), &self.voice, source, target);
            }
            LineForm::ParamHeader { module } => {
                debug!(line = self.line_no, %module, "parameter declaration");
                // Only the continuation context changes; the module is
                // created when a parameter is actually assigned.
                self.bare_module = Some(module);
            }
            LineForm::Params { module, params } => {
                for (name, value) in params {
                    debug!(line = self.line_no, %module, %name, %value, "parameter");
                    self.patch.set_parameter(&module, &name, &value);
                }
            }
            LineForm::ParamLine { name, value } => match self.bare_module.as_deref() {
                Some(module) => {
                    debug!(line = self.line_no, %module, %name, %value, "parameter");
                    self.patch.set_parameter(module, &name, &value);
                }
                None => {
                    self.warnings.push(ParseWarning::DanglingContinuation {
                        line: self.line_no,
                    });
                }
            },
            LineForm::Unrecognized => {}
        }
    }

    /// Finish the parse and hand out the model.
    pub fn finish(self) -> Parsed {
        Parsed {
            patch: self.patch,
            warnings: self.warnings,
        }
    }
}

impl Default for PatchBuilder {
    fn default() -> Self {
        Self::new()
    }
}
