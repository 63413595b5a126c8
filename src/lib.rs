//! # PatchBook
//!
//! Parser and graph model for the PatchBook modular synthesizer patch
//! notation.
//!
//! PatchBook files describe a patch one line at a time: cable
//! connections between module ports, parameter settings, voice labels
//! and free-text comments. This library turns such a file into a
//! structured [`Patch`] graph that can be inspected, reported on, or
//! exported as JSON.
//!
//! ## Architecture
//!
//! - [`notation`] - Line classifier and incremental patch builder
//! - [`patch`] - The patch graph model and connection-kind registry
//! - [`export`] - JSON document view of a finished patch
//! - [`report`] - Human-readable projections (module detail, by-kind)
//! - [`error`] - Error and warning types
//!
//! ## Usage
//!
//! ```
//! use patchbook::notation;
//!
//! let parsed = notation::parse("\
//! // Lead patch
//! VOICE 1:
//! - osc1(saw) -> filter1(in)
//! * filter1: cutoff = 800
//! ");
//!
//! assert!(parsed.warnings.is_empty());
//! let filter = parsed.patch.module("filter1").unwrap();
//! assert_eq!(filter.parameters["cutoff"], "800");
//! ```
//!
//! ## Parsing model
//!
//! Parsing is strictly sequential and never fails once the input text
//! is in hand: each line is classified into exactly one grammatical
//! form (fixed priority order, first match wins) and dispatched to a
//! graph mutation. Lines matching no form are dropped. The only soft
//! error — an operator token outside the registry — downgrades the
//! connection to `cv` and is reported as a warning on the result.

pub mod error;
pub mod export;
pub mod notation;
pub mod patch;
pub mod report;

// Re-export main types for convenience
pub use error::{ParseWarning, PatchbookError, Result};
pub use notation::{parse, parse_file, Parsed, PatchBuilder};
pub use patch::{Connection, ConnectionId, ConnectionKind, Module, Patch, PortRef};

/// Notation format identifier carried by every parsed patch.
pub const PATCHBOOK_VERSION: &str = "c1";
