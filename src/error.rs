//! Error and warning types for the PatchBook parser.
//!
//! Stream-level problems (the input cannot be read, an export cannot
//! be rendered) are hard errors and abort the operation. Line-level
//! problems never halt a parse: they are collected as [`ParseWarning`]
//! values on the parse result, and the model stays well formed.

use thiserror::Error;

/// Result type alias using [`PatchbookError`].
pub type Result<T> = std::result::Result<T, PatchbookError>;

/// Unified error type for all PatchBook operations.
#[derive(Error, Debug)]
pub enum PatchbookError {
    /// Error reading the patch notation file
    #[error("Failed to read patch file '{path}': {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Error rendering the model export
    #[error("JSON export failed: {0}")]
    Json(#[from] serde_json::Error),

    /// A reporting view was asked for a module the patch doesn't have
    #[error("Unknown module '{name}'")]
    UnknownModule { name: String },
}

impl PatchbookError {
    /// Create an unknown-module error.
    pub fn unknown_module(name: impl Into<String>) -> Self {
        Self::UnknownModule { name: name.into() }
    }
}

/// Non-fatal signal recorded while parsing.
///
/// Warnings carry the 1-indexed input line they were raised on. The
/// caller decides whether to surface, log or assert on them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    /// A connection line used an operator token outside the registry;
    /// the connection was created with the fallback kind `cv`
    #[error("line {line}: unrecognized operator '{token}', defaulting to cv")]
    UnknownOperator { token: String, line: usize },

    /// A parameter continuation appeared before any bare `* module:`
    /// declaration; the line was ignored
    #[error("line {line}: parameter continuation without a preceding module declaration")]
    DanglingContinuation { line: usize },
}
