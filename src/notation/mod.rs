//! Parser for the PatchBook patch notation.
//!
//! The notation is line-oriented and human-editable: each line
//! describes one comment, voice label, connection or parameter
//! assignment. Lines that match no form are silently ignored, so
//! prose can be interleaved with patch data.
//!
//! # Grammar Overview
//!
//! ```text
//! patch              = { line }
//! comment            = "//" [" "] text
//! voice-label        = text ":"                ; text without '*', '-', '|'
//! connection         = "- " mod "(" port ")" " " op " " mod "(" port ")" [" [" text "]"]
//! param-decl         = "* " mod ":" [" " name " = " value { " | " name " = " value }]
//! param-continuation = "|" name " = " value    ; requires no '*' on the line
//! op                 = "->" | ">>" | "p>" | "g>" | "t>" | "c>"
//! ```
//!
//! # Operators
//!
//! | Token | Kind    |
//! |-------|---------|
//! | `->`  | audio   |
//! | `>>`  | cv      |
//! | `p>`  | pitch   |
//! | `g>`  | gate    |
//! | `t>`  | trigger |
//! | `c>`  | clock   |
//!
//! An operator outside this table still produces a connection — of kind
//! `cv`, with a [`ParseWarning`](crate::error::ParseWarning) recorded.
//!
//! # Example
//!
//! ```text
//! // Simple lead voice
//! VOICE 1:
//! - osc1(saw) -> filter1(in)
//! - lfo1(out) >> filter1(cutoff) [slow sweep]
//!
//! * filter1: cutoff = 800 | resonance = 0.5
//! * delay1:
//! | time = 350ms
//! | feedback = 0.4
//! ```
//!
//! Module, port and parameter names are lower-cased; voice labels are
//! upper-cased. Processing is strictly sequential: the voice label and
//! the continuation target are carried from line to line.

mod builder;
mod classify;

pub use builder::{Parsed, PatchBuilder, VOICE_NONE};
pub use classify::{LineClassifier, LineForm};

use std::path::Path;

use crate::error::{PatchbookError, Result};

/// Parse a complete notation string into a patch model.
///
/// Never fails: malformed lines are dropped and soft errors are
/// collected as warnings on the returned [`Parsed`].
pub fn parse(input: &str) -> Parsed {
    let mut builder = PatchBuilder::new();
    for line in input.lines() {
        builder.feed_line(line);
    }
    builder.finish()
}

/// Parse a notation file.
pub fn parse_file(path: &Path) -> Result<Parsed> {
    let content = std::fs::read_to_string(path).map_err(|e| PatchbookError::FileRead {
        path: path.display().to_string(),
        source: e,
    })?;
    Ok(parse(&content))
}
