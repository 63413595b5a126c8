//! Core types for patch representation.

use std::fmt;

use serde::Serialize;

/// A unique identifier for a connection in the patch.
/// Ids are assigned sequentially starting at 1, in parse order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ConnectionId(pub u32);

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Semantic kind of a patch cable connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionKind {
    /// Audio-rate signal
    Audio,
    /// Control voltage
    Cv,
    /// Pitch (1V/oct) control voltage
    Pitch,
    /// Gate signal
    Gate,
    /// Trigger signal
    Trigger,
    /// Clock signal
    Clock,
}

impl ConnectionKind {
    /// Kind name as it appears in exports and reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Audio => "audio",
            Self::Cv => "cv",
            Self::Pitch => "pitch",
            Self::Gate => "gate",
            Self::Trigger => "trigger",
            Self::Clock => "clock",
        }
    }
}

impl fmt::Display for ConnectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operator tokens of the notation, in registry order.
///
/// The order is significant for reporting: connection listings group
/// kinds in this sequence.
pub const OPERATOR_KINDS: [(&str, ConnectionKind); 6] = [
    ("->", ConnectionKind::Audio),
    (">>", ConnectionKind::Cv),
    ("p>", ConnectionKind::Pitch),
    ("g>", ConnectionKind::Gate),
    ("t>", ConnectionKind::Trigger),
    ("c>", ConnectionKind::Clock),
];

/// Kind used when an operator token is not in the registry.
pub const FALLBACK_KIND: ConnectionKind = ConnectionKind::Cv;

/// Result of an operator lookup.
///
/// An unrecognized token still resolves to [`FALLBACK_KIND`] so the
/// parse can continue; the caller decides whether to surface a warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindLookup {
    /// Token is in the registry.
    Known(ConnectionKind),
    /// Token is not in the registry; carries the fallback kind.
    Fallback(ConnectionKind),
}

impl KindLookup {
    /// The resolved kind, registry hit or fallback.
    pub fn kind(&self) -> ConnectionKind {
        match *self {
            Self::Known(kind) | Self::Fallback(kind) => kind,
        }
    }

    /// Whether the token was found in the registry.
    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }
}

impl ConnectionKind {
    /// Resolve an operator token against the registry.
    pub fn from_operator(token: &str) -> KindLookup {
        for (op, kind) in OPERATOR_KINDS {
            if op == token {
                return KindLookup::Known(kind);
            }
        }
        KindLookup::Fallback(FALLBACK_KIND)
    }
}
