//! Diagnostics.
//!
//! Every [`Diagnostic`] renders as `"<kind message>: col=NN"`, `NN` being
//! the 0-based byte column zero-padded to width 2. [`ErrorKind`] carries
//! the offending byte, when the kind has one, as part of its own variant
//! data so the message and the raw byte stay in sync.

use std::fmt;

/// A single byte quoted in a diagnostic message, rendered the way the
/// wire format expects: `\n` as the two characters `\` and `n`, anything
/// else as itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffendingByte(pub u8);

impl From<u8> for OffendingByte {
    fn from(byte: u8) -> Self {
        OffendingByte(byte)
    }
}

impl fmt::Display for OffendingByte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == b'\n' {
            write!(f, "\\n")
        } else {
            write!(f, "{}", self.0 as char)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ErrorKind {
    #[error("empty input")]
    Empty,
    #[error("illegal '{0}' character in commit message type")]
    IllegalTypeChar(OffendingByte),
    #[error("incomplete commit message type after '{0}' character")]
    IncompleteType(OffendingByte),
    #[error("early exit after '{0}' character")]
    Early(OffendingByte),
    #[error("expecting colon (':') character, got '{0}' character")]
    ExpectedColon(OffendingByte),
    #[error("illegal '{0}' character in scope")]
    IllegalScopeChar(OffendingByte),
    #[error("expecting closing parentheses (')') character, got early exit after '{0}' character")]
    ScopeIncomplete(OffendingByte),
    #[error("expecting at least one white-space (' ') character, got '{0}' character")]
    ExpectedWhitespace(OffendingByte),
    #[error("illegal newline")]
    IllegalNewline,
    #[error("expecting a description text (without newlines) after '{0}' character")]
    ExpectedDescription(OffendingByte),
    #[error("missing a blank line")]
    MissingBlankLine,
    #[error("illegal '{0}' character in trailer")]
    IllegalTrailerChar(OffendingByte),
    #[error("incomplete footer trailer after '{0}' character")]
    IncompleteTrailer(OffendingByte),
}

impl ErrorKind {
    /// The raw offending byte, for callers that want it without re-parsing
    /// the rendered message.
    pub fn offending_byte(&self) -> Option<u8> {
        use ErrorKind::*;
        match self {
            IllegalTypeChar(b)
            | IncompleteType(b)
            | Early(b)
            | ExpectedColon(b)
            | IllegalScopeChar(b)
            | ScopeIncomplete(b)
            | ExpectedWhitespace(b)
            | ExpectedDescription(b)
            | IllegalTrailerChar(b)
            | IncompleteTrailer(b) => Some(b.0),
            Empty | IllegalNewline | MissingBlankLine => None,
        }
    }
}

/// A positioned parse failure: `kind` plus the 0-based byte column at
/// which it was detected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: col={column:02}")]
pub struct Diagnostic {
    pub kind: ErrorKind,
    pub column: usize,
}

impl Diagnostic {
    pub(crate) fn new(kind: ErrorKind, column: usize) -> Self {
        Diagnostic { kind, column }
    }
}
