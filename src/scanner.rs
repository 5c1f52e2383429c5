//! Byte-level cursor over the input buffer.
//!
//! The scanner never copies: every capture is a byte-range into the
//! caller's input, carved out with [`Scanner::slice`]. It tracks
//! `last_newline`/`newline_count` so the body/trailer disambiguator
//! (see [`crate::body`]) can tell how many blank lines it swallowed
//! during a trailer probe without a second pass over the bytes.

/// A saved scanner position, restored on a failed trailer probe so the
/// body collector can re-scan the same bytes as ordinary content.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Checkpoint {
    p: usize,
    pb: usize,
    last_newline: usize,
    newline_count: usize,
}

pub(crate) struct Scanner<'a> {
    buf: &'a [u8],
    p: usize,
    pe: usize,
    pb: usize,
    last_newline: usize,
    newline_count: usize,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(buf: &'a [u8]) -> Self {
        Scanner {
            buf,
            p: 0,
            pe: buf.len(),
            pb: 0,
            last_newline: 0,
            newline_count: 0,
        }
    }

    pub(crate) fn pos(&self) -> usize {
        self.p
    }

    pub(crate) fn at_eof(&self) -> bool {
        self.p >= self.pe
    }

    pub(crate) fn cur(&self) -> Option<u8> {
        self.buf.get(self.p).copied()
    }

    pub(crate) fn peek(&self, n: usize) -> Option<u8> {
        self.buf.get(self.p + n).copied()
    }

    /// Consumes and returns the current byte, advancing `p`.
    pub(crate) fn bump(&mut self) -> Option<u8> {
        let b = self.cur()?;
        self.p += 1;
        if b == b'\n' {
            self.last_newline = self.p - 1;
            self.newline_count += 1;
        }
        Some(b)
    }

    /// Skips `n` bytes without individual newline bookkeeping; only used
    /// for the `BREAKING CHANGE` literal, which never contains a `\n`.
    pub(crate) fn advance(&mut self, n: usize) {
        self.p = (self.p + n).min(self.pe);
    }

    pub(crate) fn matches_literal(&self, literal: &[u8]) -> bool {
        self.buf[self.p..].starts_with(literal)
    }

    pub(crate) fn mark(&mut self) {
        self.pb = self.p;
    }

    pub(crate) fn slice_from_mark(&self) -> &'a [u8] {
        &self.buf[self.pb..self.p]
    }

    pub(crate) fn slice(&self, start: usize, end: usize) -> &'a [u8] {
        &self.buf[start..end]
    }

    /// The byte just behind the cursor, i.e. "the last character read" -
    /// what most of spec's EOF-flavored diagnostics quote.
    pub(crate) fn last_byte(&self) -> Option<u8> {
        if self.p == 0 {
            None
        } else {
            self.buf.get(self.p - 1).copied()
        }
    }

    pub(crate) fn newline_count(&self) -> usize {
        self.newline_count
    }

    /// The byte a diagnostic should quote: the current byte if one
    /// remains, otherwise the last byte consumed (for EOF-triggered
    /// errors). Returns `0` only for an error at position 0 of an empty
    /// input, which callers special-case before it matters.
    pub(crate) fn offending(&self) -> u8 {
        self.cur().or_else(|| self.last_byte()).unwrap_or(0)
    }

    pub(crate) fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            p: self.p,
            pb: self.pb,
            last_newline: self.last_newline,
            newline_count: self.newline_count,
        }
    }

    pub(crate) fn restore(&mut self, cp: Checkpoint) {
        self.p = cp.p;
        self.pb = cp.pb;
        self.last_newline = cp.last_newline;
        self.newline_count = cp.newline_count;
    }
}
