//! Body / trailer disambiguator (spec.md §4.3). The hardest part of the
//! crate: after the description's blank-line separator, every following
//! line is speculatively tried as a footer trailer; a failed attempt
//! rewinds into body content unless a trailer has already been accepted,
//! in which case it's a hard error (spec.md §9's "key ordering
//! constraint").

use crate::commit::Footer;
use crate::error::{Diagnostic, ErrorKind, OffendingByte};
use crate::scanner::Scanner;
use crate::types::ascii_lower_string;
use crate::util::utf8_lossy_string;

pub(crate) struct Remainder {
    pub body: Option<String>,
    pub footers: Vec<Footer>,
}

const BREAKING_CHANGE_LITERAL: &[u8] = b"BREAKING CHANGE";

/// Entry point. `scanner` must be positioned right after the captured
/// description, i.e. at the description's terminating `\n`, or at EOF
/// if the description ran to the end of input.
pub(crate) fn parse_remainder(scanner: &mut Scanner<'_>) -> Result<Remainder, Diagnostic> {
    if scanner.at_eof() {
        return Ok(Remainder {
            body: None,
            footers: Vec::new(),
        });
    }

    scanner.bump(); // the description's own terminating `\n`

    if scanner.cur() != Some(b'\n') {
        return Err(Diagnostic::new(ErrorKind::MissingBlankLine, scanner.pos()));
    }

    let mut footers: Vec<Footer> = Vec::new();
    let mut body: Vec<u8> = Vec::new();
    let mut body_started = false;

    loop {
        let newlines_before = scanner.newline_count();
        while scanner.cur() == Some(b'\n') {
            scanner.bump();
        }
        let swallowed = scanner.newline_count() - newlines_before;

        if scanner.at_eof() {
            // A trailing blank-line run (or nothing at all) is discarded.
            break;
        }

        let probe_start = scanner.checkpoint();
        match try_recognize_trailer(scanner) {
            Ok((token, content)) => {
                footers.push(Footer { token, content });
                continue;
            }
            Err(failure) => {
                if !footers.is_empty() {
                    return Err(failure);
                }

                // Rewind: the swallowed run, minus the one newline that was
                // always required as a separator at this probe's entry
                // point, is preserved as literal blank lines in the body.
                let extra_blank_lines = swallowed.saturating_sub(1);
                for _ in 0..extra_blank_lines {
                    body.extend_from_slice(b"\n\n");
                }
                body_started = true;

                scanner.restore(probe_start);
                match body_collection_mode(scanner, &mut body) {
                    BodyExit::Eof => break,
                    BodyExit::ReenterProbe => continue,
                }
            }
        }
    }

    let body = if body_started && !body.is_empty() {
        Some(utf8_lossy_string(&body))
    } else {
        None
    };

    Ok(Remainder { body, footers })
}

fn try_recognize_trailer(scanner: &mut Scanner<'_>) -> Result<(String, String), Diagnostic> {
    let token = match scan_token(scanner) {
        Some(token) => token,
        None => return Err(trailer_failure(scanner)),
    };

    let is_colon_space = scanner.cur() == Some(b':') && scanner.peek(1) == Some(b' ');
    let is_space_hash = scanner.cur() == Some(b' ') && scanner.peek(1) == Some(b'#');
    if !(is_colon_space || is_space_hash) {
        return Err(trailer_failure(scanner));
    }
    scanner.bump();
    scanner.bump();

    let value_start = scanner.pos();
    while let Some(b) = scanner.cur() {
        if b == b'\n' {
            break;
        }
        scanner.bump();
    }
    if scanner.pos() == value_start {
        return Err(trailer_failure(scanner));
    }

    let content = utf8_lossy_string(scanner.slice(value_start, scanner.pos()));
    Ok((token, content))
}

fn trailer_failure(scanner: &Scanner<'_>) -> Diagnostic {
    let offending = OffendingByte(scanner.offending());
    let kind = if scanner.at_eof() {
        ErrorKind::IncompleteTrailer(offending)
    } else {
        ErrorKind::IllegalTrailerChar(offending)
    };
    Diagnostic::new(kind, scanner.pos())
}

fn scan_token(scanner: &mut Scanner<'_>) -> Option<String> {
    if scanner.matches_literal(BREAKING_CHANGE_LITERAL) {
        scanner.advance(BREAKING_CHANGE_LITERAL.len());
        return Some("breaking-change".to_string());
    }

    let start = scanner.pos();
    match scanner.cur() {
        Some(b) if b.is_ascii_alphanumeric() => {
            scanner.bump();
        }
        _ => return None,
    }
    while let Some(b) = scanner.cur() {
        if b.is_ascii_alphanumeric() || b == b'-' {
            scanner.bump();
        } else {
            break;
        }
    }
    Some(ascii_lower_string(scanner.slice(start, scanner.pos())))
}

enum BodyExit {
    Eof,
    ReenterProbe,
}

/// Accumulates bytes into `body` with the two-byte look-ahead: a byte
/// whose next two bytes are both `\n` is emitted and the probe is
/// re-entered at the first of the two newlines.
fn body_collection_mode(scanner: &mut Scanner<'_>, body: &mut Vec<u8>) -> BodyExit {
    let run_start = scanner.pos();
    loop {
        match scanner.cur() {
            None => {
                body.extend_from_slice(scanner.slice(run_start, scanner.pos()));
                return BodyExit::Eof;
            }
            Some(_) => {
                if scanner.peek(1) == Some(b'\n') && scanner.peek(2) == Some(b'\n') {
                    scanner.bump();
                    body.extend_from_slice(scanner.slice(run_start, scanner.pos()));
                    return BodyExit::ReenterProbe;
                }
                scanner.bump();
            }
        }
    }
}
