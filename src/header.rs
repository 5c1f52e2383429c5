//! Header continuation: scope, breaking mark, separator, description
//! (spec.md §4.2).

use crate::config::TypeSet;
use crate::error::{Diagnostic, ErrorKind, OffendingByte};
use crate::scanner::Scanner;
use crate::types::{self, ascii_lower_string};
use crate::util::utf8_lossy_string;

pub(crate) struct Header {
    pub commit_type: String,
    pub scope: Option<String>,
    pub breaking: bool,
    pub summary: String,
}

/// Parses the type through to the end of the description line. Leaves
/// the scanner positioned right after the description's terminating
/// `\n`, or at EOF if the description ran to the end of input.
pub(crate) fn parse(scanner: &mut Scanner<'_>, type_set: TypeSet) -> Result<Header, Diagnostic> {
    let commit_type = types::recognize(scanner, type_set)?;

    let scope = if scanner.cur() == Some(b'(') {
        scanner.bump();
        parse_scope(scanner)?
    } else {
        None
    };

    let breaking = if scanner.cur() == Some(b'!') {
        scanner.bump();
        true
    } else {
        false
    };

    match scanner.cur() {
        Some(b':') => {
            scanner.bump();
        }
        _ => {
            let offending = OffendingByte(scanner.offending());
            return Err(Diagnostic::new(ErrorKind::ExpectedColon(offending), scanner.pos()));
        }
    }

    let mut space_count = 0usize;
    while scanner.cur() == Some(b' ') {
        scanner.bump();
        space_count += 1;
    }

    match scanner.cur() {
        Some(b'\n') => {
            let offending = OffendingByte(b'\n');
            let kind = if space_count == 0 {
                ErrorKind::ExpectedWhitespace(offending)
            } else {
                ErrorKind::IllegalNewline
            };
            return Err(Diagnostic::new(kind, scanner.pos()));
        }
        None => {
            let offending = OffendingByte(scanner.offending());
            let kind = if space_count == 0 {
                ErrorKind::ExpectedWhitespace(offending)
            } else {
                ErrorKind::ExpectedDescription(offending)
            };
            return Err(Diagnostic::new(kind, scanner.pos()));
        }
        Some(b) => {
            if space_count == 0 {
                return Err(Diagnostic::new(
                    ErrorKind::ExpectedWhitespace(OffendingByte(b)),
                    scanner.pos(),
                ));
            }
        }
    }

    let start = scanner.pos();
    while let Some(b) = scanner.cur() {
        if b == b'\n' {
            break;
        }
        scanner.bump();
    }
    let summary = utf8_lossy_string(scanner.slice(start, scanner.pos()));
    // The description-terminating `\n` (or EOF) is left untouched here;
    // `body::parse_remainder` owns the blank-line-separator check.

    Ok(Header {
        commit_type,
        scope,
        breaking,
        summary,
    })
}

fn parse_scope(scanner: &mut Scanner<'_>) -> Result<Option<String>, Diagnostic> {
    let start = scanner.pos();
    loop {
        match scanner.cur() {
            Some(b')') => {
                let text = scanner.slice(start, scanner.pos());
                let scope = if text.is_empty() {
                    None
                } else {
                    Some(ascii_lower_string(text))
                };
                scanner.bump();
                return Ok(scope);
            }
            Some(b) if (0x20..=0x7E).contains(&b) && b != b'(' && b != b')' => {
                scanner.bump();
            }
            Some(b) => {
                return Err(Diagnostic::new(ErrorKind::IllegalScopeChar(OffendingByte(b)), scanner.pos()));
            }
            None => {
                let offending = OffendingByte(scanner.offending());
                return Err(Diagnostic::new(ErrorKind::ScopeIncomplete(offending), scanner.pos()));
            }
        }
    }
}
