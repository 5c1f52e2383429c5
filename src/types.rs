//! Type-set recognizers (spec.md §4.1).
//!
//! Minimal/Conventional/Falco are a prefix match against a fixed word
//! table, maintained as the set of still-possible candidates; this
//! collapses to a handful of byte comparisons per input character
//! instead of a generated goto-table. FreeForm just scans until the
//! scope/breaking/colon boundary.

use crate::config::TypeSet;
use crate::error::{Diagnostic, ErrorKind, OffendingByte};
use crate::scanner::Scanner;

const MINIMAL: &[&[u8]] = &[b"fix", b"feat"];

const CONVENTIONAL: &[&[u8]] = &[
    b"build", b"chore", b"ci", b"docs", b"feat", b"fix", b"perf", b"refactor", b"revert", b"style",
    b"test",
];

const FALCO: &[&[u8]] = &[
    b"build", b"chore", b"ci", b"docs", b"feat", b"fix", b"new", b"perf", b"revert", b"rule",
    b"test", b"update",
];

/// Recognizes the type lexeme at the scanner's current position and
/// returns it lower-cased. Leaves the scanner positioned at the first
/// byte after the type (the `(`, `!`, or `:` that the header parser
/// dispatches on).
pub(crate) fn recognize(scanner: &mut Scanner<'_>, type_set: TypeSet) -> Result<String, Diagnostic> {
    if scanner.at_eof() {
        return Err(Diagnostic::new(ErrorKind::Empty, 0));
    }
    match type_set {
        TypeSet::Minimal => recognize_vocabulary(scanner, MINIMAL),
        TypeSet::Conventional => recognize_vocabulary(scanner, CONVENTIONAL),
        TypeSet::Falco => recognize_vocabulary(scanner, FALCO),
        TypeSet::FreeForm => recognize_free_form(scanner),
    }
}

fn recognize_vocabulary(scanner: &mut Scanner<'_>, vocabulary: &[&[u8]]) -> Result<String, Diagnostic> {
    let mut candidates: Vec<&[u8]> = vocabulary.to_vec();
    let mut pos = 0usize;

    loop {
        match scanner.cur() {
            None => {
                let offending = OffendingByte(scanner.offending());
                return match candidates.iter().find(|w| w.len() == pos) {
                    Some(_) => Err(Diagnostic::new(ErrorKind::Early(offending), scanner.pos())),
                    None => Err(Diagnostic::new(ErrorKind::IncompleteType(offending), scanner.pos())),
                };
            }
            Some(b) if b.is_ascii_alphabetic() => {
                let lower = b.to_ascii_lowercase();
                let next: Vec<&[u8]> = candidates
                    .iter()
                    .copied()
                    .filter(|w| w.len() > pos && w[pos].to_ascii_lowercase() == lower)
                    .collect();
                if next.is_empty() {
                    return Err(Diagnostic::new(
                        ErrorKind::IllegalTypeChar(OffendingByte(b)),
                        scanner.pos(),
                    ));
                }
                candidates = next;
                scanner.bump();
                pos += 1;
            }
            Some(b) => {
                return match candidates.iter().find(|w| w.len() == pos) {
                    Some(word) => Ok(ascii_lower_string(word)),
                    None => Err(Diagnostic::new(
                        ErrorKind::IllegalTypeChar(OffendingByte(b)),
                        scanner.pos(),
                    )),
                };
            }
        }
    }
}

fn recognize_free_form(scanner: &mut Scanner<'_>) -> Result<String, Diagnostic> {
    let start = scanner.pos();
    loop {
        match scanner.cur() {
            None => {
                if scanner.pos() == start {
                    return Err(Diagnostic::new(ErrorKind::Empty, 0));
                }
                return Err(Diagnostic::new(
                    ErrorKind::Early(OffendingByte(scanner.offending())),
                    scanner.pos(),
                ));
            }
            Some(b'(') | Some(b'!') => break,
            Some(b':') if scanner.peek(1) == Some(b' ') => break,
            Some(b) if (0x20..=0x7E).contains(&b) => {
                scanner.bump();
            }
            Some(b) => {
                return Err(Diagnostic::new(
                    ErrorKind::IllegalTypeChar(OffendingByte(b)),
                    scanner.pos(),
                ));
            }
        }
    }

    if scanner.pos() == start {
        let offending = OffendingByte(scanner.cur().expect("loop only breaks on Some"));
        return Err(Diagnostic::new(ErrorKind::IllegalTypeChar(offending), scanner.pos()));
    }

    Ok(ascii_lower_string(scanner.slice(start, scanner.pos())))
}

pub(crate) fn ascii_lower_string(bytes: &[u8]) -> String {
    bytes.iter().map(|b| b.to_ascii_lowercase() as char).collect()
}
