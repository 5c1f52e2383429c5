//! Parser entry point, result assembly, and the best-effort gate
//! (spec.md §4.4, §4.5, §7).

use crate::body::{self, Remainder};
use crate::commit::{CommitType, ConventionalCommit, Footer, Footers};
use crate::config::{ParserConfig, TypeSet};
use crate::error::Diagnostic;
use crate::header::{self, Header};
use crate::scanner::Scanner;

/// The three reachable outcomes of a `parse` call (spec.md §4.5):
/// success, pure failure, or a best-effort partial record alongside the
/// diagnostic that stopped it. Modeled as an enum rather than a pair of
/// `Option`s so the unreachable "neither present" state can't be
/// constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    Complete(ConventionalCommit),
    Partial(ConventionalCommit, Diagnostic),
    Failed(Diagnostic),
}

impl ParseOutcome {
    pub fn ok(&self) -> Option<&ConventionalCommit> {
        match self {
            ParseOutcome::Complete(c) | ParseOutcome::Partial(c, _) => Some(c),
            ParseOutcome::Failed(_) => None,
        }
    }

    pub fn err(&self) -> Option<&Diagnostic> {
        match self {
            ParseOutcome::Complete(_) => None,
            ParseOutcome::Partial(_, e) | ParseOutcome::Failed(e) => Some(e),
        }
    }

    /// Drops a partial record, keeping only the diagnostic, for callers
    /// that want plain `Result` ergonomics.
    pub fn into_result(self) -> Result<ConventionalCommit, Diagnostic> {
        match self {
            ParseOutcome::Complete(c) => Ok(c),
            ParseOutcome::Partial(_, e) => Err(e),
            ParseOutcome::Failed(e) => Err(e),
        }
    }
}

/// A reusable parser. Holds only configuration; all per-call state lives
/// on the [`Scanner`] built fresh inside [`Parser::parse`], so a single
/// instance may be called repeatedly and sequentially, but never from
/// two threads at once (spec.md §5).
#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    pub fn new(config: ParserConfig) -> Self {
        Parser { config }
    }

    pub fn parse(&self, input: &[u8]) -> ParseOutcome {
        #[cfg(feature = "tracing")]
        tracing::debug!(len = input.len(), "parsing commit message");

        let mut scanner = Scanner::new(input);
        let header = match header::parse(&mut scanner, self.config.type_set) {
            Ok(header) => header,
            Err(diagnostic) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(%diagnostic, "header parse failed");
                return ParseOutcome::Failed(diagnostic);
            }
        };

        match body::parse_remainder(&mut scanner) {
            Ok(remainder) => ParseOutcome::Complete(assemble(header, remainder)),
            Err(diagnostic) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(%diagnostic, "body/trailer parse failed");
                if self.config.best_effort {
                    let commit = assemble(
                        header,
                        Remainder {
                            body: None,
                            footers: Vec::new(),
                        },
                    );
                    ParseOutcome::Partial(commit, diagnostic)
                } else {
                    ParseOutcome::Failed(diagnostic)
                }
            }
        }
    }
}

fn assemble(header: Header, remainder: Remainder) -> ConventionalCommit {
    let footer_breaking = remainder
        .footers
        .iter()
        .any(|f: &Footer| f.token == "breaking-change");

    ConventionalCommit {
        commit_type: CommitType::from_lower(&header.commit_type),
        scope: header.scope,
        breaking: header.breaking || footer_breaking,
        summary: header.summary,
        body: remainder.body,
        footers: Footers(remainder.footers),
    }
}

/// Parses `input` with the default configuration (`TypeSet::Conventional`,
/// best-effort off).
pub fn parse(input: &str) -> ParseOutcome {
    Parser::new(ParserConfig::default()).parse(input.as_bytes())
}

/// Parses `input` with an explicit configuration.
pub fn parse_with(input: &str, config: ParserConfig) -> ParseOutcome {
    Parser::new(config).parse(input.as_bytes())
}

/// Parses only the header line: type, scope, breaking mark, separator,
/// description. Never enters the body/trailer phase, so the resulting
/// record always has `body: None` and no footers, and a `\n` after the
/// description never triggers `MISSING_BLANK_LINE`.
pub fn parse_summary(input: &str) -> ParseOutcome {
    let mut scanner = Scanner::new(input.as_bytes());
    match header::parse(&mut scanner, TypeSet::default()) {
        Ok(header) => ParseOutcome::Complete(assemble(
            header,
            Remainder {
                body: None,
                footers: Vec::new(),
            },
        )),
        Err(diagnostic) => ParseOutcome::Failed(diagnostic),
    }
}

const SCRATCH_HEADER: &str = "chore: x\n\n";

/// Runs the body/trailer disambiguator directly over `input`, as if it
/// were the remainder of a message whose header was `chore: x`. Columns
/// in any returned diagnostic are relative to this synthetic prefix
/// (10 bytes), not to `input` itself.
pub fn parse_body(input: &str) -> Result<Option<String>, Diagnostic> {
    let synthetic = format!("{SCRATCH_HEADER}{input}");
    match parse(&synthetic) {
        ParseOutcome::Complete(commit) => Ok(commit.body),
        ParseOutcome::Partial(_, diagnostic) | ParseOutcome::Failed(diagnostic) => Err(diagnostic),
    }
}

/// Runs the trailer probe directly over `input`, as if it were the
/// remainder of a message whose header was `chore: x`. See
/// [`parse_body`] for the column-offset caveat.
pub fn parse_footers(input: &str) -> Result<Vec<Footer>, Diagnostic> {
    let synthetic = format!("{SCRATCH_HEADER}{input}");
    match parse(&synthetic) {
        ParseOutcome::Complete(commit) => Ok(commit.footers.0),
        ParseOutcome::Partial(_, diagnostic) | ParseOutcome::Failed(diagnostic) => Err(diagnostic),
    }
}
