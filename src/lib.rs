//! A strict, byte-level parser for Conventional Commits v1.0.0 messages.
//!
//! ```
//! let outcome = conventional_commit_parser::parse("fix: correct minor typos in code");
//! let commit = outcome.into_result().unwrap();
//! assert_eq!(commit.summary, "correct minor typos in code");
//! ```

pub mod commit;
pub mod config;
pub mod error;

pub(crate) mod body;
pub(crate) mod header;
pub(crate) mod scanner;
pub(crate) mod types;
pub(crate) mod util;

mod parser;

pub use parser::{parse, parse_body, parse_footers, parse_summary, parse_with, ParseOutcome, Parser};
