//! The recognized message: [`ConventionalCommit`] and its field types.

use std::ops::Deref;

/// The commit type lexeme, lower-cased. Known members of the
/// Minimal/Conventional/Falco vocabularies get their own variant so
/// callers can match exhaustively on the common case; anything else
/// (a FreeForm type, or a word outside the selected vocabulary when
/// best-effort let it through) is `Custom`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CommitType {
    Feature,
    BugFix,
    Chore,
    Revert,
    Performances,
    Documentation,
    Style,
    Refactoring,
    Test,
    Build,
    Ci,
    New,
    Rule,
    Update,
    Custom(String),
}

impl CommitType {
    /// `text` must already be ASCII-lower-cased.
    pub(crate) fn from_lower(text: &str) -> Self {
        match text {
            "feat" => CommitType::Feature,
            "fix" => CommitType::BugFix,
            "chore" => CommitType::Chore,
            "revert" => CommitType::Revert,
            "perf" => CommitType::Performances,
            "docs" => CommitType::Documentation,
            "style" => CommitType::Style,
            "refactor" => CommitType::Refactoring,
            "test" => CommitType::Test,
            "build" => CommitType::Build,
            "ci" => CommitType::Ci,
            "new" => CommitType::New,
            "rule" => CommitType::Rule,
            "update" => CommitType::Update,
            other => CommitType::Custom(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CommitType::Feature => "feat",
            CommitType::BugFix => "fix",
            CommitType::Chore => "chore",
            CommitType::Revert => "revert",
            CommitType::Performances => "perf",
            CommitType::Documentation => "docs",
            CommitType::Style => "style",
            CommitType::Refactoring => "refactor",
            CommitType::Test => "test",
            CommitType::Build => "build",
            CommitType::Ci => "ci",
            CommitType::New => "new",
            CommitType::Rule => "rule",
            CommitType::Update => "update",
            CommitType::Custom(s) => s,
        }
    }
}

/// A single footer trailer: `token: content` or `token #content`.
///
/// `token` is always ASCII-lower-cased, with `BREAKING CHANGE` and
/// `BREAKING-CHANGE` both normalized to `breaking-change`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Footer {
    pub token: String,
    pub content: String,
}

/// An ordered collection of [`Footer`] entries. Duplicate tokens are
/// kept as separate entries, in the order they were read, matching
/// spec's "values accumulate under repeated keys" contract.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Footers(pub Vec<Footer>);

impl Footers {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains_key(&self, token: &str) -> bool {
        self.0.iter().any(|f| f.token == token)
    }

    /// All values stored under `token`, in first-appearance order.
    pub fn values_for<'a>(&'a self, token: &str) -> Vec<&'a str> {
        self.0
            .iter()
            .filter(|f| f.token == token)
            .map(|f| f.content.as_str())
            .collect()
    }
}

impl Deref for Footers {
    type Target = [Footer];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl IntoIterator for Footers {
    type Item = Footer;
    type IntoIter = std::vec::IntoIter<Footer>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// A fully parsed Conventional Commits message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConventionalCommit {
    pub commit_type: CommitType,
    pub scope: Option<String>,
    pub breaking: bool,
    pub summary: String,
    pub body: Option<String>,
    pub footers: Footers,
}

impl ConventionalCommit {
    pub fn footers(&self) -> &[Footer] {
        &self.footers
    }
}
