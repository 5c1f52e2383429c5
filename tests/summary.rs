use conventional_commit_parser::parse_summary;

use assertions::*;
use conventional_commit_parser::commit::CommitType;
use conventional_commit_parser::error::ErrorKind;

#[test]
fn parse_summary_only() {
    // Arrange
    let summary = "feat(scope): message";

    // Act
    let result = parse_summary(summary);

    // Assert
    assert_scope(&result, "scope");
    assert_commit_type(&result, CommitType::Feature);
    assert_summary(&result, "message");
    assert_no_footers(&result);
    assert_no_body(&result);
}

#[test]
fn parse_summary_never_enters_the_body_phase() {
    // Arrange: a trailing newline would trigger MISSING_BLANK_LINE in the
    // full parser, but parse_summary never looks past the description.
    let summary = "feat(scope): message\nnot a body";

    // Act
    let result = parse_summary(summary);

    // Assert
    assert_summary(&result, "message");
    assert_no_body(&result);
}

#[test]
fn parse_summary_reports_header_errors() {
    // Arrange
    let summary = "feat(scope):message";

    // Act
    let result = parse_summary(summary);

    // Assert
    assert_error(&result, ErrorKind::ExpectedWhitespace(b'm'.into()));
}
