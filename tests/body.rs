use indoc::indoc;
use spectral::prelude::*;

use conventional_commit_parser::parse_body;

#[test]
fn lines_shaped_like_footers_are_recognized_as_footers_not_body() {
    // Arrange
    let body = indoc!(
        "a-token: this is a token
    another-token #this is a token with hash separator"
    )
    .to_string();

    // Act
    let result = parse_body(&body);

    // Assert: every line here parses as a footer trailer, so there is no
    // leftover body text at all.
    assert_that(&result).is_ok().is_none();
}

#[test]
fn parse_body_only() {
    // Arrange
    let body = indoc!(
        "A body message
    with multiple lines"
    )
    .to_string();

    // Act
    let parsed = conventional_commit_parser::parse_body(&body);

    // Assert
    assert_that(&parsed).is_ok().is_some().is_equal_to(body);
}
