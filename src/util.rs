//! Small shared byte/string helpers used across the header and body
//! stages.

/// Converts a byte range that may legitimately contain multi-byte UTF-8
/// (descriptions, body text, footer values) into an owned `String`,
/// substituting U+FFFD for anything that isn't valid UTF-8 rather than
/// failing the parse over it.
pub(crate) fn utf8_lossy_string(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
