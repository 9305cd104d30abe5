//! URL encoding utilities for constructing safe API paths.
//!
//! Caller-supplied names (projects, packages, connections) are interpolated
//! into URL paths and must be percent-encoded to prevent path traversal and
//! broken URL parsing. Model paths are a special case: `/` is a legitimate
//! separator within a package, so each segment is encoded individually.

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Characters that must be percent-encoded in URL path segments.
///
/// Based on RFC 3986 section 3.3, plus characters that have special meaning
/// in URLs or are commonly mishandled: space, quotes, angle brackets,
/// backslash, pipe, caret, backtick, tilde, curly and square brackets,
/// percent (prevents double-encoding), slash (prevents path traversal),
/// question mark and hash (query/fragment delimiters).
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'~')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'[')
    .add(b']');

/// Percent-encode a string for safe use as a single URL path segment.
///
/// Use for any caller-provided value interpolated into a URL path: project
/// names, package names, connection names.
///
/// # Examples
///
/// ```
/// use malloy_client::endpoints::url_encoding::encode_path_segment;
///
/// assert_eq!(encode_path_segment("home"), "home");
/// assert_eq!(encode_path_segment("my project"), "my%20project");
/// assert_eq!(encode_path_segment("a/b"), "a%2Fb");
/// ```
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}

/// Percent-encode a model path, preserving `/` as a segment separator.
///
/// Model paths are relative paths within a package (`dir/flights.malloy`);
/// each segment is encoded individually so nested paths resolve correctly
/// while unsafe characters inside a segment are still escaped.
pub fn encode_model_path(path: &str) -> String {
    path.split('/')
        .map(encode_path_segment)
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_simple() {
        assert_eq!(encode_path_segment("home"), "home");
        assert_eq!(encode_path_segment("faa"), "faa");
        assert_eq!(encode_path_segment("my_package"), "my_package");
    }

    #[test]
    fn test_encode_space() {
        assert_eq!(encode_path_segment("my project"), "my%20project");
    }

    #[test]
    fn test_encode_slash() {
        // Prevents path traversal through single segments
        assert_eq!(encode_path_segment("a/b"), "a%2Fb");
    }

    #[test]
    fn test_encode_percent() {
        assert_eq!(encode_path_segment("100%"), "100%25");
        assert_eq!(encode_path_segment("a%20b"), "a%2520b");
    }

    #[test]
    fn test_encode_unicode() {
        assert_eq!(encode_path_segment("caf\u{00e9}"), "caf%C3%A9");
    }

    #[test]
    fn test_encode_question_and_hash() {
        assert_eq!(encode_path_segment("a?b"), "a%3Fb");
        assert_eq!(encode_path_segment("a#b"), "a%23b");
    }

    #[test]
    fn test_hyphen_underscore_dot() {
        assert_eq!(encode_path_segment("flights.malloy"), "flights.malloy");
        assert_eq!(encode_path_segment("my-package"), "my-package");
    }

    #[test]
    fn test_encode_model_path_preserves_separators() {
        assert_eq!(
            encode_model_path("nested/dir/flights.malloy"),
            "nested/dir/flights.malloy"
        );
        assert_eq!(
            encode_model_path("with space/flights.malloy"),
            "with%20space/flights.malloy"
        );
    }

    #[test]
    fn test_encode_model_path_single_segment() {
        assert_eq!(encode_model_path("flights.malloy"), "flights.malloy");
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(encode_path_segment(""), "");
        assert_eq!(encode_model_path(""), "");
    }
}
