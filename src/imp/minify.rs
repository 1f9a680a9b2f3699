//! Comment stripping and whitespace collapsing for the bundled source.
//!
//! The stripper is a single-pass scanner over the raw bytes.  It has to tell
//! string literals apart from comments, so a `//` or `/*` inside a quoted
//! string is copied verbatim while a real comment is dropped entirely.  The
//! scanner is bounds-checked everywhere: malformed input (an unterminated
//! string or block comment) is reported as an error instead of running off
//! the end of the buffer.

use super::{Minified, RawSource};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("unterminated string literal starting at byte {start}")]
    UnterminatedString { start: usize },

    #[error("unterminated block comment starting at byte {start}")]
    UnterminatedBlockComment { start: usize },

    #[error("backslash at byte {pos} has no character to escape")]
    DanglingEscape { pos: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Normal,
    InString { quote: u8, start: usize },
    InLineComment,
    InBlockComment { start: usize },
}

/// Minifies the bundled source.  When `minificate` is false the input is
/// returned unchanged.
///
/// Minification first strips comments, then deletes every LF, CR and HT and
/// collapses runs of spaces.  Newlines are deleted, not replaced by a space,
/// so two tokens separated only by a newline end up adjacent in the output.
/// Sources that rely on automatic semicolon insertion will break; callers
/// are expected to know their input tolerates this.
pub fn minify(source: RawSource, minificate: bool) -> Result<Minified> {
    let content = source.into_inner();

    if !minificate {
        return Ok(Minified::new(content));
    }

    let stripped = strip_comments(&content)?;
    Ok(Minified::new(collapse_whitespace(&stripped)))
}

/// Removes `// ...` and `/* ... */` comments, leaving string literal content
/// byte-for-byte intact.
///
/// Inside a string a backslash copies itself and the following byte without
/// testing that byte as a terminator, so an escaped quote never ends the
/// string early.  A `//` immediately preceded by a backslash is kept as two
/// literal slashes; beyond that there is no regex literal detection, so a
/// regex containing `//` will be mistaken for a comment.
fn strip_comments(content: &str) -> Result<String> {
    let bytes = content.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut state = ScanState::Normal;
    let mut i = 0;

    while i < bytes.len() {
        match state {
            ScanState::Normal => match bytes[i] {
                q @ b'\'' | q @ b'"' => {
                    state = ScanState::InString { quote: q, start: i };
                    out.push(q);
                    i += 1;
                }
                b'/' if bytes.get(i + 1) == Some(&b'/') => {
                    if i > 0 && bytes[i - 1] == b'\\' {
                        // escape override: keep both slashes as literals
                        out.extend_from_slice(b"//");
                    } else {
                        state = ScanState::InLineComment;
                    }
                    i += 2;
                }
                b'/' if bytes.get(i + 1) == Some(&b'*') => {
                    state = ScanState::InBlockComment { start: i };
                    i += 2;
                }
                c => {
                    out.push(c);
                    i += 1;
                }
            },
            ScanState::InString { quote, .. } => match bytes[i] {
                b'\\' => match bytes.get(i + 1) {
                    Some(&c) => {
                        out.push(b'\\');
                        out.push(c);
                        i += 2;
                    }
                    None => return Err(Error::DanglingEscape { pos: i }),
                },
                c if c == quote => {
                    out.push(c);
                    state = ScanState::Normal;
                    i += 1;
                }
                c => {
                    out.push(c);
                    i += 1;
                }
            },
            ScanState::InLineComment => {
                if bytes[i] == b'\n' {
                    // the newline is not part of the comment; rescan it
                    state = ScanState::Normal;
                } else {
                    i += 1;
                }
            }
            ScanState::InBlockComment { .. } => {
                if bytes[i] == b'*' && bytes.get(i + 1) == Some(&b'/') {
                    state = ScanState::Normal;
                    i += 2;
                } else {
                    i += 1;
                }
            }
        }
    }

    match state {
        // a line comment is allowed to run to the end of the input
        ScanState::Normal | ScanState::InLineComment => {}
        ScanState::InString { start, .. } => return Err(Error::UnterminatedString { start }),
        ScanState::InBlockComment { start } => {
            return Err(Error::UnterminatedBlockComment { start });
        }
    }

    // only whole ASCII-delimited regions were removed, so the remainder is
    // still valid UTF-8
    Ok(String::from_utf8(out).expect("internal error: comment stripper broke the encoding"))
}

/// Deletes every LF, CR and HT, then collapses each run of two or more
/// spaces into a single space.
fn collapse_whitespace(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut last_was_space = false;

    for c in content.chars() {
        match c {
            '\n' | '\r' | '\t' => {}
            ' ' if last_was_space => {}
            ' ' => {
                out.push(' ');
                last_was_space = true;
            }
            _ => {
                out.push(c);
                last_was_space = false;
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minified(content: &str) -> String {
        minify(RawSource::new(content.to_string()), true)
            .expect("minification failed")
            .into_inner()
    }

    fn minify_err(content: &str) -> Error {
        minify(RawSource::new(content.to_string()), true)
            .expect_err("minification unexpectedly succeeded")
    }

    #[test]
    fn disabled_pass_is_identity() {
        let content = "var a = 1; // comment\n/* block */\n";
        let out = minify(RawSource::new(content.to_string()), false).unwrap();
        assert_eq!(out.inner(), content);
    }

    #[test]
    fn already_minified_input_is_unchanged() {
        let content = "var a = 1; var b = 2;";
        assert_eq!(minified(content), content);
    }

    #[test]
    fn line_comment_is_removed() {
        assert_eq!(minified("code(); // trailing\nmore();"), "code(); more();");
    }

    #[test]
    fn line_comment_at_end_of_input_is_accepted() {
        assert_eq!(minified("code(); // no newline"), "code(); ");
    }

    #[test]
    fn block_comment_is_removed() {
        assert_eq!(minified("x/*comment*/y"), "xy");
    }

    #[test]
    fn block_comment_with_inner_stars_is_removed() {
        assert_eq!(minified("x/* * ** */y"), "xy");
    }

    #[test]
    fn comment_markers_inside_strings_survive() {
        assert_eq!(
            minified(r#"var url = "http://example.com";"#),
            r#"var url = "http://example.com";"#
        );
        assert_eq!(minified(r#"var s = "/* not a comment */";"#), r#"var s = "/* not a comment */";"#);
        assert_eq!(minified("var c = '//';"), "var c = '//';");
    }

    #[test]
    fn escaped_quote_does_not_end_the_string() {
        assert_eq!(minified(r#""a\"b""#), r#""a\"b""#);
        assert_eq!(minified(r"'a\'b'"), r"'a\'b'");
    }

    #[test]
    fn backslash_before_slashes_keeps_them_literal() {
        assert_eq!(minified(r"a\//b"), r"a\//b");
    }

    #[test]
    fn newline_is_deleted_without_substitution() {
        assert_eq!(minified("a\nb"), "ab");
        assert_eq!(minified("a\r\nb"), "ab");
    }

    #[test]
    fn tabs_are_deleted() {
        assert_eq!(minified("a\tb"), "ab");
    }

    #[test]
    fn space_runs_collapse_to_one() {
        assert_eq!(minified("a     b"), "a b");
    }

    #[test]
    fn spaces_split_by_a_newline_still_collapse() {
        // the newline is deleted first, making the spaces adjacent
        assert_eq!(minified("a \n b"), "a b");
    }

    #[test]
    fn string_content_whitespace_is_not_protected_from_collapsing() {
        // collapsing runs after stripping and does not re-tokenize
        assert_eq!(minified("\"a  b\""), "\"a b\"");
    }

    #[test]
    fn unterminated_block_comment_is_an_error() {
        assert_eq!(
            minify_err("/* never closed"),
            Error::UnterminatedBlockComment { start: 0 }
        );
        assert_eq!(
            minify_err("x/* almost *"),
            Error::UnterminatedBlockComment { start: 1 }
        );
    }

    #[test]
    fn unterminated_string_is_an_error() {
        assert_eq!(minify_err("\"open"), Error::UnterminatedString { start: 0 });
        assert_eq!(minify_err("x = 'open"), Error::UnterminatedString { start: 4 });
    }

    #[test]
    fn dangling_escape_is_an_error() {
        assert_eq!(minify_err("\"a\\"), Error::DanglingEscape { pos: 2 });
    }

    #[test]
    fn multibyte_content_passes_through() {
        assert_eq!(minified("var s = \"héllo\"; // コメント\n"), "var s = \"héllo\"; ");
    }
}
