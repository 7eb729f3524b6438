use thiserror::Error;

/// Internal failure during a parse pass.
///
/// Malformed Markdown never produces one of these; it degrades to plain text.
/// These report scanner bugs, and [`MarkdownParser::parse`] turns them into an
/// empty result plus a logged diagnostic.
///
/// [`MarkdownParser::parse`]: crate::parsing::MarkdownParser::parse
#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("slice {start}..{end} is not a valid range of a {len}-byte line")]
    InvalidSlice { start: usize, end: usize, len: usize },

    #[error("image dimension {value:?} is not a number: {source}")]
    InvalidDimension {
        value: String,
        source: std::num::ParseFloatError,
    },
}

pub type Result<T, E = ParseError> = std::result::Result<T, E>;

/// Checked `&s[start..end]`.
pub(crate) fn slice(s: &str, start: usize, end: usize) -> Result<&str> {
    s.get(start..end).ok_or(ParseError::InvalidSlice {
        start,
        end,
        len: s.len(),
    })
}
