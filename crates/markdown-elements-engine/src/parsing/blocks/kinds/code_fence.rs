/// An opening fence line: ```` ```lang ````.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceOpen<'a> {
    /// Text after the backticks, trimmed. Empty when absent.
    pub language: &'a str,
    /// Number of leading whitespace characters on the opening line.
    pub indent: usize,
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Whether `line` opens or closes a fence. Surrounding whitespace is ignored.
    pub fn is_delimiter(line: &str) -> bool {
        line.trim().starts_with(Self::BACKTICKS)
    }

    /// Reads language and indent from a fence line.
    pub fn open(line: &str) -> Option<FenceOpen<'_>> {
        let trimmed = line.trim();
        let rest = trimmed.strip_prefix(Self::BACKTICKS)?;
        Some(FenceOpen {
            language: rest.trim(),
            indent: line.chars().take_while(|c| c.is_whitespace()).count(),
        })
    }

    /// Strips the opening fence's indent from a body line.
    ///
    /// Only a prefix of exactly `indent` spaces is removed, and only when the
    /// line is longer than that prefix. Anything else is kept verbatim so the
    /// body's relative indentation survives.
    pub fn dedent(line: &str, indent: usize) -> &str {
        if indent == 0 || line.len() <= indent {
            return line;
        }
        match line.get(..indent) {
            Some(prefix) if prefix.bytes().all(|b| b == b' ') => &line[indent..],
            _ => line,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn detect_backtick_fence() {
        assert!(CodeFence::is_delimiter("```rust"));
        assert!(CodeFence::is_delimiter("   ```  "));
    }

    #[test]
    fn no_fence() {
        assert!(!CodeFence::is_delimiter("hello"));
        assert!(!CodeFence::is_delimiter("``"));
        assert!(!CodeFence::is_delimiter("~~~"));
    }

    #[rstest]
    #[case("```", "", 0)]
    #[case("```rust", "rust", 0)]
    #[case("  ```  python  ", "python", 2)]
    #[case("\t```c", "c", 1)]
    fn open_captures_language_and_indent(
        #[case] line: &str,
        #[case] language: &str,
        #[case] indent: usize,
    ) {
        assert_eq!(CodeFence::open(line), Some(FenceOpen { language, indent }));
    }

    #[rstest]
    #[case("    code", 4, "code")]
    #[case("      deeper", 4, "  deeper")]
    #[case("  short", 4, "  short")]
    #[case("    ", 4, "    ")]
    #[case("\t   x", 4, "\t   x")]
    #[case("code", 0, "code")]
    fn dedent_removes_only_matching_spaces(
        #[case] line: &str,
        #[case] indent: usize,
        #[case] expected: &str,
    ) {
        assert_eq!(CodeFence::dedent(line, indent), expected);
    }
}
