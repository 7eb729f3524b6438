use crate::parsing::lines::is_blank;

use super::kinds::{CodeFence, Divider, FenceOpen, Heading, ListItem, ListMarker};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block scanning: each line is classified independently,
/// without fence state or counters. Table detection needs the following line,
/// so a table row classifies as [`LineClass::Text`] and the scanner probes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass<'a> {
    Fence(FenceOpen<'a>),
    Heading {
        level: u8,
        text: &'a str,
    },
    Divider,
    List {
        marker: ListMarker,
        nesting: usize,
        text: &'a str,
    },
    Blank,
    Text(&'a str),
}

/// Classifies individual lines for the block scanning phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line, trying each block form in priority order.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        if let Some(open) = CodeFence::open(line) {
            return LineClass::Fence(open);
        }
        if let Some((level, text)) = Heading::parse(line) {
            return LineClass::Heading { level, text };
        }
        if Divider::matches(line) {
            return LineClass::Divider;
        }
        if let Some(item) = ListItem::parse(line) {
            return LineClass::List {
                marker: item.marker,
                nesting: item.nesting,
                text: item.text,
            };
        }
        if is_blank(line) {
            return LineClass::Blank;
        }
        LineClass::Text(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn classify(line: &str) -> LineClass<'_> {
        MarkdownLineClassifier.classify(line)
    }

    #[test]
    fn fence_beats_everything() {
        assert_eq!(
            classify("```rust"),
            LineClass::Fence(FenceOpen {
                language: "rust",
                indent: 0
            })
        );
    }

    #[test]
    fn heading_line() {
        assert_eq!(
            classify("## Two"),
            LineClass::Heading {
                level: 2,
                text: "Two"
            }
        );
    }

    #[test]
    fn divider_beats_bullet() {
        assert_eq!(classify("***"), LineClass::Divider);
        assert_eq!(
            classify("- - -"),
            LineClass::List {
                marker: ListMarker::Bullet,
                nesting: 0,
                text: "- -",
            }
        );
    }

    #[test]
    fn task_beats_bullet() {
        assert_eq!(
            classify("- [x] done"),
            LineClass::List {
                marker: ListMarker::Task { completed: true },
                nesting: 0,
                text: "done",
            }
        );
    }

    #[test]
    fn blank_and_text() {
        assert_eq!(classify("   "), LineClass::Blank);
        assert_eq!(classify(""), LineClass::Blank);
        assert_eq!(classify("| a | b |"), LineClass::Text("| a | b |"));
        assert_eq!(classify("hello  "), LineClass::Text("hello  "));
    }
}
