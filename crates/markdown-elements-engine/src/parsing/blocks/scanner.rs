use std::collections::BTreeMap;

use crate::element::{Element, ElementPool};
use crate::error::Result;
use crate::parsing::inline::parse_inline;

use super::{
    classify::{LineClass, MarkdownLineClassifier},
    kinds::{CodeFence, FenceOpen, ListMarker},
    table::try_parse_table,
};

/// Two trailing spaces request a soft break after the line.
const SOFT_BREAK_SUFFIX: &str = "  ";

#[derive(Debug, Default)]
enum FenceState {
    #[default]
    None,
    Open {
        language: String,
        indent: usize,
        body: String,
        lines: usize,
    },
}

/// Line-oriented state machine that turns a document into elements.
///
/// Holds the open fence (if any) and one ordered-list counter per nesting
/// level. Counters survive blank lines so a loose list keeps numbering.
pub struct BlockScanner<'p> {
    pool: &'p mut ElementPool,
    classifier: MarkdownLineClassifier,
    fence: FenceState,
    ordered_counters: BTreeMap<usize, u32>,
    out: Vec<Element>,
}

impl<'p> BlockScanner<'p> {
    pub fn new(pool: &'p mut ElementPool) -> Self {
        Self {
            pool,
            classifier: MarkdownLineClassifier,
            fence: FenceState::None,
            ordered_counters: BTreeMap::new(),
            out: Vec::new(),
        }
    }

    /// Scans every line and returns the elements in document order.
    ///
    /// On error the elements produced so far are handed back to the pool.
    pub fn scan(mut self, lines: &[&str]) -> Result<Vec<Element>> {
        if let Err(e) = self.scan_lines(lines) {
            let partial = std::mem::take(&mut self.out);
            self.pool.release_all(partial);
            return Err(e);
        }
        self.finish()
    }

    fn scan_lines(&mut self, lines: &[&str]) -> Result<()> {
        let mut i = 0;
        while i < lines.len() {
            i += self.push(lines, i)?;
        }
        Ok(())
    }

    /// Handles `lines[i]` and returns how many lines were consumed.
    fn push(&mut self, lines: &[&str], i: usize) -> Result<usize> {
        let line = lines[i];

        if self.in_fence() {
            if CodeFence::is_delimiter(line) {
                self.close_fence();
            } else {
                self.consume_fence_line(line);
            }
            return Ok(1);
        }

        match self.classifier.classify(line) {
            LineClass::Fence(open) => self.open_fence(open),
            LineClass::Heading { level, text } => {
                self.ordered_counters.clear();
                let mut e = self.pool.acquire();
                e.set_header(text, level);
                self.out.push(e);
            }
            LineClass::Divider => {
                self.ordered_counters.clear();
                let mut e = self.pool.acquire();
                e.set_divider();
                self.out.push(e);
            }
            LineClass::List {
                marker,
                nesting,
                text,
            } => self.push_list_item(marker, nesting, text),
            LineClass::Blank => self.push_hard_break(),
            LineClass::Text(text) => {
                if let Some((table, consumed)) = try_parse_table(lines, i, self.pool) {
                    self.ordered_counters.clear();
                    self.out.push(table);
                    return Ok(consumed);
                }
                let is_last = i + 1 == lines.len();
                self.push_text_line(text, is_last)?;
            }
        }
        Ok(1)
    }

    fn finish(mut self) -> Result<Vec<Element>> {
        // An unterminated fence still yields its body.
        if let FenceState::Open {
            language,
            indent,
            body,
            ..
        } = std::mem::take(&mut self.fence)
            && !body.is_empty()
        {
            let mut e = self.pool.acquire();
            e.set_code_block(&body, &language, indent);
            self.out.push(e);
        }
        Ok(self.out)
    }

    fn in_fence(&self) -> bool {
        matches!(self.fence, FenceState::Open { .. })
    }

    fn open_fence(&mut self, FenceOpen { language, indent }: FenceOpen<'_>) {
        self.fence = FenceState::Open {
            language: language.to_string(),
            indent,
            body: String::new(),
            lines: 0,
        };
    }

    fn close_fence(&mut self) {
        if let FenceState::Open {
            language,
            indent,
            body,
            ..
        } = std::mem::take(&mut self.fence)
        {
            let mut e = self.pool.acquire();
            e.set_code_block(&body, &language, indent);
            self.out.push(e);
        }
    }

    fn consume_fence_line(&mut self, line: &str) {
        if let FenceState::Open {
            indent,
            body,
            lines,
            ..
        } = &mut self.fence
        {
            if *lines > 0 {
                body.push('\n');
            }
            body.push_str(CodeFence::dedent(line, *indent));
            *lines += 1;
        }
    }

    fn push_list_item(&mut self, marker: ListMarker, nesting: usize, text: &str) {
        let mut e = self.pool.acquire();
        match marker {
            ListMarker::Task { completed } => e.set_task_item(text, completed, nesting),
            ListMarker::Bullet => e.set_list_item(text, false, 0, nesting),
            ListMarker::Ordered => {
                let counter = self.ordered_counters.entry(nesting).or_insert(0);
                *counter += 1;
                let index = *counter;
                e.set_list_item(text, true, index, nesting);
            }
        }
        // Returning to a shallower level restarts the deeper lists.
        self.ordered_counters.retain(|&level, _| level <= nesting);
        self.out.push(e);
    }

    /// A blank line separates paragraphs, but never opens the document and
    /// never follows another break.
    fn push_hard_break(&mut self) {
        if self.out.last().is_some_and(|e| !e.kind.is_break()) {
            let mut e = self.pool.acquire();
            e.set_hard_break();
            self.out.push(e);
        }
    }

    fn push_text_line(&mut self, line: &str, is_last: bool) -> Result<()> {
        self.ordered_counters.clear();

        let (text, soft_break) = match line.strip_suffix(SOFT_BREAK_SUFFIX) {
            Some(stripped) => (stripped, true),
            None => (line, false),
        };

        let before = self.out.len();
        parse_inline(text, self.pool, &mut self.out)?;

        if soft_break && !is_last && self.out.len() > before {
            let mut e = self.pool.acquire();
            e.set_soft_break();
            self.out.push(e);
        }
        Ok(())
    }
}

/// Scans `lines` into elements using `pool` for allocation.
pub fn scan_blocks(lines: &[&str], pool: &mut ElementPool) -> Result<Vec<Element>> {
    BlockScanner::new(pool).scan(lines)
}
