pub mod blocks;
pub mod inline;
pub mod lines;
pub mod snapshot;
pub mod span;

#[cfg(test)]
mod tests;

use crate::element::{Element, ElementPool};
use crate::error::Result;

use lines::split_lines;

/// Parses a whole document into elements allocated from `pool`.
///
/// This is the stateless entry point. [`MarkdownParser`] wraps it with a
/// pool and a cache of the last result.
pub fn parse_document(text: &str, pool: &mut ElementPool) -> Result<Vec<Element>> {
    let lines = split_lines(text);
    let elements = blocks::scan_blocks(&lines, pool)?;
    log::debug!(
        "parsed {} lines into {} elements",
        lines.len(),
        elements.len()
    );
    Ok(elements)
}

/// Caller-owned parsing context.
///
/// Owns the element pool and remembers the last document it parsed. Parsing
/// the same text again returns the cached elements untouched; parsing different
/// text first returns the previous elements to the pool.
///
/// # Example
/// ```
/// use markdown_elements_engine::{ElementKind, MarkdownParser};
///
/// let mut parser = MarkdownParser::new();
/// let elements = parser.parse("# Title\n\nSome **bold** text");
/// assert_eq!(elements[0].kind, ElementKind::Header);
/// ```
#[derive(Debug, Default)]
pub struct MarkdownParser {
    pool: ElementPool,
    cached_text: Option<String>,
    elements: Vec<Element>,
}

impl MarkdownParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `text`, reusing the previous result when the text is unchanged.
    ///
    /// Never fails: an internal error is logged and yields an empty result.
    pub fn parse(&mut self, text: &str) -> &[Element] {
        if let Err(e) = self.refresh(text) {
            log::error!("failed to parse markdown ({} bytes): {e}", text.len());
        }
        &self.elements
    }

    /// Like [`parse`](Self::parse), but reports internal errors to the caller.
    pub fn try_parse(&mut self, text: &str) -> Result<&[Element]> {
        self.refresh(text)?;
        Ok(&self.elements)
    }

    /// Runs only the inline matcher over `text`.
    ///
    /// Used to expand the text of a list or task item. The result is owned by
    /// the caller and does not touch the cached document; hand it back with
    /// [`release_all`](Self::release_all) when done.
    pub fn parse_inline_only(&mut self, text: &str) -> Vec<Element> {
        let mut out = Vec::new();
        if let Err(e) = inline::parse_inline(text, &mut self.pool, &mut out) {
            log::error!("failed to parse inline markdown: {e}");
            self.pool.release_all(out.drain(..));
        }
        out
    }

    /// Returns one element to the pool.
    pub fn release(&mut self, element: Element) {
        self.pool.release(element);
    }

    pub fn release_all<I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = Element>,
    {
        self.pool.release_all(elements);
    }

    /// Releases the cached document and forgets the text it came from.
    pub fn reset(&mut self) {
        self.pool.release_all(self.elements.drain(..));
        self.cached_text = None;
    }

    /// Elements of the last successful parse.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn pool(&self) -> &ElementPool {
        &self.pool
    }

    fn refresh(&mut self, text: &str) -> Result<()> {
        if self.cached_text.as_deref() == Some(text) {
            log::debug!("document unchanged, reusing {} elements", self.elements.len());
            return Ok(());
        }

        self.reset();
        self.elements = parse_document(text, &mut self.pool)?;
        self.cached_text = Some(text.to_owned());
        Ok(())
    }
}
