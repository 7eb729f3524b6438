use crate::element::{Element, ElementKind, ElementPool, ImageSize};
use crate::parsing::span::Span;

/// A recognised inline construct, borrowing its parts from the line.
#[derive(Debug, Clone, PartialEq)]
pub enum InlineMatch<'a> {
    Image {
        alt: &'a str,
        url: &'a str,
        size: ImageSize,
    },
    Link {
        label: &'a str,
        url: &'a str,
    },
    Code(&'a str),
    Emphasis {
        kind: ElementKind,
        inner: &'a str,
    },
}

impl InlineMatch<'_> {
    /// Materialises the match into a pooled element.
    pub fn into_element(self, pool: &mut ElementPool) -> Element {
        let mut e = pool.acquire();
        match self {
            InlineMatch::Image { alt, url, size } => e.set_image(alt, url, size),
            InlineMatch::Link { label, url } => e.set_link(label, url),
            InlineMatch::Code(code) => e.set_inline_code(code),
            InlineMatch::Emphasis { kind, inner } => e.set_emphasis(kind, inner),
        }
        e
    }
}

/// A match competing for its span during overlap resolution.
#[derive(Debug)]
pub struct Candidate {
    pub span: Span,
    pub element: Element,
}
