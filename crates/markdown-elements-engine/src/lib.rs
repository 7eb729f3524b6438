//! Markdown to renderer-agnostic elements.
//!
//! [`MarkdownParser`] turns a document into a flat sequence of [`Element`]s,
//! and [`layout::compose`] clusters that sequence into groups with spacing.
//! Rendering is left to the host.

pub mod element;
pub mod emoji;
pub mod error;
pub mod layout;
pub mod parsing;

// Re-export key types for easier usage
pub use element::{Alignment, Element, ElementKind, ElementPool, ImageSize, UNSET_DIMENSION};
pub use error::{ParseError, Result};
pub use layout::{Group, LaidOutGroup, Spacing, SpacingScale, compose, group};
pub use parsing::{MarkdownParser, parse_document};
