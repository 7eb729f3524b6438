//! # Inline Parsing
//!
//! Turns one line of text into inline elements: text, code spans, links,
//! images and the three emphasis flavours.
//!
//! ## Architecture
//!
//! Each construct class is matched independently over the whole line, then
//! overlaps are resolved in a single sweep:
//!
//! 1. Collect candidates per class in priority order
//!    (image, link, code span, bold-italic, bold, italic)
//! 2. Stable-sort all candidates by start offset
//! 3. Keep a candidate only if it starts at or after the end of the last kept one
//! 4. Fill the gaps between kept candidates with `Text`
//!
//! Losing candidates go straight back to the element pool.
//!
//! ## Modules
//!
//! - **`types`**: `InlineMatch` (a recognised construct) and `Candidate`
//! - **`kinds`**: Delimiter-owning types (`Image`, `Link`, `CodeSpan`, `Emphasis`)
//! - **`cursor`**: `Cursor` for byte-wise scanning with absolute positions
//! - **`parser`**: `parse_inline()` entry point with `try_parse_*` helpers
//!
//! ## Precedence
//!
//! Earliest start wins; at equal starts the class collected first wins.
//! `` `**x**` `` is a single code span, and `![a](b)` is an image, never a link.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_inline;
pub use types::InlineMatch;
