//! # Block Scanning
//!
//! Two-phase, line-oriented block scanning.
//!
//! ## Scanning Phases
//!
//! 1. **Line Classification** (`classify`): Each line is classified into a
//!    `LineClass` from local facts only (fence opener, heading, divider, list
//!    marker, blank, text)
//!
//! 2. **Element Construction** (`scanner`): A `BlockScanner` carries the open
//!    fence and the ordered-list counters, probes tables, and hands text lines
//!    to the inline matcher
//!
//! ## Modules
//!
//! - **`kinds`**: Block syntax types with owned delimiters (CodeFence, Heading,
//!   Divider, ListItem)
//! - **`classify`**: `MarkdownLineClassifier` produces a `LineClass` per line
//! - **`table`**: `try_parse_table` for pipe tables spanning several lines
//! - **`scanner`**: `BlockScanner` state machine and the `scan_blocks` entry point
//!
//! ## Key Invariants
//!
//! - Fenced code blocks are raw zones: no block or inline parsing inside
//! - Never two breaks in a row, and never a break before the first element
//! - Ordered list numbering restarts on any non-list, non-blank line

pub mod classify;
pub mod kinds;
pub mod scanner;
pub mod table;

pub use classify::{LineClass, MarkdownLineClassifier};
pub use scanner::{BlockScanner, scan_blocks};
pub use table::try_parse_table;
