//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Renders an element sequence as stable, line-per-element
//!   text for `insta` snapshot testing
//! - **`invariants`**: Runtime checks for scanner correctness (no leading or
//!   doubled breaks, header levels in range, list numbering shape)
//!
//! ## Testing Strategy
//!
//! Parsing behaviour is pinned by snapshots of whole documents rather than by
//! a separate formal grammar. Snapshots show every element's kind and the
//! fields that kind uses.

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::normalize;
