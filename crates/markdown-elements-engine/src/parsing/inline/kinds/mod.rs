//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Image`**: `![alt](url)` plus the `=WxH` and `{width=..}` size forms
//! - **`Link`**: `[label](url)`
//! - **`CodeSpan`**: `` `code` ``
//! - **`Emphasis`**: `***bold italic***`, `**bold**`, `*italic*`
//!
//! ## Design Principle
//!
//! All delimiter constants live here, not scattered in parser code.
//! The parser calls these constants; it never hardcodes `![` or `` ` ``.

pub mod code_span;
pub mod emphasis;
pub mod image;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use image::Image;
pub use link::Link;
