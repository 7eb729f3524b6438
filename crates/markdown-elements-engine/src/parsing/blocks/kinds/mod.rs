//! Block-level syntax types. Each owns its delimiter constants.

pub mod code_fence;
pub mod divider;
pub mod heading;
pub mod list_item;

pub use code_fence::{CodeFence, FenceOpen};
pub use divider::Divider;
pub use heading::Heading;
pub use list_item::{ListItem, ListLine, ListMarker};
