//! # Layout
//!
//! Clusters the flat element sequence into groups a renderer draws as one
//! unit, and decides the vertical gap before each group.
//!
//! ## Grouping rules
//!
//! | Element | Effect |
//! |---------|--------|
//! | HardBreak | closes the open group, then disappears |
//! | SoftBreak | stays inside the open group |
//! | Header, CodeBlock, Image, ListItem, TaskItem, Table | closes the open group and stands alone |
//! | anything else | joins the open group |
//!
//! A group with more than one element is laid out horizontally (inline);
//! a singleton is laid out as a block.

pub mod spacing;

use serde::Serialize;

use crate::element::{Element, ElementKind};

pub use spacing::{LaidOutGroup, Spacing, SpacingScale, compose, spacing_between};

/// A non-empty run of elements rendered together.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Group<'a> {
    elements: Vec<&'a Element>,
}

impl<'a> Group<'a> {
    pub fn elements(&self) -> &[&'a Element] {
        &self.elements
    }

    pub fn first(&self) -> Option<&'a Element> {
        self.elements.first().copied()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Always false for groups produced by [`group`].
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// More than one element: render side by side rather than as a block.
    pub fn is_inline(&self) -> bool {
        self.elements.len() > 1
    }

    fn starts_with(&self, kind: ElementKind) -> bool {
        self.first().is_some_and(|e| e.kind == kind)
    }
}

/// Splits `elements` into groups. Hard breaks never appear in the result.
pub fn group(elements: &[Element]) -> Vec<Group<'_>> {
    let mut groups = Vec::new();
    let mut open: Vec<&Element> = Vec::new();

    for e in elements {
        match e.kind {
            ElementKind::HardBreak => close(&mut open, &mut groups),
            kind if kind.is_block() => {
                close(&mut open, &mut groups);
                groups.push(Group { elements: vec![e] });
            }
            _ => open.push(e),
        }
    }
    close(&mut open, &mut groups);
    groups
}

fn close<'a>(open: &mut Vec<&'a Element>, groups: &mut Vec<Group<'a>>) {
    if !open.is_empty() {
        groups.push(Group {
            elements: std::mem::take(open),
        });
    }
}
