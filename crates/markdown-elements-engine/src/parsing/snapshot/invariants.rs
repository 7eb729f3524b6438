use crate::element::{Element, ElementKind};

/// Validates scanner output invariants.
///
/// Asserts that:
/// - The sequence never starts with a break
/// - No two breaks are adjacent
/// - Text elements are never empty
/// - Header levels are within 1..=6
/// - Ordered items are numbered from 1; unordered items carry index 0
/// - Tables have a header row
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(elements: &[Element]) {
    if let Some(first) = elements.first() {
        assert!(
            !first.kind.is_break(),
            "document starts with a break: {:?}",
            first.kind
        );
    }

    for pair in elements.windows(2) {
        assert!(
            !(pair[0].kind.is_break() && pair[1].kind.is_break()),
            "adjacent breaks: {:?} then {:?}",
            pair[0].kind,
            pair[1].kind
        );
    }

    for (i, e) in elements.iter().enumerate() {
        match e.kind {
            ElementKind::Text => assert!(!e.content.is_empty(), "empty text at {i}"),
            ElementKind::Header => assert!(
                (1..=6).contains(&e.header_level),
                "header level {} out of range at {i}",
                e.header_level
            ),
            ElementKind::ListItem if e.is_ordered => {
                assert!(e.list_index >= 1, "ordered item without index at {i}")
            }
            ElementKind::ListItem => {
                assert_eq!(e.list_index, 0, "unordered item with index at {i}")
            }
            ElementKind::Table => assert!(!e.table_rows.is_empty(), "table without rows at {i}"),
            _ => {}
        }
    }
}
