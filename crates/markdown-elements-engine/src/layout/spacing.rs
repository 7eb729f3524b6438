use serde::Serialize;

use crate::element::{Element, ElementKind};

use super::{Group, group};

/// Gap placed before a group, relative to the surrounding text size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Spacing {
    /// Between two list items.
    Small,
    /// Before the first item of a list.
    Large,
    Default,
}

/// Em ratio for each [`Spacing`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpacingScale {
    pub small: f32,
    pub large: f32,
    pub default: f32,
}

impl Default for SpacingScale {
    fn default() -> Self {
        Self {
            small: 0.5,
            large: 1.2,
            default: 1.0,
        }
    }
}

impl SpacingScale {
    pub fn em(&self, spacing: Spacing) -> f32 {
        match spacing {
            Spacing::Small => self.small,
            Spacing::Large => self.large,
            Spacing::Default => self.default,
        }
    }
}

/// Spacing between consecutive groups, judged by their first elements.
pub fn spacing_between(prev: &Group<'_>, curr: &Group<'_>) -> Spacing {
    match (
        prev.starts_with(ElementKind::ListItem),
        curr.starts_with(ElementKind::ListItem),
    ) {
        (true, true) => Spacing::Small,
        (false, true) => Spacing::Large,
        _ => Spacing::Default,
    }
}

/// A group with the spacing that precedes it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaidOutGroup<'a> {
    /// `None` for the first group of the document.
    pub spacing: Option<Spacing>,
    #[serde(rename = "elements")]
    pub group: Group<'a>,
}

/// Groups `elements` and attaches the spacing before each group.
pub fn compose(elements: &[Element]) -> Vec<LaidOutGroup<'_>> {
    let groups = group(elements);
    let mut laid_out: Vec<LaidOutGroup<'_>> = Vec::with_capacity(groups.len());
    for g in groups {
        let spacing = laid_out.last().map(|prev| spacing_between(&prev.group, &g));
        laid_out.push(LaidOutGroup { spacing, group: g });
    }
    laid_out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn el(kind: ElementKind) -> Element {
        Element {
            kind,
            ..Element::default()
        }
    }

    fn spacings(elements: &[Element]) -> Vec<Option<Spacing>> {
        compose(elements).iter().map(|g| g.spacing).collect()
    }

    #[test]
    fn list_spacing() {
        use ElementKind::*;
        let elements = [el(Text), el(ListItem), el(ListItem), el(Text)];
        assert_eq!(spacings(&elements), vec![
            None,
            Some(Spacing::Large),
            Some(Spacing::Small),
            Some(Spacing::Default),
        ]);
    }

    #[test]
    fn task_items_are_not_list_items_for_spacing() {
        use ElementKind::*;
        let elements = [el(ListItem), el(TaskItem), el(ListItem)];
        assert_eq!(spacings(&elements), vec![
            None,
            Some(Spacing::Default),
            Some(Spacing::Large),
        ]);
    }

    #[test]
    fn first_list_of_document_has_no_gap() {
        let elements = [el(ElementKind::ListItem)];
        assert_eq!(spacings(&elements), vec![None]);
    }

    #[test]
    fn default_scale() {
        let scale = SpacingScale::default();
        assert_eq!(scale.em(Spacing::Small), 0.5);
        assert_eq!(scale.em(Spacing::Large), 1.2);
        assert_eq!(scale.em(Spacing::Default), 1.0);
    }
}
