//! Text and JSON dumps of a composed document.

use std::fmt::Write;

use anyhow::Result;
use markdown_elements_engine::emoji::{TextRun, emoji_image_url, split_emoji};
use markdown_elements_engine::parsing::snapshot::normalize;
use markdown_elements_engine::{
    Element, ElementKind, LaidOutGroup, MarkdownParser, SpacingScale,
};

/// One block per group, each preceded by its gap.
///
/// List and task items are followed by their inline expansion, indented under
/// the item. The expanded elements go back to the parser's pool afterwards.
pub fn render_text(
    parser: &mut MarkdownParser,
    groups: &[LaidOutGroup<'_>],
    scale: &SpacingScale,
) -> String {
    let mut out = String::new();
    for laid_out in groups {
        if let Some(spacing) = laid_out.spacing {
            let _ = writeln!(out, "gap {}em", scale.em(spacing));
        }
        for &element in laid_out.group.elements() {
            let _ = writeln!(out, "{}", describe(element));
            if matches!(element.kind, ElementKind::ListItem | ElementKind::TaskItem) {
                expand_item(parser, element, &mut out);
            }
        }
    }
    out
}

fn describe(element: &Element) -> String {
    normalize(std::slice::from_ref(element))
}

fn expand_item(parser: &mut MarkdownParser, item: &Element, out: &mut String) {
    let inline = parser.parse_inline_only(&item.content);
    // A single Text run says nothing the item line did not.
    if !(inline.len() == 1 && inline[0].kind == ElementKind::Text) {
        for e in &inline {
            let _ = writeln!(out, "    {}", describe(e));
        }
    }
    parser.release_all(inline);
}

pub fn render_json(groups: &[LaidOutGroup<'_>]) -> Result<String> {
    Ok(serde_json::to_string_pretty(groups)?)
}

/// Image URLs for every emoji run in the document's Text elements, in order.
pub fn emoji_urls(elements: &[Element], base_url: &str) -> Vec<String> {
    elements
        .iter()
        .filter(|e| e.kind == ElementKind::Text)
        .flat_map(|e| split_emoji(&e.content))
        .filter_map(|run| match run {
            TextRun::Emoji(emoji) => Some(emoji_image_url(base_url, emoji)),
            TextRun::Plain(_) => None,
        })
        .collect()
}
