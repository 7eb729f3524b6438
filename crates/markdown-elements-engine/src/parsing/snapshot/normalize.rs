use std::fmt::Write;

use crate::element::{Element, ElementKind};

/// Renders elements as one line each, for snapshot comparison.
///
/// Strings are shown with `{:?}` so newlines and trailing spaces stay visible.
/// Tables add one indented line per row. No trailing newline.
pub fn normalize(elements: &[Element]) -> String {
    let mut out = String::new();
    for (i, e) in elements.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        render_element(&mut out, e);
    }
    out
}

fn render_element(out: &mut String, e: &Element) {
    // Writing into a String cannot fail.
    let _ = match e.kind {
        ElementKind::Text
        | ElementKind::InlineCode
        | ElementKind::Bold
        | ElementKind::Italic
        | ElementKind::BoldItalic => write!(out, "{:?} {:?}", e.kind, e.content),
        ElementKind::Header => write!(out, "Header({}) {:?}", e.header_level, e.content),
        ElementKind::CodeBlock => write!(
            out,
            "CodeBlock lang={:?} indent={} {:?}",
            e.language, e.indent_level, e.content
        ),
        ElementKind::Link => write!(out, "Link {:?} -> {:?}", e.content, e.url),
        ElementKind::Image => {
            let _ = write!(out, "Image {:?} -> {:?}", e.alt_text, e.url);
            if e.image_width().is_some() || e.image_height().is_some() {
                let unit = if e.image_is_percentage { "%" } else { "" };
                let dim = |d: Option<f32>| d.map_or("?".to_string(), |v| format!("{v}{unit}"));
                let _ = write!(
                    out,
                    " size={}x{}",
                    dim(e.image_width()),
                    dim(e.image_height())
                );
            }
            Ok(())
        }
        ElementKind::ListItem if e.is_ordered => write!(
            out,
            "ListItem #{} depth={} {:?}",
            e.list_index, e.nesting_level, e.content
        ),
        ElementKind::ListItem => {
            write!(out, "ListItem - depth={} {:?}", e.nesting_level, e.content)
        }
        ElementKind::TaskItem => write!(
            out,
            "TaskItem [{}] depth={} {:?}",
            if e.is_task_completed { 'x' } else { ' ' },
            e.nesting_level,
            e.content
        ),
        ElementKind::Divider | ElementKind::SoftBreak | ElementKind::HardBreak => {
            write!(out, "{:?}", e.kind)
        }
        ElementKind::Table => {
            let align: Vec<&str> = e
                .table_alignment
                .iter()
                .map(|a| if a.as_str().is_empty() { "-" } else { a.as_str() })
                .collect();
            let _ = write!(out, "Table align=[{}]", align.join(","));
            for row in &e.table_rows {
                let _ = write!(out, "\n  | {} |", row.join(" | "));
            }
            Ok(())
        }
    };
}
