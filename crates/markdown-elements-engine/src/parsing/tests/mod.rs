//! Whole-document tests for the parsing module.
//!
//! Every parse is checked against the scanner invariants, and the element
//! stream is compared as rendered text.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::element::{Alignment, Element, ElementKind, ElementPool};
use crate::parsing::{parse_document, snapshot};

fn parse(text: &str) -> Vec<Element> {
    let mut pool = ElementPool::new();
    let elements = parse_document(text, &mut pool).unwrap();
    snapshot::invariants(&elements);
    elements
}

fn render(text: &str) -> String {
    snapshot::normalize(&parse(text))
}

#[test]
fn empty_document() {
    assert!(parse("").is_empty());
}

#[test]
fn blank_lines_only() {
    assert!(parse("\n\n\n").is_empty());
}

#[rstest]
#[case("Just a sentence.")]
#[case("Unicode: héllo wörld ✓")]
#[case("Stray * star and ` tick")]
#[case("a_b_c and [brackets] (parens)")]
fn plain_line_round_trips(#[case] line: &str) {
    let out = parse(line);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].kind, ElementKind::Text);
    assert_eq!(out[0].content, line);
}

#[test]
fn parsing_twice_gives_equal_output() {
    let text = "# T\n\n- a\n- b\n\n1. x\n    1. y\n\n**b** *i* `c`  \nnext";
    assert_eq!(parse(text), parse(text));
}

#[test]
fn ordered_numbering_restarts_deeper_levels() {
    let out = parse("1. a\n1. b\n1. c");
    let indices: Vec<(u32, usize)> = out
        .iter()
        .map(|e| (e.list_index, e.nesting_level))
        .collect();
    assert_eq!(indices, vec![(1, 0), (2, 0), (3, 0)]);

    insta::assert_snapshot!(render("1. a\n    1. b\n    2. c\n2. d\n    1. e"), @r#"
    ListItem #1 depth=0 "a"
    ListItem #1 depth=1 "b"
    ListItem #2 depth=1 "c"
    ListItem #2 depth=0 "d"
    ListItem #1 depth=1 "e"
    "#);
}

#[test]
fn overlapping_emphasis_resolves_to_outer_bold() {
    let out = parse("**a *b* c**");
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].kind, ElementKind::Bold);
    assert_eq!(out[0].content, "a *b* c");
}

#[test]
fn image_variants() {
    let out = parse("![x](u =100x50)");
    assert_eq!(out[0].kind, ElementKind::Image);
    assert_eq!(out[0].image_width, 100.0);
    assert_eq!(out[0].image_height, 50.0);
    assert!(!out[0].image_is_percentage);

    let out = parse("![x](u){width=50%}");
    assert_eq!(out[0].image_width, 50.0);
    assert_eq!(out[0].image_height, -1.0);
    assert!(out[0].image_is_percentage);
}

#[test]
fn simple_table() {
    let out = parse("| A | B |\n|---|---|\n| 1 | 2 |");
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].kind, ElementKind::Table);
    assert_eq!(out[0].table_rows, vec![vec!["A", "B"], vec!["1", "2"]]);
    assert_eq!(out[0].table_alignment, vec![Alignment::Default; 2]);
}

#[test]
fn fence_suppresses_divider() {
    let out = parse("```\n---\n```");
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].kind, ElementKind::CodeBlock);
    assert_eq!(out[0].content, "---");
}

#[test]
fn mixed_document() {
    let text = [
        "# Shopping",
        "",
        "Buy **milk** and *eggs*.  ",
        "Then `pay`.",
        "",
        "- [ ] bread",
        "- [x] butter",
        "    - salted",
        "",
        "| Item | Qty |",
        "|:-----|:---:|",
        "| nut  | 3   |",
        "---",
        "![logo](img/logo.png =64x)",
    ]
    .join("\n");
    insta::assert_snapshot!(render(&text), @r#"
    Header(1) "Shopping"
    HardBreak
    Text "Buy "
    Bold "milk"
    Text " and "
    Italic "eggs"
    Text "."
    SoftBreak
    Text "Then "
    InlineCode "pay"
    Text "."
    HardBreak
    TaskItem [ ] depth=0 "bread"
    TaskItem [x] depth=0 "butter"
    ListItem - depth=1 "salted"
    HardBreak
    Table align=[left,center]
      | Item | Qty |
      | nut | 3 |
    Divider
    Image "logo" -> "img/logo.png" size=64x?
    "#);
}

#[test]
fn unclosed_constructs_become_text() {
    insta::assert_snapshot!(render("[unclosed and `also unclosed **and this"), @r#"Text "[unclosed and `also unclosed **and this""#);
}

#[test]
fn code_spans_suppress_emphasis() {
    insta::assert_snapshot!(render("`*not italic*` but *this is*"), @r#"
    InlineCode "*not italic*"
    Text " but "
    Italic "this is"
    "#);
}
