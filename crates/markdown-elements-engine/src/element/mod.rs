//! # Element Model
//!
//! A parsed document is a flat, ordered sequence of [`Element`]s. Each element
//! is one tagged struct: the [`ElementKind`] says which fields carry meaning,
//! everything else stays at its default.
//!
//! The flat layout is deliberate for pooling: a recycled element keeps the
//! capacity of its strings and table vectors, so re-parsing a similar document
//! mostly writes into memory that is already allocated. See [`pool`].
//!
//! ## Field usage per kind
//!
//! | Kind | Fields |
//! |------|--------|
//! | Text, Bold, Italic, BoldItalic, InlineCode | `content` |
//! | Header | `content`, `header_level` |
//! | CodeBlock | `content`, `language`, `indent_level` |
//! | Link | `content` (label), `url` |
//! | Image | `alt_text`, `url`, `image_width`, `image_height`, `image_is_percentage` |
//! | ListItem | `content`, `is_ordered`, `list_index`, `nesting_level` |
//! | TaskItem | `content`, `is_task_completed`, `nesting_level` |
//! | Table | `table_rows`, `table_alignment` |
//! | Divider | `content` is always `---` |
//! | SoftBreak, HardBreak | none |

pub mod pool;

use serde::Serialize;

pub use pool::ElementPool;

/// Sentinel for an image dimension that was not specified.
pub const UNSET_DIMENSION: f32 = -1.0;

/// Text stored on every divider element.
pub const DIVIDER_CONTENT: &str = "---";

/// The kind of a parsed element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum ElementKind {
    #[default]
    Text,
    Header,
    CodeBlock,
    InlineCode,
    Link,
    Image,
    ListItem,
    Bold,
    Italic,
    BoldItalic,
    Divider,
    SoftBreak,
    HardBreak,
    TaskItem,
    Table,
}

impl ElementKind {
    /// Block kinds always form a group of their own during layout.
    #[must_use]
    pub fn is_block(self) -> bool {
        matches!(
            self,
            ElementKind::Header
                | ElementKind::CodeBlock
                | ElementKind::Image
                | ElementKind::ListItem
                | ElementKind::TaskItem
                | ElementKind::Table
        )
    }

    #[must_use]
    pub fn is_break(self) -> bool {
        matches!(self, ElementKind::SoftBreak | ElementKind::HardBreak)
    }
}

/// Column alignment taken from a table separator row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// No colon in the separator cell. Renderers conventionally center these.
    #[default]
    #[serde(rename = "")]
    Default,
    Left,
    Center,
    Right,
}

impl Alignment {
    pub fn as_str(self) -> &'static str {
        match self {
            Alignment::Default => "",
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }
}

/// Requested image size. Either dimension may be [`UNSET_DIMENSION`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageSize {
    pub width: f32,
    pub height: f32,
    /// Both dimensions are percentages of the available width rather than pixels.
    pub is_percentage: bool,
}

impl ImageSize {
    /// Intrinsic sizing: neither dimension given.
    pub const INTRINSIC: ImageSize = ImageSize {
        width: UNSET_DIMENSION,
        height: UNSET_DIMENSION,
        is_percentage: false,
    };
}

impl Default for ImageSize {
    fn default() -> Self {
        Self::INTRINSIC
    }
}

/// One parsed structural or inline unit.
///
/// Elements are normally obtained from an [`ElementPool`] and populated through
/// the `set_*` methods, which overwrite the payload in place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Element {
    pub kind: ElementKind,
    pub content: String,
    pub url: String,
    pub alt_text: String,
    /// 1..=6, meaningful for headers only.
    pub header_level: u8,
    pub is_ordered: bool,
    /// 1-based position within an ordered list, 0 otherwise.
    pub list_index: u32,
    /// Zero-based list depth, one level per four columns of indentation.
    pub nesting_level: usize,
    pub language: String,
    /// Leading whitespace width of the opening fence.
    pub indent_level: usize,
    pub is_task_completed: bool,
    pub image_width: f32,
    pub image_height: f32,
    pub image_is_percentage: bool,
    /// Row 0 is the header row. Rows may have different cell counts.
    pub table_rows: Vec<Vec<String>>,
    pub table_alignment: Vec<Alignment>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            kind: ElementKind::Text,
            content: String::new(),
            url: String::new(),
            alt_text: String::new(),
            header_level: 1,
            is_ordered: false,
            list_index: 0,
            nesting_level: 0,
            language: String::new(),
            indent_level: 0,
            is_task_completed: false,
            image_width: UNSET_DIMENSION,
            image_height: UNSET_DIMENSION,
            image_is_percentage: false,
            table_rows: Vec::new(),
            table_alignment: Vec::new(),
        }
    }
}

/// Replaces `dst` with `src` without giving up `dst`'s allocation.
fn assign(dst: &mut String, src: &str) {
    dst.clear();
    dst.push_str(src);
}

fn fill_row<C>(row: &mut Vec<String>, cells: C)
where
    C: IntoIterator,
    C::Item: AsRef<str>,
{
    let mut count = 0;
    for cell in cells {
        match row.get_mut(count) {
            Some(existing) => assign(existing, cell.as_ref()),
            None => row.push(cell.as_ref().to_string()),
        }
        count += 1;
    }
    row.truncate(count);
}

impl Element {
    /// Restores every field to its default, keeping allocated capacity.
    pub fn reset(&mut self) {
        self.kind = ElementKind::Text;
        self.content.clear();
        self.url.clear();
        self.alt_text.clear();
        self.header_level = 1;
        self.is_ordered = false;
        self.list_index = 0;
        self.nesting_level = 0;
        self.language.clear();
        self.indent_level = 0;
        self.is_task_completed = false;
        self.image_width = UNSET_DIMENSION;
        self.image_height = UNSET_DIMENSION;
        self.image_is_percentage = false;
        self.table_rows.clear();
        self.table_alignment.clear();
    }

    pub fn set_text(&mut self, text: &str) {
        self.kind = ElementKind::Text;
        assign(&mut self.content, text);
    }

    /// Sets a header; `level` is clamped into 1..=6.
    pub fn set_header(&mut self, text: &str, level: u8) {
        self.kind = ElementKind::Header;
        assign(&mut self.content, text);
        self.header_level = level.clamp(1, 6);
    }

    pub fn set_code_block(&mut self, code: &str, language: &str, indent: usize) {
        self.kind = ElementKind::CodeBlock;
        assign(&mut self.content, code);
        assign(&mut self.language, language);
        self.indent_level = indent;
    }

    pub fn set_inline_code(&mut self, code: &str) {
        self.kind = ElementKind::InlineCode;
        assign(&mut self.content, code);
    }

    pub fn set_link(&mut self, label: &str, url: &str) {
        self.kind = ElementKind::Link;
        assign(&mut self.content, label);
        assign(&mut self.url, url);
    }

    pub fn set_image(&mut self, alt: &str, url: &str, size: ImageSize) {
        self.kind = ElementKind::Image;
        assign(&mut self.alt_text, alt);
        assign(&mut self.url, url);
        self.image_width = size.width;
        self.image_height = size.height;
        self.image_is_percentage = size.is_percentage;
    }

    /// Sets an emphasis span. `kind` must be Bold, Italic or BoldItalic.
    pub fn set_emphasis(&mut self, kind: ElementKind, text: &str) {
        debug_assert!(matches!(
            kind,
            ElementKind::Bold | ElementKind::Italic | ElementKind::BoldItalic
        ));
        self.kind = kind;
        assign(&mut self.content, text);
    }

    pub fn set_list_item(&mut self, text: &str, ordered: bool, index: u32, nesting: usize) {
        self.kind = ElementKind::ListItem;
        assign(&mut self.content, text);
        self.is_ordered = ordered;
        self.list_index = index;
        self.nesting_level = nesting;
    }

    pub fn set_task_item(&mut self, text: &str, completed: bool, nesting: usize) {
        self.kind = ElementKind::TaskItem;
        assign(&mut self.content, text);
        self.is_task_completed = completed;
        self.nesting_level = nesting;
    }

    pub fn set_divider(&mut self) {
        self.kind = ElementKind::Divider;
        assign(&mut self.content, DIVIDER_CONTENT);
    }

    pub fn set_soft_break(&mut self) {
        self.kind = ElementKind::SoftBreak;
        self.content.clear();
    }

    pub fn set_hard_break(&mut self) {
        self.kind = ElementKind::HardBreak;
        self.content.clear();
    }

    /// Sets a table, refilling the rows and cell strings this element already
    /// holds before allocating new ones. Surplus rows and cells are truncated.
    pub fn set_table<R, C>(&mut self, rows: R, alignment: &[Alignment])
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: AsRef<str>,
    {
        self.kind = ElementKind::Table;
        let mut count = 0;
        for cells in rows {
            match self.table_rows.get_mut(count) {
                Some(row) => fill_row(row, cells),
                None => {
                    let mut row = Vec::new();
                    fill_row(&mut row, cells);
                    self.table_rows.push(row);
                }
            }
            count += 1;
        }
        self.table_rows.truncate(count);
        self.table_alignment.clear();
        self.table_alignment.extend_from_slice(alignment);
    }

    /// Width in the element's unit, or `None` for intrinsic sizing.
    #[must_use]
    pub fn image_width(&self) -> Option<f32> {
        (self.image_width >= 0.0).then_some(self.image_width)
    }

    #[must_use]
    pub fn image_height(&self) -> Option<f32> {
        (self.image_height >= 0.0).then_some(self.image_height)
    }

    /// Number of columns needed to show every cell of a jagged table.
    #[must_use]
    pub fn table_column_count(&self) -> usize {
        self.table_rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Cell text, or `""` for cells a short row does not have.
    #[must_use]
    pub fn table_cell(&self, row: usize, col: usize) -> &str {
        self.table_rows
            .get(row)
            .and_then(|r| r.get(col))
            .map_or("", String::as_str)
    }

    #[must_use]
    pub fn column_alignment(&self, col: usize) -> Alignment {
        self.table_alignment.get(col).copied().unwrap_or_default()
    }
}
