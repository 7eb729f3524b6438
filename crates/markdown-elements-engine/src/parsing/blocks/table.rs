//! Pipe tables.
//!
//! ```text
//! | Name | Qty |     header row
//! |:-----|----:|     alignment row
//! | nut  |   3 |     data rows, until a blank or non-pipe line
//! ```
//!
//! Cells are split on every `|`; escaped pipes are not supported. Rows keep
//! the cell count they were written with.

use crate::element::{Alignment, Element, ElementPool};
use crate::parsing::lines::is_blank;

pub struct TableRow;

impl TableRow {
    pub const PIPE: char = '|';
    pub const DASH: char = '-';
    pub const COLON: char = ':';

    /// `|...|` after trimming.
    pub fn is_row(line: &str) -> bool {
        let t = line.trim();
        t.len() >= 2 && t.starts_with(Self::PIPE) && t.ends_with(Self::PIPE)
    }

    /// A row made only of pipes, dashes, colons and whitespace, with a dash.
    pub fn is_separator(line: &str) -> bool {
        Self::is_row(line)
            && line.contains(Self::DASH)
            && line
                .trim()
                .chars()
                .all(|c| matches!(c, Self::PIPE | Self::DASH | Self::COLON) || c.is_whitespace())
    }

    /// Strips one outer pipe at each end, splits on the rest, trims each cell.
    pub fn cells(line: &str) -> impl Iterator<Item = &str> {
        let t = line.trim();
        let t = t.strip_prefix(Self::PIPE).unwrap_or(t);
        let t = t.strip_suffix(Self::PIPE).unwrap_or(t);
        t.split(Self::PIPE).map(str::trim)
    }

    /// Alignment of one separator cell.
    pub fn alignment(cell: &str) -> Alignment {
        match (cell.starts_with(Self::COLON), cell.ends_with(Self::COLON)) {
            (true, true) => Alignment::Center,
            (false, true) => Alignment::Right,
            (true, false) => Alignment::Left,
            _ => Alignment::Default,
        }
    }
}

/// Recognises a table starting at `lines[start]`.
///
/// Returns the populated element and the number of lines it consumed
/// (header, separator and every data row), or `None` when `lines[start]` does
/// not open a table.
pub fn try_parse_table(
    lines: &[&str],
    start: usize,
    pool: &mut ElementPool,
) -> Option<(Element, usize)> {
    let header = *lines.get(start)?;
    let separator = *lines.get(start + 1)?;
    if !TableRow::is_row(header) || !TableRow::is_separator(separator) {
        return None;
    }

    let body = lines[start + 2..]
        .iter()
        .take_while(|line| !is_blank(line) && TableRow::is_row(line));
    let data_rows = body.clone().count();

    let alignment: Vec<Alignment> = TableRow::cells(separator).map(TableRow::alignment).collect();
    let rows = std::iter::once(header)
        .chain(body.copied())
        .map(TableRow::cells);

    let mut table = pool.acquire();
    table.set_table(rows, &alignment);
    Some((table, 2 + data_rows))
}
