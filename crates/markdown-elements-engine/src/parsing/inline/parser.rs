use crate::element::{Element, ElementPool, ImageSize};
use crate::error::{Result, slice};
use crate::parsing::span::Span;

use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Emphasis, Image, Link},
    types::{Candidate, InlineMatch},
};

/// Parses one line into inline elements, appending them to `out`.
///
/// # Precedence
/// Candidates are collected class by class in priority order (images, links,
/// code spans, bold-italic, bold, italic), stably sorted by start offset, and
/// swept left to right. A candidate overlapping an accepted one is released
/// back to `pool`. Because the sort is stable, a higher-priority class wins
/// when two candidates start at the same offset.
///
/// # Returns
/// Elements covering the whole line: text between accepted constructs becomes
/// `Text`. A line that is empty or all whitespace produces nothing.
pub fn parse_inline(line: &str, pool: &mut ElementPool, out: &mut Vec<Element>) -> Result<()> {
    if line.trim().is_empty() {
        return Ok(());
    }

    let mut candidates = Vec::new();
    collect(line, pool, &mut candidates, try_parse_image)?;
    collect(line, pool, &mut candidates, try_parse_link)?;
    collect(line, pool, &mut candidates, try_parse_code_span)?;
    collect(line, pool, &mut candidates, |cur| {
        try_parse_emphasis(cur, Emphasis::BOLD_ITALIC)
    })?;
    collect(line, pool, &mut candidates, |cur| {
        try_parse_emphasis(cur, Emphasis::BOLD)
    })?;
    collect(line, pool, &mut candidates, |cur| {
        try_parse_emphasis(cur, Emphasis::ITALIC)
    })?;

    candidates.sort_by_key(|c| c.span.start);

    // Accepted spans are disjoint and ordered, so the last one reaches furthest.
    let mut accepted: Vec<Candidate> = Vec::with_capacity(candidates.len());
    for c in candidates {
        if accepted.last().is_some_and(|prev| prev.span.overlaps(c.span)) {
            pool.release(c.element);
        } else {
            accepted.push(c);
        }
    }

    let mut text_start = 0;
    for c in accepted {
        flush_text(line, text_start, c.span.start, pool, out)?;
        text_start = c.span.end;
        out.push(c.element);
    }
    flush_text(line, text_start, line.len(), pool, out)
}

/// Emits `line[start..end]` as a Text element when non-empty.
fn flush_text(
    line: &str,
    start: usize,
    end: usize,
    pool: &mut ElementPool,
    out: &mut Vec<Element>,
) -> Result<()> {
    if end > start {
        let mut e = pool.acquire();
        e.set_text(slice(line, start, end)?);
        out.push(e);
    }
    Ok(())
}

/// Runs `try_match` at every offset, resuming after each match so that
/// matches of one class never overlap each other.
fn collect<'a, F>(
    line: &'a str,
    pool: &mut ElementPool,
    candidates: &mut Vec<Candidate>,
    mut try_match: F,
) -> Result<()>
where
    F: FnMut(&mut Cursor<'a>) -> Result<Option<InlineMatch<'a>>>,
{
    let mut cur = Cursor::new(line, 0);
    while !cur.eof() {
        let start = cur.pos();
        match try_match(&mut cur)? {
            Some(m) => candidates.push(Candidate {
                span: Span::new(start, cur.pos()),
                element: m.into_element(pool),
            }),
            None => {
                cur.bump();
            }
        }
    }
    Ok(())
}

/// Attempts an image in any of its forms at the cursor.
///
/// The attribute form wins over a size suffix, which wins over the bare form.
/// On success the cursor is moved past the match; on failure it is untouched.
fn try_parse_image<'a>(cur: &mut Cursor<'a>) -> Result<Option<InlineMatch<'a>>> {
    if !cur.starts_with(Image::OPEN) {
        return Ok(None);
    }

    let s = cur.s;
    let alt_start = cur.pos() + Image::OPEN.len();
    let Some(alt_end) = Cursor::new(s, alt_start).find_byte(Image::ALT_CLOSE) else {
        return Ok(None);
    };
    if s.as_bytes().get(alt_end + 1) != Some(&Image::BODY_OPEN) {
        return Ok(None);
    }
    let body_start = alt_end + 2;
    let Some(body_end) = Cursor::new(s, body_start).find_byte(Image::BODY_CLOSE) else {
        return Ok(None);
    };
    if body_end == body_start {
        return Ok(None);
    }

    let alt = slice(s, alt_start, alt_end)?;
    let body = slice(s, body_start, body_end)?;
    let after = body_end + 1;

    if s.as_bytes().get(after) == Some(&Image::ATTRS_OPEN)
        && let Some(attrs_end) = Cursor::new(s, after + 1).find_byte(Image::ATTRS_CLOSE)
        && attrs_end > after + 1
    {
        let size = Image::parse_attributes(slice(s, after + 1, attrs_end)?);
        cur.i = attrs_end + 1;
        return Ok(Some(InlineMatch::Image {
            alt,
            url: body.trim(),
            size,
        }));
    }

    let (url, size) =
        Image::split_size_suffix(body)?.unwrap_or((body.trim(), ImageSize::INTRINSIC));
    cur.i = after;
    Ok(Some(InlineMatch::Image { alt, url, size }))
}

/// Attempts `[label](url)` at the cursor.
fn try_parse_link<'a>(cur: &mut Cursor<'a>) -> Result<Option<InlineMatch<'a>>> {
    if cur.peek() != Some(Link::OPEN) {
        return Ok(None);
    }

    let s = cur.s;
    let label_start = cur.pos() + 1;
    let Some(label_end) = Cursor::new(s, label_start).find_byte(Link::MIDDLE[0]) else {
        return Ok(None);
    };
    if label_end == label_start || !Cursor::new(s, label_end).starts_with(Link::MIDDLE) {
        return Ok(None);
    }
    let url_start = label_end + Link::MIDDLE.len();
    let Some(url_end) = Cursor::new(s, url_start).find_byte(Link::CLOSE) else {
        return Ok(None);
    };
    if url_end == url_start {
        return Ok(None);
    }

    let label = slice(s, label_start, label_end)?;
    let url = slice(s, url_start, url_end)?;
    cur.i = url_end + 1;
    Ok(Some(InlineMatch::Link { label, url }))
}

/// Attempts a code span at the cursor. An empty pair of backticks is not one.
fn try_parse_code_span<'a>(cur: &mut Cursor<'a>) -> Result<Option<InlineMatch<'a>>> {
    if cur.peek() != Some(CodeSpan::TICK) {
        return Ok(None);
    }

    let inner_start = cur.pos() + 1;
    let Some(inner_end) = Cursor::new(cur.s, inner_start).find_byte(CodeSpan::TICK) else {
        return Ok(None);
    };
    if inner_end == inner_start {
        return Ok(None);
    }

    let code = slice(cur.s, inner_start, inner_end)?;
    cur.i = inner_end + 1;
    Ok(Some(InlineMatch::Code(code)))
}

/// Attempts one emphasis flavour at the cursor.
///
/// The first closing delimiter decides: if the text before it is not
/// acceptable, there is no match at this offset.
fn try_parse_emphasis<'a>(
    cur: &mut Cursor<'a>,
    emphasis: Emphasis,
) -> Result<Option<InlineMatch<'a>>> {
    if !cur.starts_with(emphasis.delim) {
        return Ok(None);
    }

    let s = cur.s;
    let inner_start = cur.pos() + emphasis.delim.len();
    let probe = Cursor::new(s, inner_start);
    let close = if emphasis.allows_inner_star {
        probe.find(emphasis.delim)
    } else {
        probe
            .find_byte(Emphasis::STAR)
            .filter(|&at| Cursor::new(s, at).starts_with(emphasis.delim))
    };
    let Some(close) = close else {
        return Ok(None);
    };

    let inner = slice(s, inner_start, close)?;
    if !emphasis.accepts_inner(inner) {
        return Ok(None);
    }
    cur.i = close + emphasis.delim.len();
    Ok(Some(InlineMatch::Emphasis {
        kind: emphasis.kind,
        inner,
    }))
}
