use crate::parsing::lines::indent_width;

/// What follows the indentation of a list line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMarker {
    Bullet,
    Ordered,
    Task { completed: bool },
}

/// A recognised list line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListLine<'a> {
    pub marker: ListMarker,
    pub nesting: usize,
    /// Item text, trimmed and never empty.
    pub text: &'a str,
}

pub struct ListItem;

impl ListItem {
    pub const BULLETS: [u8; 3] = [b'-', b'*', b'+'];
    pub const ORDERED_DOT: u8 = b'.';
    pub const TASK_OPEN: u8 = b'[';
    pub const TASK_CLOSE: u8 = b']';
    /// Columns per nesting level. Tabs count as this many columns too.
    pub const INDENT_WIDTH: usize = 4;

    /// Recognises task, bullet and ordered items, in that order.
    pub fn parse(line: &str) -> Option<ListLine<'_>> {
        let body = line.trim_start();
        let nesting = indent_width(&line[..line.len() - body.len()], Self::INDENT_WIDTH)
            / Self::INDENT_WIDTH;

        let (marker, text) = Self::task(body)
            .or_else(|| Self::bullet(body).map(|t| (ListMarker::Bullet, t)))
            .or_else(|| Self::ordered(body).map(|t| (ListMarker::Ordered, t)))?;
        Some(ListLine {
            marker,
            nesting,
            text,
        })
    }

    /// `- [x] text`
    fn task(body: &str) -> Option<(ListMarker, &str)> {
        let rest = after_separator(Self::bullet_rest(body)?)?;
        let b = rest.as_bytes();
        if b.len() < 3 || b[0] != Self::TASK_OPEN || b[2] != Self::TASK_CLOSE {
            return None;
        }
        let completed = match b[1] {
            b' ' => false,
            b'x' | b'X' => true,
            _ => return None,
        };
        let text = non_empty(after_separator(&rest[3..])?)?;
        Some((ListMarker::Task { completed }, text))
    }

    /// `- text`
    fn bullet(body: &str) -> Option<&str> {
        non_empty(after_separator(Self::bullet_rest(body)?)?)
    }

    /// `12. text`
    fn ordered(body: &str) -> Option<&str> {
        let digits = body.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 || body.as_bytes().get(digits) != Some(&Self::ORDERED_DOT) {
            return None;
        }
        non_empty(after_separator(&body[digits + 1..])?)
    }

    fn bullet_rest(body: &str) -> Option<&str> {
        let first = *body.as_bytes().first()?;
        Self::BULLETS.contains(&first).then(|| &body[1..])
    }
}

/// Requires at least one whitespace character and returns what follows it.
fn after_separator(s: &str) -> Option<&str> {
    let rest = s.trim_start();
    (rest.len() < s.len()).then_some(rest)
}

fn non_empty(s: &str) -> Option<&str> {
    let t = s.trim();
    (!t.is_empty()).then_some(t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn item(marker: ListMarker, nesting: usize, text: &str) -> Option<ListLine<'_>> {
        Some(ListLine {
            marker,
            nesting,
            text,
        })
    }

    #[rstest]
    #[case("- a", item(ListMarker::Bullet, 0, "a"))]
    #[case("* a", item(ListMarker::Bullet, 0, "a"))]
    #[case("+  a  ", item(ListMarker::Bullet, 0, "a"))]
    #[case("    - a", item(ListMarker::Bullet, 1, "a"))]
    #[case("\t\t- a", item(ListMarker::Bullet, 2, "a"))]
    #[case("   - a", item(ListMarker::Bullet, 0, "a"))]
    #[case("1. one", item(ListMarker::Ordered, 0, "one"))]
    #[case("42.\tx", item(ListMarker::Ordered, 0, "x"))]
    #[case("        3. deep", item(ListMarker::Ordered, 2, "deep"))]
    #[case("- [ ] todo", item(ListMarker::Task { completed: false }, 0, "todo"))]
    #[case("* [x] done", item(ListMarker::Task { completed: true }, 0, "done"))]
    #[case("+ [X] DONE", item(ListMarker::Task { completed: true }, 0, "DONE"))]
    fn list_lines(#[case] line: &str, #[case] expected: Option<ListLine<'_>>) {
        assert_eq!(ListItem::parse(line), expected);
    }

    #[rstest]
    #[case("-a")]
    #[case("- ")]
    #[case("-   ")]
    #[case("1.x")]
    #[case("1)")]
    #[case(". x")]
    #[case("plain")]
    #[case("")]
    fn not_list_lines(#[case] line: &str) {
        assert_eq!(ListItem::parse(line), None);
    }

    #[test]
    fn malformed_checkbox_is_a_plain_bullet() {
        assert_eq!(
            ListItem::parse("- [y] maybe"),
            item(ListMarker::Bullet, 0, "[y] maybe")
        );
        assert_eq!(
            ListItem::parse("- [x]nospace"),
            item(ListMarker::Bullet, 0, "[x]nospace")
        );
    }
}
