/// A byte cursor over one line of text.
///
/// All delimiters the inline matcher looks for are ASCII, so byte positions
/// found by the cursor always fall on `char` boundaries.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The line being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at `start`.
    pub fn new(s: &'a str, start: usize) -> Self {
        Self { s, i: start }
    }

    pub fn pos(&self) -> usize {
        self.i
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s
            .as_bytes()
            .get(self.i..)
            .is_some_and(|rest| rest.starts_with(pat))
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.s.as_bytes().get(self.i).copied()?;
        self.i += 1;
        Some(b)
    }

    /// Absolute index of the next `b` at or after the cursor, without moving.
    pub fn find_byte(&self, b: u8) -> Option<usize> {
        let rest = self.s.as_bytes().get(self.i..)?;
        rest.iter().position(|&x| x == b).map(|p| self.i + p)
    }

    /// Absolute index of the next occurrence of `pat` at or after the cursor.
    pub fn find(&self, pat: &[u8]) -> Option<usize> {
        let rest = self.s.as_bytes().get(self.i..)?;
        if pat.is_empty() || rest.len() < pat.len() {
            return None;
        }
        rest.windows(pat.len())
            .position(|w| w == pat)
            .map(|p| self.i + p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_basics() {
        let mut cur = Cursor::new("hello", 0);
        assert_eq!(cur.pos(), 0);
        assert!(!cur.eof());
        assert_eq!(cur.peek(), Some(b'h'));
        assert_eq!(cur.bump(), Some(b'h'));
        assert_eq!(cur.pos(), 1);
    }

    #[test]
    fn cursor_starts_with() {
        let cur = Cursor::new("**bold**", 0);
        assert!(cur.starts_with(b"**"));
        assert!(!cur.starts_with(b"***"));
    }

    #[test]
    fn empty_string_input() {
        let cur = Cursor::new("", 0);
        assert!(cur.eof());
        assert_eq!(cur.peek(), None);
        assert_eq!(cur.pos(), 0);
    }

    #[test]
    fn starts_with_pattern_longer_than_remaining() {
        let mut cur = Cursor::new("ab", 0);
        assert!(!cur.starts_with(b"abcdef"));

        cur.bump();
        assert!(!cur.starts_with(b"bc"));
        assert!(cur.starts_with(b"b"));
    }

    #[test]
    fn starts_with_past_end_is_false() {
        let cur = Cursor::new("hi", 10);
        assert!(cur.eof());
        assert!(!cur.starts_with(b"h"));
        assert_eq!(cur.peek(), None);
    }

    #[test]
    fn bump_at_eof_returns_none() {
        let mut cur = Cursor::new("x", 0);
        assert_eq!(cur.bump(), Some(b'x'));
        assert_eq!(cur.bump(), None);
        assert_eq!(cur.bump(), None);
    }

    #[test]
    fn find_reports_absolute_positions() {
        let cur = Cursor::new("a `b` c `d`", 3);
        assert_eq!(cur.find_byte(b'`'), Some(4));
        assert_eq!(cur.find(b"c `"), Some(6));
        assert_eq!(cur.find(b"zz"), None);
    }

    #[test]
    fn find_does_not_move_cursor() {
        let cur = Cursor::new("a**b", 0);
        assert_eq!(cur.find(b"**"), Some(1));
        assert_eq!(cur.pos(), 0);
    }

    #[test]
    fn find_from_past_end_is_none() {
        let cur = Cursor::new("ab", 5);
        assert_eq!(cur.find_byte(b'a'), None);
        assert_eq!(cur.find(b"a"), None);
    }
}
