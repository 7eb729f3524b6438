/// ATX heading: one to six `#`, whitespace, then text.
pub struct Heading;

impl Heading {
    pub const MARKER: u8 = b'#';
    pub const MAX_LEVEL: usize = 6;

    /// Returns the level and trimmed text. The marker must start the line,
    /// and a heading with nothing but whitespace after the marker is rejected.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let level = line.bytes().take_while(|&b| b == Self::MARKER).count();
        if level == 0 || level > Self::MAX_LEVEL {
            return None;
        }
        let rest = &line[level..];
        if !rest.starts_with(char::is_whitespace) {
            return None;
        }
        let text = rest.trim();
        if text.is_empty() {
            return None;
        }
        // 1..=6 always fits.
        Some((level as u8, text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# Title", 1, "Title")]
    #[case("###   spaced  ", 3, "spaced")]
    #[case("######\tsix", 6, "six")]
    #[case("## # nested marker", 2, "# nested marker")]
    fn headings(#[case] line: &str, #[case] level: u8, #[case] text: &str) {
        assert_eq!(Heading::parse(line), Some((level, text)));
    }

    #[rstest]
    #[case("####### seven")]
    #[case("#nospace")]
    #[case("#   ")]
    #[case("#")]
    #[case(" # indented")]
    #[case("plain")]
    fn not_headings(#[case] line: &str) {
        assert_eq!(Heading::parse(line), None);
    }
}
