//! Emoji detection in text content.
//!
//! Renderers that draw emoji as images split a `Text` element's content into
//! plain and emoji runs, then look each emoji run up by its code point key
//! (`1f44d-1f3fd`), the naming used by the common emoji image sets.

use std::fmt::Write;

/// Image set used when no base URL is configured.
pub const DEFAULT_EMOJI_BASE_URL: &str =
    "https://emoji.aranja.com/static/emoji-data/img-apple-160/";

/// A maximal run of either plain text or emoji.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRun<'a> {
    Plain(&'a str),
    Emoji(&'a str),
}

const EMOJI_RANGES: [(u32, u32); 12] = [
    (0x1F600, 0x1F64F), // emoticons
    (0x1F300, 0x1F5FF), // symbols and pictographs
    (0x1F680, 0x1F6FF), // transport and map
    (0x1F1E0, 0x1F1FF), // regional indicators
    (0x2600, 0x26FF),   // misc symbols
    (0x2700, 0x27BF),   // dingbats
    (0xFE00, 0xFE0F),   // variation selectors
    (0x1F900, 0x1F9FF), // supplemental symbols
    (0x2320, 0x233F),   // misc technical
    (0x2B00, 0x2BFF),   // arrows
    (0x1F000, 0x1F02F), // mahjong
    (0x1F0A0, 0x1F0FF), // playing cards
];

const SKIN_TONES: (u32, u32) = (0x1F3FB, 0x1F3FF);
const VARIATION_SELECTORS: (u32, u32) = (0xFE00, 0xFE0F);
const ZERO_WIDTH_JOINER: char = '\u{200D}';

fn in_range(c: char, (lo, hi): (u32, u32)) -> bool {
    (lo..=hi).contains(&u32::from(c))
}

/// Whether `c` starts an emoji run.
pub fn is_emoji(c: char) -> bool {
    EMOJI_RANGES.iter().any(|&r| in_range(c, r))
}

/// Whether `c` extends the emoji run before it.
pub fn is_emoji_modifier(c: char) -> bool {
    c == ZERO_WIDTH_JOINER || in_range(c, SKIN_TONES) || in_range(c, VARIATION_SELECTORS)
}

pub fn contains_emoji(text: &str) -> bool {
    text.chars().any(is_emoji)
}

/// Splits `text` into alternating plain and emoji runs.
///
/// Adjacent emoji and their modifiers form one run. A modifier with no emoji
/// before it is plain text. Concatenating the runs gives back `text`.
pub fn split_emoji(text: &str) -> Vec<TextRun<'_>> {
    let mut runs = Vec::new();
    let mut run_start = 0;
    let mut in_emoji = false;

    for (i, c) in text.char_indices() {
        let emoji_char = is_emoji(c) || (in_emoji && is_emoji_modifier(c));
        if emoji_char != in_emoji {
            if i > run_start {
                runs.push(make_run(&text[run_start..i], in_emoji));
            }
            run_start = i;
            in_emoji = emoji_char;
        }
    }
    if run_start < text.len() {
        runs.push(make_run(&text[run_start..], in_emoji));
    }
    runs
}

fn make_run(s: &str, emoji: bool) -> TextRun<'_> {
    if emoji {
        TextRun::Emoji(s)
    } else {
        TextRun::Plain(s)
    }
}

/// Lowercase hex code points joined with `-`, e.g. `1f44d-1f3fd`.
pub fn emoji_code(emoji: &str) -> String {
    let mut code = String::with_capacity(emoji.len() * 3);
    for (i, c) in emoji.chars().enumerate() {
        if i > 0 {
            code.push('-');
        }
        // Writing into a String cannot fail.
        let _ = write!(code, "{:x}", u32::from(c));
    }
    code
}

/// Image URL for an emoji run under `base_url`.
pub fn emoji_image_url(base_url: &str, emoji: &str) -> String {
    format!("{base_url}{}.png", emoji_code(emoji))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn splits_plain_and_emoji() {
        assert_eq!(
            split_emoji("hi 😀!"),
            vec![
                TextRun::Plain("hi "),
                TextRun::Emoji("😀"),
                TextRun::Plain("!")
            ]
        );
    }

    #[test]
    fn plain_text_is_one_run() {
        assert_eq!(split_emoji("no emoji here"), vec![TextRun::Plain(
            "no emoji here"
        )]);
        assert!(split_emoji("").is_empty());
    }

    #[test]
    fn modifiers_join_the_preceding_emoji() {
        assert_eq!(split_emoji("a👍🏽b"), vec![
            TextRun::Plain("a"),
            TextRun::Emoji("👍🏽"),
            TextRun::Plain("b"),
        ]);
        // woman + ZWJ + laptop
        assert_eq!(split_emoji("👩\u{200D}💻"), vec![TextRun::Emoji(
            "👩\u{200D}💻"
        )]);
    }

    #[test]
    fn lone_modifier_is_plain() {
        assert_eq!(split_emoji("\u{200D}x"), vec![TextRun::Plain("\u{200D}x")]);
    }

    #[test]
    fn adjacent_emoji_form_one_run() {
        assert_eq!(split_emoji("😀😀"), vec![TextRun::Emoji("😀😀")]);
    }

    #[rstest]
    #[case("hello", false)]
    #[case("ok ✅", true)]
    #[case("⌨", true)]
    #[case("→", false)]
    #[case("©", false)]
    fn detection(#[case] text: &str, #[case] expected: bool) {
        assert_eq!(contains_emoji(text), expected);
    }

    #[test]
    fn codes_and_urls() {
        assert_eq!(emoji_code("👍🏽"), "1f44d-1f3fd");
        assert_eq!(emoji_code("😀"), "1f600");
        assert_eq!(
            emoji_image_url(DEFAULT_EMOJI_BASE_URL, "😀"),
            "https://emoji.aranja.com/static/emoji-data/img-apple-160/1f600.png"
        );
    }
}
