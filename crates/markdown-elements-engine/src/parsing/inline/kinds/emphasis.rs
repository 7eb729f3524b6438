use crate::element::ElementKind;

/// One emphasis flavour and its delimiter rules.
///
/// The inner text never starts with whitespace or `*`, and never ends with
/// whitespace, so `** text **` stays literal. Bold may contain single stars
/// (`**a *b* c**` is one bold span); italic and bold-italic may not contain
/// any star.
#[derive(Debug, Clone, Copy)]
pub struct Emphasis {
    pub kind: ElementKind,
    pub delim: &'static [u8],
    /// Single `*` is allowed inside; the first full delimiter closes.
    pub allows_inner_star: bool,
    /// A one-character inner must be a word character (`*a*` but not `*.*`).
    pub single_char_word_only: bool,
}

impl Emphasis {
    pub const STAR: u8 = b'*';

    pub const BOLD_ITALIC: Emphasis = Emphasis {
        kind: ElementKind::BoldItalic,
        delim: b"***",
        allows_inner_star: false,
        single_char_word_only: false,
    };

    pub const BOLD: Emphasis = Emphasis {
        kind: ElementKind::Bold,
        delim: b"**",
        allows_inner_star: true,
        single_char_word_only: false,
    };

    pub const ITALIC: Emphasis = Emphasis {
        kind: ElementKind::Italic,
        delim: b"*",
        allows_inner_star: false,
        single_char_word_only: true,
    };

    /// Whether `inner` may appear between the delimiters.
    pub fn accepts_inner(&self, inner: &str) -> bool {
        let Some(first) = inner.chars().next() else {
            return false;
        };
        let last = inner.chars().next_back().unwrap_or(first);
        if first.is_whitespace() || first == '*' || last.is_whitespace() {
            return false;
        }
        if self.single_char_word_only && inner.chars().nth(1).is_none() {
            return first.is_alphanumeric() || first == '_';
        }
        true
    }
}
