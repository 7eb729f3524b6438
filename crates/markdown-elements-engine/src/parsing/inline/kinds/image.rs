use crate::element::{ImageSize, UNSET_DIMENSION};
use crate::error::{ParseError, Result};

/// Image syntax and its size extensions.
///
/// Forms, most specific first:
///
/// | Form | Example | Width | Height |
/// |------|---------|-------|--------|
/// | attributes | `![a](u){width=50% height=20}` | from attrs | from attrs |
/// | both | `![a](u =300x200)` | 300 | 200 |
/// | width | `![a](u =300x)` | 300 | unset |
/// | height | `![a](u =x200)` | unset | 200 |
/// | bare | `![a](u)` | unset | unset |
pub struct Image;

impl Image {
    pub const OPEN: &'static [u8; 2] = b"![";
    pub const ALT_CLOSE: u8 = b']';
    pub const BODY_OPEN: u8 = b'(';
    pub const BODY_CLOSE: u8 = b')';
    pub const ATTRS_OPEN: u8 = b'{';
    pub const ATTRS_CLOSE: u8 = b'}';

    const SIZE_MARK: char = '=';
    const SIZE_SEP: char = 'x';
    const WIDTH_KEY: &'static str = "width=";
    const HEIGHT_KEY: &'static str = "height=";

    /// Splits a `url =WxH` style body into the url and the requested size.
    ///
    /// Returns `Ok(None)` when the body has no size suffix, in which case the
    /// whole body is the url.
    pub fn split_size_suffix(body: &str) -> Result<Option<(&str, ImageSize)>> {
        let Some(eq) = body.rfind(Self::SIZE_MARK) else {
            return Ok(None);
        };
        let url = body[..eq].trim();
        if url.is_empty() {
            return Ok(None);
        }
        let Some((w, h)) = body[eq + 1..].split_once(Self::SIZE_SEP) else {
            return Ok(None);
        };
        if !(is_digits_or_empty(w) && is_digits_or_empty(h)) || (w.is_empty() && h.is_empty()) {
            return Ok(None);
        }

        let size = ImageSize {
            width: parse_dimension(w)?,
            height: parse_dimension(h)?,
            is_percentage: false,
        };
        Ok(Some((url, size)))
    }

    /// Parses `width=.. height=..` tokens. Either key may be missing; a `%`
    /// suffix on either marks the size as a percentage. Unparsable values are
    /// logged and left unset.
    pub fn parse_attributes(attrs: &str) -> ImageSize {
        let mut size = ImageSize::INTRINSIC;
        for token in attrs.split_whitespace() {
            let (slot, raw) = if let Some(v) = token.strip_prefix(Self::WIDTH_KEY) {
                (&mut size.width, v)
            } else if let Some(v) = token.strip_prefix(Self::HEIGHT_KEY) {
                (&mut size.height, v)
            } else {
                continue;
            };

            let value = match raw.strip_suffix('%') {
                Some(v) => {
                    size.is_percentage = true;
                    v
                }
                None => raw,
            };

            match value.parse::<f32>() {
                Ok(n) if n.is_finite() && n >= 0.0 => *slot = n,
                _ => log::warn!("ignoring image dimension {token:?}: not a non-negative number"),
            }
        }
        size
    }
}

fn is_digits_or_empty(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

fn parse_dimension(digits: &str) -> Result<f32> {
    if digits.is_empty() {
        return Ok(UNSET_DIMENSION);
    }
    let n = digits
        .parse::<f32>()
        .map_err(|source| ParseError::InvalidDimension {
            value: digits.to_string(),
            source,
        })?;
    if !n.is_finite() {
        log::warn!("ignoring image dimension {digits:?}: too large");
        return Ok(UNSET_DIMENSION);
    }
    Ok(n)
}
