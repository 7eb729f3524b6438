/// `[label](url)`. The label and url are both non-empty.
pub struct Link;

impl Link {
    pub const OPEN: u8 = b'[';
    /// Closes the label and opens the target.
    pub const MIDDLE: &'static [u8; 2] = b"](";
    pub const CLOSE: u8 = b')';
}
