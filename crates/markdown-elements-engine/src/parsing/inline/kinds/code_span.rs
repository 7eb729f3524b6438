/// Inline code type with owned delimiter constant.
///
/// A code span is a backtick, at least one non-backtick character, and a
/// closing backtick. Other inline candidates inside it lose the overlap sweep.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';
}
