/// Thematic break: three or more of one marker character, alone on the line.
pub struct Divider;

impl Divider {
    pub const MARKERS: [char; 3] = ['-', '*', '_'];
    pub const MIN_RUN: usize = 3;

    pub fn matches(line: &str) -> bool {
        let t = line.trim();
        let Some(first) = t.chars().next() else {
            return false;
        };
        Self::MARKERS.contains(&first)
            && t.len() >= Self::MIN_RUN
            && t.chars().all(|c| c == first)
    }
}
