/// Ordered log of the lines entered during this session.
///
/// `history` prints entries with 1-based indices.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<String>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a line. Returns `false` and records nothing for blank lines.
    pub fn add(&mut self, entry: &str) -> bool {
        if entry.trim().is_empty() {
            return false;
        }

        self.entries.push(entry.to_owned());
        true
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator + '_ {
        self.entries.iter().map(String::as_str)
    }
}
