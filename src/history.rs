/// Append-only record of previously computed results, addressed by 1-based
/// id in insertion order. Entries are never removed or overwritten; the
/// session loop owns one instance for the lifetime of the process.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct History {
    entries: Vec<f64>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a result and returns the id it was assigned.
    pub fn push(&mut self, value: f64) -> usize {
        self.entries.push(value);
        self.entries.len()
    }

    /// Resolves a 1-based id; id 0 and ids past the end resolve to `None`.
    pub fn get(&self, id: usize) -> Option<f64> {
        id.checked_sub(1).and_then(|i| self.entries.get(i)).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
