/// One in/out/label entry line, holding the raw texts as typed.
/// Validation and duration computation live in `core::duration`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Row {
    pub entry_text: String,
    pub exit_text: String,
    pub label: String,
}

impl Row {
    pub fn new(entry_text: &str, exit_text: &str, label: &str) -> Self {
        Self {
            entry_text: entry_text.to_string(),
            exit_text: exit_text.to_string(),
            label: label.to_string(),
        }
    }

    /// A row is used iff any of its three fields is non-empty after trimming.
    /// Unused rows are always valid and contribute nothing.
    pub fn is_used(&self) -> bool {
        !self.entry_text.trim().is_empty()
            || !self.exit_text.trim().is_empty()
            || !self.label.trim().is_empty()
    }

    /// Trimmed (entry, exit, label) values.
    pub fn values(&self) -> (&str, &str, &str) {
        (
            self.entry_text.trim(),
            self.exit_text.trim(),
            self.label.trim(),
        )
    }

    pub fn clear(&mut self) {
        self.entry_text.clear();
        self.exit_text.clear();
        self.label.clear();
    }
}
