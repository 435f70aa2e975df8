//! Category vocabulary - dense codes for categorical parameter values

use rustc_hash::FxHashMap;

/// Ordered mapping from distinct category label to integer code.
///
/// Codes are assigned in first-seen order starting at 0, so they are
/// unique and contiguous. A vocabulary lives for one axis only.
#[derive(Debug, Clone, Default)]
pub struct CategoryVocabulary {
    codes: FxHashMap<String, usize>,
    labels: Vec<String>,
}

impl CategoryVocabulary {
    /// Create an empty vocabulary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the code of `label`, assigning the next code if it is new.
    pub fn code_for(&mut self, label: &str) -> usize {
        if let Some(&code) = self.codes.get(label) {
            return code;
        }
        let code = self.labels.len();
        self.codes.insert(label.to_string(), code);
        self.labels.push(label.to_string());
        code
    }

    /// Consume the vocabulary, returning labels ordered by code.
    #[must_use]
    pub fn into_labels(self) -> Vec<String> {
        self.labels
    }
}
