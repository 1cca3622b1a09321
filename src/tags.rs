//! Tag-token editor attached to the edit-link form.
//!
//! Holds the ordered sequence of free-text tags between page load and form
//! submission. Nothing here persists; the server owns tag storage.

/// Ordered collection of tag tokens for one form instance.
///
/// Tokens are trimmed on entry; empty and exactly-duplicate tokens are
/// dropped (duplicate comparison is case-sensitive). Order is preserved and
/// read out verbatim at submission time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagEditor {
    tags: Vec<String>,
}

impl TagEditor {
    pub fn new() -> Self {
        TagEditor::default()
    }

    /// Seed the editor from the tag input's rendered value, a
    /// comma-separated list.
    pub fn from_input(value: &str) -> Self {
        let mut editor = TagEditor::new();
        for token in value.split(',') {
            editor.add(token);
        }
        editor
    }

    /// Add one token. Returns `true` if it was accepted.
    pub fn add(&mut self, token: &str) -> bool {
        let token = token.trim();
        if token.is_empty() || self.tags.iter().any(|t| t == token) {
            return false;
        }
        self.tags.push(token.to_string());
        true
    }

    /// Remove one token by value. Returns `true` if it was present.
    pub fn remove(&mut self, token: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|t| t != token);
        self.tags.len() != before
    }

    /// The current ordered tag values.
    pub fn values(&self) -> &[String] {
        &self.tags
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }
}
