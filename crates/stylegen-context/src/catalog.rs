//! Theme name → style prompt mapping for one run.

use crate::synthesis::GeneratedDocument;

/// Generated documents in discovery order.
#[derive(Debug, Clone, Default)]
pub struct PromptCatalog {
    documents: Vec<GeneratedDocument>,
}

impl PromptCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a document. A document for an already-present theme replaces
    /// the old one in place.
    pub fn insert(&mut self, document: GeneratedDocument) {
        match self.documents.iter_mut().find(|d| d.theme == document.theme) {
            Some(existing) => *existing = document,
            None => self.documents.push(document),
        }
    }

    /// Prompt text for `theme`, or `""` for an unknown theme.
    pub fn get(&self, theme: &str) -> &str {
        self.documents
            .iter()
            .find(|d| d.theme == theme)
            .map_or("", GeneratedDocument::as_str)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.documents.iter().map(|d| d.theme.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &GeneratedDocument> {
        self.documents.iter()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
