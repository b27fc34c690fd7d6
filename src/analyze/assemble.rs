//! Outline assembly.

use crate::model::{DocumentResult, OutlineEntry};

/// Collects classified headings and the title into a [`DocumentResult`].
///
/// Entries are kept exactly in the order they are pushed; duplicate
/// filtering has already happened in the classifier.
#[derive(Debug, Default)]
pub struct OutlineAssembler {
    title: String,
    entries: Vec<OutlineEntry>,
}

impl OutlineAssembler {
    /// Start an outline with the detected title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            entries: Vec::new(),
        }
    }

    /// Append one entry.
    pub fn push(&mut self, entry: OutlineEntry) {
        self.entries.push(entry);
    }

    /// Append entries in order.
    pub fn extend(mut self, entries: impl IntoIterator<Item = OutlineEntry>) -> Self {
        self.entries.extend(entries);
        self
    }

    /// Number of entries collected so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no entries were collected.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Finish the document.
    pub fn finish(self) -> DocumentResult {
        DocumentResult {
            title: self.title.trim().to_string(),
            outline: self.entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::HeadingLevel;

    #[test]
    fn test_assembly_preserves_order() {
        let mut assembler = OutlineAssembler::new("  Field Guide ");
        assembler.push(OutlineEntry::new(HeadingLevel::H1, "Birds", 1));
        let result = assembler
            .extend(vec![
                OutlineEntry::new(HeadingLevel::H3, "Wrens", 4),
                OutlineEntry::new(HeadingLevel::H2, "Songbirds", 2),
            ])
            .finish();

        assert_eq!(result.title, "Field Guide");
        let texts: Vec<&str> = result.outline.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["Birds", "Wrens", "Songbirds"]);
    }

    #[test]
    fn test_empty_assembly() {
        let assembler = OutlineAssembler::default();
        assert!(assembler.is_empty());
        assert_eq!(assembler.len(), 0);
        assert_eq!(assembler.finish(), DocumentResult::empty());
    }
}
