//! Word sources: where positioned words come from.
//!
//! Layout extraction (glyph decoding, font handling, rendering) happens
//! outside this crate. An extractor either implements [`WordSource`]
//! directly or writes a JSON word dump that [`PageWords`] can load:
//!
//! ```json
//! {"pages": [[{"text": "Overview", "x0": 72.0, "top": 90.0, "bottom": 108.0,
//!              "size": 18.0, "fontname": "Arial-BoldMT",
//!              "non_stroking_color": [0, 0, 0]}]]}
//! ```
//!
//! A bare array of pages (`[[...], [...]]`) is accepted as well.

use std::fs;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::Word;

/// A paginated, read-only supply of words.
pub trait WordSource {
    /// Total number of pages.
    fn page_count(&self) -> usize;

    /// Words of one page (0-indexed), in extraction order.
    fn page_words(&self, index: usize) -> Result<Vec<Word>>;
}

impl<T: WordSource + ?Sized> WordSource for &T {
    fn page_count(&self) -> usize {
        (**self).page_count()
    }

    fn page_words(&self, index: usize) -> Result<Vec<Word>> {
        (**self).page_words(index)
    }
}

/// Words held in memory, one vector per page.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PageWords {
    pages: Vec<Vec<Word>>,
}

/// Accepted JSON shapes of a word dump.
#[derive(Deserialize)]
#[serde(untagged)]
enum WordDump {
    Document { pages: Vec<Vec<Word>> },
    Pages(Vec<Vec<Word>>),
}

impl<'de> Deserialize<'de> for PageWords {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let pages = match WordDump::deserialize(deserializer)? {
            WordDump::Document { pages } | WordDump::Pages(pages) => pages,
        };
        Ok(Self { pages })
    }
}

impl PageWords {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a page.
    pub fn push_page(&mut self, words: Vec<Word>) {
        self.pages.push(words);
    }

    /// Get all pages.
    pub fn pages(&self) -> &[Vec<Word>] {
        &self.pages
    }

    /// Take ownership of the pages.
    pub fn into_pages(self) -> Vec<Vec<Word>> {
        self.pages
    }

    /// Total number of words across all pages.
    pub fn word_count(&self) -> usize {
        self.pages.iter().map(Vec::len).sum()
    }

    /// Load a word dump from a JSON file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        Self::from_json_str(&data)
    }

    /// Load a word dump from a reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut data = String::new();
        reader.read_to_string(&mut data)?;
        Self::from_json_str(&data)
    }

    /// Parse a word dump from a JSON string.
    pub fn from_json_str(data: &str) -> Result<Self> {
        if data.trim().is_empty() {
            return Err(Error::InvalidInput("empty word dump".to_string()));
        }
        Ok(serde_json::from_str(data)?)
    }

    /// Load a word dump from a JSON file without blocking the runtime.
    #[cfg(feature = "async")]
    pub async fn open_async<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = tokio::fs::read_to_string(path).await?;
        Self::from_json_str(&data)
    }
}

impl From<Vec<Vec<Word>>> for PageWords {
    fn from(pages: Vec<Vec<Word>>) -> Self {
        Self { pages }
    }
}

impl WordSource for PageWords {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_words(&self, index: usize) -> Result<Vec<Word>> {
        self.pages
            .get(index)
            .cloned()
            .ok_or(Error::PageOutOfRange(index + 1, self.pages.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_document_shape() {
        let json = r#"{"pages": [
            [{"text": "A", "x0": 1, "top": 2, "bottom": 3, "size": 12}],
            []
        ]}"#;
        let words = PageWords::from_json_str(json).unwrap();

        assert_eq!(words.page_count(), 2);
        assert_eq!(words.word_count(), 1);
        assert_eq!(words.page_words(0).unwrap()[0].text, "A");
        assert!(words.page_words(1).unwrap().is_empty());
    }

    #[test]
    fn test_parse_bare_pages() {
        let json = r#"[[{"text": "B", "x0": 1, "top": 2, "bottom": 3}]]"#;
        let words = PageWords::from_json_str(json).unwrap();
        assert_eq!(words.page_count(), 1);
    }

    #[test]
    fn test_page_out_of_range() {
        let words = PageWords::from(vec![vec![]]);
        let err = words.page_words(3).unwrap_err();
        assert!(matches!(err, Error::PageOutOfRange(4, 1)));
    }

    #[test]
    fn test_invalid_dumps() {
        assert!(matches!(
            PageWords::from_json_str("   "),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            PageWords::from_json_str(r#"{"words": []}"#),
            Err(Error::Json(_))
        ));
        assert!(matches!(
            PageWords::from_json_str(r#"[[{"text": "no position"}]]"#),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn test_from_reader() {
        let data = br#"{"pages": [[]]}"#;
        let words = PageWords::from_reader(&data[..]).unwrap();
        assert_eq!(words.page_count(), 1);
    }

    #[test]
    fn test_source_by_reference() {
        fn count<S: WordSource>(source: S) -> usize {
            source.page_count()
        }
        let words = PageWords::from(vec![vec![], vec![]]);
        assert_eq!(count(&words), 2);
    }
}
