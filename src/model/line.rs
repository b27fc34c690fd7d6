//! Visual text lines.

use super::Word;

/// Words sharing a vertical band on one page, in left-to-right order.
///
/// The first word stands in for the whole line when reading font size,
/// font name, color and indentation.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    words: Vec<Word>,
}

impl Line {
    /// Create a line from words, sorting them by x0.
    ///
    /// The sort is stable, so words with equal x0 keep their input order.
    pub fn from_words(mut words: Vec<Word>) -> Self {
        words.sort_by(|a, b| a.x0.partial_cmp(&b.x0).unwrap_or(std::cmp::Ordering::Equal));
        Self { words }
    }

    /// Get the words in reading order.
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Get the leftmost word.
    pub fn first_word(&self) -> Option<&Word> {
        self.words.first()
    }

    /// Number of words on the line.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Check if the line has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Word texts joined by single spaces, trimmed.
    pub fn text(&self) -> String {
        let joined = self
            .words
            .iter()
            .map(|w| w.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        joined.trim().to_string()
    }

    /// Top of the first word.
    pub fn top(&self) -> f64 {
        self.words.first().map_or(0.0, |w| w.top)
    }

    /// Bottom of the last word.
    pub fn bottom(&self) -> f64 {
        self.words.last().map_or(0.0, |w| w.bottom)
    }
}
