//! Typography profiling: body size, heading sizes and common colors.

use serde::Serialize;

use super::OutlineOptions;
use crate::model::{Color, HeadingLevel, Word};

/// Font statistics for heading detection, computed once per document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypographyProfile {
    body_size: f64,
    heading_sizes: Vec<f64>,
    common_colors: Vec<Color>,
}

impl TypographyProfile {
    /// Build a profile from the leading pages of a document.
    ///
    /// Only the first `options.profile_pages` pages are sampled. Returns
    /// `None` when no word in the sample carries a font size.
    pub fn from_pages(pages: &[Vec<Word>], options: &OutlineOptions) -> Option<Self> {
        let mut stats = FontStatistics::default();
        for word in pages.iter().take(options.profile_pages).flatten() {
            stats.add_word(word);
        }
        stats.analyze(options)
    }

    /// Body text font size (most common).
    pub fn body_size(&self) -> f64 {
        self.body_size
    }

    /// Heading sizes, largest first. At most one per level.
    pub fn heading_sizes(&self) -> &[f64] {
        &self.heading_sizes
    }

    /// Largest heading size, if any size exceeds the body size.
    pub fn largest_heading_size(&self) -> Option<f64> {
        self.heading_sizes.first().copied()
    }

    /// Zero-based rank of a heading size (0 = largest).
    pub fn size_rank(&self, size: f64) -> Option<usize> {
        self.heading_sizes.iter().position(|&s| s == size)
    }

    /// Level mapped to a font size, if it is one of the heading sizes.
    pub fn level_for(&self, size: f64) -> Option<HeadingLevel> {
        self.size_rank(size).and_then(HeadingLevel::from_rank)
    }

    /// Heading sizes paired with their levels.
    pub fn size_to_level(&self) -> Vec<(f64, HeadingLevel)> {
        self.heading_sizes
            .iter()
            .zip(HeadingLevel::ALL)
            .map(|(&size, level)| (size, level))
            .collect()
    }

    /// Most frequent text colors, most frequent first.
    pub fn common_colors(&self) -> &[Color] {
        &self.common_colors
    }

    /// Check if a color is one of the common text colors.
    pub fn is_common_color(&self, color: &Color) -> bool {
        self.common_colors.contains(color)
    }
}

/// Raw observations gathered from sampled words.
#[derive(Debug, Default)]
struct FontStatistics {
    sizes: Frequencies<f64>,
    colors: Frequencies<Color>,
}

impl FontStatistics {
    fn add_word(&mut self, word: &Word) {
        if let Some(size) = word.font_size {
            self.sizes.add(size);
        }
        if let Some(color) = word.color.as_ref().filter(|c| !c.is_empty()) {
            self.colors.add(color.clone());
        }
    }

    fn analyze(self, options: &OutlineOptions) -> Option<TypographyProfile> {
        let body_size = self.sizes.most_common(1).into_iter().next()?;

        let mut heading_sizes: Vec<f64> = self
            .sizes
            .values()
            .filter(|&&s| s > body_size)
            .copied()
            .collect();
        heading_sizes.sort_by(|a, b| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));
        heading_sizes.truncate(options.max_heading_levels.min(HeadingLevel::ALL.len()));

        let common_colors = self.colors.most_common(options.common_colors);

        log::debug!(
            "Typography profile: body={}, headings={:?}, {} common colors",
            body_size,
            heading_sizes,
            common_colors.len()
        );

        Some(TypographyProfile {
            body_size,
            heading_sizes,
            common_colors,
        })
    }
}

/// Occurrence counts kept in first-observation order.
///
/// Values are compared with `==`, which rules out hashing for floats and
/// color tuples; the number of distinct values per document is small.
#[derive(Debug)]
struct Frequencies<T> {
    entries: Vec<(T, usize)>,
}

impl<T> Default for Frequencies<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T: PartialEq + Clone> Frequencies<T> {
    fn add(&mut self, value: T) {
        match self.entries.iter_mut().find(|(v, _)| *v == value) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((value, 1)),
        }
    }

    fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|(v, _)| v)
    }

    /// Up to `n` values by descending count; ties keep first-observation order.
    fn most_common(&self, n: usize) -> Vec<T> {
        let mut ranked: Vec<&(T, usize)> = self.entries.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.into_iter().take(n).map(|(v, _)| v.clone()).collect()
    }
}
