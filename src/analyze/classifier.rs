//! Heading classification.
//!
//! Every line of every page is scored against the typography profile and
//! page-local spacing. Lines reaching the threshold become outline entries
//! with a level derived from their font size.

use rayon::prelude::*;

use super::rules::{self, LineFeatures, PageStats, ScoreContext, BREVITY_RULE, RULES};
use super::{OutlineOptions, TypographyProfile};
use crate::model::{HeadingLevel, Line, OutlineEntry};

/// Score of one line with its per-rule breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct LineScore {
    /// Sum of all contributions
    pub total: f64,
    /// Contribution of each rule, in evaluation order
    pub contributions: Vec<(&'static str, f64)>,
}

impl LineScore {
    /// Contribution of a named rule (0 if it did not fire).
    pub fn contribution(&self, rule: &str) -> f64 {
        self.contributions
            .iter()
            .find(|(name, _)| *name == rule)
            .map_or(0.0, |(_, value)| *value)
    }
}

/// Scores lines and decides which ones are headings.
#[derive(Debug, Clone, Copy)]
pub struct HeadingClassifier<'a> {
    profile: &'a TypographyProfile,
    options: &'a OutlineOptions,
}

impl<'a> HeadingClassifier<'a> {
    /// Create a classifier for a finalized profile.
    pub fn new(profile: &'a TypographyProfile, options: &'a OutlineOptions) -> Self {
        Self { profile, options }
    }

    /// Compute page statistics from a page's lines.
    pub fn page_stats(&self, lines: &[Line]) -> PageStats {
        let gaps: Vec<f64> = lines
            .windows(2)
            .map(|w| w[1].top() - w[0].bottom())
            .filter(|gap| *gap > 0.0)
            .collect();

        let avg_line_gap = if gaps.is_empty() {
            self.options.default_line_gap
        } else {
            gaps.iter().sum::<f64>() / gaps.len() as f64
        };

        PageStats { avg_line_gap }
    }

    /// Extract the features of `lines[index]`, or `None` if the line is empty
    /// or its text length rules it out as a heading.
    pub fn features<'l>(&self, lines: &'l [Line], index: usize) -> Option<LineFeatures<'l>> {
        let line = lines.get(index)?;
        let first = line.first_word()?;

        let text = line.text();
        let length = text.chars().count();
        if length > self.options.max_heading_chars || length < self.options.min_heading_chars {
            log::trace!("Skipping line {:?}: length {}", text, length);
            return None;
        }

        let gap_above = match index {
            0 => 0.0,
            _ => first.top - lines[index - 1].bottom(),
        };

        Some(LineFeatures {
            text,
            word_count: line.word_count(),
            font_size: first.font_size.unwrap_or(self.profile.body_size()),
            font_name: &first.font_name,
            color: first.color.as_ref(),
            x0: first.x0,
            gap_above,
        })
    }

    /// Score a line.
    pub fn score_line(&self, line: &LineFeatures<'_>, page: &PageStats) -> LineScore {
        let ctx = ScoreContext {
            profile: self.profile,
            page,
            options: self.options,
        };

        let mut contributions: Vec<(&'static str, f64)> = RULES
            .iter()
            .map(|rule| (rule.name, (rule.apply)(line, &ctx)))
            .collect();
        let running: f64 = contributions.iter().map(|(_, v)| v).sum();

        let bonus = rules::brevity(line, running, self.options);
        contributions.push((BREVITY_RULE, bonus));

        LineScore {
            total: running + bonus,
            contributions,
        }
    }

    /// Check if a score makes the line a heading.
    pub fn is_heading(&self, score: &LineScore) -> bool {
        score.total >= self.options.heading_threshold
    }

    /// Level for an accepted heading.
    ///
    /// Mapped heading sizes use their level. Bold lines above body size
    /// that are not mapped (e.g. sizes only seen after the sampled pages)
    /// are placed against the heading-size thresholds. Everything else is H3.
    pub fn assign_level(&self, line: &LineFeatures<'_>) -> HeadingLevel {
        if let Some(level) = self.profile.level_for(line.font_size) {
            return level;
        }

        if line.font_size > self.profile.body_size() && line.is_bold() {
            let sizes = self.profile.heading_sizes();
            if sizes.first().is_some_and(|&s| line.font_size >= s) {
                return HeadingLevel::H1;
            }
            if sizes.get(1).is_some_and(|&s| line.font_size >= s) {
                return HeadingLevel::H2;
            }
        }

        HeadingLevel::H3
    }

    /// Classify the lines of one page (1-indexed page number).
    ///
    /// Returns accepted headings before adjacent-duplicate filtering.
    pub fn classify_page(&self, lines: &[Line], page_number: u32) -> Vec<OutlineEntry> {
        let stats = self.page_stats(lines);
        log::debug!(
            "Page {}: {} lines, average gap {:.2}",
            page_number,
            lines.len(),
            stats.avg_line_gap
        );

        let mut accepted = Vec::new();
        for index in 0..lines.len() {
            let Some(features) = self.features(lines, index) else {
                continue;
            };

            let score = self.score_line(&features, &stats);
            log::trace!(
                "Page {} line {:?}: score {} {:?}",
                page_number,
                features.text,
                score.total,
                score.contributions
            );

            if self.is_heading(&score) {
                let level = self.assign_level(&features);
                accepted.push(OutlineEntry::new(level, features.text, page_number));
            }
        }

        accepted
    }

    /// Classify every page and drop adjacent repeats.
    ///
    /// Pages may be scored in parallel; the duplicate guard always runs in
    /// page order, so the result does not depend on `options.parallel`.
    pub fn classify_pages(&self, pages: &[Vec<Line>]) -> Vec<OutlineEntry> {
        let per_page: Vec<Vec<OutlineEntry>> = if self.options.parallel {
            pages
                .par_iter()
                .enumerate()
                .map(|(i, lines)| self.classify_page(lines, page_number(i)))
                .collect()
        } else {
            pages
                .iter()
                .enumerate()
                .map(|(i, lines)| self.classify_page(lines, page_number(i)))
                .collect()
        };

        let mut guard = DuplicateGuard::default();
        per_page
            .into_iter()
            .flatten()
            .filter(|entry| guard.admit(entry))
            .collect()
    }
}

fn page_number(index: usize) -> u32 {
    u32::try_from(index + 1).unwrap_or(u32::MAX)
}

/// Rejects a heading whose lower-cased text equals or starts with the
/// lower-cased text of the most recently admitted heading.
///
/// Only the single previous entry is compared, so non-adjacent repeats
/// (running headers, sections with the same name) are kept.
#[derive(Debug, Default)]
pub struct DuplicateGuard {
    last: Option<String>,
}

impl DuplicateGuard {
    /// Decide whether an entry is admitted, remembering it if so.
    pub fn admit(&mut self, entry: &OutlineEntry) -> bool {
        let text = entry.text.to_lowercase();
        if let Some(last) = &self.last {
            if text.starts_with(last.as_str()) {
                log::trace!("Dropping repeated heading {:?}", entry.text);
                return false;
            }
        }
        self.last = Some(text);
        true
    }
}
