//! Title detection on the first pages.

use super::{OutlineOptions, TypographyProfile};
use crate::model::Line;

/// Find the document title.
///
/// The title is the first line, scanning the first `options.title_pages`
/// pages top to bottom, whose first word uses the largest heading size and
/// whose text is shorter than `options.max_title_chars`. Only that single
/// size is considered, so a document whose title is set in some other size
/// gets an empty title.
pub fn detect_title(
    pages: &[Vec<Line>],
    profile: &TypographyProfile,
    options: &OutlineOptions,
) -> String {
    let Some(largest) = profile.largest_heading_size() else {
        return String::new();
    };

    for (index, lines) in pages.iter().take(options.title_pages).enumerate() {
        let found = lines.iter().find(|line| {
            line.first_word().and_then(|w| w.font_size) == Some(largest)
                && line.text().chars().count() < options.max_title_chars
        });

        // A match with no visible text ends this page's scan only.
        if let Some(line) = found {
            let title = line.text();
            if !title.is_empty() {
                log::debug!("Title found on page {}: {:?}", index + 1, title);
                return title;
            }
        }
    }

    String::new()
}
