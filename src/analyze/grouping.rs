//! Line grouping: cluster a page's words into visual lines.

use crate::model::{Line, Word};

/// A line under construction.
struct Bucket<'a> {
    /// Set by the first member and never recomputed
    key: f64,
    members: Vec<&'a Word>,
}

/// Group the words of one page into lines, top of page first.
///
/// Each word joins the first existing bucket whose key is within
/// `tolerance` of the word's top; otherwise it opens a new bucket keyed by
/// its own top. Keys are not averaged as members arrive, so assignment
/// depends on input order: on pages with many nearly equal tops a line can
/// drift away from words that would match a running average.
pub fn group_lines(words: &[Word], tolerance: f64) -> Vec<Line> {
    let mut buckets: Vec<Bucket<'_>> = Vec::new();

    for word in words {
        match buckets
            .iter_mut()
            .find(|b| (word.top - b.key).abs() <= tolerance)
        {
            Some(bucket) => bucket.members.push(word),
            None => buckets.push(Bucket {
                key: word.top,
                members: vec![word],
            }),
        }
    }

    // key == first member's top
    buckets.sort_by(|a, b| {
        a.key
            .partial_cmp(&b.key)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    buckets
        .into_iter()
        .map(|b| Line::from_words(b.members.into_iter().cloned().collect()))
        .collect()
}
