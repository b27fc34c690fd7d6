//! # docoutline
//!
//! Infer a document's title and heading outline from positioned words.
//!
//! Many documents carry no heading markup; their structure is only visible
//! through typography. Given the words of each page with position, font
//! size, font name and color (as produced by a layout extractor), this
//! library profiles the typography of the document, groups words into
//! lines, scores each line as a heading candidate and emits
//! `{title, outline: [{level, text, page}]}`.
//!
//! ## Quick Start
//!
//! ```no_run
//! use docoutline::{extract_outline_from_file, render, OutlineOptions};
//!
//! fn main() -> docoutline::Result<()> {
//!     // Words dumped by a layout extractor
//!     let result = extract_outline_from_file("report.words.json", &OutlineOptions::default())?;
//!
//!     println!("{}", render::to_json(&result, render::JsonFormat::Pretty)?);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Typography profile**: body size, up to three heading sizes and common colors
//! - **Additive heading score**: size, weight, color, indentation, spacing, casing, numbering
//! - **Deterministic**: identical input always yields identical output
//! - **Parallel processing**: uses Rayon across pages and across documents

pub mod analyze;
pub mod error;
pub mod model;
pub mod render;
pub mod source;

// Re-export commonly used types
pub use analyze::{
    detect_title, group_lines, ErrorMode, HeadingClassifier, OutlineAssembler, OutlineOptions,
    TypographyProfile,
};
pub use error::{Error, Result};
pub use model::{Color, DocumentResult, HeadingLevel, Line, OutlineEntry, Word};
pub use render::JsonFormat;
pub use source::{PageWords, WordSource};

use rayon::prelude::*;
use std::path::Path;

/// Infer the outline of a document read from a word source.
///
/// # Arguments
///
/// * `source` - Paginated words of the document
/// * `options` - Inference options
///
/// # Example
///
/// ```
/// use docoutline::{extract_outline, OutlineOptions, PageWords, Word};
///
/// let page = vec![
///     Word::new("Overview", 72.0, 80.0, 98.0).with_size(18.0).with_font("Arial-Bold"),
///     Word::new("Body", 72.0, 120.0, 132.0).with_size(12.0),
///     Word::new("text", 110.0, 120.0, 132.0).with_size(12.0),
/// ];
/// let result = extract_outline(&PageWords::from(vec![page]), &OutlineOptions::default())?;
///
/// assert_eq!(result.title, "Overview");
/// # Ok::<(), docoutline::Error>(())
/// ```
pub fn extract_outline<S: WordSource + ?Sized>(
    source: &S,
    options: &OutlineOptions,
) -> Result<DocumentResult> {
    let pages = load_pages(source, options)?;
    Ok(extract_outline_from_pages(&pages, options))
}

/// Infer the outline of a document from a JSON word dump.
///
/// # Example
///
/// ```no_run
/// use docoutline::{extract_outline_from_file, OutlineOptions};
///
/// let options = OutlineOptions::new().lenient().sequential();
/// let result = extract_outline_from_file("report.words.json", &options).unwrap();
/// println!("{} headings", result.outline.len());
/// ```
pub fn extract_outline_from_file<P: AsRef<Path>>(
    path: P,
    options: &OutlineOptions,
) -> Result<DocumentResult> {
    let words = PageWords::open(path)?;
    extract_outline(&words, options)
}

/// Infer the outline of a document from a JSON word dump without blocking.
#[cfg(feature = "async")]
pub async fn extract_outline_from_file_async<P: AsRef<Path>>(
    path: P,
    options: &OutlineOptions,
) -> Result<DocumentResult> {
    let words = PageWords::open_async(path).await?;
    extract_outline(&words, options)
}

/// Infer the outline of a document whose pages are already in memory.
///
/// Never fails: a document without any font size in its sampled pages
/// yields an empty title and an empty outline.
pub fn extract_outline_from_pages(pages: &[Vec<Word>], options: &OutlineOptions) -> DocumentResult {
    let Some(profile) = TypographyProfile::from_pages(pages, options) else {
        log::debug!(
            "No font sizes in the first {} pages, returning an empty outline",
            options.profile_pages
        );
        return DocumentResult::empty();
    };

    let lines: Vec<Vec<Line>> = if options.parallel {
        pages
            .par_iter()
            .map(|words| group_lines(words, options.line_tolerance))
            .collect()
    } else {
        pages
            .iter()
            .map(|words| group_lines(words, options.line_tolerance))
            .collect()
    };

    let title = detect_title(&lines, &profile, options);
    let headings = HeadingClassifier::new(&profile, options).classify_pages(&lines);

    OutlineAssembler::new(title).extend(headings).finish()
}

/// Compute the typography profile of a document without classifying it.
///
/// Returns `None` when the sampled pages carry no font sizes.
pub fn profile_document<S: WordSource + ?Sized>(
    source: &S,
    options: &OutlineOptions,
) -> Result<Option<TypographyProfile>> {
    let sampled = source.page_count().min(options.profile_pages);
    let mut pages = Vec::with_capacity(sampled);
    for index in 0..sampled {
        pages.push(read_page(source, index, options)?);
    }
    Ok(TypographyProfile::from_pages(&pages, options))
}

/// Infer outlines for many documents in parallel.
///
/// Documents share no state; results are returned in input order.
pub fn extract_outlines<S: WordSource + Sync>(
    sources: &[S],
    options: &OutlineOptions,
) -> Vec<Result<DocumentResult>> {
    sources
        .par_iter()
        .map(|source| extract_outline(source, options))
        .collect()
}

fn load_pages<S: WordSource + ?Sized>(source: &S, options: &OutlineOptions) -> Result<Vec<Vec<Word>>> {
    (0..source.page_count())
        .map(|index| read_page(source, index, options))
        .collect()
}

fn read_page<S: WordSource + ?Sized>(
    source: &S,
    index: usize,
    options: &OutlineOptions,
) -> Result<Vec<Word>> {
    match source.page_words(index) {
        Ok(words) => Ok(words),
        Err(e) if options.error_mode == ErrorMode::Lenient => {
            log::warn!("Failed to read words of page {}: {}", index + 1, e);
            Ok(Vec::new())
        }
        Err(e) => Err(e),
    }
}

/// Builder for inferring outlines.
///
/// # Example
///
/// ```no_run
/// use docoutline::Outliner;
///
/// let json = Outliner::new()
///     .lenient()
///     .sequential()
///     .with_profile_pages(3)
///     .outline_file("report.words.json")?
///     .to_json()?;
/// # Ok::<(), docoutline::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Outliner {
    options: OutlineOptions,
}

impl Outliner {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all options.
    pub fn with_options(mut self, options: OutlineOptions) -> Self {
        self.options = options;
        self
    }

    /// Treat unreadable pages as empty.
    pub fn lenient(mut self) -> Self {
        self.options = self.options.lenient();
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.options = self.options.sequential();
        self
    }

    /// Set the number of pages sampled for the typography profile.
    pub fn with_profile_pages(mut self, pages: usize) -> Self {
        self.options = self.options.with_profile_pages(pages);
        self
    }

    /// Set the minimum heading score.
    pub fn with_heading_threshold(mut self, score: f64) -> Self {
        self.options = self.options.with_heading_threshold(score);
        self
    }

    /// Get the configured options.
    pub fn options(&self) -> &OutlineOptions {
        &self.options
    }

    /// Infer the outline of a word source.
    pub fn outline<S: WordSource + ?Sized>(&self, source: &S) -> Result<OutlinerResult> {
        extract_outline(source, &self.options).map(OutlinerResult::new)
    }

    /// Infer the outline of a JSON word dump.
    pub fn outline_file<P: AsRef<Path>>(&self, path: P) -> Result<OutlinerResult> {
        extract_outline_from_file(path, &self.options).map(OutlinerResult::new)
    }
}

/// Result of running an [`Outliner`].
#[derive(Debug, Clone)]
pub struct OutlinerResult {
    /// The inferred title and outline
    pub result: DocumentResult,
}

impl OutlinerResult {
    fn new(result: DocumentResult) -> Self {
        Self { result }
    }

    /// Convert to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        render::to_json(&self.result, JsonFormat::Pretty)
    }

    /// Convert to JSON in the given format.
    pub fn to_json_with(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.result, format)
    }

    /// Render as an indented text outline.
    pub fn to_text(&self) -> String {
        render::to_text(&self.result)
    }

    /// Get the result.
    pub fn result(&self) -> &DocumentResult {
        &self.result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingSource;

    impl WordSource for FailingSource {
        fn page_count(&self) -> usize {
            2
        }

        fn page_words(&self, index: usize) -> Result<Vec<Word>> {
            if index == 0 {
                Ok(vec![Word::new("Body", 72.0, 100.0, 112.0).with_size(12.0)])
            } else {
                Err(Error::InvalidInput("corrupt page".to_string()))
            }
        }
    }

    #[test]
    fn test_outliner_builder() {
        let outliner = Outliner::new()
            .lenient()
            .sequential()
            .with_profile_pages(2)
            .with_heading_threshold(5.0);

        assert_eq!(outliner.options().error_mode, ErrorMode::Lenient);
        assert!(!outliner.options().parallel);
        assert_eq!(outliner.options().profile_pages, 2);
        assert_eq!(outliner.options().heading_threshold, 5.0);
    }

    #[test]
    fn test_outliner_builder_default() {
        let outliner = Outliner::default();
        assert_eq!(outliner.options().error_mode, ErrorMode::Strict);
        assert!(outliner.options().parallel);
    }

    #[test]
    fn test_strict_mode_propagates_page_errors() {
        let result = extract_outline(&FailingSource, &OutlineOptions::default());
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_lenient_mode_skips_page_errors() {
        let result = extract_outline(&FailingSource, &OutlineOptions::new().lenient()).unwrap();
        assert_eq!(result, DocumentResult::empty());
    }

    #[test]
    fn test_profile_document_samples_leading_pages() {
        let profile = profile_document(&FailingSource, &OutlineOptions::new().with_profile_pages(1))
            .unwrap()
            .unwrap();
        assert_eq!(profile.body_size(), 12.0);

        assert!(profile_document(&FailingSource, &OutlineOptions::default()).is_err());
    }

    #[test]
    fn test_empty_document() {
        let result = extract_outline(&PageWords::new(), &OutlineOptions::default()).unwrap();
        assert_eq!(
            render::to_json(&result, JsonFormat::Compact).unwrap(),
            r#"{"title":"","outline":[]}"#
        );
    }

    #[test]
    fn test_outline_file_missing() {
        let result = Outliner::new().outline_file("does/not/exist.json");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
