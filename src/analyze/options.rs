//! Tunables for outline inference.

/// Options for inferring a document outline.
///
/// Every threshold used by the profiler, title detector and heading
/// classifier lives here; the defaults reproduce the reference behavior.
#[derive(Debug, Clone)]
pub struct OutlineOptions {
    /// How failed page reads are handled
    pub error_mode: ErrorMode,

    /// Whether pages are scored on the rayon pool
    pub parallel: bool,

    /// Words whose top is within this distance of a line's key join that line
    pub line_tolerance: f64,

    /// Number of leading pages sampled for the typography profile
    pub profile_pages: usize,

    /// Maximum number of heading sizes mapped to levels (H1..H3)
    pub max_heading_levels: usize,

    /// Number of most frequent colors treated as ordinary text colors
    pub common_colors: usize,

    /// Number of leading pages searched for the title
    pub title_pages: usize,

    /// Title lines must be shorter than this many characters
    pub max_title_chars: usize,

    /// Lines longer than this many characters are never headings
    pub max_heading_chars: usize,

    /// Lines shorter than this many characters are never headings
    pub min_heading_chars: usize,

    /// Lines with x0 below this are favored as headings
    pub indent_threshold: f64,

    /// Page line gap assumed when a page has no positive gaps
    pub default_line_gap: f64,

    /// A gap above larger than this multiple of the page's average gap counts as spacing
    pub gap_factor: f64,

    /// All-caps lines must be shorter than this many characters to earn the caps bonus
    pub max_caps_chars: usize,

    /// Lines with at most this many words can earn the brevity bonus
    pub max_brief_words: usize,

    /// Running score needed before the brevity bonus applies
    pub brevity_min_score: f64,

    /// Minimum total score for a line to become a heading
    pub heading_threshold: f64,
}

impl OutlineOptions {
    /// Create new options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Enable lenient mode (treat unreadable pages as empty).
    pub fn lenient(mut self) -> Self {
        self.error_mode = ErrorMode::Lenient;
        self
    }

    /// Enable or disable parallel page scoring.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Set the vertical tolerance for line grouping.
    pub fn with_line_tolerance(mut self, tolerance: f64) -> Self {
        self.line_tolerance = tolerance;
        self
    }

    /// Set the number of pages sampled for the typography profile.
    pub fn with_profile_pages(mut self, pages: usize) -> Self {
        self.profile_pages = pages;
        self
    }

    /// Set the number of pages searched for the title.
    pub fn with_title_pages(mut self, pages: usize) -> Self {
        self.title_pages = pages;
        self
    }

    /// Set the indentation threshold.
    pub fn with_indent_threshold(mut self, x0: f64) -> Self {
        self.indent_threshold = x0;
        self
    }

    /// Set the minimum heading score.
    pub fn with_heading_threshold(mut self, score: f64) -> Self {
        self.heading_threshold = score;
        self
    }
}

impl Default for OutlineOptions {
    fn default() -> Self {
        Self {
            error_mode: ErrorMode::Strict,
            parallel: true,
            line_tolerance: 3.0,
            profile_pages: 5,
            max_heading_levels: 3,
            common_colors: 5,
            title_pages: 2,
            max_title_chars: 100,
            max_heading_chars: 100,
            min_heading_chars: 3,
            indent_threshold: 70.0,
            default_line_gap: 5.0,
            gap_factor: 1.5,
            max_caps_chars: 50,
            max_brief_words: 5,
            brevity_min_score: 3.0,
            heading_threshold: 4.0,
        }
    }
}

/// Error handling mode when a page cannot be read from the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Fail on any error
    #[default]
    Strict,
    /// Log the failure and treat the page as empty
    Lenient,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outline_options_builder() {
        let options = OutlineOptions::new()
            .lenient()
            .sequential()
            .with_profile_pages(3)
            .with_indent_threshold(90.0)
            .with_heading_threshold(5.0);

        assert_eq!(options.error_mode, ErrorMode::Lenient);
        assert!(!options.parallel);
        assert_eq!(options.profile_pages, 3);
        assert_eq!(options.indent_threshold, 90.0);
        assert_eq!(options.heading_threshold, 5.0);
    }

    #[test]
    fn test_default_options() {
        let options = OutlineOptions::default();
        assert_eq!(options.error_mode, ErrorMode::Strict);
        assert!(options.parallel);
        assert_eq!(options.line_tolerance, 3.0);
        assert_eq!(options.profile_pages, 5);
        assert_eq!(options.title_pages, 2);
        assert_eq!(options.default_line_gap, 5.0);
        assert_eq!(options.heading_threshold, 4.0);
    }
}
