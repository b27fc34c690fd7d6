//! Heading scoring rules.
//!
//! Each rule is a pure function of a line's features and its context
//! (typography profile, page statistics, options) returning a score
//! contribution. The classifier sums [`RULES`], adds the brevity bonus
//! and compares the total to `OutlineOptions::heading_threshold`.

use std::sync::OnceLock;

use regex::Regex;

use super::{OutlineOptions, TypographyProfile};
use crate::model::{is_bold_font, Color};

/// Layout and style features of one line, read from its first word.
#[derive(Debug, Clone, PartialEq)]
pub struct LineFeatures<'a> {
    /// Trimmed line text
    pub text: String,
    /// Number of words on the line
    pub word_count: usize,
    /// Font size, defaulted to the body size when unknown
    pub font_size: f64,
    /// Font name, empty when unknown
    pub font_name: &'a str,
    /// Fill color
    pub color: Option<&'a Color>,
    /// Left edge of the first word
    pub x0: f64,
    /// Distance from the previous line's bottom to this line's top
    pub gap_above: f64,
}

impl LineFeatures<'_> {
    /// Check if the font name indicates a heavy weight.
    pub fn is_bold(&self) -> bool {
        is_bold_font(self.font_name)
    }
}

/// Per-page layout statistics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageStats {
    /// Mean of the positive gaps between consecutive lines
    pub avg_line_gap: f64,
}

/// Everything a rule may consult besides the line itself.
#[derive(Debug, Clone, Copy)]
pub struct ScoreContext<'a> {
    pub profile: &'a TypographyProfile,
    pub page: &'a PageStats,
    pub options: &'a OutlineOptions,
}

/// A named scoring rule.
#[derive(Clone, Copy)]
pub struct ScoringRule {
    /// Rule name, reported in score breakdowns
    pub name: &'static str,
    /// Score contribution of the rule
    pub apply: fn(&LineFeatures<'_>, &ScoreContext<'_>) -> f64,
}

impl std::fmt::Debug for ScoringRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScoringRule").field("name", &self.name).finish()
    }
}

/// Independent rules, summed before the brevity bonus.
pub const RULES: &[ScoringRule] = &[
    ScoringRule {
        name: "font_tier",
        apply: font_tier,
    },
    ScoringRule {
        name: "bold_font",
        apply: bold_font,
    },
    ScoringRule {
        name: "distinct_color",
        apply: distinct_color,
    },
    ScoringRule {
        name: "low_indent",
        apply: low_indent,
    },
    ScoringRule {
        name: "spacing_above",
        apply: spacing_above,
    },
    ScoringRule {
        name: "casing",
        apply: casing,
    },
    ScoringRule {
        name: "numbered",
        apply: numbered,
    },
];

/// Name under which the brevity bonus appears in breakdowns.
pub const BREVITY_RULE: &str = "brevity";

/// +3, +2 or +1 for the largest, second and third heading size.
pub fn font_tier(line: &LineFeatures<'_>, ctx: &ScoreContext<'_>) -> f64 {
    match ctx.profile.size_rank(line.font_size) {
        Some(0) => 3.0,
        Some(1) => 2.0,
        Some(2) => 1.0,
        _ => 0.0,
    }
}

/// +2 for bold, black or demibold fonts.
pub fn bold_font(line: &LineFeatures<'_>, _ctx: &ScoreContext<'_>) -> f64 {
    if line.is_bold() {
        2.0
    } else {
        0.0
    }
}

/// +1 when the color is known and not a common text color.
pub fn distinct_color(line: &LineFeatures<'_>, ctx: &ScoreContext<'_>) -> f64 {
    match line.color {
        Some(color) if !color.is_empty() && !ctx.profile.is_common_color(color) => 1.0,
        _ => 0.0,
    }
}

/// +1 when the line starts left of the indentation threshold.
pub fn low_indent(line: &LineFeatures<'_>, ctx: &ScoreContext<'_>) -> f64 {
    if line.x0 < ctx.options.indent_threshold {
        1.0
    } else {
        0.0
    }
}

/// +1 when the gap above is well beyond the page's average line gap.
pub fn spacing_above(line: &LineFeatures<'_>, ctx: &ScoreContext<'_>) -> f64 {
    if line.gap_above > ctx.page.avg_line_gap * ctx.options.gap_factor {
        1.0
    } else {
        0.0
    }
}

/// +1.5 for short all-caps text, otherwise +1 for title case not led by an article.
pub fn casing(line: &LineFeatures<'_>, ctx: &ScoreContext<'_>) -> f64 {
    let text = line.text.as_str();
    if is_all_caps(text) && text.chars().count() < ctx.options.max_caps_chars {
        return 1.5;
    }

    let lower = text.to_lowercase();
    if is_title_case(text) && !(lower.starts_with("the ") || lower.starts_with("a ")) {
        1.0
    } else {
        0.0
    }
}

/// +2 for section numbers such as "2 Scope" or "1.2.3 Results".
pub fn numbered(line: &LineFeatures<'_>, _ctx: &ScoreContext<'_>) -> f64 {
    if numbered_heading_pattern().is_match(&line.text) {
        2.0
    } else {
        0.0
    }
}

/// +1 for short lines that already look like headings.
pub fn brevity(line: &LineFeatures<'_>, running_score: f64, options: &OutlineOptions) -> f64 {
    if line.word_count <= options.max_brief_words && running_score >= options.brevity_min_score {
        1.0
    } else {
        0.0
    }
}

fn numbered_heading_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^\d+(\.\d+)*\s+[A-Za-z]").expect("numbered heading pattern is valid")
    })
}

/// At least one cased character and no lowercase ones.
pub fn is_all_caps(text: &str) -> bool {
    let mut cased = false;
    for c in text.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            cased = true;
        }
    }
    cased
}

/// Every cased run starts with an uppercase character followed only by
/// lowercase ones, and at least one cased character exists.
///
/// "Getting Started" and "Phase-Two Plan" qualify; "Getting started",
/// "McDonald" and "2024" do not.
pub fn is_title_case(text: &str) -> bool {
    let mut cased = false;
    let mut previous_cased = false;

    for c in text.chars() {
        if c.is_uppercase() {
            if previous_cased {
                return false;
            }
            previous_cased = true;
            cased = true;
        } else if c.is_lowercase() {
            if !previous_cased {
                return false;
            }
            previous_cased = true;
            cased = true;
        } else {
            previous_cased = false;
        }
    }

    cased
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Word;

    fn profile() -> TypographyProfile {
        let mut page: Vec<Word> = (0..10)
            .map(|_| {
                Word::new("w", 0.0, 0.0, 1.0)
                    .with_size(12.0)
                    .with_color(Color::new(vec![0.0]))
            })
            .collect();
        page.push(Word::new("w", 0.0, 0.0, 1.0).with_size(24.0));
        page.push(Word::new("w", 0.0, 0.0, 1.0).with_size(18.0));
        page.push(Word::new("w", 0.0, 0.0, 1.0).with_size(14.0));
        TypographyProfile::from_pages(&[page], &OutlineOptions::default()).unwrap()
    }

    fn features(text: &str) -> LineFeatures<'static> {
        LineFeatures {
            text: text.to_string(),
            word_count: text.split_whitespace().count(),
            font_size: 12.0,
            font_name: "Helvetica",
            color: None,
            x0: 100.0,
            gap_above: 0.0,
        }
    }

    fn with_ctx<R>(f: impl FnOnce(&ScoreContext<'_>) -> R) -> R {
        let profile = profile();
        let page = PageStats { avg_line_gap: 4.0 };
        let options = OutlineOptions::default();
        f(&ScoreContext {
            profile: &profile,
            page: &page,
            options: &options,
        })
    }

    #[test]
    fn test_font_tier() {
        with_ctx(|ctx| {
            for (size, expected) in [(24.0, 3.0), (18.0, 2.0), (14.0, 1.0), (12.0, 0.0), (30.0, 0.0)] {
                let line = LineFeatures {
                    font_size: size,
                    ..features("Heading")
                };
                assert_eq!(font_tier(&line, ctx), expected, "size {}", size);
            }
        });
    }

    #[test]
    fn test_bold_font() {
        with_ctx(|ctx| {
            let line = LineFeatures {
                font_name: "Arial-BlackItalic",
                ..features("Heading")
            };
            assert_eq!(bold_font(&line, ctx), 2.0);
            assert_eq!(bold_font(&features("Heading"), ctx), 0.0);
        });
    }

    #[test]
    fn test_distinct_color() {
        let common = Color::new(vec![0.0]);
        let accent = Color::new(vec![0.1, 0.3, 0.8]);
        with_ctx(|ctx| {
            assert_eq!(distinct_color(&features("x"), ctx), 0.0);
            let line = LineFeatures {
                color: Some(&common),
                ..features("x")
            };
            assert_eq!(distinct_color(&line, ctx), 0.0);
            let line = LineFeatures {
                color: Some(&accent),
                ..features("x")
            };
            assert_eq!(distinct_color(&line, ctx), 1.0);
        });
    }

    #[test]
    fn test_low_indent_and_spacing() {
        with_ctx(|ctx| {
            let line = LineFeatures {
                x0: 69.9,
                gap_above: 6.1,
                ..features("x")
            };
            assert_eq!(low_indent(&line, ctx), 1.0);
            assert_eq!(spacing_above(&line, ctx), 1.0);

            let line = LineFeatures {
                x0: 70.0,
                gap_above: 6.0,
                ..features("x")
            };
            assert_eq!(low_indent(&line, ctx), 0.0);
            assert_eq!(spacing_above(&line, ctx), 0.0);
        });
    }

    #[test]
    fn test_casing() {
        with_ctx(|ctx| {
            assert_eq!(casing(&features("EXECUTIVE SUMMARY"), ctx), 1.5);
            assert_eq!(casing(&features("Executive Summary"), ctx), 1.0);
            assert_eq!(casing(&features("The Journey Ahead"), ctx), 0.0);
            assert_eq!(casing(&features("A Brief History"), ctx), 0.0);
            assert_eq!(casing(&features("Theory Of Mind"), ctx), 1.0);
            assert_eq!(casing(&features("Executive summary"), ctx), 0.0);

            let long_caps = "A".repeat(50);
            // too long for the caps bonus
            assert_eq!(casing(&features(&long_caps), ctx), 0.0);
            let long_caps = "AB ".repeat(20);
            assert_eq!(casing(&features(long_caps.trim()), ctx), 0.0);
        });
    }

    #[test]
    fn test_numbered() {
        with_ctx(|ctx| {
            assert_eq!(numbered(&features("1.2 Introduction"), ctx), 2.0);
            assert_eq!(numbered(&features("3 Methods"), ctx), 2.0);
            assert_eq!(numbered(&features("2.1.4   Results"), ctx), 2.0);
            assert_eq!(numbered(&features("1. Introduction"), ctx), 0.0);
            assert_eq!(numbered(&features("2024 was a year"), ctx), 2.0);
            assert_eq!(numbered(&features("Section 1"), ctx), 0.0);
            assert_eq!(numbered(&features("12.5%"), ctx), 0.0);
        });
    }

    #[test]
    fn test_brevity() {
        let options = OutlineOptions::default();
        assert_eq!(brevity(&features("One two three"), 3.0, &options), 1.0);
        assert_eq!(brevity(&features("One two three"), 2.5, &options), 0.0);
        assert_eq!(brevity(&features("a b c d e f"), 5.0, &options), 0.0);
    }

    #[test]
    fn test_is_all_caps() {
        assert!(is_all_caps("OVERVIEW"));
        assert!(is_all_caps("ROUND 1A: SCOPE"));
        assert!(!is_all_caps("Overview"));
        assert!(!is_all_caps("123"));
        assert!(!is_all_caps(""));
    }

    #[test]
    fn test_is_title_case() {
        assert!(is_title_case("Getting Started"));
        assert!(is_title_case("Phase-Two Plan"));
        assert!(is_title_case("1. Introduction"));
        assert!(is_title_case("A"));
        assert!(!is_title_case("Getting started"));
        assert!(!is_title_case("McDonald"));
        assert!(!is_title_case("OVERVIEW"));
        assert!(!is_title_case("2024"));
        assert!(!is_title_case(""));
    }

    #[test]
    fn test_rule_names_are_unique() {
        let mut names: Vec<&str> = RULES.iter().map(|r| r.name).collect();
        names.push(BREVITY_RULE);
        let count = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), count);
    }
}
