//! Plain text rendering for outline results.

use crate::model::DocumentResult;

/// Render a result as an indented outline, one heading per line.
///
/// ```text
/// Annual Report
///
/// Introduction ...... 1
///   Scope ........... 2
/// ```
pub fn to_text(result: &DocumentResult) -> String {
    let mut output = String::new();

    if !result.title.is_empty() {
        output.push_str(&result.title);
        output.push_str("\n\n");
    }

    for entry in &result.outline {
        let indent = "  ".repeat(usize::from(entry.level.number() - 1));
        let label = format!("{}{} ", indent, entry.text);
        let page = entry.page.to_string();
        let dots = 20usize.saturating_sub(label.chars().count() + page.len()).max(3);
        output.push_str(&label);
        output.push_str(&".".repeat(dots));
        output.push(' ');
        output.push_str(&page);
        output.push('\n');
    }

    output.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{HeadingLevel, OutlineEntry};

    #[test]
    fn test_to_text() {
        let result = DocumentResult {
            title: "Annual Report".to_string(),
            outline: vec![
                OutlineEntry::new(HeadingLevel::H1, "Introduction", 1),
                OutlineEntry::new(HeadingLevel::H2, "Scope", 2),
            ],
        };

        let text = to_text(&result);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Annual Report");
        assert_eq!(lines[1], "");
        assert!(lines[2].starts_with("Introduction "));
        assert!(lines[2].ends_with(" 1"));
        assert!(lines[3].starts_with("  Scope "));
        assert!(lines[3].ends_with(" 2"));
    }

    #[test]
    fn test_to_text_empty() {
        assert_eq!(to_text(&DocumentResult::empty()), "");
    }
}
