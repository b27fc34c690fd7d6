//! Positioned words as supplied by a layout extractor.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Fill color of a word, one value per color-space channel.
///
/// Gray is one channel, RGB three, CMYK four. Equality is exact per channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub Vec<f64>);

impl Color {
    /// Create a color from its channel values.
    pub fn new(channels: impl Into<Vec<f64>>) -> Self {
        Self(channels.into())
    }

    /// Get the channel values.
    pub fn channels(&self) -> &[f64] {
        &self.0
    }

    /// Check if the color has no channels.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A single word with its bounding box and font metadata.
///
/// Coordinates are in page space with `top` growing downward, the
/// convention used by most layout extractors. Key names follow the
/// extractor dump format (`size`, `fontname`, `non_stroking_color`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    /// The text content
    pub text: String,

    /// Distance from the top of the page to the top of the word
    pub top: f64,

    /// Distance from the top of the page to the bottom of the word
    pub bottom: f64,

    /// Left edge
    pub x0: f64,

    /// Font size in points, if the extractor reported one
    #[serde(
        rename = "size",
        alias = "font_size",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub font_size: Option<f64>,

    /// Font name (e.g., "Helvetica-Bold"); empty when unknown
    #[serde(
        rename = "fontname",
        alias = "font_name",
        default,
        deserialize_with = "nullable_string"
    )]
    pub font_name: String,

    /// Fill color, absent when unknown or not a plain channel list
    #[serde(
        rename = "non_stroking_color",
        alias = "color",
        default,
        deserialize_with = "channel_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub color: Option<Color>,
}

impl Word {
    /// Create a word with position only.
    pub fn new(text: impl Into<String>, x0: f64, top: f64, bottom: f64) -> Self {
        Self {
            text: text.into(),
            top,
            bottom,
            x0,
            font_size: None,
            font_name: String::new(),
            color: None,
        }
    }

    /// Set the font size.
    pub fn with_size(mut self, size: f64) -> Self {
        self.font_size = Some(size);
        self
    }

    /// Set the font name.
    pub fn with_font(mut self, name: impl Into<String>) -> Self {
        self.font_name = name.into();
        self
    }

    /// Set the fill color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = if color.is_empty() { None } else { Some(color) };
        self
    }

    /// Check if the font name indicates a heavy weight.
    pub fn is_bold(&self) -> bool {
        is_bold_font(&self.font_name)
    }
}

/// Check if a font name indicates a bold, black or demibold weight.
pub fn is_bold_font(font_name: &str) -> bool {
    let name = font_name.to_lowercase();
    name.contains("bold") || name.contains("black") || name.contains("demi")
}

fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accept only a non-empty list of numbers; anything else (pattern names,
/// bare scalars, null) means the color is unknown.
fn channel_list<'de, D>(deserializer: D) -> Result<Option<Color>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(items) = value else {
        return Ok(None);
    };

    let channels: Option<Vec<f64>> = items.iter().map(Value::as_f64).collect();
    Ok(channels.filter(|c| !c.is_empty()).map(Color))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold_detection() {
        assert!(is_bold_font("Helvetica-Bold"));
        assert!(is_bold_font("ArialMT-Black"));
        assert!(is_bold_font("MyriadPro-DemiCond"));
        assert!(is_bold_font("ABCDEF+TIMES-BOLD"));
        assert!(!is_bold_font("Helvetica-Oblique"));
        assert!(!is_bold_font(""));
    }

    #[test]
    fn test_word_builder() {
        let word = Word::new("Intro", 40.0, 100.0, 112.0)
            .with_size(18.0)
            .with_font("Arial-BoldMT")
            .with_color(Color::new(vec![0.2, 0.2, 0.6]));

        assert_eq!(word.font_size, Some(18.0));
        assert!(word.is_bold());
        assert_eq!(word.color.unwrap().channels(), &[0.2, 0.2, 0.6]);
    }

    #[test]
    fn test_empty_color_is_absent() {
        let word = Word::new("x", 0.0, 0.0, 1.0).with_color(Color::new(Vec::new()));
        assert!(word.color.is_none());
    }

    #[test]
    fn test_deserialize_extractor_keys() {
        let json = r#"{
            "text": "Overview",
            "x0": 72.0,
            "top": 90.5,
            "bottom": 108.5,
            "size": 18,
            "fontname": "ABCDEF+Arial-BoldMT",
            "non_stroking_color": [0, 0, 1]
        }"#;
        let word: Word = serde_json::from_str(json).unwrap();

        assert_eq!(word.text, "Overview");
        assert_eq!(word.font_size, Some(18.0));
        assert!(word.is_bold());
        assert_eq!(word.color, Some(Color::new(vec![0.0, 0.0, 1.0])));
    }

    #[test]
    fn test_deserialize_missing_and_odd_attributes() {
        let json = r#"{"text": "a", "x0": 1, "top": 2, "bottom": 3,
                       "fontname": null, "non_stroking_color": "P0"}"#;
        let word: Word = serde_json::from_str(json).unwrap();

        assert_eq!(word.font_size, None);
        assert_eq!(word.font_name, "");
        assert_eq!(word.color, None);

        let json = r#"{"text": "b", "x0": 1, "top": 2, "bottom": 3,
                       "non_stroking_color": [0.5, "x"]}"#;
        let word: Word = serde_json::from_str(json).unwrap();
        assert_eq!(word.color, None);

        let json = r#"{"text": "c", "x0": 1, "top": 2, "bottom": 3, "color": []}"#;
        let word: Word = serde_json::from_str(json).unwrap();
        assert_eq!(word.color, None);
    }

    #[test]
    fn test_deserialize_aliases() {
        let json = r#"{"text": "d", "x0": 1, "top": 2, "bottom": 3,
                       "font_size": 11.5, "font_name": "Times-Roman", "color": [0.0]}"#;
        let word: Word = serde_json::from_str(json).unwrap();

        assert_eq!(word.font_size, Some(11.5));
        assert_eq!(word.font_name, "Times-Roman");
        assert_eq!(word.color, Some(Color::new(vec![0.0])));
    }
}
