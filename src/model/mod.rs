//! Data model for outline inference.
//!
//! Words come in from a layout extractor, lines are built per page during
//! analysis, and a [`DocumentResult`] goes out to the consumer.

mod line;
mod outline;
mod word;

pub use line::Line;
pub use outline::{DocumentResult, HeadingLevel, OutlineEntry};
pub use word::{is_bold_font, Color, Word};
