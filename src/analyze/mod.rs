//! Outline inference.
//!
//! The pipeline for one document:
//!
//! 1. [`TypographyProfile::from_pages`] samples the leading pages for body
//!    size, heading sizes and common colors.
//! 2. [`group_lines`] turns each page's words into lines.
//! 3. [`detect_title`] looks for the title on the first pages.
//! 4. [`HeadingClassifier`] scores every line and keeps the headings.
//! 5. [`OutlineAssembler`] packages title and headings.

mod assemble;
mod classifier;
mod grouping;
mod options;
mod profile;
pub mod rules;
mod title;

pub use assemble::OutlineAssembler;
pub use classifier::{DuplicateGuard, HeadingClassifier, LineScore};
pub use grouping::group_lines;
pub use options::{ErrorMode, OutlineOptions};
pub use profile::TypographyProfile;
pub use rules::{LineFeatures, PageStats};
pub use title::detect_title;
