//! Parser for the per-cake text resource.
//!
//! Expected body:
//! ```text
//! Description: Three layers of chocolate sponge
//! Price: 45
//! ```

use thiserror::Error;

pub const DESCRIPTION_LABEL: &str = "Description:";
pub const PRICE_LABEL: &str = "Price:";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetadataParseError {
    #[error("expected at least two lines, got {0}")]
    TooFewLines(usize),

    #[error("line {line} does not start with `{label}`")]
    MissingLabel { line: usize, label: &'static str },
}

/// Description and price read from `<id>.txt`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CakeMetadata {
    pub description: String,
    pub price: String,
}

impl CakeMetadata {
    pub fn parse(text: &str) -> Result<Self, MetadataParseError> {
        let lines: Vec<&str> = text.lines().collect();
        if lines.len() < 2 {
            return Err(MetadataParseError::TooFewLines(lines.len()));
        }

        let description = labelled_value(lines[0], DESCRIPTION_LABEL, 1)?;
        let price = labelled_value(lines[1], PRICE_LABEL, 2)?;

        Ok(Self { description, price })
    }
}

fn labelled_value(
    line: &str,
    label: &'static str,
    line_no: usize,
) -> Result<String, MetadataParseError> {
    line.trim_start()
        .strip_prefix(label)
        .map(|rest| rest.trim().to_string())
        .ok_or(MetadataParseError::MissingLabel {
            line: line_no,
            label,
        })
}
