//! Segment assembly primitives.
//!
//! The generic format uses `*` as the element separator, `:` as the
//! component separator, and `~` followed by a newline as the segment
//! terminator. Data containing any of these (or control characters) is
//! rejected at encode time.

use crate::error::{EdiError, Result};

/// Element separator.
pub const ELEMENT_SEP: char = '*';
/// Component separator within a composite element.
pub const COMPONENT_SEP: char = ':';
/// Segment terminator (written with a trailing newline for readability;
/// the newline is not part of the grammar).
pub const SEGMENT_TERM: char = '~';

/// Validate one element's data against the delimiter set.
///
/// Returns the value unchanged on success. `field` is the dotted path
/// reported on rejection.
pub fn element(field: &str, value: &str) -> Result<String> {
    if value
        .chars()
        .any(|c| matches!(c, ELEMENT_SEP | COMPONENT_SEP | SEGMENT_TERM) || c.is_control())
    {
        return Err(EdiError::InvalidCharacter {
            field: field.to_string(),
            value: value.to_string(),
        });
    }
    Ok(value.to_string())
}

/// Validate each part and join into a composite element.
pub fn composite(field: &str, parts: &[&str]) -> Result<String> {
    let validated: Vec<String> = parts
        .iter()
        .map(|part| element(field, part))
        .collect::<Result<_>>()?;
    Ok(validated.join(&COMPONENT_SEP.to_string()))
}

/// Accumulates rendered segments and tracks the count for trailer totals.
#[derive(Debug, Default)]
pub struct SegmentBuffer {
    segments: Vec<String>,
}

impl SegmentBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one segment. Elements must already be validated; trailing
    /// empty elements are preserved so field positions stay stable.
    pub fn push(&mut self, id: &str, elements: &[String]) {
        let mut rendered = String::from(id);
        for element in elements {
            rendered.push(ELEMENT_SEP);
            rendered.push_str(element);
        }
        rendered.push(SEGMENT_TERM);
        self.segments.push(rendered);
    }

    /// Number of segments appended so far.
    pub fn count(&self) -> usize {
        self.segments.len()
    }

    /// Render the buffer, one segment per line.
    pub fn into_text(self) -> String {
        let mut text = self.segments.join("\n");
        text.push('\n');
        text
    }
}
