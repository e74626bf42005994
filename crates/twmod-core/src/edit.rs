//! Span-based source code editing with format preservation

use oxc_span::Span;
use thiserror::Error;

/// Errors that can occur during edit application
#[derive(Error, Debug)]
pub enum EditError {
    #[error("Overlapping edits detected at offset {0}")]
    OverlappingEdits(usize),

    #[error("Edit span {start}..{end} out of bounds for source length {len}")]
    SpanOutOfBounds { start: usize, end: usize, len: usize },
}

/// Represents a single code edit operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    /// The source span to replace
    pub span: Span,
    /// The replacement text
    pub replacement: String,
    /// Human-readable description of the edit
    pub message: String,
}

impl Edit {
    /// Create a new edit
    pub fn new(span: Span, replacement: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            span,
            replacement: replacement.into(),
            message: message.into(),
        }
    }

    /// Get the byte offset where this edit starts
    pub fn start_offset(&self) -> usize {
        self.span.start as usize
    }

    /// Get the byte offset where this edit ends
    pub fn end_offset(&self) -> usize {
        self.span.end as usize
    }
}

/// Collapse edits that target the same span with the same replacement.
///
/// Several rules can reach the same string literal (an object inside a
/// `classes` attribute is also a plain object). They compute the same
/// rewrite from the same text, so only one copy is kept. The result is
/// sorted by start offset.
pub fn dedup_edits(mut edits: Vec<Edit>) -> Vec<Edit> {
    edits.sort_by(|a, b| {
        a.start_offset()
            .cmp(&b.start_offset())
            .then(a.end_offset().cmp(&b.end_offset()))
    });
    edits.dedup_by(|b, a| a.span == b.span && a.replacement == b.replacement);
    edits
}

/// Apply edits to source code, preserving surrounding formatting
///
/// Edits are applied in reverse order (from end to start) to maintain
/// valid offsets throughout the process.
///
/// # Arguments
/// * `source` - The original source code
/// * `edits` - Slice of edits to apply
///
/// # Returns
/// * `Ok(String)` - The modified source code
/// * `Err(EditError)` - If edits overlap or are out of bounds
pub fn apply_edits(source: &str, edits: &[Edit]) -> Result<String, EditError> {
    if edits.is_empty() {
        return Ok(source.to_string());
    }

    // Sort edits by start position (descending) for safe replacement
    let mut sorted_edits: Vec<&Edit> = edits.iter().collect();
    sorted_edits.sort_by(|a, b| b.start_offset().cmp(&a.start_offset()));

    // Validate: check for overlapping edits and bounds
    let source_len = source.len();
    let mut prev_start: Option<usize> = None;

    for edit in &sorted_edits {
        let start = edit.start_offset();
        let end = edit.end_offset();

        if start > end || end > source_len {
            return Err(EditError::SpanOutOfBounds {
                start,
                end,
                len: source_len,
            });
        }

        if let Some(prev) = prev_start {
            if end > prev {
                return Err(EditError::OverlappingEdits(start));
            }
        }

        prev_start = Some(start);
    }

    // Apply edits from end to start
    let mut result = source.to_string();

    for edit in sorted_edits {
        result.replace_range(edit.start_offset()..edit.end_offset(), &edit.replacement);
    }

    Ok(result)
}
