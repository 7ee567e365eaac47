// Recognized-word input type and per-word status output type.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One vertex of a word's bounding polygon, in the OCR service's
/// coordinate system. The classifier never interprets geometry; it is
/// carried through unchanged for the rendering collaborator.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// One word as recognized by the external OCR service.
///
/// The input sequence is ordered by reading order (page, then line, then
/// left-to-right within a line) and `line_index` is monotonically
/// non-decreasing across the whole sequence, unique across pages. The
/// classifier assumes this invariant; it does not validate or reorder.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RecognizedWord {
    /// Raw recognized text, possibly with leading/trailing punctuation.
    pub content: String,

    /// Recognition confidence in `[0, 1]`.
    pub confidence: f64,

    /// Which OCR line the word belongs to.
    pub line_index: usize,

    /// Which page the word belongs to. Not used by classification,
    /// only carried through (statistics, rendering).
    #[cfg_attr(feature = "serde", serde(default))]
    pub page_index: usize,

    /// Bounding polygon vertices, opaque to the core.
    #[cfg_attr(feature = "serde", serde(default))]
    pub bounding_polygon: Vec<Point>,
}

impl RecognizedWord {
    /// Create a word without geometry (tests and text-only pipelines).
    pub fn new(
        content: impl Into<String>,
        confidence: f64,
        line_index: usize,
        page_index: usize,
    ) -> Self {
        Self {
            content: content.into(),
            confidence,
            line_index,
            page_index,
            bounding_polygon: Vec::new(),
        }
    }
}

/// Classification result for one recognized word.
///
/// Produced 1:1 per input word. Words merged into one hyphenation span
/// all receive the span's status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WordStatus {
    /// The word (or the span it belongs to) matched the dictionary.
    Correct,
    /// Recognition confidence was below the readability threshold;
    /// the word never reached a dictionary lookup.
    Unreadable,
    /// Readable, but no dictionary candidate matched.
    Incorrect,
}
