// Scan step resolution: the explicit form of the classifier's
// two-state automaton.
//
// At every scan position the classifier is in exactly one of two
// conceptual states: terminal-unreadable for a single word, or
// accumulating a readable span that may extend across line wraps.
// Modeling the step explicitly keeps the span-growth guards testable
// without touching dictionary lookups.

use korektor_core::RecognizedWord;

use crate::ClassifierOptions;

/// What the scan does at one position before advancing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanStep {
    /// The word at the scan position fails the confidence gate. It is
    /// marked unreadable on its own; the scan advances by one.
    Unreadable,
    /// A span of this many consecutive readable words (>= 1) that may
    /// together form one real word split by line wraps. The span is
    /// resolved atomically and the scan advances by its length.
    Span(usize),
}

impl ScanStep {
    /// How many words this step consumes.
    pub fn advance(&self) -> usize {
        match *self {
            ScanStep::Unreadable => 1,
            ScanStep::Span(word_span) => word_span,
        }
    }
}

/// Resolve the scan step at `index`.
///
/// Span growth continues while all three guards hold for the candidate
/// word at `index + word_span`:
/// - the candidate itself passes the confidence gate;
/// - the current span tail ends its raw text with a literal `-`;
/// - the candidate's line index is strictly greater than the line
///   index of the previous span member. This recognizes hyphenation
///   only as a line-wrap artifact: two hyphen-carrying words on one
///   line never merge, and spans only grow across distinct,
///   increasing lines.
pub fn next_step(
    words: &[RecognizedWord],
    index: usize,
    options: &ClassifierOptions,
) -> ScanStep {
    if !options.is_readable(words[index].confidence) {
        return ScanStep::Unreadable;
    }

    let mut word_span = 1;
    let mut prev_line_index = words[index].line_index;
    while index + word_span < words.len()
        && options.is_readable(words[index + word_span].confidence)
        && words[index + word_span - 1].content.ends_with('-')
        && words[index + word_span].line_index > prev_line_index
    {
        prev_line_index = words[index + word_span].line_index;
        word_span += 1;
    }

    ScanStep::Span(word_span)
}
