// Single-pass classification over the ordered word sequence.

use korektor_core::{RecognizedWord, WordStatus};
use korektor_register::WordsRegister;

use crate::candidates::span_is_correct;
use crate::scanner::{ScanStep, next_step};
use crate::ClassifierOptions;

/// Classify every recognized word against the register.
///
/// Total function: the output has exactly one status per input word,
/// in the same order. All words of a hyphenation span receive the
/// span's status. An empty input yields an empty output; an empty
/// register yields `Incorrect` for every readable word.
///
/// The register is read-only here — callers must finish population
/// before classification starts (share the finished register by plain
/// reference or `Arc`).
pub fn classify(
    words: &[RecognizedWord],
    register: &dyn WordsRegister,
    options: &ClassifierOptions,
) -> Vec<WordStatus> {
    let mut statuses = Vec::with_capacity(words.len());
    let mut buf = String::new();

    let mut index = 0;
    while index < words.len() {
        let step = next_step(words, index, options);
        match step {
            ScanStep::Unreadable => statuses.push(WordStatus::Unreadable),
            ScanStep::Span(word_span) => {
                let status = if span_is_correct(words, index, word_span, register, &mut buf) {
                    WordStatus::Correct
                } else {
                    WordStatus::Incorrect
                };
                for _ in 0..word_span {
                    statuses.push(status);
                }
            }
        }
        index += step.advance();
    }

    statuses
}
