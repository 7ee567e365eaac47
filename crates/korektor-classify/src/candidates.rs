// Candidate construction and dictionary probing for one span.
//
// For a span of `word_span` sub-words the true hyphen position is
// unknown: the break may be a pure line-wrap artifact (the real word
// has no hyphen) or the real word may carry a hyphen after any of the
// first `word_span - 1` sub-words (naturally hyphenated compounds).
// Every insertion point is therefore tried in order; the first
// register hit wins. Which insertion point matched is not surfaced —
// downstream only consumes pass/fail.

use korektor_core::{RecognizedWord, sanitize};
use korektor_register::WordsRegister;

/// Whether any hyphen-insertion candidate built from
/// `words[index..index + word_span]` is a known word form.
///
/// Insertion point `h = 0` builds the plain concatenation; `h > 0`
/// inserts a literal `-` immediately after sub-word `h - 1`. For a
/// span of one this degenerates to a single sanitized-word lookup.
/// `buf` is scratch storage reused across spans.
pub(crate) fn span_is_correct(
    words: &[RecognizedWord],
    index: usize,
    word_span: usize,
    register: &dyn WordsRegister,
    buf: &mut String,
) -> bool {
    for h in 0..word_span {
        buf.clear();
        for j in 0..word_span {
            buf.push_str(sanitize(&words[index + j].content));
            if j + 1 == h {
                buf.push('-');
            }
        }
        if register.contains(buf) {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use korektor_register::HashWordsRegister;

    use super::*;

    fn word(content: &str, line_index: usize) -> RecognizedWord {
        RecognizedWord::new(content, 0.95, line_index, 0)
    }

    fn register_of(forms: &[&str]) -> HashWordsRegister {
        let mut register = HashWordsRegister::new();
        for form in forms {
            register.register(form);
        }
        register
    }

    #[test]
    fn single_word_span_is_one_lookup() {
        let words = [word("„Дума“,", 0)];
        let register = register_of(&["дума"]);
        let mut buf = String::new();
        assert!(span_is_correct(&words, 0, 1, &register, &mut buf));

        let empty = HashWordsRegister::new();
        assert!(!span_is_correct(&words, 0, 1, &empty, &mut buf));
    }

    #[test]
    fn wrap_artifact_matches_without_hyphen() {
        // h = 0: "пред" + "приятие" -> "предприятие"
        let words = [word("пред-", 0), word("приятие", 1)];
        let register = register_of(&["предприятие"]);
        let mut buf = String::new();
        assert!(span_is_correct(&words, 0, 2, &register, &mut buf));
    }

    #[test]
    fn real_compound_matches_with_inserted_hyphen() {
        // h = 1: "по" + "-" + "добре" -> "по-добре"
        let words = [word("по-", 0), word("добре", 1)];
        let register = register_of(&["по-добре"]);
        let mut buf = String::new();
        assert!(span_is_correct(&words, 0, 2, &register, &mut buf));
    }

    #[test]
    fn no_candidate_means_incorrect() {
        let words = [word("пред-", 0), word("приятие", 1)];
        let register = register_of(&["пред", "приятие"]);
        let mut buf = String::new();
        // Sub-words alone are registered, but no concatenated
        // candidate ("предприятие" / "пред-приятие") is.
        assert!(!span_is_correct(&words, 0, 2, &register, &mut buf));
    }

    #[test]
    fn three_word_span_tries_every_insertion_point() {
        let words = [word("ми-", 0), word("ни-", 1), word("стър", 2)];
        let mut buf = String::new();

        for form in ["министър", "ми-нистър", "мини-стър"] {
            let register = register_of(&[form]);
            assert!(
                span_is_correct(&words, 0, 3, &register, &mut buf),
                "candidate {form} should match"
            );
        }
    }
}
