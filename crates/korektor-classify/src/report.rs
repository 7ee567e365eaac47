// Per-document classification statistics.

use korektor_core::{RecognizedWord, WordStatus};

/// Summary of one document's classification run, for reporting
/// alongside the per-word statuses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DocumentStatistics {
    /// Number of distinct pages seen in the input.
    pub pages: usize,
    pub total_words: usize,
    pub correct_words: usize,
    pub incorrect_words: usize,
    pub unreadable_words: usize,
    /// Incorrect words as a percentage of all words (0.0 when empty).
    pub incorrect_percentage: f64,
    /// Unreadable words as a percentage of all words (0.0 when empty).
    pub unreadable_percentage: f64,
}

impl DocumentStatistics {
    /// Summarize an index-aligned words/statuses pair.
    pub fn from_results(words: &[RecognizedWord], statuses: &[WordStatus]) -> Self {
        debug_assert_eq!(words.len(), statuses.len());

        let mut correct_words = 0;
        let mut incorrect_words = 0;
        let mut unreadable_words = 0;
        for status in statuses {
            match status {
                WordStatus::Correct => correct_words += 1,
                WordStatus::Incorrect => incorrect_words += 1,
                WordStatus::Unreadable => unreadable_words += 1,
            }
        }

        // Page indices arrive in reading order, so distinct pages show
        // up as index changes.
        let mut pages = 0;
        let mut last_page = None;
        for word in words {
            if last_page != Some(word.page_index) {
                pages += 1;
                last_page = Some(word.page_index);
            }
        }

        let total_words = statuses.len();
        let percentage = |count: usize| {
            if total_words == 0 {
                0.0
            } else {
                count as f64 * 100.0 / total_words as f64
            }
        };

        Self {
            pages,
            total_words,
            correct_words,
            incorrect_words,
            unreadable_words,
            incorrect_percentage: percentage(incorrect_words),
            unreadable_percentage: percentage(unreadable_words),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word_on_page(page_index: usize) -> RecognizedWord {
        RecognizedWord::new("дума", 0.9, page_index, page_index)
    }

    #[test]
    fn empty_run_is_all_zero() {
        let stats = DocumentStatistics::from_results(&[], &[]);
        assert_eq!(stats.total_words, 0);
        assert_eq!(stats.pages, 0);
        assert_eq!(stats.incorrect_percentage, 0.0);
        assert_eq!(stats.unreadable_percentage, 0.0);
    }

    #[test]
    fn counts_and_percentages() {
        let words = vec![word_on_page(0), word_on_page(0), word_on_page(1), word_on_page(1)];
        let statuses = vec![
            WordStatus::Correct,
            WordStatus::Incorrect,
            WordStatus::Unreadable,
            WordStatus::Unreadable,
        ];
        let stats = DocumentStatistics::from_results(&words, &statuses);
        assert_eq!(stats.pages, 2);
        assert_eq!(stats.total_words, 4);
        assert_eq!(stats.correct_words, 1);
        assert_eq!(stats.incorrect_words, 1);
        assert_eq!(stats.unreadable_words, 2);
        assert_eq!(stats.incorrect_percentage, 25.0);
        assert_eq!(stats.unreadable_percentage, 50.0);
    }
}
