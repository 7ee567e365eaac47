// Hash-set register strategy.

use hashbrown::HashSet;

use crate::WordsRegister;

/// Register backed by a `hashbrown::HashSet` of lower-cased forms.
///
/// The recommended default strategy: membership and insertion are O(1)
/// average and memory stays proportional to the total character count
/// of unique forms.
#[derive(Debug, Default, Clone)]
pub struct HashWordsRegister {
    words: HashSet<String>,
}

impl HashWordsRegister {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size for an expected number of forms (word lists announce
    /// their size poorly, but the build step may know a line count).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            words: HashSet::with_capacity(capacity),
        }
    }

    /// Merge another hash register into this one (set union). Used by
    /// the parallel multi-source build to combine per-source partial
    /// registers after their loader threads finish.
    pub fn absorb(&mut self, other: HashWordsRegister) {
        if self.words.is_empty() {
            self.words = other.words;
        } else {
            self.words.extend(other.words);
        }
    }
}

impl WordsRegister for HashWordsRegister {
    fn register(&mut self, word: &str) {
        self.words.insert(word.to_lowercase());
    }

    fn contains(&self, word: &str) -> bool {
        self.words.contains(word.to_lowercase().as_str())
    }

    fn len(&self) -> usize {
        self.words.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WordsRegister;

    #[test]
    fn absorb_unions_distinct_forms() {
        let mut left = HashWordsRegister::new();
        left.register("котка");
        left.register("куче");

        let mut right = HashWordsRegister::new();
        right.register("Куче");
        right.register("кон");

        left.absorb(right);
        assert_eq!(left.len(), 3);
        assert!(left.contains("кон"));
        assert!(left.contains("куче"));
    }

    #[test]
    fn absorb_into_empty_takes_other() {
        let mut empty = HashWordsRegister::new();
        let mut full = HashWordsRegister::new();
        full.register("дума");

        empty.absorb(full);
        assert_eq!(empty.len(), 1);
        assert!(empty.contains("ДУМА"));
    }
}
