// Trie register strategy.
//
// Kept as an alternative to the hash set for its O(word length)
// lookups independent of corpus size. Measured against a real inflected
// word list (hundreds of thousands of forms) the per-character nodes
// cost roughly 10x the allocation of the hash strategy, which is why
// the hash set is the default.

use hashbrown::HashMap;

use crate::WordsRegister;

#[derive(Debug, Default)]
struct TrieNode {
    children: HashMap<char, TrieNode>,
    is_end: bool,
}

/// Register backed by a prefix tree keyed on lower-cased characters,
/// with a terminal marker per node.
#[derive(Debug, Default)]
pub struct TrieWordsRegister {
    root: TrieNode,
    word_count: usize,
}

impl TrieWordsRegister {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WordsRegister for TrieWordsRegister {
    fn register(&mut self, word: &str) {
        let normalized = word.to_lowercase();
        let mut node = &mut self.root;
        for letter in normalized.chars() {
            node = node.children.entry(letter).or_default();
        }
        if !node.is_end {
            node.is_end = true;
            self.word_count += 1;
        }
    }

    fn contains(&self, word: &str) -> bool {
        let normalized = word.to_lowercase();
        let mut node = &self.root;
        for letter in normalized.chars() {
            match node.children.get(&letter) {
                Some(next) => node = next,
                None => return false,
            }
        }
        node.is_end
    }

    fn len(&self) -> usize {
        self.word_count
    }
}
