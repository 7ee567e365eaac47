// korektor-register: the dictionary of known word forms.
//
// A register answers one question: "is this word form known?" — with
// case-insensitive equality as the only equality notion. Two
// interchangeable strategies implement the same contract:
//
// - `HashWordsRegister`: hash set of normalized strings. O(1) average
//   membership, memory proportional to total character count. The
//   recommended default: at real dictionary sizes (10^5-10^6 forms) it
//   allocates roughly an order of magnitude less than the trie.
// - `TrieWordsRegister`: prefix tree keyed by lower-cased character,
//   terminal marker per node. O(word length) membership, materially
//   higher per-node overhead.
//
// Lifecycle discipline: a register is populated once during startup
// (see `loader`) and read-only afterwards. The build functions return
// the finished register by value; callers share it immutably (plain
// reference or `Arc`) — concurrent readers never observe a partially
// populated structure because no mutable handle survives the build.

pub mod hash;
pub mod loader;
pub mod trie;

pub use hash::HashWordsRegister;
pub use loader::{
    RegisterError, build_from_paths, build_from_paths_parallel, populate_from_path,
    populate_from_reader,
};
pub use trie::TrieWordsRegister;

/// Capability contract for the dictionary of known word forms.
///
/// Both operations normalize their argument by lower-casing the whole
/// string; an implementation must not mix normalization behavior
/// between instances. `contains` never mutates state and simply
/// returns `false` on an empty register — there is no "uninitialized"
/// failure mode.
pub trait WordsRegister {
    /// Add the lower-cased form of `word` to the known set.
    /// Registering the same word twice has no additional effect.
    fn register(&mut self, word: &str);

    /// Whether the lower-cased form of `word` was previously registered.
    fn contains(&self, word: &str) -> bool;

    /// Number of distinct registered word forms.
    fn len(&self) -> usize;

    /// Whether no word form has been registered yet.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
