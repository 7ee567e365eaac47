// korektor-classify: decide, per recognized word, whether it is
// unreadable, correctly spelled, or a typo.
//
// The classifier is a pure, synchronous, single-pass function of the
// ordered word sequence plus an already-populated register. It owns the
// two pieces of real logic in the system:
//
// - hyphenation-span detection: a trailing hyphen at the end of an OCR
//   line may mean the line wrap split one real word in two (or more);
//   the scanner grows a span across strictly increasing lines;
// - candidate probing: a line-wrap hyphen is ambiguous — the real word
//   may contain a hyphen at the break, at an earlier sub-word boundary,
//   or none at all — so every insertion point is tried against the
//   register until one hits.
//
// Nothing here is fallible: a degenerate input (empty sequence, words
// that sanitize to nothing, empty register) yields a well-defined
// status sequence, never an error.

pub mod classifier;
pub mod options;
pub mod report;
pub mod scanner;

mod candidates;

pub use classifier::classify;
pub use options::ClassifierOptions;
pub use report::DocumentStatistics;
pub use scanner::{ScanStep, next_step};
