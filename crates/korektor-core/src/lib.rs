// korektor-core: shared types and text utilities.
//
// Everything the register and classifier crates agree on lives here: the
// recognized-word input type produced by the OCR collaborator, the per-word
// status consumed by the rendering collaborator, and delimiter sanitization.

pub mod sanitize;
pub mod word;

pub use sanitize::{DELIMITERS, sanitize};
pub use word::{Point, RecognizedWord, WordStatus};
