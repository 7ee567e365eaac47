// Delimiter sanitization for recognized word text.
//
// OCR words arrive with sentence and quotation punctuation attached
// ("дума," or „дума“). Classification compares the bare word form, so
// the delimiter set is stripped from both ends before any dictionary
// lookup. Stripping is Trim-style only: a delimiter inside the word
// body (e.g. the hyphen in a compound) is preserved.

/// Sentence and quotation punctuation stripped from word edges.
/// Includes the Bulgarian lower/upper quotation marks „ and “.
pub const DELIMITERS: &[char] = &[
    '.', ',', '-', '!', '?', ':', ';', '\'', '"', '„', '“', '(', ')',
];

/// Strip delimiters from both ends of `word`.
///
/// Idempotent: sanitizing an already-sanitized word yields the same
/// word. May return an empty string (e.g. a word that was only
/// punctuation); such a word is a normal, always-incorrect input, not
/// an error.
pub fn sanitize(word: &str) -> &str {
    word.trim_matches(DELIMITERS)
}
