// korektor-classify: Classify an OCR word dump from stdin.
//
// Reads a JSON array of recognized words (as produced by the OCR
// collaborator: content, confidence, line_index, page_index,
// bounding_polygon) and prints one status-prefixed line per word,
// followed by a document summary:
//   C: word    (correct)
//   U: word    (unreadable, confidence below threshold)
//   W: word    (incorrect)
//
// Usage:
//   korektor-classify [-w WORDS_DIR] [OPTIONS] < words.json
//
// Options:
//   -w, --words-dir PATH      Directory containing the word lists
//   --min-confidence VALUE    Readability threshold (default 0.8)
//   -h, --help                Print help

use std::io::{self, Read, Write};

use korektor_classify::{ClassifierOptions, DocumentStatistics, classify};
use korektor_core::{RecognizedWord, WordStatus};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (words_dir, args) = korektor_cli::parse_words_dir(&args);

    if korektor_cli::wants_help(&args) {
        println!("korektor-classify: Classify an OCR word dump from stdin.");
        println!();
        println!("Usage: korektor-classify [-w WORDS_DIR] [OPTIONS] < words.json");
        println!();
        println!("Reads a JSON array of recognized words. Prints per word:");
        println!("  C: word    (correct)");
        println!("  U: word    (unreadable)");
        println!("  W: word    (incorrect)");
        println!("followed by a document summary.");
        println!();
        println!("Options:");
        println!("  -w, --words-dir PATH      Directory containing the word lists");
        println!("  --min-confidence VALUE    Readability threshold (default 0.8)");
        println!("  -h, --help                Print this help");
        return;
    }

    let mut options = ClassifierOptions::default();
    if let Some(value) = parse_min_confidence(&args) {
        options.min_confidence = value;
    }

    let register = korektor_cli::load_register(words_dir.as_deref())
        .unwrap_or_else(|e| korektor_cli::fatal(&e));
    korektor_cli::log_register(&register);

    let mut input = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut input) {
        korektor_cli::fatal(&format!("failed to read stdin: {e}"));
    }

    let words: Vec<RecognizedWord> = serde_json::from_str(&input)
        .unwrap_or_else(|e| korektor_cli::fatal(&format!("invalid word dump: {e}")));

    let statuses = classify(&words, &register, &options);
    let stats = DocumentStatistics::from_results(&words, &statuses);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    for (word, status) in words.iter().zip(&statuses) {
        let prefix = match status {
            WordStatus::Correct => 'C',
            WordStatus::Unreadable => 'U',
            WordStatus::Incorrect => 'W',
        };
        let _ = writeln!(out, "{prefix}: {}", word.content);
    }

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "pages: {}  words: {}  incorrect: {} ({:.1}%)  unreadable: {} ({:.1}%)",
        stats.pages,
        stats.total_words,
        stats.incorrect_words,
        stats.incorrect_percentage,
        stats.unreadable_words,
        stats.unreadable_percentage,
    );
}

/// Parse `--min-confidence VALUE` or `--min-confidence=VALUE`.
fn parse_min_confidence(args: &[String]) -> Option<f64> {
    let parse = |raw: &str| {
        raw.parse::<f64>()
            .ok()
            .filter(|v| (0.0..=1.0).contains(v))
            .unwrap_or_else(|| {
                korektor_cli::fatal(&format!("invalid --min-confidence value: {raw}"))
            })
    };

    for (i, arg) in args.iter().enumerate() {
        if let Some(raw) = arg.strip_prefix("--min-confidence=") {
            return Some(parse(raw));
        }
        if arg == "--min-confidence" {
            match args.get(i + 1) {
                Some(raw) => return Some(parse(raw)),
                None => korektor_cli::fatal("--min-confidence requires a value"),
            }
        }
    }
    None
}
