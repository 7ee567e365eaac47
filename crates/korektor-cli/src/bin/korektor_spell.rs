// korektor-spell: Check words from stdin against the register.
//
// Reads words from stdin (one per line) and reports whether each word
// is a known form:
//   C: word    (correct)
//   W: word    (wrong / unknown)
//
// Usage:
//   korektor-spell [-w WORDS_DIR] [OPTIONS]
//
// Options:
//   -w, --words-dir PATH   Directory containing the word lists
//   --no-sanitize           Look words up verbatim, without stripping
//                           edge punctuation first
//   -h, --help              Print help

use std::io::{self, BufRead, Write};

use korektor_core::sanitize;
use korektor_register::WordsRegister;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (words_dir, args) = korektor_cli::parse_words_dir(&args);

    if korektor_cli::wants_help(&args) {
        println!("korektor-spell: Check words from stdin against the register.");
        println!();
        println!("Usage: korektor-spell [-w WORDS_DIR] [OPTIONS]");
        println!();
        println!("Reads words from stdin (one per line). Prints:");
        println!("  C: word    (correct)");
        println!("  W: word    (unknown)");
        println!();
        println!("Options:");
        println!("  -w, --words-dir PATH   Directory containing the word lists");
        println!("  --no-sanitize           Look words up verbatim");
        println!("  -h, --help              Print this help");
        return;
    }

    let no_sanitize = args.iter().any(|a| a == "--no-sanitize");

    let register = korektor_cli::load_register(words_dir.as_deref())
        .unwrap_or_else(|e| korektor_cli::fatal(&e));
    korektor_cli::log_register(&register);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        let word = line.trim();
        if word.is_empty() {
            continue;
        }

        let query = if no_sanitize { word } else { sanitize(word) };
        if register.contains(query) {
            let _ = writeln!(out, "C: {word}");
        } else {
            let _ = writeln!(out, "W: {word}");
        }
    }
}
