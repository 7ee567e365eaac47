// Criterion benchmarks comparing the two register strategies.
//
// Uses a real word list when available, a synthetic one otherwise. Set
// KOREKTOR_WORDS_DIR to a directory containing forms-words-list.txt to
// benchmark against the production dictionary.
//
// Run:
//   cargo bench -p korektor-register
//   KOREKTOR_WORDS_DIR=/path/to/lists cargo bench -p korektor-register

use criterion::{Criterion, criterion_group, criterion_main};

use korektor_register::{HashWordsRegister, TrieWordsRegister, WordsRegister};

/// Load forms-words-list.txt from KOREKTOR_WORDS_DIR, if present.
fn load_wordlist() -> Option<Vec<String>> {
    let dir = std::env::var("KOREKTOR_WORDS_DIR").ok()?;
    let path = std::path::PathBuf::from(dir).join("forms-words-list.txt");
    let contents = std::fs::read_to_string(path).ok()?;
    let words: Vec<String> = contents
        .lines()
        .filter(|l| !l.is_empty())
        .map(|l| l.to_string())
        .collect();
    (!words.is_empty()).then_some(words)
}

/// Deterministic synthetic corpus of Cyrillic-looking inflected forms.
fn synthetic_wordlist() -> Vec<String> {
    const STEMS: &[&str] = &[
        "предприяти", "ягод", "учениц", "здраве", "министър", "korekt", "дум", "кон",
    ];
    const ENDINGS: &[&str] = &["", "е", "я", "та", "ите", "ов", "ова", "ово", "ски", "ите"];

    let mut words = Vec::new();
    for i in 0..2000 {
        for stem in STEMS {
            for ending in ENDINGS {
                words.push(format!("{stem}{ending}{i}"));
            }
        }
    }
    words
}

fn populate_and_probe(register: &mut dyn WordsRegister, words: &[String]) {
    for word in words {
        register.register(word);
    }
    for word in words {
        std::hint::black_box(register.contains(word));
    }
}

fn bench_registers(c: &mut Criterion) {
    let words = load_wordlist().unwrap_or_else(synthetic_wordlist);

    let mut group = c.benchmark_group("register_populate_and_probe");
    group.sample_size(10);

    group.bench_function("hash_set", |b| {
        b.iter(|| populate_and_probe(&mut HashWordsRegister::new(), &words))
    });
    group.bench_function("trie", |b| {
        b.iter(|| populate_and_probe(&mut TrieWordsRegister::new(), &words))
    });

    group.finish();
}

criterion_group!(benches, bench_registers);
criterion_main!(benches);
