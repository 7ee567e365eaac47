// korektor-cli: shared utilities for CLI tools.

use std::path::PathBuf;
use std::process;

use korektor_register::{HashWordsRegister, RegisterError, WordsRegister, build_from_paths};

/// Word-form list (all inflected forms).
const FORMS_LIST: &str = "forms-words-list.txt";

/// Base-word list.
const MAIN_LIST: &str = "main-words-list.txt";

/// Search for word lists and build the register.
///
/// Search order for the directory holding the lists:
/// 1. `words_dir` argument (if provided)
/// 2. `KOREKTOR_WORDS_DIR` environment variable
/// 3. `~/.korektor`
/// 4. Current working directory
///
/// Within the chosen directory, `forms-words-list.txt` and
/// `main-words-list.txt` are both loaded when present; at least one of
/// the two must exist.
pub fn load_register(words_dir: Option<&str>) -> Result<HashWordsRegister, String> {
    let search_paths = build_search_paths(words_dir);

    for dir in &search_paths {
        let lists: Vec<PathBuf> = [FORMS_LIST, MAIN_LIST]
            .iter()
            .map(|name| dir.join(name))
            .filter(|path| path.is_file())
            .collect();

        if lists.is_empty() {
            continue;
        }

        return build_from_paths(&lists).map_err(|e: RegisterError| e.to_string());
    }

    Err(format!(
        "could not find {} or {} in any of the search paths:\n{}",
        FORMS_LIST,
        MAIN_LIST,
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Build the list of directories to search for word lists.
fn build_search_paths(words_dir: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // 1. Explicit path from argument
    if let Some(p) = words_dir {
        paths.push(PathBuf::from(p));
    }

    // 2. KOREKTOR_WORDS_DIR environment variable
    if let Ok(env_path) = std::env::var("KOREKTOR_WORDS_DIR") {
        paths.push(PathBuf::from(env_path));
    }

    // 3. Home directory
    if let Some(home) = home_dir() {
        paths.push(home.join(".korektor"));
    }

    // 4. Current directory (fallback for local development)
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd);
    }

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Parse a `--words-dir=PATH` or `-w PATH` argument from command line args.
///
/// Returns `(words_dir, remaining_args)`.
pub fn parse_words_dir(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut words_dir = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--words-dir=") {
            words_dir = Some(val.to_string());
        } else if arg == "--words-dir" || arg == "-w" {
            if i + 1 < args.len() {
                words_dir = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                eprintln!("error: {} requires a value", arg);
                process::exit(1);
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (words_dir, remaining)
}

/// Print a register summary to the log.
pub fn log_register(register: &HashWordsRegister) {
    log::info!("register ready: {} word forms", register.len());
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
