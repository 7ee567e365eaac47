// Word-list loading and multi-source register builds.
//
// Population sources are newline-delimited word lists (one form per
// line; the upstream dictionaries ship as a forms list plus a base-word
// list). Lines are registered order-independently and duplicates are
// tolerated, so merging any number of sources is a plain set union.
//
// The multi-source build functions fix the population hazard of shared
// mutable register state: each source is loaded into its own private
// register, and merging happens on a single thread after every loader
// finished. The finished register is returned by value — after the
// build there is no mutable handle left for readers to race with.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::thread;

use crate::{HashWordsRegister, WordsRegister};

/// Errors from word-list population.
#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    /// A word-list file could not be opened or read.
    #[error("failed to read word list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Register every non-empty line of `reader` into `register`.
/// Returns the number of forms registered (duplicates included).
pub fn populate_from_reader<R: BufRead>(
    register: &mut dyn WordsRegister,
    reader: R,
) -> io::Result<usize> {
    let mut forms = 0;
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        register.register(word);
        forms += 1;
    }
    Ok(forms)
}

/// Register every non-empty line of the word list at `path`.
pub fn populate_from_path(
    register: &mut dyn WordsRegister,
    path: &Path,
) -> Result<usize, RegisterError> {
    let io_err = |source| RegisterError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(io_err)?;
    let forms = populate_from_reader(register, BufReader::new(file)).map_err(io_err)?;
    log::debug!("loaded {} forms from {}", forms, path.display());
    Ok(forms)
}

/// Build one hash register from several word lists, loading the
/// sources sequentially in the given order.
pub fn build_from_paths(paths: &[PathBuf]) -> Result<HashWordsRegister, RegisterError> {
    let mut register = HashWordsRegister::new();
    for path in paths {
        populate_from_path(&mut register, path)?;
    }
    log::info!(
        "register built from {} word list(s): {} distinct forms",
        paths.len(),
        register.len()
    );
    Ok(register)
}

/// Build one hash register from several word lists, loading each
/// source on its own thread and merging the per-source registers
/// afterwards. The first source error (in path order) is reported.
pub fn build_from_paths_parallel(paths: &[PathBuf]) -> Result<HashWordsRegister, RegisterError> {
    let partials = thread::scope(|scope| {
        let handles: Vec<_> = paths
            .iter()
            .map(|path| {
                scope.spawn(move || {
                    let mut partial = HashWordsRegister::new();
                    populate_from_path(&mut partial, path).map(|_| partial)
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap_or_else(|panic| std::panic::resume_unwind(panic)))
            .collect::<Result<Vec<_>, _>>()
    })?;

    let mut register = HashWordsRegister::new();
    for partial in partials {
        register.absorb(partial);
    }
    log::info!(
        "register built in parallel from {} word list(s): {} distinct forms",
        paths.len(),
        register.len()
    );
    Ok(register)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::TrieWordsRegister;

    fn word_list(words: &[&str]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        for word in words {
            writeln!(file, "{word}").unwrap();
        }
        file.flush().unwrap();
        file
    }

    #[test]
    fn reader_population_skips_blank_lines() {
        let data = "котка\n\n  \nКуче\nкотка\n";
        let mut register = HashWordsRegister::new();
        let forms = populate_from_reader(&mut register, data.as_bytes()).unwrap();
        assert_eq!(forms, 3);
        assert_eq!(register.len(), 2);
        assert!(register.contains("куче"));
    }

    #[test]
    fn reader_population_is_strategy_agnostic() {
        let data = "дума\nдруга\n";
        let mut trie = TrieWordsRegister::new();
        populate_from_reader(&mut trie, data.as_bytes()).unwrap();
        assert!(trie.contains("Дума"));
        assert_eq!(trie.len(), 2);
    }

    #[test]
    fn sequential_and_parallel_builds_agree() {
        let forms = word_list(&["предприятие", "ягода", "Ягодов"]);
        let main = word_list(&["ягода", "кон", "конче"]);
        let paths = vec![
            forms.path().to_path_buf(),
            main.path().to_path_buf(),
        ];

        let sequential = build_from_paths(&paths).unwrap();
        let parallel = build_from_paths_parallel(&paths).unwrap();

        assert_eq!(sequential.len(), 5);
        assert_eq!(sequential.len(), parallel.len());
        for query in ["предприятие", "ягодов", "кон", "конче", "ягода"] {
            assert!(sequential.contains(query));
            assert!(parallel.contains(query));
        }
    }

    #[test]
    fn missing_file_reports_its_path() {
        let missing = PathBuf::from("/nonexistent/word-list.txt");
        let err = build_from_paths(&[missing.clone()]).unwrap_err();
        let RegisterError::Io { path, .. } = err;
        assert_eq!(path, missing);
    }
}
