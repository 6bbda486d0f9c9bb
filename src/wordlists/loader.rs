//! Word list loading
//!
//! Reads line-oriented word lists. Each line is cleaned (non-alphabetic
//! characters stripped, lower-cased); lines that do not clean up to a valid
//! 5-letter word are skipped, so bracket or blank lines of JSON-style lists
//! are harmless. Duplicates keep their first occurrence.

use crate::core::Word;
use log::{debug, trace};
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A word list could not be read
#[derive(Debug, Error)]
#[error("{} is not valid: {source}", .path.display())]
pub struct SourceLoadError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Load the initial candidate pool (or any word list) from a file
///
/// # Errors
///
/// Returns `SourceLoadError` naming the path if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_assistant::wordlists::loader::load_initial_pool;
///
/// let words = load_initial_pool("wordle-list.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_initial_pool<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, SourceLoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| SourceLoadError {
        path: path.to_path_buf(),
        source,
    })?;

    let words = words_from_lines(content.lines());
    debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Clean and de-duplicate raw lines into words
///
/// # Examples
/// ```
/// use wordle_assistant::wordlists::loader::words_from_lines;
///
/// let words = words_from_lines(["[", "\"crane\",", "\"slate\",", "\"crane\"", "]"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_lines<'s, I>(lines: I) -> Vec<Word>
where
    I: IntoIterator<Item = &'s str>,
{
    let mut seen: FxHashSet<String> = FxHashSet::default();
    let mut words = Vec::new();

    for line in lines {
        match Word::from_raw_line(line) {
            Some(word) => {
                if seen.insert(word.text().to_string()) {
                    words.push(word);
                } else {
                    trace!("skipping duplicate {word}");
                }
            }
            None => {
                if !line.trim().is_empty() {
                    trace!("skipping line {line:?}");
                }
            }
        }
    }

    words
}
