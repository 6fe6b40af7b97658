//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use super::WordListError;
use crate::core::Word;
use std::fs;
use std::path::Path;

/// Parse newline-delimited words
///
/// Blank lines and entries that are not 5 ASCII letters are skipped; case is
/// normalised to lowercase.
#[must_use]
pub fn words_from_str(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect()
}

/// Load words from a file
///
/// Returns a vector of valid Word instances, skipping any invalid entries.
///
/// # Errors
///
/// Returns [`WordListError::Io`] if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use wordey::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/playable.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = words_from_str(&content);
    log::debug!("Loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordey::wordlists::loader::words_from_slice;
/// use wordey::wordlists::PLAYABLE;
///
/// let words = words_from_slice(PLAYABLE);
/// assert_eq!(words.len(), PLAYABLE.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
