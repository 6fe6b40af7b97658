//! Word lists for Wordey
//!
//! A [`WordList`] holds the *playable* words (possible secrets, also valid
//! guesses) and the *guessable* words (accepted as guesses only). The default
//! lists are embedded in the binary; replacements can be loaded from files.

mod embedded;
pub mod loader;

pub use embedded::{GUESSABLE, GUESSABLE_COUNT, PLAYABLE, PLAYABLE_COUNT};

use crate::core::Word;
use rand::Rng;
use rustc_hash::FxHashSet;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building a word list
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("failed to read word list {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("the playable word list contains no valid words")]
    EmptyPlayable,
}

/// Immutable dictionary shared by every game of a session
#[derive(Debug, Clone)]
pub struct WordList {
    playable: Vec<Word>,
    guessable_count: usize,
    accepted: FxHashSet<String>,
}

impl WordList {
    /// Build a word list from playable and guess-only words
    ///
    /// Duplicates are dropped. A word present in both lists stays playable.
    ///
    /// # Errors
    ///
    /// Returns [`WordListError::EmptyPlayable`] when `playable` is empty, since
    /// no secret could ever be drawn.
    pub fn new(playable: Vec<Word>, guessable: Vec<Word>) -> Result<Self, WordListError> {
        let mut accepted = FxHashSet::default();
        let playable: Vec<Word> = playable
            .into_iter()
            .filter(|word| accepted.insert(word.text().to_string()))
            .collect();

        if playable.is_empty() {
            return Err(WordListError::EmptyPlayable);
        }

        let guessable_count = guessable
            .into_iter()
            .filter(|word| accepted.insert(word.text().to_string()))
            .count();

        log::debug!(
            "Word list ready: {} playable, {} guess-only",
            playable.len(),
            guessable_count
        );

        Ok(Self {
            playable,
            guessable_count,
            accepted,
        })
    }

    /// The word lists compiled into the binary
    ///
    /// # Errors
    ///
    /// Only fails if the embedded playable list is empty.
    pub fn embedded() -> Result<Self, WordListError> {
        Self::new(
            loader::words_from_slice(PLAYABLE),
            loader::words_from_slice(GUESSABLE),
        )
    }

    /// Words that can be drawn as the secret
    #[must_use]
    pub fn playable(&self) -> &[Word] {
        &self.playable
    }

    /// Number of words accepted only as guesses
    #[must_use]
    pub const fn guessable_count(&self) -> usize {
        self.guessable_count
    }

    /// Total number of accepted guesses
    #[must_use]
    pub fn accepted_count(&self) -> usize {
        self.accepted.len()
    }

    /// Whether `word` is an accepted guess (playable or guessable), ignoring case
    ///
    /// # Examples
    /// ```
    /// use wordey::core::Word;
    /// use wordey::wordlists::WordList;
    ///
    /// let words = WordList::new(
    ///     vec![Word::new("crane").unwrap()],
    ///     vec![Word::new("lolly").unwrap()],
    /// )
    /// .unwrap();
    ///
    /// assert!(words.is_valid_word("CRANE"));
    /// assert!(words.is_valid_word("lolly"));
    /// assert!(!words.is_valid_word("zzzzz"));
    /// ```
    #[must_use]
    pub fn is_valid_word(&self, word: &str) -> bool {
        self.accepted.contains(&word.to_lowercase())
    }

    /// Draw a secret uniformly at random from the playable words
    #[must_use]
    pub fn random_secret<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        // Non-empty by construction
        &self.playable[rng.random_range(0..self.playable.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn words(list: &[&str]) -> Vec<Word> {
        loader::words_from_slice(list)
    }

    #[test]
    fn playable_count_matches_const() {
        assert_eq!(PLAYABLE.len(), PLAYABLE_COUNT);
    }

    #[test]
    fn guessable_count_matches_const() {
        assert_eq!(GUESSABLE.len(), GUESSABLE_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in PLAYABLE.iter().chain(GUESSABLE) {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn embedded_list_builds() {
        let list = WordList::embedded().unwrap();
        assert_eq!(list.playable().len(), PLAYABLE_COUNT);
        assert!(list.is_valid_word("crane"));
        assert!(list.is_valid_word("lolly"));
    }

    #[test]
    fn empty_playable_is_rejected() {
        let result = WordList::new(Vec::new(), words(&["crane"]));
        assert!(matches!(result, Err(WordListError::EmptyPlayable)));
    }

    #[test]
    fn membership_covers_both_lists_case_insensitive() {
        let list = WordList::new(words(&["crane", "slate"]), words(&["lolly"])).unwrap();

        assert!(list.is_valid_word("crane"));
        assert!(list.is_valid_word("SlAtE"));
        assert!(list.is_valid_word("LOLLY"));
        assert!(!list.is_valid_word("zzzzz"));
        assert!(!list.is_valid_word("cran"));
        assert_eq!(list.accepted_count(), 3);
    }

    #[test]
    fn duplicates_are_dropped_and_overlap_stays_playable() {
        let list = WordList::new(
            words(&["crane", "crane", "slate"]),
            words(&["slate", "lolly"]),
        )
        .unwrap();

        assert_eq!(list.playable().len(), 2);
        assert_eq!(list.guessable_count(), 1);
    }

    #[test]
    fn secrets_come_from_playable_only() {
        let list = WordList::new(words(&["crane", "slate"]), words(&["lolly", "cloud"])).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..100 {
            let secret = list.random_secret(&mut rng);
            assert!(list.playable().contains(secret));
        }
    }

    #[test]
    fn seeded_draws_are_reproducible() {
        let list = WordList::embedded().unwrap();
        let first = list.random_secret(&mut StdRng::seed_from_u64(42)).clone();
        let second = list.random_secret(&mut StdRng::seed_from_u64(42)).clone();
        assert_eq!(first, second);
    }
}
