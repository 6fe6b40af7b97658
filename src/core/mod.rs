//! Core domain types for Wordey
//!
//! This module contains the fundamental domain types: validated words, per-letter
//! feedback, and the scoring algorithm that turns a guess into a [`Pattern`].
//! Everything here is pure and has no I/O.

mod feedback;
mod pattern;
mod word;

pub use feedback::Feedback;
pub use pattern::Pattern;
pub use word::{Word, WordError};

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

/// Number of guesses the player gets per game
pub const NUM_ROWS: usize = 6;
