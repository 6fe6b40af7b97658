//! Guess scoring and the resulting feedback pattern
//!
//! A pattern is the scored form of one submitted row: one [`Feedback`] per
//! letter position.

use super::{Feedback, WORD_LENGTH, Word};
use std::fmt;

/// Feedback for a whole guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pattern([Feedback; WORD_LENGTH]);

impl Pattern {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self([Feedback::Correct; WORD_LENGTH]);

    /// The per-position feedback
    #[inline]
    #[must_use]
    pub const fn cells(&self) -> &[Feedback; WORD_LENGTH] {
        &self.0
    }

    /// Feedback at `position` (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn get(&self, position: usize) -> Feedback {
        self.0[position]
    }

    /// Check if this is a perfect match (all greens)
    #[inline]
    #[must_use]
    pub fn is_perfect(self) -> bool {
        self == Self::PERFECT
    }

    /// Calculate the pattern when `guess` is guessed and `secret` is the target
    ///
    /// Duplicate letters follow a per-letter budget equal to the letter's
    /// occurrences in the secret:
    /// 1. First pass: exact matches are `Correct` and spend their letter's budget
    /// 2. Second pass, left to right: a remaining letter is `Present` while its
    ///    budget lasts, `Absent` afterwards
    ///
    /// So the number of `Correct` + `Present` marks for a letter never exceeds
    /// its count in the secret, and surplus copies further right are `Absent`.
    ///
    /// # Examples
    /// ```
    /// use wordey::core::{Feedback, Pattern, Word};
    ///
    /// let guess = Word::new("lolly").unwrap();
    /// let secret = Word::new("allow").unwrap();
    /// let pattern = Pattern::calculate(&guess, &secret);
    ///
    /// assert_eq!(pattern.to_string(), "YYGXX");
    /// assert_eq!(pattern.get(3), Feedback::Absent);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, secret: &Word) -> Self {
        let mut result = [Feedback::Absent; WORD_LENGTH];
        let mut budget = secret.char_counts();

        // First pass: greens
        for (i, (g, s)) in guess.chars().iter().zip(secret.chars()).enumerate() {
            if g == s {
                result[i] = Feedback::Correct;
                if let Some(count) = budget.get_mut(g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: yellows from what the greens left over
        for (i, letter) in guess.chars().iter().enumerate() {
            if result[i] == Feedback::Correct {
                continue;
            }
            if let Some(count) = budget.get_mut(letter)
                && *count > 0
            {
                result[i] = Feedback::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Convert pattern to emoji string, e.g. "🟩🟨⬛🟩🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0.iter().map(|f| f.emoji()).collect()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in self.0 {
            write!(f, "{}", cell.code())?;
        }
        Ok(())
    }
}
