//! Game state and the guess state machine
//!
//! [`GameState`] is a plain value: the secret, the guess grid, the feedback grid
//! and the turn bookkeeping. Every operation takes it by `&mut self` and either
//! applies fully or leaves it untouched.

use crate::core::{Feedback, NUM_ROWS, Pattern, WORD_LENGTH, Word};
use crate::wordlists::WordList;
use rand::Rng;

/// Whether the game is still running and how it ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Outcome {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// One cell of the rendered grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub letter: Option<char>,
    pub feedback: Feedback,
}

/// Result of pressing Enter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitResult {
    /// Game over or row not full; nothing changed
    Ignored,
    /// Full row that is not in the dictionary; only the invalid flag changed
    Rejected,
    /// Row was scored and committed
    Scored {
        row: usize,
        pattern: Pattern,
        outcome: Outcome,
    },
}

/// All mutable state of one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    secret: Word,
    guesses: [String; NUM_ROWS],
    feedback: [Pattern; NUM_ROWS],
    current_row: usize,
    outcome: Outcome,
    invalid_guess: bool,
}

impl GameState {
    /// Start a new game with a secret drawn from the playable words
    #[must_use]
    pub fn start<R: Rng + ?Sized>(words: &WordList, rng: &mut R) -> Self {
        Self::with_secret(words.random_secret(rng).clone())
    }

    /// Start a new game with a known secret
    #[must_use]
    pub fn with_secret(secret: Word) -> Self {
        Self {
            secret,
            guesses: std::array::from_fn(|_| String::new()),
            feedback: [Pattern::default(); NUM_ROWS],
            current_row: 0,
            outcome: Outcome::InProgress,
            invalid_guess: false,
        }
    }

    /// Append a letter to the current row
    ///
    /// Returns `false` (and changes nothing) if the game is over, the row is
    /// full, or `ch` is not an ASCII letter. An accepted letter also clears
    /// the invalid-guess flag.
    pub fn handle_char(&mut self, ch: char) -> bool {
        if self.is_game_over() || !ch.is_ascii_alphabetic() {
            return false;
        }

        let row = &mut self.guesses[self.current_row];
        if row.len() >= WORD_LENGTH {
            return false;
        }

        row.push(ch.to_ascii_lowercase());
        self.invalid_guess = false;
        true
    }

    /// Remove the last letter of the current row
    ///
    /// Removing a letter also clears the invalid-guess flag.
    pub fn handle_backspace(&mut self) -> bool {
        if self.is_game_over() {
            return false;
        }

        if self.guesses[self.current_row].pop().is_some() {
            self.invalid_guess = false;
            true
        } else {
            false
        }
    }

    /// Validate, score and commit the current row
    pub fn handle_submit(&mut self, words: &WordList) -> SubmitResult {
        if self.is_game_over() {
            return SubmitResult::Ignored;
        }

        let row = self.current_row;
        if self.guesses[row].len() != WORD_LENGTH {
            return SubmitResult::Ignored;
        }

        if !words.is_valid_word(&self.guesses[row]) {
            self.invalid_guess = true;
            return SubmitResult::Rejected;
        }

        // Accepted words are always well-formed, but stay total anyway
        let Ok(guess) = Word::new(self.guesses[row].as_str()) else {
            self.invalid_guess = true;
            return SubmitResult::Rejected;
        };

        self.invalid_guess = false;
        let pattern = Pattern::calculate(&guess, &self.secret);
        self.feedback[row] = pattern;

        if guess == self.secret {
            self.outcome = Outcome::Won;
        } else if row == NUM_ROWS - 1 {
            self.outcome = Outcome::Lost;
        } else {
            self.current_row += 1;
        }

        SubmitResult::Scored {
            row,
            pattern,
            outcome: self.outcome,
        }
    }

    /// The secret word
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    /// Index of the row being edited (or the last row used once the game ends)
    #[must_use]
    pub const fn current_row(&self) -> usize {
        self.current_row
    }

    /// Letters typed so far in the current row
    #[must_use]
    pub fn current_guess(&self) -> &str {
        &self.guesses[self.current_row]
    }

    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.outcome.is_over()
    }

    /// Set after a full row was rejected as not in the dictionary
    #[must_use]
    pub const fn invalid_guess(&self) -> bool {
        self.invalid_guess
    }

    /// Number of rows that have been scored
    #[must_use]
    pub const fn rows_used(&self) -> usize {
        if self.is_game_over() {
            self.current_row + 1
        } else {
            self.current_row
        }
    }

    /// Whether row `row` has been scored
    #[must_use]
    pub const fn is_submitted(&self, row: usize) -> bool {
        row < self.rows_used()
    }

    /// Feedback for `row`; all `Empty` until the row is submitted
    ///
    /// # Panics
    /// Panics if `row >= NUM_ROWS`
    #[must_use]
    pub const fn pattern(&self, row: usize) -> Pattern {
        self.feedback[row]
    }

    /// Letters of `row`, possibly partial
    ///
    /// # Panics
    /// Panics if `row >= NUM_ROWS`
    #[must_use]
    pub fn guess(&self, row: usize) -> &str {
        &self.guesses[row]
    }

    /// The whole grid as (letter, feedback) cells
    #[must_use]
    pub fn rows(&self) -> [[Cell; WORD_LENGTH]; NUM_ROWS] {
        std::array::from_fn(|row| {
            let letters = self.guesses[row].as_bytes();
            let pattern = self.feedback[row];
            std::array::from_fn(|col| Cell {
                letter: letters.get(col).map(|&b| char::from(b)),
                feedback: pattern.get(col),
            })
        })
    }

    /// Scored rows in order
    pub fn submitted(&self) -> impl Iterator<Item = (&str, Pattern)> {
        (0..self.rows_used()).map(|row| (self.guesses[row].as_str(), self.feedback[row]))
    }

    /// Best feedback seen so far for each letter `a..=z`
    #[must_use]
    pub fn used_letters(&self) -> [Feedback; 26] {
        let mut letters = [Feedback::Empty; 26];
        for (guess, pattern) in self.submitted() {
            for (byte, feedback) in guess.bytes().zip(pattern.cells()) {
                let slot = &mut letters[usize::from(byte - b'a')];
                *slot = (*slot).max(*feedback);
            }
        }
        letters
    }

    /// Short status line for the player
    #[must_use]
    pub const fn status(&self) -> &'static str {
        match self.outcome {
            Outcome::Won => "You won!",
            Outcome::Lost => "Game over",
            Outcome::InProgress if self.current_row > 0 => "Try again",
            Outcome::InProgress => "",
        }
    }

    /// Emoji summary of the scored rows, e.g. for sharing a result
    #[must_use]
    pub fn share_grid(&self) -> String {
        let score = match self.outcome {
            Outcome::Won => self.rows_used().to_string(),
            _ => "X".to_string(),
        };
        let mut out = format!("Wordey {score}/{NUM_ROWS}\n");
        for (_, pattern) in self.submitted() {
            out.push('\n');
            out.push_str(&pattern.to_emoji());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn words() -> WordList {
        WordList::new(
            words_from_slice(&["allow", "crane", "slate", "audio", "stare", "irate", "raise"]),
            words_from_slice(&["lolly", "cloud", "blank"]),
        )
        .unwrap()
    }

    fn game(secret: &str) -> GameState {
        GameState::with_secret(Word::new(secret).unwrap())
    }

    fn type_word(state: &mut GameState, word: &str) {
        for ch in word.chars() {
            state.handle_char(ch);
        }
    }

    fn submit(state: &mut GameState, words: &WordList, word: &str) -> SubmitResult {
        type_word(state, word);
        state.handle_submit(words)
    }

    #[test]
    fn new_game_is_empty() {
        let state = game("allow");
        assert_eq!(state.current_row(), 0);
        assert_eq!(state.outcome(), Outcome::InProgress);
        assert!(!state.invalid_guess());
        assert_eq!(state.status(), "");
        assert!(
            state
                .rows()
                .iter()
                .flatten()
                .all(|cell| *cell == Cell::default())
        );
    }

    #[test]
    fn typing_fills_left_to_right_and_lowercases() {
        let mut state = game("allow");
        assert!(state.handle_char('C'));
        assert!(state.handle_char('r'));
        assert_eq!(state.current_guess(), "cr");

        let row = state.rows()[0];
        assert_eq!(row[0].letter, Some('c'));
        assert_eq!(row[1].letter, Some('r'));
        assert_eq!(row[2].letter, None);
    }

    #[test]
    fn typing_beyond_row_is_noop() {
        let mut state = game("allow");
        type_word(&mut state, "crane");
        assert!(!state.handle_char('s'));
        assert_eq!(state.current_guess(), "crane");
    }

    #[test]
    fn non_letters_are_ignored() {
        let mut state = game("allow");
        assert!(!state.handle_char('1'));
        assert!(!state.handle_char(' '));
        assert!(!state.handle_char('é'));
        assert_eq!(state.current_guess(), "");
    }

    #[test]
    fn backspace_removes_last_and_noops_on_empty() {
        let mut state = game("allow");
        assert!(!state.handle_backspace());
        type_word(&mut state, "cr");
        assert!(state.handle_backspace());
        assert_eq!(state.current_guess(), "c");
        assert!(state.handle_backspace());
        assert!(!state.handle_backspace());
    }

    #[test]
    fn short_row_submit_is_ignored() {
        let words = words();
        let mut state = game("allow");
        type_word(&mut state, "cran");
        assert_eq!(state.handle_submit(&words), SubmitResult::Ignored);
        assert_eq!(state.current_row(), 0);
        assert!(!state.invalid_guess());
    }

    #[test]
    fn rejection_is_idempotent() {
        let words = words();
        let mut state = game("allow");

        assert_eq!(submit(&mut state, &words, "zzzzz"), SubmitResult::Rejected);
        assert!(state.invalid_guess());
        assert_eq!(state.current_row(), 0);
        assert_eq!(state.current_guess(), "zzzzz");
        assert_eq!(state.pattern(0), Pattern::default());

        assert_eq!(state.handle_submit(&words), SubmitResult::Rejected);
        assert!(state.invalid_guess());
        assert_eq!(state.current_row(), 0);
        assert_eq!(state.current_guess(), "zzzzz");
    }

    #[test]
    fn editing_clears_invalid_flag() {
        let words = words();
        let mut state = game("allow");
        submit(&mut state, &words, "zzzzz");
        assert!(state.invalid_guess());
        state.handle_backspace();
        assert!(!state.invalid_guess());
    }

    #[test]
    fn guessable_word_is_accepted_and_scored() {
        let words = words();
        let mut state = game("allow");

        let result = submit(&mut state, &words, "lolly");
        let SubmitResult::Scored { row, pattern, outcome } = result else {
            panic!("expected a scored row, got {result:?}");
        };
        assert_eq!((row, outcome), (0, Outcome::InProgress));
        assert_eq!(pattern.to_string(), "YYGXX");
        assert_eq!(state.pattern(0), pattern);
        assert_eq!(state.current_row(), 1);
        assert_eq!(state.status(), "Try again");
    }

    #[test]
    fn exact_match_wins_on_any_row() {
        let words = words();
        let mut state = game("allow");
        submit(&mut state, &words, "crane");
        submit(&mut state, &words, "slate");

        let result = submit(&mut state, &words, "ALLOW");
        assert!(matches!(
            result,
            SubmitResult::Scored {
                row: 2,
                outcome: Outcome::Won,
                ..
            }
        ));
        assert!(state.pattern(2).is_perfect());
        assert!(state.is_game_over());
        assert_eq!(state.current_row(), 2);
        assert_eq!(state.rows_used(), 3);
        assert_eq!(state.status(), "You won!");
    }

    #[test]
    fn six_misses_lose_only_after_the_last() {
        let words = words();
        let mut state = game("allow");
        let misses = ["crane", "slate", "audio", "stare", "irate", "raise"];

        for (i, word) in misses.iter().enumerate() {
            assert!(!state.is_game_over(), "lost early at row {i}");
            submit(&mut state, &words, word);
        }

        assert_eq!(state.outcome(), Outcome::Lost);
        assert_eq!(state.current_row(), NUM_ROWS - 1);
        assert_eq!(state.rows_used(), NUM_ROWS);
        assert_eq!(state.status(), "Game over");
    }

    #[test]
    fn input_after_game_over_is_noop() {
        let words = words();
        let mut state = game("allow");
        submit(&mut state, &words, "allow");

        assert!(!state.handle_char('a'));
        assert!(!state.handle_backspace());
        assert_eq!(state.handle_submit(&words), SubmitResult::Ignored);
        assert_eq!(state.guess(0), "allow");
    }

    #[test]
    fn feedback_only_on_submitted_rows() {
        let words = words();
        let mut state = game("allow");
        submit(&mut state, &words, "crane");
        type_word(&mut state, "sla");

        let rows = state.rows();
        assert!(rows[0].iter().all(|cell| cell.feedback != Feedback::Empty));
        assert!(rows[1].iter().all(|cell| cell.feedback == Feedback::Empty));
        assert_eq!(rows[1][2].letter, Some('a'));
        assert!(state.is_submitted(0));
        assert!(!state.is_submitted(1));
    }

    #[test]
    fn used_letters_keep_best_feedback() {
        let words = words();
        let mut state = game("allow");
        // L is yellow at 0, green at 2, absent at 3 -> green wins
        submit(&mut state, &words, "lolly");
        let letters = state.used_letters();

        assert_eq!(letters[usize::from(b'l' - b'a')], Feedback::Correct);
        assert_eq!(letters[usize::from(b'o' - b'a')], Feedback::Present);
        assert_eq!(letters[usize::from(b'y' - b'a')], Feedback::Absent);
        assert_eq!(letters[usize::from(b'z' - b'a')], Feedback::Empty);
    }

    #[test]
    fn share_grid_lists_scored_rows() {
        let words = words();
        let mut state = game("allow");
        submit(&mut state, &words, "lolly");
        submit(&mut state, &words, "allow");

        assert_eq!(state.share_grid(), "Wordey 2/6\n\n🟨🟨🟩⬛⬛\n🟩🟩🟩🟩🟩");
    }

    #[test]
    fn start_draws_playable_secret() {
        use rand::SeedableRng;
        let words = words();
        let mut rng = rand::rngs::StdRng::seed_from_u64(3);
        let state = GameState::start(&words, &mut rng);
        assert!(words.playable().contains(state.secret()));
    }
}
