//! Game controller
//!
//! [`Game`] owns the current [`GameState`], the random source used to pick
//! secrets, the cosmetic timers and the session statistics. Front ends feed it
//! [`GameEvent`]s and read everything they draw from it.

use super::state::{GameState, Outcome, SubmitResult};
use super::timers::{CosmeticTimer, RevealTimer, SHAKE_DURATION};
use crate::core::NUM_ROWS;
use crate::wordlists::WordList;
use rand::Rng;
use std::time::Instant;

/// Discrete input understood by the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Char(char),
    Backspace,
    Submit,
    /// Start a new game; honoured once the current one is over
    Restart,
}

/// What a dispatched event did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Update {
    Ignored,
    Edited,
    Rejected,
    Scored(SubmitResult),
    Restarted,
}

/// Per-session results
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub current_streak: usize,
    pub max_streak: usize,
    /// Wins by number of guesses used, index 1..=6
    pub guess_distribution: [usize; NUM_ROWS + 1],
}

impl Statistics {
    fn record(&mut self, outcome: Outcome, rows_used: usize) {
        match outcome {
            Outcome::Won => {
                self.total_games += 1;
                self.games_won += 1;
                self.current_streak += 1;
                self.max_streak = self.max_streak.max(self.current_streak);
                if let Some(slot) = self.guess_distribution.get_mut(rows_used) {
                    *slot += 1;
                }
            }
            Outcome::Lost => {
                self.total_games += 1;
                self.current_streak = 0;
            }
            Outcome::InProgress => {}
        }
    }

    /// Percentage of finished games that were won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

/// Single owner of all per-session game data
pub struct Game<'w, R> {
    words: &'w WordList,
    rng: R,
    state: GameState,
    shake: CosmeticTimer,
    reveal: RevealTimer,
    stats: Statistics,
}

impl<'w, R: Rng> Game<'w, R> {
    /// Create a controller and start the first game
    #[must_use]
    pub fn new(words: &'w WordList, mut rng: R) -> Self {
        let state = GameState::start(words, &mut rng);
        log::info!("New game started");
        log::debug!("Secret word: {}", state.secret());

        Self {
            words,
            rng,
            state,
            shake: CosmeticTimer::new(SHAKE_DURATION),
            reveal: RevealTimer::default(),
            stats: Statistics::default(),
        }
    }

    /// Replace the game with a fresh one and cancel pending cosmetic timers
    pub fn restart(&mut self) {
        self.shake.cancel();
        self.reveal.cancel();
        self.state = GameState::start(self.words, &mut self.rng);
        log::info!("New game started");
        log::debug!("Secret word: {}", self.state.secret());
    }

    /// Apply one input event
    pub fn dispatch(&mut self, event: GameEvent, now: Instant) -> Update {
        match event {
            GameEvent::Char(ch) => Self::edited(self.state.handle_char(ch)),
            GameEvent::Backspace => Self::edited(self.state.handle_backspace()),
            GameEvent::Submit => self.submit(now),
            GameEvent::Restart if self.state.is_game_over() => {
                self.restart();
                Update::Restarted
            }
            GameEvent::Restart => Update::Ignored,
        }
    }

    fn edited(changed: bool) -> Update {
        if changed {
            Update::Edited
        } else {
            Update::Ignored
        }
    }

    fn submit(&mut self, now: Instant) -> Update {
        let guess = self.state.current_guess().to_string();
        match self.state.handle_submit(self.words) {
            SubmitResult::Ignored => Update::Ignored,
            SubmitResult::Rejected => {
                log::debug!("Rejected '{guess}': not in word list");
                self.shake.schedule(now);
                Update::Rejected
            }
            result @ SubmitResult::Scored {
                row,
                pattern,
                outcome,
            } => {
                log::info!("Row {} scored: {guess} {pattern}", row + 1);
                self.shake.cancel();
                self.reveal.schedule(row, now);
                if outcome.is_over() {
                    log::info!("Game finished: {outcome:?} in {} rows", row + 1);
                    self.stats.record(outcome, row + 1);
                }
                Update::Scored(result)
            }
        }
    }

    /// Expire finished timers; returns `true` if anything visible changed
    pub fn tick(&mut self, now: Instant) -> bool {
        let shake = self.shake.expire(now);
        let reveal = self.reveal.expire(now);
        shake || reveal
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub const fn stats(&self) -> &Statistics {
        &self.stats
    }

    #[must_use]
    pub const fn words(&self) -> &'w WordList {
        self.words
    }

    /// Whether the current row should be drawn shaking
    #[must_use]
    pub fn is_shaking(&self, now: Instant) -> bool {
        self.shake.is_active(now)
    }

    /// Horizontal offset of the shaking row at `now`, in columns
    ///
    /// Swings between -1 and 1 every 82 ms while the shake is active.
    #[must_use]
    pub fn shake_offset(&self, now: Instant) -> i8 {
        if !self.shake.is_active(now) {
            return 0;
        }
        let step = self.shake.elapsed(now).map_or(0, |e| e.as_millis() / 82);
        match step % 4 {
            0 => -1,
            2 => 1,
            _ => 0,
        }
    }

    /// Whether any cosmetic timer is still pending
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.shake.is_active(now) || self.reveal.is_active(now)
    }

    /// How many cells of `row` show their feedback colour at `now`
    #[must_use]
    pub fn revealed_cells(&self, row: usize, now: Instant) -> usize {
        self.reveal.revealed_cells(row, now)
    }
}
