//! The guess evaluator and game state machine
//!
//! - [`GameState`]: the value object holding one game
//! - [`Game`]: controller owning the state, the rng, timers and statistics
//! - [`timers`]: cosmetic, cancelable deadlines used by the UI

mod controller;
mod state;
pub mod timers;

pub use controller::{Game, GameEvent, Statistics, Update};
pub use state::{Cell, GameState, Outcome, SubmitResult};
