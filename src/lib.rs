//! Wordey
//!
//! A terminal Wordle clone: guess a hidden five-letter word in six tries,
//! with green/yellow/grey feedback after each guess.
//!
//! # Quick Start
//!
//! ```rust
//! use wordey::core::{Pattern, Word};
//!
//! let guess = Word::new("lolly").unwrap();
//! let secret = Word::new("allow").unwrap();
//!
//! let pattern = Pattern::calculate(&guess, &secret);
//! assert_eq!(pattern.to_string(), "YYGXX");
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Game state machine and controller
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Logger setup
pub mod logging;
