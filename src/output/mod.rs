//! Terminal output formatting
//!
//! Display utilities for the line-mode game and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_banner, print_board, print_game_over, print_statistics};
