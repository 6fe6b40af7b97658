//! Formatting utilities for terminal output

use crate::core::{Feedback, Pattern, WORD_LENGTH};
use colored::{ColoredString, Colorize};

/// Keyboard rows used for the letter hint
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// A single letter tile coloured by its feedback
#[must_use]
pub fn tile(letter: char, feedback: Feedback) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match feedback {
        Feedback::Correct => text.black().on_green().bold(),
        Feedback::Present => text.black().on_yellow().bold(),
        Feedback::Absent => text.white().on_bright_black(),
        Feedback::Empty => text.white().bold(),
    }
}

/// A scored or partial row of tiles separated by single spaces
///
/// Missing letters render as `_` placeholders.
#[must_use]
pub fn format_row(guess: &str, pattern: Pattern) -> String {
    let letters: Vec<char> = guess.chars().collect();
    (0..WORD_LENGTH)
        .map(|i| {
            let letter = letters.get(i).copied().unwrap_or('_');
            tile(letter, pattern.get(i)).to_string()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// On-screen keyboard with each letter coloured by the best feedback seen
#[must_use]
pub fn keyboard_hint(letters: &[Feedback; 26]) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .map(|row| {
            row.bytes()
                .map(|b| {
                    let feedback = letters[usize::from(b - b'a')];
                    let key = char::from(b).to_ascii_uppercase().to_string();
                    match feedback {
                        Feedback::Correct => key.green().bold().to_string(),
                        Feedback::Present => key.yellow().bold().to_string(),
                        Feedback::Absent => key.bright_black().to_string(),
                        Feedback::Empty => key,
                    }
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
