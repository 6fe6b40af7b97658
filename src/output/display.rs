//! Display functions for the line-mode game

use super::formatters::{create_progress_bar, format_row, keyboard_hint};
use crate::core::{NUM_ROWS, Pattern};
use crate::game::{GameState, Outcome, Statistics};
use colored::Colorize;
use std::io::{self, Write};

/// Print the title banner
pub fn print_banner(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(40).cyan())?;
    writeln!(out, "{}", "               W O R D E Y".bright_cyan().bold())?;
    writeln!(out, "{}", "═".repeat(40).cyan())?;
    writeln!(out, "Guess the 5-letter word in {NUM_ROWS} tries.")?;
    writeln!(out, "Commands: 'new' for a new game, 'quit' to exit\n")
}

/// Print the grid, the keyboard hint and the status lines
pub fn print_board(out: &mut impl Write, state: &GameState, reveal_secret: bool) -> io::Result<()> {
    if reveal_secret {
        writeln!(
            out,
            "{}",
            format!("Debug: Current Word is \"{}\"", state.secret()).red()
        )?;
    }

    writeln!(out)?;
    for row in 0..NUM_ROWS {
        let pattern = if state.is_submitted(row) {
            state.pattern(row)
        } else {
            Pattern::default()
        };
        writeln!(out, "  {}", format_row(state.guess(row), pattern))?;
    }

    writeln!(out)?;
    for line in keyboard_hint(&state.used_letters()) {
        writeln!(out, "  {line}")?;
    }
    writeln!(out)?;

    if state.invalid_guess() {
        writeln!(out, "{}", "Invalid Word".red().bold())?;
    }
    if !state.status().is_empty() {
        writeln!(out, "{}", state.status().bright_black())?;
    }
    Ok(())
}

/// Print the end-of-game summary
pub fn print_game_over(out: &mut impl Write, state: &GameState) -> io::Result<()> {
    match state.outcome() {
        Outcome::Won => {
            let rows = state.rows_used();
            let message = match rows {
                1 => "🎯 HOLE IN ONE!",
                2 => "🔥 MAGNIFICENT!",
                3 => "✨ SPLENDID!",
                4 => "👏 GREAT JOB!",
                5 => "🎉 NICE WORK!",
                _ => "😅 PHEW!",
            };
            writeln!(out, "\n{}", message.bright_green().bold())?;
            writeln!(
                out,
                "Solved in {} {}",
                rows.to_string().bright_cyan().bold(),
                if rows == 1 { "guess" } else { "guesses" }
            )?;
        }
        Outcome::Lost => {
            writeln!(
                out,
                "\n{} The word was {}",
                "Game over.".red().bold(),
                state.secret().text().to_uppercase().bright_yellow().bold()
            )?;
        }
        Outcome::InProgress => return Ok(()),
    }

    writeln!(out, "\n{}\n", state.share_grid())
}

/// Print session statistics with a guess distribution chart
pub fn print_statistics(out: &mut impl Write, stats: &Statistics) -> io::Result<()> {
    writeln!(out, "{}", "Statistics".bright_cyan().bold())?;
    writeln!(
        out,
        "   Played: {}  Win %: {:.0}  Streak: {}  Best: {}",
        stats.total_games,
        stats.win_rate(),
        stats.current_streak,
        stats.max_streak
    )?;

    let max = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    for (guesses, &count) in stats.guess_distribution.iter().enumerate().skip(1) {
        let bar = create_progress_bar(count as f64, max as f64, 20);
        writeln!(out, "   {guesses}: {} {count}", bar.green())?;
    }
    writeln!(out)
}
