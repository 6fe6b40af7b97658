//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: one guess per line, coloured tiles after
//! each submission.

use crate::core::WORD_LENGTH;
use crate::game::{Game, GameEvent, Update};
use crate::output::{print_banner, print_board, print_game_over, print_statistics};
use anyhow::{Context, Result};
use colored::Colorize;
use rand::Rng;
use std::io::{BufRead, Write};
use std::time::Instant;

/// What the player typed at the prompt
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Quit,
    NewGame,
    Guess(String),
}

fn parse_command(input: &str) -> Command {
    match input.to_lowercase().as_str() {
        "quit" | "q" | "exit" => Command::Quit,
        "new" | "n" => Command::NewGame,
        _ => Command::Guess(input.to_string()),
    }
}

/// Run the simple interactive CLI mode
///
/// Reads commands and guesses from `input` until the player quits or the input
/// ends.
///
/// # Errors
///
/// Returns an error if reading `input` or writing `output` fails.
pub fn run_simple<R, I, O>(
    game: &mut Game<'_, R>,
    mut input: I,
    mut output: O,
    reveal_secret: bool,
) -> Result<()>
where
    R: Rng,
    I: BufRead,
    O: Write,
{
    print_banner(&mut output)?;

    loop {
        print_board(&mut output, game.state(), reveal_secret)?;

        if game.state().is_game_over() {
            print_game_over(&mut output, game.state())?;
            print_statistics(&mut output, game.stats())?;

            match read_line(&mut input, &mut output, "Play again? (yes/no)")? {
                Some(answer) if matches!(answer.to_lowercase().as_str(), "yes" | "y") => {
                    game.restart();
                    writeln!(output, "\n🔄 New game started!")?;
                    continue;
                }
                _ => break,
            }
        }

        let Some(line) = read_line(&mut input, &mut output, "Guess")? else {
            break;
        };

        match parse_command(&line) {
            Command::Quit => break,
            Command::NewGame => {
                game.restart();
                writeln!(output, "\n🔄 New game started!")?;
            }
            Command::Guess(guess) => play_guess(game, &guess, &mut output)?,
        }
    }

    writeln!(output, "\n👋 Thanks for playing!\n")?;
    Ok(())
}

/// Type `guess` into the current row and submit it
fn play_guess<R: Rng>(game: &mut Game<'_, R>, guess: &str, output: &mut impl Write) -> Result<()> {
    let now = Instant::now();

    // Start from an empty row; a previously rejected word may still be there
    while game.dispatch(GameEvent::Backspace, now) == Update::Edited {}

    if guess.chars().count() != WORD_LENGTH || !guess.chars().all(|c| c.is_ascii_alphabetic()) {
        writeln!(
            output,
            "{}",
            format!("❌ Guess must be exactly {WORD_LENGTH} letters").red()
        )?;
        return Ok(());
    }

    for ch in guess.chars() {
        game.dispatch(GameEvent::Char(ch), now);
    }

    if game.dispatch(GameEvent::Submit, now) == Update::Rejected {
        log::debug!("Simple mode rejected '{guess}'");
    }
    Ok(())
}

/// Prompt and read one trimmed line; `None` at end of input
fn read_line(
    input: &mut impl BufRead,
    output: &mut impl Write,
    prompt: &str,
) -> Result<Option<String>> {
    write!(output, "{prompt}: ")?;
    output.flush().context("failed to flush prompt")?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("failed to read from input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
