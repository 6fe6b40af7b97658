//! Wordey - CLI
//!
//! Terminal Wordle clone with a full-screen TUI and a line-based mode.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::{Path, PathBuf};
use wordey::{
    commands::run_simple,
    core::Word,
    game::Game,
    logging::{self, LogTarget},
    wordlists::{
        GUESSABLE, PLAYABLE, WordList,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordey",
    about = "Guess the hidden five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list to draw secrets from (default: built-in list)
    #[arg(long, global = true, value_name = "PATH")]
    playable: Option<PathBuf>,

    /// Extra accepted guesses that are never chosen as secrets (default: built-in list)
    #[arg(long, global = true, value_name = "PATH")]
    guessable: Option<PathBuf>,

    /// Seed for secret selection, for reproducible games
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Show the secret word above the board
    #[arg(long, global = true)]
    reveal_secret: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Write logs to this file (the TUI logs nothing otherwise)
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand, Clone, Copy)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode without the TUI
    Simple,
}

fn load_list(path: Option<&Path>, embedded: &[&str]) -> Result<Vec<Word>> {
    match path {
        Some(path) => Ok(load_from_file(path)?),
        None => Ok(words_from_slice(embedded)),
    }
}

/// Build the word list from the `--playable`/`--guessable` flags
fn load_wordlist(cli: &Cli) -> Result<WordList> {
    let playable = load_list(cli.playable.as_deref(), PLAYABLE)?;
    let guessable = load_list(cli.guessable.as_deref(), GUESSABLE)?;
    WordList::new(playable, guessable).context("cannot start a game")
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    let target = match (&cli.log_file, command) {
        (Some(path), _) => LogTarget::File(path.as_path()),
        (None, Commands::Play) => LogTarget::Off,
        (None, Commands::Simple) => LogTarget::Stderr,
    };
    logging::init(cli.verbose, target)?;

    let words = load_wordlist(&cli)?;
    log::info!(
        "Loaded {} playable words, {} guess-only words, {} accepted guesses",
        words.playable().len(),
        words.guessable_count(),
        words.accepted_count()
    );
    let rng = make_rng(cli.seed);

    match command {
        Commands::Play => run_play_command(&words, rng, cli.reveal_secret),
        Commands::Simple => run_simple_command(&words, rng, cli.reveal_secret),
    }
}

fn run_simple_command(words: &WordList, rng: StdRng, reveal_secret: bool) -> Result<()> {
    let mut game = Game::new(words, rng);
    let stdin = io::stdin();
    run_simple(&mut game, stdin.lock(), io::stdout(), reveal_secret)
}

fn run_play_command(words: &WordList, rng: StdRng, reveal_secret: bool) -> Result<()> {
    use wordey::interactive::{App, run_tui};

    let app = App::new(words, rng, reveal_secret);
    run_tui(app)
}
