//! TUI application state and logic

use crate::game::{Game, GameEvent, Update};
use crate::wordlists::WordList;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// How long the loop waits for input before expiring timers and redrawing
const TICK_RATE: Duration = Duration::from_millis(50);

/// Application state
pub struct App<'a> {
    pub game: Game<'a, StdRng>,
    pub reveal_secret: bool,
    pub should_quit: bool,
}

/// What a key press asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Game(GameEvent),
    Quit,
}

/// Translate a key press into an action
///
/// Enter submits while playing and starts a new game once the game is over.
#[must_use]
pub fn map_key(key: KeyEvent, game_over: bool) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('c') if ctrl => Some(Action::Quit),
        KeyCode::Char('n') if ctrl => Some(Action::Game(GameEvent::Restart)),
        KeyCode::Char(_) if ctrl || alt => None,
        KeyCode::Char(c) => Some(Action::Game(GameEvent::Char(c))),
        KeyCode::Backspace => Some(Action::Game(GameEvent::Backspace)),
        KeyCode::Enter if game_over => Some(Action::Game(GameEvent::Restart)),
        KeyCode::Enter => Some(Action::Game(GameEvent::Submit)),
        _ => None,
    }
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(words: &'a WordList, rng: StdRng, reveal_secret: bool) -> Self {
        Self {
            game: Game::new(words, rng),
            reveal_secret,
            should_quit: false,
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Update {
        match map_key(key, self.game.state().is_game_over()) {
            Some(Action::Quit) => {
                self.should_quit = true;
                Update::Ignored
            }
            Some(Action::Game(event)) => self.game.dispatch(event, now),
            None => Update::Ignored,
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        log::error!("TUI exited with error: {err}");
    }
    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        let now = Instant::now();
        app.game.tick(now);
        terminal.draw(|f| super::rendering::ui(f, &app, now))?;

        if !event::poll(TICK_RATE)? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            let update = app.handle_key(key, Instant::now());
            log::trace!("{:?} -> {update:?}", key.code);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Outcome;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn letters_backspace_and_enter_map_to_game_events() {
        assert_eq!(
            map_key(key(KeyCode::Char('a')), false),
            Some(Action::Game(GameEvent::Char('a')))
        );
        assert_eq!(
            map_key(key(KeyCode::Backspace), false),
            Some(Action::Game(GameEvent::Backspace))
        );
        assert_eq!(
            map_key(key(KeyCode::Enter), false),
            Some(Action::Game(GameEvent::Submit))
        );
    }

    #[test]
    fn enter_restarts_after_game_over() {
        assert_eq!(
            map_key(key(KeyCode::Enter), true),
            Some(Action::Game(GameEvent::Restart))
        );
    }

    #[test]
    fn quit_and_control_keys() {
        assert_eq!(map_key(key(KeyCode::Esc), false), Some(Action::Quit));
        assert_eq!(map_key(ctrl('c'), false), Some(Action::Quit));
        assert_eq!(
            map_key(ctrl('n'), true),
            Some(Action::Game(GameEvent::Restart))
        );
        assert_eq!(map_key(ctrl('x'), false), None);
        assert_eq!(map_key(key(KeyCode::Tab), false), None);
        assert_eq!(map_key(key(KeyCode::Left), false), None);
    }

    #[test]
    fn app_plays_a_game_from_key_presses() {
        let words = WordList::new(words_from_slice(&["allow"]), Vec::new()).unwrap();
        let mut app = App::new(&words, StdRng::seed_from_u64(5), false);
        let now = Instant::now();

        for c in "ALLOW".chars() {
            app.handle_key(key(KeyCode::Char(c)), now);
        }
        app.handle_key(key(KeyCode::Enter), now);
        assert_eq!(app.game.state().outcome(), Outcome::Won);

        assert_eq!(app.handle_key(key(KeyCode::Enter), now), Update::Restarted);
        assert_eq!(app.game.state().outcome(), Outcome::InProgress);

        app.handle_key(key(KeyCode::Esc), now);
        assert!(app.should_quit);
    }
}
