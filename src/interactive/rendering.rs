//! TUI rendering with ratatui
//!
//! Draws the guess grid, the keyboard hint and the session status.

use super::app::App;
use crate::core::{Feedback, NUM_ROWS, WORD_LENGTH};
use crate::game::{Cell, Outcome};
use crate::output::formatters::KEYBOARD_ROWS;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use std::time::Instant;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App, now: Instant) {
    let debug_height = u16::from(app.reveal_secret);
    // Rows separated by blank lines, plus the border
    let grid_height = NUM_ROWS as u16 * 2 + 1;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Header
            Constraint::Length(debug_height), // Secret word
            Constraint::Length(grid_height),  // Grid
            Constraint::Length(2),            // Messages
            Constraint::Length(5),            // Keyboard
            Constraint::Min(0),               // Spacer
            Constraint::Length(4),            // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    if app.reveal_secret {
        render_debug(f, app, chunks[1]);
    }
    render_grid(f, app, now, chunks[2]);
    render_messages(f, app, chunks[3]);
    render_keyboard(f, app, chunks[4]);
    render_status(f, app, chunks[6]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("W O R D E Y")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_debug(f: &mut Frame, app: &App, area: Rect) {
    let line = format!("Debug: Current Word is \"{}\"", app.game.state().secret());
    let debug = Paragraph::new(line)
        .style(Style::default().fg(Color::Red))
        .alignment(Alignment::Center);
    f.render_widget(debug, area);
}

const fn feedback_style(feedback: Feedback) -> Style {
    match feedback {
        Feedback::Correct => Style::new().fg(Color::Black).bg(Color::Green),
        Feedback::Present => Style::new().fg(Color::Black).bg(Color::Yellow),
        Feedback::Absent => Style::new().fg(Color::White).bg(Color::DarkGray),
        Feedback::Empty => Style::new().fg(Color::White),
    }
}

/// Style for one tile, holding back feedback colours not yet revealed
fn cell_style(cell: Cell, revealed: bool, shaking: bool) -> Style {
    let style = if revealed {
        feedback_style(cell.feedback)
    } else {
        feedback_style(Feedback::Empty)
    };
    let style = if shaking { style.fg(Color::Red) } else { style };
    style.add_modifier(Modifier::BOLD)
}

fn grid_line(app: &App, row: usize, cells: [Cell; WORD_LENGTH], now: Instant) -> Line<'static> {
    let state = app.game.state();
    let is_current = row == state.current_row() && !state.is_game_over();
    let shaking = is_current && app.game.is_shaking(now);
    let revealed = app.game.revealed_cells(row, now);

    let mut spans = Vec::with_capacity(WORD_LENGTH * 2 + 1);
    // Shift the row to either side while it shakes
    let pad = match if shaking { app.game.shake_offset(now) } else { 0 } {
        -1 => "",
        1 => "  ",
        _ => " ",
    };
    spans.push(Span::raw(pad));

    for (col, cell) in cells.into_iter().enumerate() {
        let text = match cell.letter {
            Some(letter) => format!(" {} ", letter.to_ascii_uppercase()),
            None => " · ".to_string(),
        };
        let show_feedback = state.is_submitted(row) && col < revealed;
        spans.push(Span::styled(text, cell_style(cell, show_feedback, shaking)));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_grid(f: &mut Frame, app: &App, now: Instant, area: Rect) {
    let rows = app.game.state().rows();
    let mut lines = Vec::with_capacity(NUM_ROWS * 2);
    for (row, cells) in rows.into_iter().enumerate() {
        lines.push(grid_line(app, row, cells, now));
        lines.push(Line::from(""));
    }

    let border = if app.game.is_shaking(now) {
        Color::Red
    } else {
        Color::Blue
    };
    let grid = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border)),
    );
    f.render_widget(grid, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let state = app.game.state();
    let mut lines = Vec::new();

    if state.invalid_guess() {
        lines.push(Line::from(Span::styled(
            "Invalid Word",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
    }

    let status_style = match state.outcome() {
        Outcome::Won => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        Outcome::Lost => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        Outcome::InProgress => Style::default().fg(Color::Gray),
    };
    let status = match state.outcome() {
        Outcome::Lost => format!(
            "{} - the word was {}",
            state.status(),
            state.secret().text().to_uppercase()
        ),
        _ => state.status().to_string(),
    };
    if !status.is_empty() {
        lines.push(Line::from(Span::styled(status, status_style)));
    }

    let messages = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(messages, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let letters = app.game.state().used_letters();
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .bytes()
                .map(|b| {
                    let key = format!(" {} ", char::from(b).to_ascii_uppercase());
                    let feedback = letters[usize::from(b - b'a')];
                    Span::styled(key, feedback_style(feedback))
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title("Letters")
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(keyboard, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let stats = app.game.stats();
    let summary = format!(
        "Played: {}  Win: {:.0}%  Streak: {}  Best: {}",
        stats.total_games,
        stats.win_rate(),
        stats.current_streak,
        stats.max_streak
    );
    let help = if app.game.state().is_game_over() {
        "Enter/Ctrl+N: NEW GAME | Esc: Quit"
    } else {
        "Type letters | Backspace: Delete | Enter: Guess | Esc: Quit"
    };

    let status = Paragraph::new(vec![
        Line::from(Span::styled(summary, Style::default().fg(Color::Cyan))),
        Line::from(Span::styled(help, Style::default().fg(Color::Gray))),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WordList;
    use crate::wordlists::loader::words_from_slice;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen(app: &App, now: Instant) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| ui(f, app, now)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    fn type_keys(app: &mut App, text: &str, now: Instant) {
        for c in text.chars() {
            app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE), now);
        }
    }

    #[test]
    fn renders_typed_letters_and_hint() {
        let words = WordList::new(words_from_slice(&["allow"]), Vec::new()).unwrap();
        let mut app = App::new(&words, StdRng::seed_from_u64(3), false);
        let now = Instant::now();
        type_keys(&mut app, "cr", now);

        let text = screen(&app, now);
        assert!(text.contains(" C "));
        assert!(text.contains(" R "));
        assert!(text.contains("Enter: Guess"));
        assert!(!text.contains("Debug"));
    }

    #[test]
    fn renders_secret_and_invalid_word() {
        let words = WordList::new(words_from_slice(&["allow"]), Vec::new()).unwrap();
        let mut app = App::new(&words, StdRng::seed_from_u64(3), true);
        let now = Instant::now();
        type_keys(&mut app, "zzzzz", now);
        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE), now);

        let text = screen(&app, now);
        assert!(text.contains("Current Word is \"allow\""));
        assert!(text.contains("Invalid Word"));
    }

    #[test]
    fn game_over_offers_new_game() {
        let words = WordList::new(words_from_slice(&["allow"]), Vec::new()).unwrap();
        let mut app = App::new(&words, StdRng::seed_from_u64(3), false);
        let now = Instant::now();
        type_keys(&mut app, "allow", now);
        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE), now);

        let text = screen(&app, now);
        assert!(text.contains("You won!"));
        assert!(text.contains("NEW GAME"));
    }
}
