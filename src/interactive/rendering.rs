//! TUI rendering with ratatui

use super::app::{App, InputMode};
use crate::core::{KEYBOARD_ROWS, KeyboardState, LetterStatus, WORD_LENGTHS};
use crate::game::{GameState, MAX_GUESSES, WordValidator};
use crate::storage::GameStore;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<S: GameStore, V: WordValidator>(f: &mut Frame, app: &App<'_, S, V>) {
    let state = app.engine.state();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board and keyboard
            Constraint::Length(3), // Message
            Constraint::Length(1), // Help
        ])
        .split(f.area());

    render_header(f, state, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_board(f, state, main_chunks[0]);
    render_keyboard(f, &state.keyboard(), main_chunks[1]);
    render_message(f, state, chunks[2]);
    render_help(f, app, chunks[3]);

    match &app.input_mode {
        InputMode::Playing => {}
        InputMode::ConfirmLength(length) => render_confirm(f, *length),
        InputMode::Share(text) => render_share(f, text),
    }
}

fn status_style(status: LetterStatus) -> Style {
    let bg = match status {
        LetterStatus::Correct => Color::Green,
        LetterStatus::Present => Color::Yellow,
        LetterStatus::Absent => Color::DarkGray,
    };
    Style::default()
        .fg(Color::Black)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

fn render_header(f: &mut Frame, state: &GameState, area: Rect) {
    let mut spans = vec![Span::styled(
        "🟩 INFINITE WORDLE   ",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];
    for length in WORD_LENGTHS {
        let style = if length == state.word_length {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {length} "), style));
        spans.push(Span::raw(" "));
    }

    let header = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn board_lines(state: &GameState) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(MAX_GUESSES * 2);

    for (guess, feedback) in state.guesses.iter().zip(state.feedback()) {
        let spans: Vec<Span> = guess
            .chars()
            .zip(feedback.statuses())
            .flat_map(|(letter, &status)| {
                [
                    Span::styled(
                        format!(" {} ", letter.to_ascii_uppercase()),
                        status_style(status),
                    ),
                    Span::raw(" "),
                ]
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let mut rows = state.guesses.len();
    if !state.game_over && rows < MAX_GUESSES {
        let typed: Vec<char> = state.current_guess.chars().collect();
        let spans: Vec<Span> = (0..state.word_length)
            .flat_map(|i| {
                let tile = typed.get(i).map_or_else(
                    || Span::styled(" · ", Style::default().fg(Color::DarkGray)),
                    |c| {
                        Span::styled(
                            format!(" {} ", c.to_ascii_uppercase()),
                            Style::default()
                                .fg(Color::White)
                                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                        )
                    },
                );
                [tile, Span::raw(" ")]
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
        rows += 1;
    }

    for _ in rows..MAX_GUESSES {
        let spans: Vec<Span> = (0..state.word_length)
            .flat_map(|_| {
                [
                    Span::styled(" · ", Style::default().fg(Color::DarkGray)),
                    Span::raw(" "),
                ]
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    lines
}

fn render_board(f: &mut Frame, state: &GameState, area: Rect) {
    let title = format!(" {} guesses left ", state.remaining_guesses());
    let board = Paragraph::new(board_lines(state))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, keyboard: &KeyboardState, area: Rect) {
    let mut lines = vec![Line::from("")];
    for row in KEYBOARD_ROWS {
        let spans: Vec<Span> = row
            .chars()
            .flat_map(|letter| {
                let style = keyboard
                    .status(letter)
                    .map_or_else(|| Style::default().fg(Color::White), status_style);
                [
                    Span::styled(format!(" {} ", letter.to_ascii_uppercase()), style),
                    Span::raw(" "),
                ]
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(widget, area);
}

fn render_message(f: &mut Frame, state: &GameState, area: Rect) {
    let color = if state.is_won() {
        Color::Green
    } else if state.game_over {
        Color::Red
    } else {
        Color::Yellow
    };

    let message = Paragraph::new(state.message.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Messages "));
    f.render_widget(message, area);
}

fn render_help<S: GameStore, V: WordValidator>(f: &mut Frame, app: &App<'_, S, V>, area: Rect) {
    let help_text = match app.input_mode {
        InputMode::ConfirmLength(_) => "y: Switch | any other key: Cancel",
        InputMode::Share(_) => "any key: Close",
        InputMode::Playing if app.engine.is_game_over() => {
            "n: New Word | s: Share | Tab: Length | q/Esc: Quit"
        }
        InputMode::Playing => {
            "Enter: Submit | Backspace: Delete | Tab: Length | Ctrl-N: New Word | Esc: Quit"
        }
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

/// Centered rectangle taking the given percentages of `area`
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

fn render_confirm(f: &mut Frame, length: usize) {
    let area = centered_rect(50, 20, f.area());
    let prompt = Paragraph::new(format!(
        "Discard the current game and play {length}-letter words? (y/n)"
    ))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .title(" Change Word Length ")
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(Color::Yellow)),
    );
    f.render_widget(Clear, area);
    f.render_widget(prompt, area);
}

fn render_share(f: &mut Frame, text: &str) {
    let area = centered_rect(70, 60, f.area());
    let share = Paragraph::new(text.to_string())
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" Share ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Green)),
        );
    f.render_widget(Clear, area);
    f.render_widget(share, area);
}
