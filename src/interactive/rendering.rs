//! TUI rendering with ratatui
//!
//! Board, keyboard and share panel for the game interface.

use super::app::{App, MessageStyle};
use crate::core::TileState;
use crate::game::{COLUMNS, GameState, ROWS};
use crate::output::display::KEYBOARD_ROWS;
use crate::output::share::Palette;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Board
            Constraint::Percentage(50), // Keyboard and messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

/// Style for a tile in the given state
#[must_use]
pub fn tile_style(state: Option<TileState>, palette: Palette) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    match state {
        Some(TileState::Correct) if palette.high_contrast => {
            base.fg(Color::Black).bg(Color::Rgb(245, 121, 58))
        }
        Some(TileState::Correct) => base.fg(Color::Black).bg(Color::Green),
        Some(TileState::Present) if palette.high_contrast => {
            base.fg(Color::Black).bg(Color::Rgb(133, 192, 249))
        }
        Some(TileState::Present) => base.fg(Color::Black).bg(Color::Yellow),
        Some(TileState::Absent) => base.fg(Color::White).bg(Color::DarkGray),
        None if palette.dark_mode => base.fg(Color::White),
        None => base,
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let date = app
        .engine
        .day()
        .date()
        .map_or_else(|| app.engine.day().to_string(), |date| date.to_string());

    let header = Paragraph::new(format!("NONWORDLE - {date}"))
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

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let rows = app.engine.board().rows();
    let tiles = app.engine.tiles();

    let mut lines = vec![Line::from("")];
    for (index, states) in tiles.iter().enumerate().take(ROWS) {
        let text = rows.get(index).map_or("", String::as_str);
        let mut letters = text.chars();

        let mut spans = Vec::with_capacity(COLUMNS * 2);
        for &state in states {
            let letter = letters.next().unwrap_or('·');
            spans.push(Span::styled(
                format!(" {letter} "),
                tile_style(state, app.palette),
            ));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let constraints = if app.show_share {
        [
            Constraint::Length(8),  // Keyboard
            Constraint::Min(5),     // Share
            Constraint::Length(7),  // Messages
        ]
    } else {
        [
            Constraint::Length(8),
            Constraint::Length(0),
            Constraint::Min(5),
        ]
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    render_keyboard(f, app, chunks[0]);
    if app.show_share {
        render_share(f, app, chunks[1]);
    }
    render_messages(f, app, chunks[2]);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let keyboard = app.engine.keyboard();

    let mut lines = vec![Line::from("")];
    for row in KEYBOARD_ROWS {
        let spans: Vec<Span> = row
            .bytes()
            .flat_map(|letter| {
                [
                    Span::styled(
                        format!(" {} ", char::from(letter)),
                        tile_style(keyboard.get(letter), app.palette),
                    ),
                    Span::raw(" "),
                ]
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(paragraph, area);
}

fn render_share(f: &mut Frame, app: &App, area: Rect) {
    let share = Paragraph::new(app.share())
        .block(
            Block::default()
                .title(" Share ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Green)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(share, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(area);

    let state_text = match app.engine.state() {
        GameState::Ongoing if app.engine.is_revealing() => "Revealing...".to_string(),
        GameState::Ongoing => format!("Guess {}/{ROWS}", app.engine.guesses() + 1),
        GameState::Won => format!("Solved in {}/{ROWS}", app.engine.guesses()),
        GameState::Lost => "Out of guesses".to_string(),
    };
    let state = Paragraph::new(state_text).alignment(Alignment::Center);
    f.render_widget(state, chunks[0]);

    let day_text = format!("Day {}", app.engine.day());
    let day = Paragraph::new(day_text).alignment(Alignment::Center);
    f.render_widget(day, chunks[1]);

    let help = Paragraph::new("Enter: Submit | Tab: Share | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
