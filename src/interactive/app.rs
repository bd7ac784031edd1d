//! TUI application state and logic

use crate::game::{GameState, Messages, RevealStep};
use crate::output::share::{Palette, share_text};
use crate::session::DailyEngine;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tracing::debug;

/// How long to wait for input when nothing is animating
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Messages kept on screen
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App {
    pub engine: DailyEngine,
    pub palette: Palette,
    pub text: Messages,
    pub messages: Vec<Message>,
    pub show_share: bool,
    pub should_quit: bool,
    next_step_at: Option<Instant>,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(engine: DailyEngine, palette: Palette) -> Self {
        let mut app = Self {
            engine,
            palette,
            text: Messages::default(),
            messages: Vec::new(),
            show_share: false,
            should_quit: false,
            next_step_at: None,
        };

        if app.engine.guesses() > 0 {
            app.add_message("Restored today's board", MessageStyle::Info);
        } else {
            app.add_message("Guess the made-up word in 7 tries", MessageStyle::Info);
        }
        app.announce_outcome();
        app
    }

    /// Handle one key press
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => {
                self.show_share = !self.show_share;
                if self.show_share {
                    self.add_message(self.text.share_ready, MessageStyle::Info);
                }
            }
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                self.engine.append_letter(c.to_ascii_uppercase());
            }
            KeyCode::Backspace => {
                self.engine.backspace();
            }
            KeyCode::Enter => self.submit(now),
            _ => {}
        }
    }

    fn submit(&mut self, now: Instant) {
        match self.engine.commit() {
            Ok(Some(feedback)) => {
                debug!(feedback = %feedback.to_codes(), "guess committed");
                self.schedule(now);
            }
            Ok(None) => {}
            Err(err) => self.add_message(self.text.for_error(&err), MessageStyle::Error),
        }
    }

    fn schedule(&mut self, now: Instant) {
        self.next_step_at = self.engine.reveal_interval().map(|interval| now + interval);
    }

    /// Advance the reveal if its next step is due
    pub fn tick(&mut self, now: Instant) -> Option<RevealStep> {
        let due = self.next_step_at.is_some_and(|deadline| now >= deadline);
        if !due {
            return None;
        }

        let step = self.engine.advance();
        self.schedule(now);
        if !self.engine.is_revealing() {
            self.announce_outcome();
        }
        step
    }

    /// How long the event loop may block waiting for input
    #[must_use]
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.next_step_at
            .map_or(IDLE_POLL, |deadline| deadline.saturating_duration_since(now))
    }

    fn announce_outcome(&mut self) {
        match self.engine.state() {
            GameState::Won => {
                let row = self.engine.guesses().saturating_sub(1);
                let text = self.text.win_message(row);
                self.add_message(text, MessageStyle::Success);
                self.show_share = true;
            }
            GameState::Lost => {
                let text = self.engine.answer().to_string();
                self.add_message(&text, MessageStyle::Error);
                self.show_share = true;
            }
            GameState::Ongoing => {}
        }
    }

    /// Current share summary
    #[must_use]
    pub fn share(&self) -> String {
        share_text(&self.engine, self.palette)
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
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
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    let app = res?;
    if app.engine.state().is_terminal() {
        println!("{}", app.share());
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<App> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Only process key press events (fixes Windows double-input bug)
        if event::poll(app.poll_timeout(Instant::now()))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key, Instant::now());
        }

        app.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(app)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TileState;
    use crate::daily::DayNumber;
    use crate::game::{BoardStore, GuessEngine, MemoryBoardStore, REVEAL_INTERVAL};
    use crate::wordlists::loader::words_from_slice;
    use crate::wordlists::{decode, encode};

    fn app() -> App {
        let bytes = encode(
            &words_from_slice(&["CRANE", "SLATE"]),
            &words_from_slice(&["ZUPLO"]),
        );
        let words = decode(&bytes, 0).unwrap();
        let store: Box<dyn BoardStore> = Box::new(MemoryBoardStore::default());
        App::new(GuessEngine::new(words, DayNumber::new(20_742), store), Palette::default())
    }

    fn press(app: &mut App, code: KeyCode, now: Instant) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE), now);
    }

    fn type_word(app: &mut App, word: &str, now: Instant) {
        for c in word.chars() {
            press(app, KeyCode::Char(c), now);
        }
        press(app, KeyCode::Enter, now);
    }

    #[test]
    fn letters_are_uppercased() {
        let mut app = app();
        let now = Instant::now();
        press(&mut app, KeyCode::Char('c'), now);
        press(&mut app, KeyCode::Char('1'), now);
        press(&mut app, KeyCode::Char('r'), now);
        assert_eq!(app.engine.board().active_row(), "CR");

        press(&mut app, KeyCode::Backspace, now);
        assert_eq!(app.engine.board().active_row(), "C");
    }

    #[test]
    fn short_guess_shows_error() {
        let mut app = app();
        type_word(&mut app, "cra", Instant::now());

        let last = app.messages.last().unwrap();
        assert_eq!(last.text, "Not enough letters");
        assert_eq!(last.style, MessageStyle::Error);
    }

    #[test]
    fn reveal_advances_on_ticks() {
        let mut app = app();
        let start = Instant::now();
        type_word(&mut app, "crane", start);

        assert!(app.engine.is_revealing());
        assert_eq!(app.poll_timeout(start), REVEAL_INTERVAL);
        assert!(app.tick(start).is_none());

        let mut now = start;
        for column in 0..5 {
            now += REVEAL_INTERVAL;
            let step = app.tick(now).unwrap();
            assert_eq!(step.tile.map(|tile| tile.column), Some(column));
        }
        assert!(app.engine.is_revealing());

        now += REVEAL_INTERVAL;
        let last = app.tick(now).unwrap();
        assert!(last.tile.is_none());
        assert_eq!(last.keyboard, Some((b'E', TileState::Absent)));
        assert!(!app.engine.is_revealing());
        assert_eq!(app.poll_timeout(now), IDLE_POLL);
        assert_eq!(app.engine.tiles()[0][0], Some(TileState::Absent));
    }

    #[test]
    fn input_during_reveal_is_ignored() {
        let mut app = app();
        let now = Instant::now();
        type_word(&mut app, "crane", now);
        press(&mut app, KeyCode::Char('s'), now);
        assert_eq!(app.engine.board().active_row(), "");
    }

    #[test]
    fn win_opens_share_panel() {
        let mut app = app();
        let mut now = Instant::now();
        type_word(&mut app, "zuplo", now);
        for _ in 0..6 {
            now += REVEAL_INTERVAL;
            app.tick(now);
        }

        assert_eq!(app.engine.state(), GameState::Won);
        assert!(app.show_share);
        assert_eq!(app.messages.last().unwrap().text, "Incredible");
        assert!(app.share().contains("1/7"));
    }

    #[test]
    fn escape_quits() {
        let mut app = app();
        press(&mut app, KeyCode::Esc, Instant::now());
        assert!(app.should_quit);
    }
}
