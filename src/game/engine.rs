//! Guess engine
//!
//! Owns the board, tile grid, keyboard knowledge and game outcome for one
//! day. Front ends only read snapshots and call the operations below.

use super::board::{Board, COLUMNS, ROWS};
use super::keyboard::KeyboardState;
use super::reveal::{Reveal, RevealMode, RevealStep};
use super::store::BoardStore;
use crate::core::{Feedback, TileState, Word};
use crate::daily::DayNumber;
use crate::wordlists::WordList;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Scored tile states; `None` for cells not yet revealed
pub type TileGrid = [[Option<TileState>; COLUMNS]; ROWS];

/// Outcome of the day's game
///
/// Only moves from `Ongoing` to one of the terminal states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    #[default]
    Ongoing,
    Won,
    Lost,
}

impl GameState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Ongoing)
    }
}

/// A commit that was rejected; the board is left as it was
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("not enough letters")]
    IncompleteRow,
    #[error("{0} is not in the word list")]
    NotAWord(String),
    #[error("the previous guess is still being revealed")]
    RevealInProgress,
}

/// Daily game state machine
pub struct GuessEngine<S> {
    words: WordList,
    day: DayNumber,
    store: S,
    board: Board,
    tiles: TileGrid,
    keyboard: KeyboardState,
    state: GameState,
    guesses: usize,
    reveal: Option<Reveal>,
}

impl<S: BoardStore> GuessEngine<S> {
    /// Fresh game for `day`; saved progress is restored with [`replay`](Self::replay)
    #[must_use]
    pub fn new(words: WordList, day: DayNumber, store: S) -> Self {
        Self {
            words,
            day,
            store,
            board: Board::new(),
            tiles: [[None; COLUMNS]; ROWS],
            keyboard: KeyboardState::default(),
            state: GameState::Ongoing,
            guesses: 0,
            reveal: None,
        }
    }

    #[must_use]
    pub const fn answer(&self) -> &Word {
        self.words.answer()
    }

    #[must_use]
    pub const fn words(&self) -> &WordList {
        &self.words
    }

    #[must_use]
    pub const fn day(&self) -> DayNumber {
        self.day
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn tiles(&self) -> &TileGrid {
        &self.tiles
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Number of guesses fully revealed so far
    #[must_use]
    pub const fn guesses(&self) -> usize {
        self.guesses
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub const fn is_revealing(&self) -> bool {
        self.reveal.is_some()
    }

    /// Delay before the next reveal step, if a guess is being revealed
    #[must_use]
    pub fn reveal_interval(&self) -> Option<Duration> {
        self.reveal.as_ref().map(Reveal::interval)
    }

    fn accepts_input(&self) -> bool {
        !self.state.is_terminal() && self.reveal.is_none()
    }

    /// Type a letter into the active row
    ///
    /// Ignored once the game is over, while a guess is being revealed, or
    /// when the row already has five letters. The caller uppercases input.
    pub fn append_letter(&mut self, letter: char) -> bool {
        self.accepts_input() && self.board.push_letter(letter)
    }

    /// Delete the last letter of the active row
    ///
    /// Ignored once the game is over, while revealing, or on an empty row.
    pub fn backspace(&mut self) -> bool {
        self.accepts_input() && self.board.pop_letter()
    }

    /// Submit the active row as a guess
    ///
    /// Returns `Ok(None)` if the game is already over. On success the board
    /// gets a new row (unless it was the last), the transcript is saved and a
    /// live reveal starts; drive it with [`advance`](Self::advance) or
    /// [`settle`](Self::settle).
    ///
    /// # Errors
    /// - `IncompleteRow` if the row has fewer than five letters
    /// - `NotAWord` if the row is not an acceptable word
    /// - `RevealInProgress` if the previous guess has not settled
    pub fn commit(&mut self) -> Result<Option<Feedback>, EngineError> {
        if self.state.is_terminal() {
            return Ok(None);
        }
        if self.reveal.is_some() {
            return Err(EngineError::RevealInProgress);
        }

        let row = self.board.active_index();
        let text = self.board.active_row();
        if text.len() < COLUMNS {
            return Err(EngineError::IncompleteRow);
        }
        let word = Word::new(text).map_err(|_| EngineError::NotAWord(text.to_string()))?;
        if !self.words.contains(&word) {
            debug!(%word, "rejected guess not in word list");
            return Err(EngineError::NotAWord(word.to_string()));
        }

        self.board.open_row();
        self.persist();

        Ok(Some(self.score(&word, row, RevealMode::Live)))
    }

    /// Score `word` on `row` and queue its reveal
    ///
    /// Any reveal still pending is settled first, so rows always resolve in
    /// order. In fast mode the new reveal is settled immediately too.
    ///
    /// Once the game is over (including when settling the pending reveal
    /// ends it), or for a row outside the board, the feedback is only
    /// computed: nothing is queued and no state changes.
    pub fn score(&mut self, word: &Word, row: usize, mode: RevealMode) -> Feedback {
        let feedback = Feedback::calculate(word, self.words.answer());

        self.settle();
        if self.state.is_terminal() || row >= ROWS {
            debug!(%word, row, state = ?self.state, "guess scored without effect");
            return feedback;
        }
        debug!(%word, row, feedback = %feedback.to_codes(), ?mode, "scored guess");

        self.reveal = Some(Reveal::new(*word, row, feedback, mode));
        if mode == RevealMode::Fast {
            self.settle();
        }
        feedback
    }

    /// Run the next step of the pending reveal
    ///
    /// Merges the previous tile's letter into the keyboard, then turns over
    /// the next tile. The game outcome is decided once the last keyboard
    /// update lands.
    pub fn advance(&mut self) -> Option<RevealStep> {
        let reveal = self.reveal.as_mut()?;
        let step = reveal.next();
        let done = reveal.is_done();

        if let Some(step) = step {
            if let Some((letter, state)) = step.keyboard {
                self.keyboard.merge(letter, state);
            }
            if let Some(tile) = step.tile {
                self.tiles[step.row][tile.column] = Some(tile.state);
            }
        }
        if done {
            if let Some(finished) = self.reveal.take() {
                self.finish(&finished);
            }
        }
        step
    }

    /// Resolve everything left in the pending reveal at once
    pub fn settle(&mut self) {
        while self.advance().is_some() {}
    }

    fn finish(&mut self, reveal: &Reveal) {
        if self.state.is_terminal() {
            return;
        }
        self.guesses += 1;
        if reveal.feedback().is_perfect() {
            self.state = GameState::Won;
            info!(day = %self.day, guesses = self.guesses, "puzzle solved");
        } else if reveal.row() == ROWS - 1 {
            self.state = GameState::Lost;
            info!(day = %self.day, answer = %self.answer(), "out of guesses");
        }
    }

    /// Rebuild tiles and keyboard from a saved transcript
    ///
    /// Call on a fresh engine. Each complete row is scored in fast mode, in
    /// order, exactly as it was when first played; nothing is saved. Replay
    /// stops at the first malformed row or once the game is over. Returns the
    /// number of rows replayed.
    pub fn replay(&mut self, transcript: &str) -> usize {
        let mut replayed = 0;

        for line in transcript.lines().map(str::trim_end) {
            if line.is_empty() {
                continue;
            }
            if self.state.is_terminal() {
                warn!(day = %self.day, "ignoring saved rows after the game ended");
                break;
            }
            let word = match Word::new(line) {
                Ok(word) => word,
                Err(err) => {
                    warn!(day = %self.day, row = line, %err, "ignoring malformed saved row");
                    break;
                }
            };

            let row = self.board.active_index();
            self.board.fill_active(&word);
            self.board.open_row();
            self.score(&word, row, RevealMode::Fast);
            replayed += 1;
        }

        debug!(day = %self.day, rows = replayed, state = ?self.state, "replayed saved board");
        replayed
    }

    fn persist(&mut self) {
        if let Err(err) = self.store.save(self.day, &self.board.transcript()) {
            warn!(day = %self.day, %err, "failed to save board");
        }
    }
}
