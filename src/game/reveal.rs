//! Letter-by-letter reveal of a scored guess
//!
//! Scoring is instant, but the result is shown one column at a time. A
//! `Reveal` is the queue of those steps; whoever drives the engine advances
//! it once per interval. Replayed rows use `RevealMode::Fast`, whose
//! interval is zero.

use crate::core::{Feedback, TileState, Word};
use std::time::Duration;

/// Pause between revealed letters of a live guess
pub const REVEAL_INTERVAL: Duration = Duration::from_millis(500);

/// How a scored guess is revealed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealMode {
    /// Freshly typed guess: one letter per `REVEAL_INTERVAL`
    #[default]
    Live,
    /// Restored guess: everything resolves at once
    Fast,
}

impl RevealMode {
    #[must_use]
    pub const fn interval(self) -> Duration {
        match self {
            Self::Live => REVEAL_INTERVAL,
            Self::Fast => Duration::ZERO,
        }
    }
}

/// A tile turned over during a reveal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileReveal {
    pub column: usize,
    pub letter: u8,
    pub state: TileState,
}

/// One tick of a reveal
///
/// A tile's keyboard update lands one interval after the tile itself, in
/// the same step as the next tile. The final step carries only the last
/// keyboard update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealStep {
    pub row: usize,
    pub tile: Option<TileReveal>,
    /// Letter of the previous tile and its best state across the whole guess
    pub keyboard: Option<(u8, TileState)>,
}

/// Pending reveal of one guess
///
/// Steps come out strictly in column order and the sequence is never
/// cancelled, only run to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reveal {
    word: Word,
    row: usize,
    feedback: Feedback,
    letter_states: Vec<(u8, TileState)>,
    next_column: usize,
    pending_keyboard: Option<(u8, TileState)>,
    mode: RevealMode,
}

impl Reveal {
    #[must_use]
    pub fn new(word: Word, row: usize, feedback: Feedback, mode: RevealMode) -> Self {
        Self {
            letter_states: feedback.letter_states(&word),
            word,
            row,
            feedback,
            next_column: 0,
            pending_keyboard: None,
            mode,
        }
    }

    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    #[must_use]
    pub const fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    #[must_use]
    pub const fn mode(&self) -> RevealMode {
        self.mode
    }

    /// Delay to wait before the next step
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.mode.interval()
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.next_column >= self.feedback.states().len() && self.pending_keyboard.is_none()
    }

    fn keyboard_state(&self, letter: u8) -> TileState {
        self.letter_states
            .iter()
            .find_map(|&(l, state)| (l == letter).then_some(state))
            .unwrap_or(TileState::Absent)
    }
}

impl Iterator for Reveal {
    type Item = RevealStep;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_done() {
            return None;
        }
        let keyboard = self.pending_keyboard.take();

        let tile = (self.next_column < self.feedback.states().len()).then(|| {
            let column = self.next_column;
            let letter = self.word.letter_at(column);
            TileReveal {
                column,
                letter,
                state: self.feedback.state_at(column),
            }
        });
        if let Some(tile) = tile {
            self.next_column += 1;
            self.pending_keyboard = Some((tile.letter, self.keyboard_state(tile.letter)));
        }

        Some(RevealStep {
            row: self.row,
            tile,
            keyboard,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reveal(guess: &str, answer: &str, mode: RevealMode) -> Reveal {
        let guess = Word::new(guess).unwrap();
        let answer = Word::new(answer).unwrap();
        Reveal::new(guess, 2, Feedback::calculate(&guess, &answer), mode)
    }

    fn tiles(steps: &[RevealStep]) -> Vec<TileReveal> {
        steps.iter().filter_map(|s| s.tile).collect()
    }

    #[test]
    fn steps_come_in_column_order() {
        let steps: Vec<RevealStep> = reveal("llama", "alloy", RevealMode::Live).collect();
        let tiles = tiles(&steps);

        assert_eq!(tiles.len(), 5);
        assert!(tiles.iter().enumerate().all(|(i, t)| t.column == i));
        assert!(steps.iter().all(|s| s.row == 2));
        assert_eq!(tiles[0].state, TileState::Present);
        assert_eq!(tiles[1].state, TileState::Correct);
    }

    #[test]
    fn keyboard_lands_one_step_after_its_tile() {
        let steps: Vec<RevealStep> = reveal("llama", "alloy", RevealMode::Live).collect();

        assert_eq!(steps.len(), 6);
        assert_eq!(steps[0].keyboard, None);
        for (i, step) in steps.iter().enumerate().skip(1) {
            let previous = steps[i - 1].tile.unwrap();
            assert_eq!(step.keyboard.map(|(letter, _)| letter), Some(previous.letter));
        }
        assert!(steps[5].tile.is_none());
    }

    #[test]
    fn keyboard_uses_best_state_of_letter_in_guess() {
        let steps: Vec<RevealStep> = reveal("llama", "alloy", RevealMode::Live).collect();

        // First L is only present, but the guess also has L correct
        assert_eq!(steps[1].keyboard, Some((b'L', TileState::Correct)));
        // Last A is absent, but the first A was present
        assert_eq!(steps[4].tile.unwrap().state, TileState::Absent);
        assert_eq!(steps[5].keyboard, Some((b'A', TileState::Present)));
    }

    #[test]
    fn fast_mode_has_no_delay() {
        assert_eq!(reveal("crane", "crane", RevealMode::Fast).interval(), Duration::ZERO);
        assert_eq!(reveal("crane", "crane", RevealMode::Live).interval(), REVEAL_INTERVAL);
    }

    #[test]
    fn done_after_last_keyboard_step() {
        let mut r = reveal("crane", "slate", RevealMode::Live);
        assert!(!r.is_done());
        assert_eq!(r.by_ref().take(5).count(), 5);
        assert!(!r.is_done());
        assert!(r.next().is_some());
        assert!(r.is_done());
        assert_eq!(r.next(), None);
    }
}
