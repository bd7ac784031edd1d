//! Player-facing strings
//!
//! Only the shape of the message table lives here; translations are out of
//! scope and English is the single table provided.

use super::{EngineError, ROWS};

/// Message table for one language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Messages {
    pub not_enough_letters: &'static str,
    pub not_in_word_list: &'static str,
    pub reveal_in_progress: &'static str,
    /// Congratulation by winning row (first row first)
    pub win: [&'static str; ROWS],
    pub share_ready: &'static str,
}

pub const ENGLISH: Messages = Messages {
    not_enough_letters: "Not enough letters",
    not_in_word_list: "Not in word list",
    reveal_in_progress: "Wait for the guess to finish",
    win: [
        "Incredible",
        "Genius",
        "Magnificent",
        "Impressive",
        "Splendid",
        "Great",
        "Phew",
    ],
    share_ready: "Results ready to share",
};

impl Default for Messages {
    fn default() -> Self {
        ENGLISH
    }
}

impl Messages {
    /// Toast for a rejected commit
    #[must_use]
    pub const fn for_error(&self, error: &EngineError) -> &'static str {
        match error {
            EngineError::IncompleteRow => self.not_enough_letters,
            EngineError::NotAWord(_) => self.not_in_word_list,
            EngineError::RevealInProgress => self.reveal_in_progress,
        }
    }

    /// Congratulation after winning on the given zero-based row
    #[must_use]
    pub fn win_message(&self, row: usize) -> &'static str {
        self.win[row.min(ROWS - 1)]
    }
}
