//! Board of typed rows
//!
//! The last row is the one being typed into. Rows are stored as uppercase
//! letters and persisted as newline-joined text.

use crate::core::{WORD_LENGTH, Word};

/// Maximum number of rows (guesses)
pub const ROWS: usize = 7;

/// Letters per row
pub const COLUMNS: usize = WORD_LENGTH;

/// Ordered rows of up to five letters; never more than seven rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: Vec<String>,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            rows: vec![String::new()],
        }
    }
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Index of the row being typed into
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.rows.len() - 1
    }

    #[must_use]
    pub fn active_row(&self) -> &str {
        self.rows.last().map_or("", String::as_str)
    }

    /// Append a letter to the active row
    ///
    /// Returns `false` (and changes nothing) if the row is full or the
    /// character is not an uppercase ASCII letter.
    pub(crate) fn push_letter(&mut self, letter: char) -> bool {
        if !letter.is_ascii_uppercase() {
            return false;
        }
        match self.rows.last_mut() {
            Some(row) if row.len() < COLUMNS => {
                row.push(letter);
                true
            }
            _ => false,
        }
    }

    /// Remove the last letter of the active row; `false` if it is empty
    pub(crate) fn pop_letter(&mut self) -> bool {
        self.rows.last_mut().and_then(String::pop).is_some()
    }

    /// Replace the active row with a whole word
    pub(crate) fn fill_active(&mut self, word: &Word) {
        if let Some(row) = self.rows.last_mut() {
            row.clear();
            row.push_str(word.as_str());
        }
    }

    /// Start a new empty row if the board has room; `false` on the last row
    pub(crate) fn open_row(&mut self) -> bool {
        if self.rows.len() < ROWS {
            self.rows.push(String::new());
            true
        } else {
            false
        }
    }

    /// Rows joined by newlines, as persisted
    ///
    /// An empty active row after committed rows shows up as a trailing
    /// newline.
    #[must_use]
    pub fn transcript(&self) -> String {
        self.rows.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_board_has_one_empty_row() {
        let board = Board::new();
        assert_eq!(board.rows().len(), 1);
        assert_eq!(board.active_index(), 0);
        assert_eq!(board.active_row(), "");
        assert_eq!(board.transcript(), "");
    }

    #[test]
    fn push_stops_at_five_letters() {
        let mut board = Board::new();
        for letter in "CRANES".chars() {
            board.push_letter(letter);
        }
        assert_eq!(board.active_row(), "CRANE");
        assert!(!board.push_letter('X'));
    }

    #[test]
    fn push_rejects_non_uppercase() {
        let mut board = Board::new();
        assert!(!board.push_letter('a'));
        assert!(!board.push_letter('1'));
        assert_eq!(board.active_row(), "");
    }

    #[test]
    fn pop_on_empty_row_is_noop() {
        let mut board = Board::new();
        assert!(!board.pop_letter());
        board.push_letter('A');
        assert!(board.pop_letter());
        assert_eq!(board.active_row(), "");
    }

    #[test]
    fn open_row_caps_at_seven() {
        let mut board = Board::new();
        for _ in 1..ROWS {
            assert!(board.open_row());
        }
        assert_eq!(board.rows().len(), ROWS);
        assert!(!board.open_row());
        assert_eq!(board.rows().len(), ROWS);
    }

    #[test]
    fn transcript_has_trailing_newline_for_empty_active_row() {
        let mut board = Board::new();
        board.fill_active(&Word::new("crane").unwrap());
        board.open_row();
        assert_eq!(board.transcript(), "CRANE\n");
        board.push_letter('S');
        assert_eq!(board.transcript(), "CRANE\nS");
    }
}
