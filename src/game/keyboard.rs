//! Best-known state per letter

use crate::core::TileState;
use rustc_hash::FxHashMap;

/// Map from letter to the most informative state seen so far
///
/// States only move up the order `Absent < Present < Correct`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    letters: FxHashMap<u8, TileState>,
}

impl KeyboardState {
    /// State for an uppercase letter, if it has been guessed
    #[must_use]
    pub fn get(&self, letter: u8) -> Option<TileState> {
        self.letters.get(&letter).copied()
    }

    /// Record a state for a letter, keeping the better of old and new
    ///
    /// Returns whether the stored state changed.
    pub fn merge(&mut self, letter: u8, state: TileState) -> bool {
        match self.letters.get(&letter) {
            Some(&known) if known >= state => false,
            _ => {
                self.letters.insert(letter, state);
                true
            }
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, TileState)> + '_ {
        self.letters.iter().map(|(&letter, &state)| (letter, state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_never_downgrades() {
        let mut keyboard = KeyboardState::default();
        assert!(keyboard.merge(b'A', TileState::Absent));
        assert!(keyboard.merge(b'A', TileState::Correct));
        assert!(!keyboard.merge(b'A', TileState::Present));
        assert!(!keyboard.merge(b'A', TileState::Absent));
        assert_eq!(keyboard.get(b'A'), Some(TileState::Correct));
    }

    #[test]
    fn present_is_not_lost_to_absent() {
        let mut keyboard = KeyboardState::default();
        keyboard.merge(b'L', TileState::Present);
        keyboard.merge(b'L', TileState::Absent);
        assert_eq!(keyboard.get(b'L'), Some(TileState::Present));
    }

    #[test]
    fn unknown_letters_are_unset() {
        let keyboard = KeyboardState::default();
        assert_eq!(keyboard.get(b'Q'), None);
        assert!(keyboard.is_empty());
    }
}
