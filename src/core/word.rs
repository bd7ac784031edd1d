//! Puzzle word representation
//!
//! A Word stores exactly five uppercase ASCII letters. Both dictionary words
//! and the made-up daily answer use this type.

use std::fmt;
use thiserror::Error;

/// Number of letters in every word, and columns on the board
pub const WORD_LENGTH: usize = 5;

/// A 5-letter uppercase word
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word([u8; WORD_LENGTH]);

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly {WORD_LENGTH} letters, got {0}")]
    InvalidLength(usize),
    #[error("word must contain only ASCII letters")]
    NonAscii,
    #[error("word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string, normalizing to uppercase
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use nonwordle::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.as_str(), "CRANE");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        Self::from_bytes(text.as_bytes())
    }

    /// Create a Word from raw character codes, normalizing to uppercase
    ///
    /// # Errors
    /// Same conditions as [`Word::new`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, WordError> {
        if !bytes.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let letters: [u8; WORD_LENGTH] = bytes
            .try_into()
            .map_err(|_| WordError::InvalidLength(bytes.len()))?;

        if !letters.iter().all(u8::is_ascii_alphabetic) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self(letters.map(|b| b.to_ascii_uppercase())))
    }

    /// Get the word as a string slice
    ///
    /// # Panics
    /// Will not panic - construction guarantees ASCII letters only.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.0).expect("word holds ASCII letters only")
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.0
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> u8 {
        self.0[position]
    }

    /// Length of the prefix shared with `other`
    #[must_use]
    pub fn common_prefix_len(&self, other: &Self) -> usize {
        self.0
            .iter()
            .zip(other.0.iter())
            .take_while(|(a, b)| a == b)
            .count()
    }

    /// Count of each letter, indexed `A` = 0 through `Z` = 25
    ///
    /// Used for scoring with duplicate letters.
    #[inline]
    pub(crate) fn letter_counts(&self) -> [u8; 26] {
        let mut counts = [0u8; 26];
        for &letter in &self.0 {
            counts[usize::from(letter - b'A')] += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("CRANE").unwrap();
        assert_eq!(word.as_str(), "CRANE");
        assert_eq!(word.letters(), b"CRANE");
    }

    #[test]
    fn word_creation_lowercase_normalized() {
        assert_eq!(Word::new("crane").unwrap().as_str(), "CRANE");
        assert_eq!(Word::new("CrAnE").unwrap().as_str(), "CRANE");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(Word::new("toolong"), Err(WordError::InvalidLength(7)));
        assert_eq!(Word::new("shrt"), Err(WordError::InvalidLength(4)));
        assert_eq!(Word::new(""), Err(WordError::InvalidLength(0)));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran "), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("crañ"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_from_control_bytes_rejected() {
        assert_eq!(
            Word::from_bytes(&[b'A', b'B', 0x02, b'C', b'D']),
            Err(WordError::InvalidCharacters)
        );
    }

    #[test]
    fn word_letter_at() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.letter_at(0), b'C');
        assert_eq!(word.letter_at(4), b'E');
    }

    #[test]
    fn word_common_prefix() {
        let crane = Word::new("crane").unwrap();
        assert_eq!(crane.common_prefix_len(&Word::new("crate").unwrap()), 3);
        assert_eq!(crane.common_prefix_len(&Word::new("slate").unwrap()), 0);
        assert_eq!(crane.common_prefix_len(&crane), 5);
    }

    #[test]
    fn word_letter_counts() {
        let counts = Word::new("speed").unwrap().letter_counts();
        assert_eq!(counts[usize::from(b'E' - b'A')], 2);
        assert_eq!(counts[usize::from(b'S' - b'A')], 1);
        assert_eq!(counts.iter().map(|&c| usize::from(c)).sum::<usize>(), 5);
    }

    #[test]
    fn word_ordering_is_alphabetical() {
        let mut words = vec![
            Word::new("slate").unwrap(),
            Word::new("crate").unwrap(),
            Word::new("crane").unwrap(),
        ];
        words.sort();
        let text: Vec<&str> = words.iter().map(Word::as_str).collect();
        assert_eq!(text, ["CRANE", "CRATE", "SLATE"]);
    }

    #[test]
    fn word_display() {
        let word = Word::new("crane").unwrap();
        assert_eq!(format!("{word}"), "CRANE");
    }
}
