//! Guess scoring
//!
//! Feedback is the per-position result of comparing a guess with the answer,
//! following Wordle's duplicate-letter rules.

use super::{TileState, WORD_LENGTH, Word};

/// Feedback for a whole guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([TileState; WORD_LENGTH]);

impl Feedback {
    /// All correct (the guess is the answer)
    pub const PERFECT: Self = Self([TileState::Correct; WORD_LENGTH]);

    /// Create feedback from explicit tile states
    #[must_use]
    pub const fn new(states: [TileState; WORD_LENGTH]) -> Self {
        Self(states)
    }

    /// Calculate the feedback when `guess` is guessed and `answer` is the target
    ///
    /// # Algorithm
    /// 1. Exact pass: mark every position matching the answer as correct and
    ///    remove that letter from the available pool
    /// 2. Remaining pass: left to right, mark a letter present if the pool
    ///    still holds a copy (consuming it), otherwise absent
    ///
    /// Exact matches are consumed first, so a guess never earns more
    /// correct/present marks for a letter than the answer contains.
    ///
    /// # Examples
    /// ```
    /// use nonwordle::core::{Feedback, Word};
    ///
    /// let guess = Word::new("llama").unwrap();
    /// let answer = Word::new("alloy").unwrap();
    ///
    /// assert_eq!(Feedback::calculate(&guess, &answer).to_codes(), "YGY--");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let mut result: [Option<TileState>; WORD_LENGTH] = [None; WORD_LENGTH];
        let mut available = answer.letter_counts();

        // Exact pass
        for (i, slot) in result.iter_mut().enumerate() {
            if guess.letter_at(i) == answer.letter_at(i) {
                *slot = Some(TileState::Correct);
                available[pool_index(guess.letter_at(i))] -= 1;
            }
        }

        // Remaining pass
        for (i, slot) in result.iter_mut().enumerate() {
            if slot.is_some() {
                continue;
            }
            let count = &mut available[pool_index(guess.letter_at(i))];
            *slot = Some(if *count > 0 {
                *count -= 1;
                TileState::Present
            } else {
                TileState::Absent
            });
        }

        Self(result.map(|state| state.unwrap_or(TileState::Absent)))
    }

    /// Tile states in column order
    #[inline]
    #[must_use]
    pub const fn states(&self) -> &[TileState; WORD_LENGTH] {
        &self.0
    }

    /// Tile state at a column (0-4)
    ///
    /// # Panics
    /// Panics if column >= 5
    #[inline]
    #[must_use]
    pub const fn state_at(&self, column: usize) -> TileState {
        self.0[column]
    }

    /// Check if every tile is correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Number of tiles in the given state
    #[must_use]
    pub fn count(&self, state: TileState) -> usize {
        self.0.iter().filter(|&&s| s == state).count()
    }

    /// Best state this guess reveals for each of its letters
    ///
    /// A letter scored correct anywhere in the guess is reported correct
    /// even if another copy of it came out absent.
    #[must_use]
    pub fn letter_states(&self, guess: &Word) -> Vec<(u8, TileState)> {
        let mut best: Vec<(u8, TileState)> = Vec::with_capacity(WORD_LENGTH);
        for (&letter, &state) in guess.letters().iter().zip(self.0.iter()) {
            match best.iter_mut().find(|(l, _)| *l == letter) {
                Some((_, known)) => *known = (*known).max(state),
                None => best.push((letter, state)),
            }
        }
        best
    }

    /// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// # Examples
    /// ```
    /// use nonwordle::core::Feedback;
    ///
    /// let a = Feedback::parse("GY-GY").unwrap();
    /// let b = Feedback::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(a, b);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let states: Vec<TileState> = s
            .chars()
            .map(TileState::from_code)
            .collect::<Option<_>>()?;
        states.try_into().ok().map(Self)
    }

    /// Feedback as `G`/`Y`/`-` codes
    #[must_use]
    pub fn to_codes(&self) -> String {
        self.0.iter().map(|s| s.code()).collect()
    }

    /// Feedback as the standard emoji row
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0
            .iter()
            .map(|state| match state {
                TileState::Correct => '🟩',
                TileState::Present => '🟨',
                TileState::Absent => '⬜',
            })
            .collect()
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}

#[inline]
fn pool_index(letter: u8) -> usize {
    usize::from(letter - b'A')
}
