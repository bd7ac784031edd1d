//! Per-letter feedback classification

use std::fmt;

/// Feedback for a single tile
///
/// Ordered by how much it reveals: `Absent < Present < Correct`. The keyboard
/// keeps the maximum state seen for each letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TileState {
    /// Letter does not occur in the answer (or all copies are used up)
    Absent,
    /// Letter occurs in the answer at another position
    Present,
    /// Letter is at this exact position in the answer
    Correct,
}

impl TileState {
    /// Single-character code (`G`, `Y`, `-`)
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    /// Parse a single feedback character
    ///
    /// Accepts 'G'/'g'/🟩, 'Y'/'y'/🟨 and '-'/'_'/⬜/⬛.
    #[must_use]
    pub const fn from_code(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }
}

impl fmt::Display for TileState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Correct => "correct",
            Self::Present => "present",
            Self::Absent => "absent",
        };
        f.write_str(name)
    }
}
