//! Shareable result summary
//!
//! A spoiler-free text block: date, score, and one emoji row per guess.

use crate::core::TileState;
use crate::daily::DayNumber;
use crate::game::{BoardStore, GameState, GuessEngine, ROWS, TileGrid};

/// Emoji substitutions for accessibility and dark backgrounds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Palette {
    /// Orange/blue instead of green/yellow
    pub high_contrast: bool,
    /// Black squares for absent letters
    pub dark_mode: bool,
}

impl Palette {
    #[must_use]
    pub const fn emoji(self, state: TileState) -> char {
        match state {
            TileState::Correct if self.high_contrast => '🟧',
            TileState::Correct => '🟩',
            TileState::Present if self.high_contrast => '🟦',
            TileState::Present => '🟨',
            TileState::Absent if self.dark_mode => '⬛',
            TileState::Absent => '⬜',
        }
    }
}

/// Summary of the engine's current game
#[must_use]
pub fn share_text<S: BoardStore>(engine: &GuessEngine<S>, palette: Palette) -> String {
    summary(
        engine.day(),
        engine.state(),
        engine.guesses(),
        engine.tiles(),
        palette,
    )
}

/// Build the summary text
///
/// The score is the number of guesses when won, `X` when lost and `-`
/// while the game is still going.
///
/// # Examples
/// ```
/// use nonwordle::core::TileState;
/// use nonwordle::daily::DayNumber;
/// use nonwordle::game::{COLUMNS, GameState, ROWS};
/// use nonwordle::output::share::{Palette, summary};
///
/// let mut tiles = [[None; COLUMNS]; ROWS];
/// tiles[0] = [Some(TileState::Correct); COLUMNS];
///
/// let text = summary(DayNumber::new(20_742), GameState::Won, 1, &tiles, Palette::default());
/// assert_eq!(text, "Nonwordle 2026-10-16 1/7\n\n🟩🟩🟩🟩🟩");
/// ```
#[must_use]
pub fn summary(
    day: DayNumber,
    state: GameState,
    guesses: usize,
    tiles: &TileGrid,
    palette: Palette,
) -> String {
    let date = day
        .date()
        .map_or_else(|| day.to_string(), |date| date.to_string());

    let score = match state {
        GameState::Won => guesses.to_string(),
        GameState::Lost => "X".to_string(),
        GameState::Ongoing => "-".to_string(),
    };

    let grid = tiles
        .iter()
        .map(|row| {
            row.iter()
                .flatten()
                .map(|&state| palette.emoji(state))
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!("Nonwordle {date} {score}/{ROWS}\n\n{}", grid.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback;
    use crate::game::COLUMNS;

    fn grid(rows: &[&str]) -> TileGrid {
        let mut tiles: TileGrid = [[None; COLUMNS]; ROWS];
        for (row, codes) in tiles.iter_mut().zip(rows) {
            let states = *Feedback::parse(codes).unwrap().states();
            *row = states.map(Some);
        }
        tiles
    }

    #[test]
    fn won_summary() {
        let text = summary(
            DayNumber::new(20_742),
            GameState::Won,
            2,
            &grid(&["-Y--G", "GGGGG"]),
            Palette::default(),
        );
        assert_eq!(text, "Nonwordle 2026-10-16 2/7\n\n⬜🟨⬜⬜🟩\n🟩🟩🟩🟩🟩");
    }

    #[test]
    fn lost_and_ongoing_scores() {
        let tiles = grid(&["-----"]);
        let lost = summary(DayNumber::new(0), GameState::Lost, 7, &tiles, Palette::default());
        assert!(lost.starts_with("Nonwordle 1970-01-01 X/7"));

        let ongoing = summary(DayNumber::new(0), GameState::Ongoing, 1, &tiles, Palette::default());
        assert!(ongoing.starts_with("Nonwordle 1970-01-01 -/7"));
    }

    #[test]
    fn palettes() {
        let palette = Palette {
            high_contrast: true,
            dark_mode: true,
        };
        let text = summary(
            DayNumber::new(0),
            GameState::Ongoing,
            1,
            &grid(&["GY-G-"]),
            palette,
        );
        assert!(text.ends_with("🟧🟦⬛🟧⬛"));
    }

    #[test]
    fn empty_board_has_no_grid() {
        let text = summary(
            DayNumber::new(0),
            GameState::Ongoing,
            0,
            &grid(&[]),
            Palette::default(),
        );
        assert_eq!(text, "Nonwordle 1970-01-01 -/7\n\n");
    }
}
