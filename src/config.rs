//! Runtime configuration
//!
//! Gathers what the command line (or environment) decides about where the
//! word list and saved boards live and which day is played.

use crate::daily::DayNumber;
use crate::output::share::Palette;
use crate::wordlists::DEFAULT_WORDS_PATH;
use rand::Rng;
use std::path::PathBuf;

/// Default directory for saved boards
pub const DEFAULT_STORE_DIR: &str = ".nonwordle";

/// Configuration for a game session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Compressed word list
    pub words_path: PathBuf,
    /// Directory holding one saved board per day
    pub store_dir: PathBuf,
    /// Play this day instead of today
    pub day: Option<DayNumber>,
    /// Random past day, nothing saved
    pub practice: bool,
    pub palette: Palette,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            words_path: PathBuf::from(DEFAULT_WORDS_PATH),
            store_dir: PathBuf::from(DEFAULT_STORE_DIR),
            day: None,
            practice: false,
            palette: Palette::default(),
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn new(words_path: impl Into<PathBuf>, store_dir: impl Into<PathBuf>) -> Self {
        Self {
            words_path: words_path.into(),
            store_dir: store_dir.into(),
            ..Self::default()
        }
    }

    /// Day to play: the explicit day, a random past day in practice mode,
    /// or today
    #[must_use]
    pub fn resolve_day(&self) -> DayNumber {
        if let Some(day) = self.day {
            return day;
        }
        let today = DayNumber::today();
        if self.practice && today.get() > 0 {
            DayNumber::new(rand::rng().random_range(0..today.get()))
        } else {
            today
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_day_wins() {
        let config = GameConfig {
            day: Some(DayNumber::new(123)),
            practice: true,
            ..GameConfig::default()
        };
        assert_eq!(config.resolve_day(), DayNumber::new(123));
    }

    #[test]
    fn practice_day_is_in_the_past() {
        let config = GameConfig {
            practice: true,
            ..GameConfig::default()
        };
        assert!(config.resolve_day() < DayNumber::today());
    }

    #[test]
    fn defaults() {
        let config = GameConfig::new("list.dat", "boards");
        assert_eq!(config.words_path, PathBuf::from("list.dat"));
        assert_eq!(config.store_dir, PathBuf::from("boards"));
        assert!(!config.practice);
        assert!(config.day.is_none());
    }
}
