//! Core domain types for the puzzle
//!
//! This module contains the fundamental domain types: words, per-letter tile
//! states and the feedback produced by scoring a guess. Everything here is
//! pure and deterministic.

mod feedback;
mod tile;
mod word;

pub use feedback::Feedback;
pub use tile::TileState;
pub use word::{WORD_LENGTH, Word, WordError};
