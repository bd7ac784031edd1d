//! Game state machine
//!
//! The board, per-letter keyboard knowledge, the letter-by-letter reveal of
//! a scored guess, and the engine tying them to the day's word list.

mod board;
mod engine;
mod keyboard;
pub mod messages;
mod reveal;
pub mod store;

pub use board::{Board, COLUMNS, ROWS};
pub use engine::{EngineError, GameState, GuessEngine, TileGrid};
pub use keyboard::KeyboardState;
pub use messages::Messages;
pub use reveal::{REVEAL_INTERVAL, Reveal, RevealMode, RevealStep, TileReveal};
pub use store::{BoardStore, FileBoardStore, MemoryBoardStore, StoreError};
