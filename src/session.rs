//! Session start-up
//!
//! Fetches the word list, derives the day's answer, restores any saved
//! board and hands back a ready engine. Any failure here is fatal: there is
//! no game without an answer.

use crate::config::GameConfig;
use crate::daily::{DailyRng, DayNumber};
use crate::game::{BoardStore, FileBoardStore, GuessEngine, MemoryBoardStore};
use crate::wordlists::{CodecError, FetchError, decode, fetch};
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

/// Engine over whichever store the configuration picked
pub type DailyEngine = GuessEngine<Box<dyn BoardStore>>;

/// Start-up failed and no game can be played
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("failed to determine the answer: {0}")]
    Decode(#[from] CodecError),
}

/// Start the configured day's game
///
/// Practice games use an in-memory store so today's saved board is untouched.
///
/// # Errors
/// Returns `SessionError` if the word list cannot be read or yields no answer.
pub fn start(config: &GameConfig) -> Result<DailyEngine, SessionError> {
    let day = config.resolve_day();
    let bytes = fetch(&config.words_path)?;

    let store: Box<dyn BoardStore> = if config.practice {
        Box::new(MemoryBoardStore::default())
    } else {
        Box::new(FileBoardStore::new(&config.store_dir))
    };

    start_with(day, &bytes, store)
}

/// Start a game for `day` from an already fetched word list
///
/// # Errors
/// Returns `SessionError::Decode` if the list has no answer for `day`.
#[instrument(skip(bytes, store), fields(len = bytes.len()))]
pub fn start_with<S: BoardStore>(
    day: DayNumber,
    bytes: &[u8],
    store: S,
) -> Result<GuessEngine<S>, SessionError> {
    let index = DailyRng::new(day).answer_index();
    debug!(index, "answer index drawn");

    let words = decode(bytes, index)?;

    let saved = store.load(day).unwrap_or_else(|err| {
        warn!(%err, "could not read saved board, starting fresh");
        None
    });

    let mut engine = GuessEngine::new(words, day, store);
    if let Some(transcript) = saved {
        let rows = engine.replay(&transcript);
        info!(rows, "restored saved board");
    }

    Ok(engine)
}
