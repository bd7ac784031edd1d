//! Saved boards
//!
//! Today's board transcript is stored under the day number and read back
//! once at start-up.

use crate::daily::DayNumber;
use rustc_hash::FxHashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A saved board could not be read or written
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access saved board {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Key-value storage of board transcripts by day
pub trait BoardStore {
    /// Transcript saved for `day`, or `None` if there is none
    ///
    /// # Errors
    /// Returns `StoreError` if the store exists but cannot be read.
    fn load(&self, day: DayNumber) -> Result<Option<String>, StoreError>;

    /// Replace the transcript saved for `day`
    ///
    /// # Errors
    /// Returns `StoreError` if the transcript cannot be written.
    fn save(&mut self, day: DayNumber, transcript: &str) -> Result<(), StoreError>;
}

impl<T: BoardStore + ?Sized> BoardStore for Box<T> {
    fn load(&self, day: DayNumber) -> Result<Option<String>, StoreError> {
        (**self).load(day)
    }

    fn save(&mut self, day: DayNumber, transcript: &str) -> Result<(), StoreError> {
        (**self).save(day, transcript)
    }
}

/// One text file per day in a directory
#[derive(Debug, Clone)]
pub struct FileBoardStore {
    dir: PathBuf,
}

impl FileBoardStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[must_use]
    pub fn path_for(&self, day: DayNumber) -> PathBuf {
        self.dir.join(format!("{day}.txt"))
    }
}

impl BoardStore for FileBoardStore {
    fn load(&self, day: DayNumber) -> Result<Option<String>, StoreError> {
        let path = self.path_for(day);
        match fs::read_to_string(&path) {
            Ok(transcript) => Ok(Some(transcript)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Io { path, source }),
        }
    }

    fn save(&mut self, day: DayNumber, transcript: &str) -> Result<(), StoreError> {
        let path = self.path_for(day);
        fs::create_dir_all(&self.dir)
            .and_then(|()| fs::write(&path, transcript))
            .map_err(|source| StoreError::Io { path, source })
    }
}

/// In-memory store; nothing outlives the process
#[derive(Debug, Clone, Default)]
pub struct MemoryBoardStore {
    boards: FxHashMap<DayNumber, String>,
}

impl MemoryBoardStore {
    #[must_use]
    pub fn get(&self, day: DayNumber) -> Option<&str> {
        self.boards.get(&day).map(String::as_str)
    }
}

impl BoardStore for MemoryBoardStore {
    fn load(&self, day: DayNumber) -> Result<Option<String>, StoreError> {
        Ok(self.boards.get(&day).cloned())
    }

    fn save(&mut self, day: DayNumber, transcript: &str) -> Result<(), StoreError> {
        self.boards.insert(day, transcript.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("nonwordle-store-{name}-{}", std::process::id()))
    }

    #[test]
    fn memory_store_round_trip() {
        let mut store = MemoryBoardStore::default();
        let day = DayNumber::new(20_742);

        assert!(store.load(day).unwrap().is_none());
        store.save(day, "CRANE\n").unwrap();
        assert_eq!(store.load(day).unwrap().as_deref(), Some("CRANE\n"));
        assert!(store.load(DayNumber::new(20_743)).unwrap().is_none());
    }

    #[test]
    fn file_store_round_trip() {
        let dir = scratch_dir("round-trip");
        let mut store = FileBoardStore::new(&dir);
        let day = DayNumber::new(20_742);

        assert!(store.load(day).unwrap().is_none());
        store.save(day, "CRANE\nSLATE\n").unwrap();
        assert_eq!(
            store.load(day).unwrap().as_deref(),
            Some("CRANE\nSLATE\n")
        );
        assert!(store.path_for(day).ends_with("20742.txt"));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn file_store_overwrites() {
        let dir = scratch_dir("overwrite");
        let mut store = FileBoardStore::new(&dir);
        let day = DayNumber::new(1);

        store.save(day, "CRANE\n").unwrap();
        store.save(day, "CRANE\nSLATE\n").unwrap();
        assert_eq!(
            store.load(day).unwrap().as_deref(),
            Some("CRANE\nSLATE\n")
        );

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn file_store_save_into_file_path_fails() {
        let dir = scratch_dir("blocked");
        fs::create_dir_all(dir.parent().unwrap()).unwrap();
        fs::write(&dir, "not a directory").unwrap();

        let mut store = FileBoardStore::new(&dir);
        assert!(store.save(DayNumber::new(1), "CRANE\n").is_err());

        fs::remove_file(&dir).unwrap();
    }
}
