//! Word list loading utilities
//!
//! Fetches the compressed list from disk and reads plain one-word-per-line
//! lists used to build it.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// The word-list byte stream could not be obtained
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to read word list {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("word list {} is empty", .0.display())]
    Empty(PathBuf),
}

/// Read the compressed word list
///
/// # Errors
///
/// Returns `FetchError` if the file cannot be read or holds no bytes.
pub fn fetch<P: AsRef<Path>>(path: P) -> Result<Vec<u8>, FetchError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| FetchError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if bytes.is_empty() {
        return Err(FetchError::Empty(path.to_path_buf()));
    }

    debug!(path = %path.display(), bytes = bytes.len(), "word list fetched");
    Ok(bytes)
}

/// Load words from a plain text file, one per line
///
/// Returns a vector of valid Word instances, skipping blank or invalid lines.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use nonwordle::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words_acceptable.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(&content))
}

/// Parse one word per line, skipping blank or invalid lines
#[must_use]
pub fn words_from_lines(content: &str) -> Vec<Word> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| Word::new(line).ok())
        .collect()
}

/// Convert a string slice to a Word vector
///
/// # Examples
/// ```
/// use nonwordle::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["crane", "toolong", "slate"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["crane", "slate", "irate"]);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].as_str(), "CRANE");
        assert_eq!(words[2].as_str(), "IRATE");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["crane", "toolong", "abc", "slate"]);

        assert_eq!(words.len(), 2);
        assert_eq!(words[1].as_str(), "SLATE");
    }

    #[test]
    fn words_from_lines_trims_and_skips_blanks() {
        let words = words_from_lines("crane\n\n  slate  \nno\n");
        assert_eq!(words, words_from_slice(&["CRANE", "SLATE"]));
    }

    #[test]
    fn fetch_missing_file_is_error() {
        let err = fetch("definitely/not/here/words.dat").unwrap_err();
        assert!(matches!(err, FetchError::Io { .. }));
        assert!(err.to_string().contains("words.dat"));
    }

    #[test]
    fn fetch_empty_file_is_error() {
        let dir = std::env::temp_dir().join(format!("nonwordle-fetch-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("empty.dat");
        fs::write(&path, b"").unwrap();

        assert!(matches!(fetch(&path), Err(FetchError::Empty(_))));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn fetch_reads_bytes() {
        let dir = std::env::temp_dir().join(format!("nonwordle-read-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("words.dat");
        fs::write(&path, b"CRANE\x08").unwrap();

        assert_eq!(fetch(&path).unwrap(), b"CRANE\x08");

        fs::remove_dir_all(&dir).unwrap();
    }
}
