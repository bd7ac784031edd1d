//! Word list compression
//!
//! Builds the compact word-list file from two plain lists: real words that
//! may be guessed and made-up words that may become answers.

use crate::daily::ANSWER_INDEX_RANGE;
use crate::wordlists::encode;
use crate::wordlists::loader::load_from_file;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{info, warn};

/// Result of compressing word lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressSummary {
    pub acceptable: usize,
    pub candidates: usize,
    pub bytes: usize,
}

impl CompressSummary {
    /// Whether every possible daily index has a candidate
    #[must_use]
    pub fn covers_every_day(&self) -> bool {
        self.candidates >= ANSWER_INDEX_RANGE as usize
    }
}

/// Compress the two lists into `output`
///
/// # Errors
///
/// Returns an I/O error if either list cannot be read or the output cannot
/// be written.
pub fn compress_files(
    acceptable_path: &Path,
    candidates_path: &Path,
    output: &Path,
) -> io::Result<CompressSummary> {
    let acceptable = load_from_file(acceptable_path)?;
    let candidates = load_from_file(candidates_path)?;

    let bytes = encode(&acceptable, &candidates);
    fs::write(output, &bytes)?;

    let summary = CompressSummary {
        acceptable: acceptable.len(),
        candidates: candidates.len(),
        bytes: bytes.len(),
    };

    if !summary.covers_every_day() {
        warn!(
            candidates = summary.candidates,
            needed = ANSWER_INDEX_RANGE,
            "too few answer candidates; some days will have no answer"
        );
    }
    info!(?summary, output = %output.display(), "word list written");

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::decode;

    #[test]
    fn compress_and_decode() {
        let dir = std::env::temp_dir().join(format!("nonwordle-compress-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let words = dir.join("words.txt");
        let nonwords = dir.join("nonwords.txt");
        let output = dir.join("words.dat");
        fs::write(&words, "crane\ncrate\nslate\n").unwrap();
        fs::write(&nonwords, "blorp\nzuplo\n").unwrap();

        let summary = compress_files(&words, &nonwords, &output).unwrap();
        assert_eq!(summary.acceptable, 3);
        assert_eq!(summary.candidates, 2);
        assert!(!summary.covers_every_day());

        let bytes = fs::read(&output).unwrap();
        assert_eq!(bytes.len(), summary.bytes);
        assert_eq!(decode(&bytes, 1).unwrap().answer().as_str(), "ZUPLO");

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_input_is_error() {
        let missing = Path::new("no/such/list.txt");
        assert!(compress_files(missing, missing, Path::new("unused.dat")).is_err());
    }
}
