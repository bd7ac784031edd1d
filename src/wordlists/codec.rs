//! Compact word-list format
//!
//! The list is stored as a stream of bytes sharing prefixes between
//! consecutive entries:
//!
//! - A byte above `0x0F` is a literal character appended to the context.
//! - A byte `0x00..=0x0F` is a control byte. Bit 3 tells what the context
//!   completes (0 = acceptable word, 1 = answer candidate) and bits 0-2 how
//!   many trailing characters to pop from the context afterwards.
//!
//! Answer candidates are made-up words, so they are counted separately and
//! only the one at the day's index is kept.

use crate::core::{WORD_LENGTH, Word, WordError};
use rustc_hash::FxHashSet;
use thiserror::Error;
use tracing::{debug, trace, warn};

/// Largest byte value that is a control byte
pub const CONTROL_MAX: u8 = 0x0F;

const KIND_BIT: u8 = 0b1000;
const POP_MASK: u8 = 0b0111;

/// What a control byte completes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EntryKind {
    /// A word players may guess
    Acceptable,
    /// A made-up word that may be picked as an answer
    Candidate,
}

/// Decoded control byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Control {
    pub kind: EntryKind,
    pub pops: usize,
}

impl Control {
    /// Interpret a byte, returning `None` for literal characters
    #[must_use]
    pub const fn parse(byte: u8) -> Option<Self> {
        if byte > CONTROL_MAX {
            return None;
        }
        let kind = if byte & KIND_BIT == 0 {
            EntryKind::Acceptable
        } else {
            EntryKind::Candidate
        };
        Some(Self {
            kind,
            pops: (byte & POP_MASK) as usize,
        })
    }

    /// Encode back to a byte
    ///
    /// # Panics
    /// Panics in debug mode if `pops` does not fit in three bits.
    #[must_use]
    pub const fn to_byte(self) -> u8 {
        debug_assert!(self.pops <= POP_MASK as usize);
        let kind = match self.kind {
            EntryKind::Acceptable => 0,
            EntryKind::Candidate => KIND_BIT,
        };
        kind | (self.pops as u8 & POP_MASK)
    }
}

/// Errors decoding a word list
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("no answer candidate at index {index} (list has {candidates})")]
    AnswerNotFound { index: u32, candidates: u32 },
    #[error("malformed entry ending at byte {offset}: {source}")]
    MalformedEntry {
        offset: usize,
        #[source]
        source: WordError,
    },
}

/// The decoded dictionary plus the day's answer
///
/// Immutable once built; the answer is always an acceptable guess.
#[derive(Debug, Clone)]
pub struct WordList {
    acceptable: FxHashSet<Word>,
    answer: Word,
    candidates: u32,
}

impl WordList {
    /// Check whether a guess is allowed
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.acceptable.contains(word)
    }

    #[inline]
    #[must_use]
    pub const fn answer(&self) -> &Word {
        &self.answer
    }

    /// Number of acceptable words (answer included)
    #[must_use]
    pub fn len(&self) -> usize {
        self.acceptable.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.acceptable.is_empty()
    }

    /// Number of answer candidates in the stream
    #[must_use]
    pub const fn candidate_count(&self) -> u32 {
        self.candidates
    }
}

/// Decode a word list, picking the candidate at `answer_index` as the answer
///
/// # Errors
/// - `AnswerNotFound` if the stream has no candidate at `answer_index`
/// - `MalformedEntry` if the answer is not 5 letters
///
/// Malformed acceptable words are skipped.
///
/// # Examples
/// ```
/// use nonwordle::core::Word;
/// use nonwordle::wordlists::codec::decode;
///
/// // CRANE (word), pop 2, CRATE (word), pop 2, CRAZE (candidate)
/// let list = decode(b"CRANE\x02TE\x02ZE\x08", 0).unwrap();
/// assert_eq!(list.answer().as_str(), "CRAZE");
/// assert!(list.contains(&Word::new("crate").unwrap()));
/// ```
pub fn decode(bytes: &[u8], answer_index: u32) -> Result<WordList, CodecError> {
    let mut acceptable = FxHashSet::default();
    let mut context: Vec<u8> = Vec::with_capacity(WORD_LENGTH);
    let mut candidates = 0u32;
    let mut answer = None;

    for (offset, &byte) in bytes.iter().enumerate() {
        let Some(control) = Control::parse(byte) else {
            // The context never outgrows one word
            if context.len() == WORD_LENGTH {
                context.pop();
            }
            context.push(byte);
            continue;
        };

        let entry = || {
            Word::from_bytes(&context).map_err(|source| CodecError::MalformedEntry { offset, source })
        };

        match control.kind {
            EntryKind::Acceptable => match entry() {
                Ok(word) => {
                    acceptable.insert(word);
                }
                Err(err) => warn!(%err, "skipping malformed word list entry"),
            },
            EntryKind::Candidate => {
                if candidates == answer_index {
                    let word = entry()?;
                    trace!(%word, index = answer_index, "answer candidate selected");
                    answer = Some(word);
                }
                candidates += 1;
            }
        }

        context.truncate(context.len().saturating_sub(control.pops));
    }

    let answer = answer.ok_or(CodecError::AnswerNotFound {
        index: answer_index,
        candidates,
    })?;
    acceptable.insert(answer);

    debug!(
        words = acceptable.len(),
        candidates, "word list decoded"
    );

    Ok(WordList {
        acceptable,
        answer,
        candidates,
    })
}

/// Encode word lists into the compact format
///
/// Entries are sorted alphabetically (acceptable before candidate for the
/// same spelling) and each is written once: the suffix not shared with the
/// previous entry, then a control byte for its kind and the pops needed to
/// reach the prefix shared with the next entry. The candidate order in the
/// stream, and so the answer index, is alphabetical.
#[must_use]
pub fn encode(acceptable: &[Word], candidates: &[Word]) -> Vec<u8> {
    let mut entries: Vec<(Word, EntryKind)> = acceptable
        .iter()
        .map(|&w| (w, EntryKind::Acceptable))
        .chain(candidates.iter().map(|&w| (w, EntryKind::Candidate)))
        .collect();
    entries.sort_unstable();
    entries.dedup();

    let mut out = Vec::with_capacity(entries.len() * 3);
    let mut previous: Option<&Word> = None;

    for (i, (word, kind)) in entries.iter().enumerate() {
        let shared = previous.map_or(0, |p| p.common_prefix_len(word));
        out.extend_from_slice(&word.letters()[shared..]);

        let keep = entries
            .get(i + 1)
            .map_or(WORD_LENGTH, |(next, _)| word.common_prefix_len(next));
        out.push(
            Control {
                kind: *kind,
                pops: WORD_LENGTH - keep,
            }
            .to_byte(),
        );

        previous = Some(word);
    }

    out
}
