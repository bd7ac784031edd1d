//! Word lists
//!
//! Decoding and encoding of the compressed list, and loading it from disk.

pub mod codec;
pub mod loader;

pub use codec::{CodecError, WordList, decode, encode};
pub use loader::{FetchError, fetch};

/// Default location of the compressed word list
pub const DEFAULT_WORDS_PATH: &str = "words.dat";
