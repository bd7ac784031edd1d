//! Nonwordle
//!
//! A daily guessing game where every guess must be a real five-letter word
//! but the answer is a made-up one. Every player derives the same answer for
//! a day from the date alone: the day number seeds a PCG32 generator whose
//! first draw indexes into a compressed word list.
//!
//! # Quick Start
//!
//! ```rust
//! use nonwordle::core::{Feedback, Word};
//!
//! let guess = Word::new("llama").unwrap();
//! let answer = Word::new("alloy").unwrap();
//!
//! let feedback = Feedback::calculate(&guess, &answer);
//! assert_eq!(feedback.to_codes(), "YGY--");
//! ```

// Core domain types
pub mod core;

// Day numbers and the daily generator
pub mod daily;

// Word list codec and loading
pub mod wordlists;

// Guess engine, board and persistence
pub mod game;

// Session start-up
pub mod session;

// Runtime configuration
pub mod config;

// Tracing setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
