//! Terminal output formatting
//!
//! The share summary and colored rendering for the line-based modes.

pub mod display;
pub mod share;

pub use display::{print_audit_report, print_board, print_keyboard};
pub use share::{Palette, share_text};
