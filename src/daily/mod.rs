//! Daily seeding
//!
//! Turns the wall clock into a day number and the day number into a
//! reproducible random stream.

mod date;
mod random;

pub use date::{DayNumber, MILLIS_PER_DAY};
pub use random::{ANSWER_INDEX_RANGE, ANSWER_INDEX_SHIFT, DailyRng, MULTIPLIER, SEQUENCE};
