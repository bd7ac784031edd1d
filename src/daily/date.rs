//! Day numbers
//!
//! A day number counts whole UTC days since the Unix epoch. It seeds the
//! daily generator and keys the saved board, so both always agree on "today".

use chrono::{Days, NaiveDate, Utc};
use std::fmt;

/// Milliseconds in one day
pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// Whole days since 1970-01-01 (UTC)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayNumber(i64);

impl DayNumber {
    #[must_use]
    pub const fn new(days: i64) -> Self {
        Self(days)
    }

    /// Day containing the given Unix time in milliseconds
    ///
    /// Rounds towards negative infinity, so instants before the epoch land on
    /// negative days.
    ///
    /// # Examples
    /// ```
    /// use nonwordle::daily::DayNumber;
    ///
    /// assert_eq!(DayNumber::from_unix_millis(86_399_999).get(), 0);
    /// assert_eq!(DayNumber::from_unix_millis(86_400_000).get(), 1);
    /// assert_eq!(DayNumber::from_unix_millis(-1).get(), -1);
    /// ```
    #[must_use]
    pub const fn from_unix_millis(millis: i64) -> Self {
        Self(millis.div_euclid(MILLIS_PER_DAY))
    }

    /// Current day according to the system clock
    ///
    /// Read once per session; the day does not roll over while playing.
    #[must_use]
    pub fn today() -> Self {
        Self::from_unix_millis(Utc::now().timestamp_millis())
    }

    #[inline]
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Calendar date of this day, if representable
    #[must_use]
    pub fn date(self) -> Option<NaiveDate> {
        let epoch = NaiveDate::from_ymd_opt(1970, 1, 1)?;
        if self.0 >= 0 {
            epoch.checked_add_days(Days::new(self.0.unsigned_abs()))
        } else {
            epoch.checked_sub_days(Days::new(self.0.unsigned_abs()))
        }
    }
}

impl fmt::Display for DayNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for DayNumber {
    fn from(days: i64) -> Self {
        Self(days)
    }
}
