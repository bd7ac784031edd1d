//! Word list audit
//!
//! Decodes the list independently for every day in a range, exactly as a
//! client would on that day, and reports days that fail to resolve.

use crate::core::Word;
use crate::daily::{DailyRng, DayNumber};
use crate::wordlists::{CodecError, decode};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::time::{Duration, Instant};
use tracing::warn;

/// Outcome of auditing a range of days
#[derive(Debug, Clone)]
pub struct AuditReport {
    pub first_day: DayNumber,
    pub days: usize,
    pub resolved: usize,
    /// Days without an answer, with the index they drew
    pub failures: Vec<(DayNumber, u32)>,
    pub candidates: u32,
    pub distinct_answers: usize,
    pub duration: Duration,
}

/// Audit `days` consecutive days starting at `first_day`
///
/// A malformed answer counts as a failure for the day that draws it. The
/// range stops at the last representable day number.
#[must_use]
pub fn run_audit(bytes: &[u8], first_day: DayNumber, days: u32, show_progress: bool) -> AuditReport {
    let start = Instant::now();

    let remaining = i64::MAX.saturating_sub(first_day.get()).saturating_add(1);
    let days = u32::try_from(remaining).map_or(days, |remaining| {
        if remaining < days {
            warn!(requested = days, remaining, "audit range truncated at the last day");
        }
        days.min(remaining)
    });

    let pb = if show_progress {
        ProgressBar::new(u64::from(days))
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let results: Vec<(DayNumber, u32, Result<Word, CodecError>)> = (0..days)
        .into_par_iter()
        .map(|offset| {
            let day = DayNumber::new(first_day.get() + i64::from(offset));
            let index = DailyRng::new(day).answer_index();
            let answer = decode(bytes, index).map(|list| *list.answer());
            pb.inc(1);
            (day, index, answer)
        })
        .collect();

    pb.finish_and_clear();

    let candidates = decode(bytes, 0).map_or_else(
        |err| match err {
            CodecError::AnswerNotFound { candidates, .. } => candidates,
            CodecError::MalformedEntry { .. } => 0,
        },
        |list| list.candidate_count(),
    );

    let answers: FxHashSet<Word> = results
        .iter()
        .filter_map(|(_, _, answer)| answer.as_ref().ok().copied())
        .collect();

    let failures: Vec<(DayNumber, u32)> = results
        .iter()
        .filter(|(_, _, answer)| answer.is_err())
        .map(|&(day, index, _)| (day, index))
        .collect();

    AuditReport {
        first_day,
        days: results.len(),
        resolved: results.len() - failures.len(),
        failures,
        candidates,
        distinct_answers: answers.len(),
        duration: start.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::encode;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn small_list_fails_most_days() {
        let bytes = encode(
            &words_from_slice(&["CRANE"]),
            &words_from_slice(&["BLORP", "ZUPLO"]),
        );
        let report = run_audit(&bytes, DayNumber::new(20_000), 30, false);

        assert_eq!(report.days, 30);
        assert_eq!(report.candidates, 2);
        assert_eq!(report.resolved + report.failures.len(), 30);
        assert!(report.failures.iter().all(|&(_, index)| index >= 2));
        assert!(report.distinct_answers <= 2);
    }

    #[test]
    fn range_stops_at_last_day_number() {
        let bytes = encode(&words_from_slice(&["CRANE"]), &words_from_slice(&["BLORP"]));
        let report = run_audit(&bytes, DayNumber::new(i64::MAX - 2), 10, false);

        assert_eq!(report.days, 3);
        assert_eq!(report.resolved + report.failures.len(), 3);

        let whole = run_audit(&bytes, DayNumber::new(i64::MAX), 1, false);
        assert_eq!(whole.days, 1);
    }

    #[test]
    fn failures_are_in_day_order() {
        let bytes = encode(&words_from_slice(&["CRANE"]), &[]);
        let report = run_audit(&bytes, DayNumber::new(100), 10, false);

        assert_eq!(report.resolved, 0);
        let days: Vec<i64> = report.failures.iter().map(|(d, _)| d.get()).collect();
        assert_eq!(days, (100..110).collect::<Vec<_>>());
    }
}
