//! Daily random stream (PCG32, XSH-RR output)
//!
//! The answer for a day must be identical on every client, so the generator,
//! its constants and its seeding procedure are fixed exactly.

use super::DayNumber;
use rand::RngCore;
use rand::rand_core::impls;

/// LCG multiplier
pub const MULTIPLIER: u64 = 0x5851_f42d_4c95_7f2d;

/// Fixed stream selector; the increment is derived from it
pub const SEQUENCE: u64 = 0xba96_26c4_8774_83b3;

/// Right shift applied to a draw to get the answer index (0..8192)
pub const ANSWER_INDEX_SHIFT: u32 = 19;

/// Number of distinct answer indices; a list needs this many candidates
pub const ANSWER_INDEX_RANGE: u32 = 1 << (u32::BITS - ANSWER_INDEX_SHIFT);

const INCREMENT: u64 = (SEQUENCE << 1) | 1;

/// Deterministic generator seeded by a day number
///
/// Use it through [`RngCore`]; `next_u32` is the raw PCG32 output.
///
/// # Examples
/// ```
/// use nonwordle::daily::{DailyRng, DayNumber};
/// use rand::RngCore;
///
/// let mut a = DailyRng::new(DayNumber::new(20_742));
/// let mut b = DailyRng::new(DayNumber::new(20_742));
/// assert_eq!(a.next_u32(), b.next_u32());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyRng {
    state: u64,
    increment: u64,
}

impl DailyRng {
    /// Seed for a day: start from zero, draw once, then add the day number
    #[must_use]
    pub fn new(day: DayNumber) -> Self {
        let mut rng = Self {
            state: 0,
            increment: INCREMENT,
        };
        rng.step();
        // Two's complement keeps pre-epoch days well defined mod 2^64
        rng.state = rng.state.wrapping_add(day.get() as u64);
        rng
    }

    /// Draw the index of today's answer among the answer candidates
    pub fn answer_index(&mut self) -> u32 {
        self.step() >> ANSWER_INDEX_SHIFT
    }

    fn step(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(self.increment | 1);

        let xorshifted = (((self.state >> 18) ^ self.state) >> 27) as u32;
        let rot = (self.state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngCore for DailyRng {
    fn next_u32(&mut self) -> u32 {
        self.step()
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        impls::fill_bytes_via_next(self, dst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draws(day: i64, n: usize) -> Vec<u32> {
        let mut rng = DailyRng::new(DayNumber::new(day));
        (0..n).map(|_| rng.next_u32()).collect()
    }

    #[test]
    fn known_sequence_day_zero() {
        assert_eq!(draws(0, 3), [3_755_596_457, 3_377_273_884, 2_416_018_283]);
    }

    #[test]
    fn known_sequence_other_days() {
        assert_eq!(draws(1, 3), [482_423_693, 3_364_114_531, 1_150_622_111]);
        assert_eq!(draws(20_742, 1), [3_499_837_988]);
    }

    #[test]
    fn answer_index_uses_top_bits() {
        assert_eq!(DailyRng::new(DayNumber::new(0)).answer_index(), 7163);
        assert_eq!(DailyRng::new(DayNumber::new(20_377)).answer_index(), 903);
        assert_eq!(DailyRng::new(DayNumber::new(20_742)).answer_index(), 6675);
    }

    #[test]
    fn answer_index_range_is_8192() {
        assert_eq!(ANSWER_INDEX_RANGE, 8192);
    }

    #[test]
    fn answer_index_in_range() {
        for day in 19_000..19_500 {
            assert!(DailyRng::new(DayNumber::new(day)).answer_index() < ANSWER_INDEX_RANGE);
        }
    }

    #[test]
    fn independent_instances_agree() {
        assert_eq!(draws(20_000, 50), draws(20_000, 50));
        assert_ne!(draws(20_000, 5), draws(20_001, 5));
    }

    #[test]
    fn next_u64_composes_two_draws() {
        let low_high = draws(7, 2);
        let mut rng = DailyRng::new(DayNumber::new(7));
        let expected = u64::from(low_high[0]) | (u64::from(low_high[1]) << 32);
        assert_eq!(rng.next_u64(), expected);
    }

    #[test]
    fn negative_day_is_deterministic() {
        assert_eq!(draws(-5, 4), draws(-5, 4));
    }
}
