//! Simulation time model.
//!
//! One step is one simulated month.  Time is a monotonically increasing
//! `Month` counter held in a `MonthClock`; integer months keep all sentence
//! arithmetic exact.

use std::fmt;

// ── Month ─────────────────────────────────────────────────────────────────────

/// An absolute month counter.  `Month::ZERO` is the state right after
/// construction, before the first step.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Month(pub u64);

impl Month {
    pub const ZERO: Month = Month(0);

    /// Return the month `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Month {
        Month(self.0 + n)
    }
}

impl std::ops::Add<u64> for Month {
    type Output = Month;
    #[inline]
    fn add(self, rhs: u64) -> Month {
        Month(self.0 + rhs)
    }
}

impl std::ops::Sub for Month {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Month) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "M{}", self.0)
    }
}

// ── Sentence ──────────────────────────────────────────────────────────────────

/// A prison sentence in whole months.
///
/// One value is drawn per run and shared by the entire population; see
/// `cc-behavior::SentenceSampler`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sentence(pub u32);

impl Sentence {
    #[inline]
    pub fn months(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} months", self.0)
    }
}

// ── MonthClock ────────────────────────────────────────────────────────────────

/// Counts months elapsed since construction.
#[derive(Clone, Debug, Default)]
pub struct MonthClock {
    current: Month,
}

impl MonthClock {
    pub fn new() -> Self {
        Self { current: Month::ZERO }
    }

    #[inline]
    pub fn current(&self) -> Month {
        self.current
    }

    /// Advance the clock by one month.
    #[inline]
    pub fn advance(&mut self) {
        self.current = self.current + 1;
    }

    /// Break elapsed months into (years, months).
    pub fn elapsed_years_months(&self) -> (u64, u64) {
        (self.current.0 / 12, self.current.0 % 12)
    }
}

impl fmt::Display for MonthClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (y, m) = self.elapsed_years_months();
        write!(f, "{} ({}y {:02}m)", self.current, y, m)
    }
}
