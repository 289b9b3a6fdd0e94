//! Clock abstraction for the pending/immediate decision
//!
//! The "today" reference is injected rather than read from ambient global
//! state, keeping the engine a deterministic pure function of its inputs.
//! Production code uses [`SystemClock`]; tests and reproducible CLI runs
//! use [`FixedClock`].

use chrono::{NaiveDate, Utc};

/// Source of the reference calendar day
///
/// Only the calendar date matters; time-of-day is ignored everywhere in
/// the engine.
pub trait Clock {
    /// The current calendar day
    fn today(&self) -> NaiveDate;
}

/// Wall-clock UTC calendar day
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// A fixed reference day, for deterministic runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
