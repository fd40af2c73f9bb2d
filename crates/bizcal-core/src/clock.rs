//! Reference clock for "today".
//!
//! Every rule that depends on the current date (vacation expiry, tenure,
//! month-advance checks) takes a [`Clock`] instead of reading the system time
//! directly.  Production code passes [`SystemClock`]; tests pin the date with
//! [`FixedClock`].

use chrono::{Local, NaiveDate};

/// A source of the current calendar date.
pub trait Clock: std::fmt::Debug + Send + Sync {
    /// Return today's date, already normalised to midnight.
    fn today(&self) -> NaiveDate;
}

/// Reads the local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock frozen at a given date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(NaiveDate);

impl FixedClock {
    /// Create a clock that always reports `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self(today)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
