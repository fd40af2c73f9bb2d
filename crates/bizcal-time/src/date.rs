//! `Date` type.
//!
//! A calendar date with no time-of-day and no zone, backed by
//! [`chrono::NaiveDate`] and covering the same range.
//!
//! Dates parse from the three layouts the library also writes:
//! `YYYY-MM-DD`, `YYYY/MM/DD` and `DD/MM/YYYY`.

use std::str::FromStr;

use bizcal_core::errors::{Error, Result};
use chrono::format::ParseErrorKind;
use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::format::DateFormat;
use crate::month_day::MonthDay;

/// Layouts accepted by [`Date::parse`], in the order they are tried.
const PARSE_LAYOUTS: [DateFormat; 3] = [
    DateFormat::CalendarWidget,
    DateFormat::Canonical,
    DateFormat::Display,
];

/// A calendar date.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(NaiveDate);

impl Date {
    /// The first representable date.
    pub const MIN: Date = Date(NaiveDate::MIN);
    /// The last representable date.
    pub const MAX: Date = Date(NaiveDate::MAX);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        NaiveDate::from_ymd_opt(year, month as u32, day as u32)
            .map(Date)
            .ok_or_else(|| Error::Date(format!("day {day} out of range for {year}-{month:02}")))
    }

    /// Parse any of the supported layouts.
    ///
    /// The text must match a layout exactly, zero padding included.
    ///
    /// # Errors
    /// `Error::Parse` if the text matches no layout, `Error::Date` if it has
    /// the right shape but the components do not form a valid date.
    pub fn parse(s: &str) -> Result<Self> {
        let mut out_of_range = false;
        for layout in PARSE_LAYOUTS {
            let pattern = layout.pattern();
            match NaiveDate::parse_from_str(s, pattern) {
                Ok(date) if date.format(pattern).to_string() == s => return Ok(Date(date)),
                Ok(_) => {}
                Err(e) => {
                    out_of_range |= matches!(
                        e.kind(),
                        ParseErrorKind::OutOfRange | ParseErrorKind::Impossible
                    );
                }
            }
        }
        if out_of_range {
            Err(Error::Date(format!("{s:?} is not a valid date")))
        } else {
            Err(Error::Parse(format!("unrecognised date {s:?}")))
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the year.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        self.0.month() as u8
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        self.0.day() as u8
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Return `true` on Saturday and Sunday.
    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Return the year-agnostic month/day key of this date.
    pub fn month_day(&self) -> MonthDay {
        MonthDay::from_date(*self)
    }

    /// Borrow the underlying chrono value.
    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Move by `n` days.  Returns an error past either end of the range.
    pub fn add_days(self, n: i64) -> Result<Self> {
        let shifted = if n >= 0 {
            self.0.checked_add_days(Days::new(n.unsigned_abs()))
        } else {
            self.0.checked_sub_days(Days::new(n.unsigned_abs()))
        };
        shifted
            .map(Date)
            .ok_or_else(|| Error::Date(format!("{self} + {n} days overflows")))
    }

    /// The following day, or `None` on the last representable date.
    pub fn succ(self) -> Option<Self> {
        self.0.succ_opt().map(Date)
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Iterate every date from `self` through `end`, both inclusive.
    ///
    /// Yields nothing when `end < self`.
    pub fn iter_through(self, end: Date) -> impl Iterator<Item = Date> {
        std::iter::successors(Some(self), |d| d.succ()).take_while(move |d| *d <= end)
    }
}

// ── Conversions ───────────────────────────────────────────────────────────────

impl FromStr for Date {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> NaiveDate {
        date.0
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({})", self.0.format("%Y-%m-%d"))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
