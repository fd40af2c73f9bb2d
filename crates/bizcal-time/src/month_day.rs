//! `MonthDay` — a year-agnostic `MM-DD` key.

use std::str::FromStr;

use bizcal_core::errors::{Error, Result};
use chrono::format::ParseErrorKind;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::date::Date;

/// A leap year, so that `02-29` validates.
const REFERENCE_YEAR: i32 = 2000;

/// A month and day with no year, written `MM-DD`.
///
/// Two dates share a key when they fall on the same month and day, whatever
/// their year.  `02-29` is a valid key; it simply matches nothing in common
/// years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthDay {
    month: u8,
    day: u8,
}

impl MonthDay {
    /// Build a key from a month number (1–12) and a day.
    ///
    /// # Errors
    /// `Error::Date` if the day cannot occur in that month in any year.
    pub fn new(month: u8, day: u8) -> Result<Self> {
        NaiveDate::from_ymd_opt(REFERENCE_YEAR, month as u32, day as u32)
            .map(Self::from_naive)
            .ok_or_else(|| Error::Date(format!("{month:02}-{day:02} never occurs")))
    }

    /// The key of an existing date.
    pub fn from_date(date: Date) -> Self {
        Self::from_naive(date.as_naive())
    }

    fn from_naive(date: NaiveDate) -> Self {
        Self {
            month: date.month() as u8,
            day: date.day() as u8,
        }
    }

    /// Return the month number (1–12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Return the day of the month.
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Return `true` if `date` falls on this month and day.
    pub fn matches(&self, date: Date) -> bool {
        date.month() == self.month && date.day_of_month() == self.day
    }
}

impl FromStr for MonthDay {
    type Err = Error;

    /// Parse an exact, zero-padded `MM-DD`.
    fn from_str(s: &str) -> Result<Self> {
        let dated = format!("{REFERENCE_YEAR}-{s}");
        match NaiveDate::parse_from_str(&dated, "%Y-%m-%d") {
            Ok(d) if d.format("%m-%d").to_string() == s => Ok(Self::from_naive(d)),
            Err(e)
                if matches!(
                    e.kind(),
                    ParseErrorKind::OutOfRange | ParseErrorKind::Impossible
                ) =>
            {
                Err(Error::Date(format!("{s:?} never occurs")))
            }
            _ => Err(Error::Parse(format!("expected MM-DD, got {s:?}"))),
        }
    }
}

impl TryFrom<String> for MonthDay {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<MonthDay> for String {
    fn from(key: MonthDay) -> String {
        key.to_string()
    }
}

impl std::fmt::Display for MonthDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_display() {
        let key: MonthDay = "12-25".parse().unwrap();
        assert_eq!(key.month(), 12);
        assert_eq!(key.day(), 25);
        assert_eq!(key.to_string(), "12-25");
        assert_eq!(MonthDay::new(1, 5).unwrap().to_string(), "01-05");
    }

    #[test]
    fn rejects_impossible_days() {
        assert!("02-29".parse::<MonthDay>().is_ok());
        assert!(matches!("02-30".parse::<MonthDay>(), Err(Error::Date(_))));
        assert!(matches!("13-01".parse::<MonthDay>(), Err(Error::Date(_))));
        assert!(matches!("04-31".parse::<MonthDay>(), Err(Error::Date(_))));
        assert!(matches!("12/25".parse::<MonthDay>(), Err(Error::Parse(_))));
        assert!(matches!("1-5".parse::<MonthDay>(), Err(Error::Parse(_))));
        assert!(matches!("12-25-2024".parse::<MonthDay>(), Err(Error::Parse(_))));
        assert!(matches!(MonthDay::new(0, 1), Err(Error::Date(_))));
    }

    #[test]
    fn year_agnostic_match() {
        let key = MonthDay::new(12, 25).unwrap();
        for year in [1850, 1990, 2024, 2025, 2150, 2450] {
            assert!(key.matches(Date::from_ymd(year, 12, 25).unwrap()));
        }
        assert!(!key.matches(Date::from_ymd(2024, 12, 26).unwrap()));
        assert_eq!(Date::from_ymd(2031, 12, 25).unwrap().month_day(), key);
    }

    #[test]
    fn serde_as_string() {
        let key = MonthDay::new(1, 1).unwrap();
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"01-01\"");
        let back: MonthDay = serde_json::from_str("\"07-04\"").unwrap();
        assert_eq!(back, MonthDay::new(7, 4).unwrap());
        assert!(serde_json::from_str::<MonthDay>("\"07-32\"").is_err());
    }
}
