//! Holiday records as supplied by an external holiday source.

use bizcal_core::errors::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::date::Date;
use crate::month_day::MonthDay;

/// One holiday: a year-agnostic date key and whether only half the day is off.
///
/// On the wire this is `{"dateKey": "12-25", "isHalfDay": false}`; a missing
/// `isHalfDay` means a full holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayRecord {
    /// Month and day the holiday falls on, every year.
    pub date_key: MonthDay,
    /// `true` for a half-day holiday.
    #[serde(default)]
    pub is_half_day: bool,
}

impl HolidayRecord {
    /// A full-day holiday.
    pub fn full(date_key: MonthDay) -> Self {
        Self {
            date_key,
            is_half_day: false,
        }
    }

    /// A half-day holiday.
    pub fn half_day(date_key: MonthDay) -> Self {
        Self {
            date_key,
            is_half_day: true,
        }
    }

    /// Return `true` if this holiday falls on `date` (in any year).
    pub fn matches(&self, date: Date) -> bool {
        self.date_key.matches(date)
    }

    /// Decode a JSON array of holiday records.
    ///
    /// # Errors
    /// `Error::Parse` if the payload is not an array of valid records.
    pub fn list_from_json(payload: &str) -> Result<Vec<HolidayRecord>> {
        serde_json::from_str(payload).map_err(|e| Error::Parse(format!("holiday payload: {e}")))
    }
}
