//! Library settings.
//!
//! [`CalendarSettings`] carries the tunable policy values used by the
//! business-day rules.  It is an ordinary value owned by whoever builds the
//! calendar, so different calendars may run with different policies.

use serde::{Deserialize, Serialize};

use crate::ensure;
use crate::errors::{Error, Result};

/// Default tenure, in whole calendar days, before an employee is eligible.
pub const DEFAULT_MIN_TENURE_DAYS: i64 = 150;

/// Policy knobs for a business calendar.
///
/// Deserialisation goes through [`CalendarSettings::new`], so a config file
/// cannot smuggle in a negative threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawSettings")]
pub struct CalendarSettings {
    /// Minimum number of elapsed days since joining for the tenure gate.
    pub min_tenure_days: i64,
}

/// Unchecked wire form of [`CalendarSettings`].
#[derive(Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawSettings {
    min_tenure_days: i64,
}

impl Default for RawSettings {
    fn default() -> Self {
        Self {
            min_tenure_days: DEFAULT_MIN_TENURE_DAYS,
        }
    }
}

impl TryFrom<RawSettings> for CalendarSettings {
    type Error = Error;

    fn try_from(raw: RawSettings) -> Result<Self> {
        Self::new(raw.min_tenure_days)
    }
}

impl Default for CalendarSettings {
    fn default() -> Self {
        Self {
            min_tenure_days: DEFAULT_MIN_TENURE_DAYS,
        }
    }
}

impl CalendarSettings {
    /// Create settings with a custom tenure threshold.
    ///
    /// # Errors
    /// Returns `Error::Precondition` if `min_tenure_days` is negative.
    pub fn new(min_tenure_days: i64) -> Result<Self> {
        ensure!(
            min_tenure_days >= 0,
            "min_tenure_days must be non-negative, got {min_tenure_days}"
        );
        Ok(Self { min_tenure_days })
    }

    /// Return `true` if `elapsed_days` satisfies the tenure threshold.
    pub fn meets_tenure(&self, elapsed_days: i64) -> bool {
        elapsed_days >= self.min_tenure_days
    }
}
