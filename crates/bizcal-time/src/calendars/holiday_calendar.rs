//! Holiday calendar — weekends plus a loaded list of year-agnostic holidays.
//!
//! This is the calendar used for vacation planning.  Its holiday list comes
//! from an external source through [`HolidayCalendar::load_holidays`] and is
//! only ever replaced as a whole.
//!
//! Two notions of "working" coexist here:
//!
//! * a *working day* is any Monday–Friday, holiday or not;
//! * a *business day* is a working day with no holiday record at all
//!   (half-day holidays included).
//!
//! [`HolidayCalendar::count_business_days`] is the one place where half-day
//! holidays earn partial credit.

use std::future::Future;

use bizcal_core::clock::Clock;
use bizcal_core::settings::CalendarSettings;
use bizcal_core::Real;

use crate::calendar::{is_working_weekday, Calendar};
use crate::date::Date;
use crate::holiday::HolidayRecord;

/// Credit given to a half-day holiday falling on a working day.
const HALF_DAY_CREDIT: Real = 0.5;

/// A calendar whose holidays are loaded at run time from an external source.
#[derive(Debug, Clone, Default)]
pub struct HolidayCalendar {
    name: String,
    holidays: Vec<HolidayRecord>,
    settings: CalendarSettings,
}

impl HolidayCalendar {
    /// Create a calendar with the given name, no holidays and default settings.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            holidays: Vec::new(),
            settings: CalendarSettings::default(),
        }
    }

    /// Create a calendar with an initial holiday list.
    pub fn with_holidays(name: impl Into<String>, holidays: Vec<HolidayRecord>) -> Self {
        Self {
            holidays,
            ..Self::new(name)
        }
    }

    /// Replace the policy settings.
    pub fn with_settings(mut self, settings: CalendarSettings) -> Self {
        self.settings = settings;
        self
    }

    /// The policy settings in force.
    pub fn settings(&self) -> &CalendarSettings {
        &self.settings
    }

    /// The current holiday list, in load order.
    pub fn holidays(&self) -> &[HolidayRecord] {
        &self.holidays
    }

    /// Return the number of holiday records.
    pub fn holiday_count(&self) -> usize {
        self.holidays.len()
    }

    // ── Loading ──────────────────────────────────────────────────────────────

    /// Fetch a fresh holiday list and install it.
    ///
    /// On success the previous list is dropped and `true` is returned.  A
    /// failed fetch is logged and leaves the current list (possibly empty)
    /// untouched; the return value is then `false`.
    pub async fn load_holidays<F, Fut, E>(&mut self, fetch: F) -> bool
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<HolidayRecord>, E>>,
        E: std::fmt::Display,
    {
        match fetch().await {
            Ok(holidays) => {
                tracing::debug!(
                    calendar = %self.name,
                    count = holidays.len(),
                    "holiday list loaded"
                );
                self.holidays = holidays;
                true
            }
            Err(error) => {
                tracing::error!(
                    calendar = %self.name,
                    retained = self.holidays.len(),
                    error = %error,
                    "failed to load holidays, keeping previous list"
                );
                false
            }
        }
    }

    // ── Classification ───────────────────────────────────────────────────────

    /// Return the first holiday record falling on `date`'s month and day.
    pub fn is_holiday(&self, date: Date) -> Option<&HolidayRecord> {
        self.holidays.iter().find(|h| h.matches(date))
    }

    /// Return `true` if `date` matches a half-day holiday.
    pub fn is_half_day_holiday(&self, date: Date) -> bool {
        self.is_holiday(date).is_some_and(|h| h.is_half_day)
    }

    /// Return `true` if `date` is Monday–Friday.  Holidays are not considered.
    pub fn is_working_day(&self, date: Date) -> bool {
        is_working_weekday(date)
    }

    // ── Arithmetic ───────────────────────────────────────────────────────────

    /// Business days in `[start, end]`, with half-day holidays counting 0.5.
    ///
    /// Weekends and full holidays contribute nothing.  Returns 0 when
    /// `end < start`.
    pub fn count_business_days(&self, start: Date, end: Date) -> Real {
        let mut business_days: Real = 0.0;
        let mut half_days: Real = 0.0;
        for day in start.iter_through(end) {
            if !self.is_working_day(day) {
                continue;
            }
            match self.is_holiday(day) {
                None => business_days += 1.0,
                Some(h) if h.is_half_day => half_days += HALF_DAY_CREDIT,
                Some(_) => {}
            }
        }
        business_days + half_days
    }

    /// The date on which a vacation of `requested_days` business days ends.
    ///
    /// `start` counts as day one unless it is a holiday, in which case the
    /// count starts at zero and the first business day after it becomes day
    /// one.  Half days are not applied here.  If `requested_days` does not
    /// exceed that starting count, `start` is returned unchanged.
    ///
    /// `None` only if the walk runs off the last representable date.
    pub fn compute_vacation_end_date(&self, start: Date, requested_days: u32) -> Option<Date> {
        let mut end = start;
        let mut counted: u32 = if self.is_holiday(start).is_some() { 0 } else { 1 };
        while counted < requested_days {
            end = end.succ()?;
            if self.is_business_day(end) {
                counted += 1;
            }
        }
        Some(end)
    }

    /// The first weekday after `date` that is not a holiday.
    ///
    /// Always moves forward at least one day; `None` only past the last
    /// representable date.
    pub fn next_working_day(&self, date: Date) -> Option<Date> {
        self.next_business_day(date)
    }

    // ── Eligibility ──────────────────────────────────────────────────────────

    /// Return `true` if at least `min_tenure_days` whole days have passed
    /// since `join_date`, according to `clock`.
    pub fn meets_tenure(&self, join_date: Date, clock: &dyn Clock) -> bool {
        self.settings
            .meets_tenure(crate::vacation::days_elapsed_since(join_date, clock))
    }
}

impl Calendar for HolidayCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_business_day(&self, date: Date) -> bool {
        is_working_weekday(date) && self.is_holiday(date).is_none()
    }
}
