//! Clock-dependent vacation and eligibility rules.
//!
//! Each rule reads "today" from an injected [`Clock`].

use bizcal_core::clock::Clock;
use bizcal_core::settings::CalendarSettings;
use chrono::Datelike;

use crate::date::Date;

/// Whole calendar days from `since` to today.  Negative if `since` is in the
/// future.
pub fn days_elapsed_since(since: Date, clock: &dyn Clock) -> i64 {
    since.days_between(clock.today().into())
}

/// Return `true` once today is on or after `end_date`.
pub fn has_vacation_expired(end_date: Date, clock: &dyn Clock) -> bool {
    clock.today() >= end_date.as_naive()
}

/// Return `true` if the default tenure threshold (150 days) has elapsed since
/// `join_date`.
///
/// Use [`HolidayCalendar::meets_tenure`](crate::HolidayCalendar::meets_tenure)
/// to apply a calendar's own settings.
pub fn days_since_join_date(join_date: Date, clock: &dyn Clock) -> bool {
    CalendarSettings::default().meets_tenure(days_elapsed_since(join_date, clock))
}

/// Return `true` if the current month number is greater than that of
/// `last_update`.
///
/// Years are ignored: an update made in December never counts as advanced
/// when checked in January.
pub fn has_month_advanced_since(last_update: Date, clock: &dyn Clock) -> bool {
    clock.today().month() > last_update.month() as u32
}
