//! # bizcal
//!
//! Holiday-aware business-day arithmetic: vacation end dates, the next
//! working day, and business-day counts with half-day holidays.
//!
//! This crate is a façade that re-exports the public items of the workspace
//! crates.  Application code should depend on this crate rather than on the
//! individual `bizcal-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use bizcal::{Date, HolidayCalendar, HolidayRecord};
//!
//! let cal = HolidayCalendar::with_holidays(
//!     "Office",
//!     vec![HolidayRecord::full("12-25".parse().unwrap())],
//! );
//! let start = Date::from_ymd(2024, 12, 24).unwrap();
//! let end = cal.compute_vacation_end_date(start, 3);
//! assert_eq!(end, Some(Date::from_ymd(2024, 12, 27).unwrap()));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Errors, clock and settings.
pub use bizcal_core as core;

/// Dates, holidays and calendars.
pub use bizcal_time as time;

pub use bizcal_core::{CalendarSettings, Clock, Error, FixedClock, Real, Result, SystemClock};
pub use bizcal_time::{
    decompose_date, decompose_today, days_since_join_date, format_canonical,
    format_for_calendar_widget, format_for_display, has_month_advanced_since,
    has_vacation_expired, is_working_weekday, Calendar, Date, DateFormat, DateParts,
    HolidayCalendar, HolidayRecord, MonthDay, Weekday,
};
