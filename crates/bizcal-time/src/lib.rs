//! # bizcal-time
//!
//! Date, holiday and business-calendar types.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Calendar trait and the weekday check.
pub mod calendar;

/// Concrete calendar implementations.
pub mod calendars;

/// `Date` type.
pub mod date;

/// Output layouts and field decomposition.
pub mod format;

/// `HolidayRecord` — one entry of a holiday list.
pub mod holiday;

/// `MonthDay` — year-agnostic `MM-DD` key.
pub mod month_day;

/// Clock-dependent vacation and tenure rules.
pub mod vacation;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{is_working_weekday, Calendar};
pub use calendars::HolidayCalendar;
pub use chrono::Weekday;
pub use date::Date;
pub use format::{
    decompose_date, decompose_today, format_canonical, format_for_calendar_widget,
    format_for_display, DateFormat, DateParts,
};
pub use holiday::HolidayRecord;
pub use month_day::MonthDay;
pub use vacation::{
    days_elapsed_since, days_since_join_date, has_month_advanced_since, has_vacation_expired,
};
