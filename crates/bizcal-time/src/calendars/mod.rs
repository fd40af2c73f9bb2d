//! Concrete calendar implementations.

/// Weekends plus a loadable list of year-agnostic holidays.
pub mod holiday_calendar;

pub use holiday_calendar::HolidayCalendar;
