//! String formatting and day/month/year decomposition of dates.

use bizcal_core::clock::Clock;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::date::Date;

/// The fixed output layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateFormat {
    /// `DD/MM/YYYY`, for people.
    Display,
    /// `YYYY/MM/DD`, for storage and sorting.
    Canonical,
    /// `YYYY-MM-DD`, the value a calendar input widget expects.
    CalendarWidget,
}

impl DateFormat {
    /// The `strftime` pattern for this layout.
    pub fn pattern(&self) -> &'static str {
        match self {
            DateFormat::Display => "%d/%m/%Y",
            DateFormat::Canonical => "%Y/%m/%d",
            DateFormat::CalendarWidget => "%Y-%m-%d",
        }
    }
}

impl Date {
    /// Render this date in the given layout.
    pub fn format_as(&self, format: DateFormat) -> String {
        self.as_naive().format(format.pattern()).to_string()
    }
}

/// `DD/MM/YYYY`.
pub fn format_for_display(date: Date) -> String {
    date.format_as(DateFormat::Display)
}

/// `YYYY/MM/DD`.
pub fn format_canonical(date: Date) -> String {
    date.format_as(DateFormat::Canonical)
}

/// `YYYY-MM-DD`.
pub fn format_for_calendar_widget(date: Date) -> String {
    date.format_as(DateFormat::CalendarWidget)
}

/// A date split into its fields, e.g. to pre-fill a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateParts {
    /// Day of the month (1–31).
    pub day: u8,
    /// Month (1–12).
    pub month: u8,
    /// Full year.
    pub year: i32,
}

impl From<NaiveDate> for DateParts {
    fn from(d: NaiveDate) -> Self {
        Self {
            day: d.day() as u8,
            month: d.month() as u8,
            year: d.year(),
        }
    }
}

/// Split `date` into day, month and year.
pub fn decompose_date(date: Date) -> DateParts {
    date.as_naive().into()
}

/// Split today's date, as reported by `clock`.
pub fn decompose_today(clock: &dyn Clock) -> DateParts {
    clock.today().into()
}
