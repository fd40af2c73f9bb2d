//! Integration tests for date parsing, formatting and clock-driven rules.

use bizcal_core::clock::FixedClock;
use bizcal_core::CalendarSettings;
use bizcal_time::{
    decompose_date, decompose_today, format_canonical, format_for_calendar_widget,
    format_for_display, has_month_advanced_since, has_vacation_expired, is_working_weekday, Date,
    DateParts, HolidayCalendar, Weekday,
};
use chrono::NaiveDate;

fn date(y: i32, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn clock(y: i32, m: u32, d: u32) -> FixedClock {
    FixedClock::new(NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

// ─── Formatting ───────────────────────────────────────────────────────────────

#[test]
fn form_round_trip() {
    // A date picked in the widget, shown to the user, then stored.
    let picked: Date = "2025-07-01".parse().unwrap();
    assert_eq!(format_for_display(picked), "01/07/2025");
    assert_eq!(format_canonical(picked), "2025/07/01");
    assert_eq!(format_for_calendar_widget(picked), "2025-07-01");
    assert_eq!(
        decompose_date(picked),
        DateParts {
            day: 1,
            month: 7,
            year: 2025
        }
    );
}

#[test]
fn malformed_input_is_reported() {
    assert!("2025-7".parse::<Date>().is_err());
    assert!("07/2025/01".parse::<Date>().is_err());
    assert!("2025-00-10".parse::<Date>().is_err());
    assert!("".parse::<Date>().is_err());
}

#[test]
fn weekend_selection_rejected() {
    let picked = date(2025, 7, 5);
    assert_eq!(picked.weekday(), Weekday::Sat);
    assert!(!is_working_weekday(picked));
    assert!(is_working_weekday(date(2025, 7, 7)));
}

// ─── Clock-driven rules ───────────────────────────────────────────────────────

#[test]
fn vacation_expiry_around_today() {
    let today = clock(2025, 3, 12);
    assert!(has_vacation_expired(date(2025, 3, 11), &today));
    assert!(has_vacation_expired(date(2025, 3, 12), &today));
    assert!(!has_vacation_expired(date(2025, 3, 13), &today));
}

#[test]
fn tenure_uses_calendar_settings() {
    let today = clock(2025, 3, 12);
    let join = date(2025, 1, 1); // 70 days earlier
    let default_cal = HolidayCalendar::new("Default");
    assert!(!default_cal.meets_tenure(join, &today));

    let lenient = HolidayCalendar::new("Lenient").with_settings(CalendarSettings::new(60).unwrap());
    assert!(lenient.meets_tenure(join, &today));
}

#[test]
fn today_decomposition_and_month_advance() {
    let today = clock(2025, 6, 30);
    assert_eq!(
        decompose_today(&today),
        DateParts {
            day: 30,
            month: 6,
            year: 2025
        }
    );
    assert!(has_month_advanced_since(date(2025, 5, 31), &today));
    assert!(!has_month_advanced_since(date(2025, 6, 1), &today));
}
