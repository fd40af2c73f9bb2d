//! `Calendar` trait.
//!
//! A calendar knows which dates are business days and can step forward to
//! the next one.

use crate::date::Date;

/// Return `true` if `date` falls Monday–Friday.
///
/// Holiday status is not considered; this is the check a date picker uses to
/// reject weekend selections.
pub fn is_working_weekday(date: Date) -> bool {
    !date.is_weekend()
}

/// A business calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name.
    fn name(&self) -> &str;

    /// Return `true` if `date` is a business day in this calendar.
    fn is_business_day(&self, date: Date) -> bool;

    /// Return `true` if `date` is a weekend according to this calendar.
    fn is_weekend(&self, date: Date) -> bool {
        date.is_weekend()
    }

    /// Return the first business day strictly after `date`.
    ///
    /// `None` only if the search runs off the last representable date.
    fn next_business_day(&self, date: Date) -> Option<Date> {
        std::iter::successors(date.succ(), |d| d.succ()).find(|d| self.is_business_day(*d))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Weekdays;

    impl Calendar for Weekdays {
        fn name(&self) -> &str {
            "Weekdays"
        }

        fn is_business_day(&self, date: Date) -> bool {
            !self.is_weekend(date)
        }
    }

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn working_weekday_rejects_weekend() {
        // 2023-09-02 is a Saturday
        assert!(!is_working_weekday(date(2023, 9, 2)));
        assert!(!is_working_weekday(date(2023, 9, 3)));
        assert!(is_working_weekday(date(2023, 9, 4)));
    }

    #[test]
    fn next_business_day_skips_weekend() {
        let cal = Weekdays;
        // Friday → Monday
        assert_eq!(cal.next_business_day(date(2023, 9, 1)), Some(date(2023, 9, 4)));
        // Monday → Tuesday, never the same day
        assert_eq!(cal.next_business_day(date(2023, 9, 4)), Some(date(2023, 9, 5)));
    }

    #[test]
    fn next_business_day_at_end_of_range() {
        let cal = Weekdays;
        assert_eq!(cal.next_business_day(Date::MAX), None);
        let last_business = Date::MAX
            .add_days(-6)
            .unwrap()
            .iter_through(Date::MAX)
            .filter(|d| cal.is_business_day(*d))
            .last()
            .unwrap();
        assert_eq!(cal.next_business_day(last_business), None);
    }
}
