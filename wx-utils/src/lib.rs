//! Shared utility functions for the climate wizard crates.

/// Calendar helpers for the date step.
///
/// Target dates carry no year of their own. The statistics service resolves
/// them against a fixed non-leap year, so everything here does the same.
pub mod dates {
    use chrono::{Datelike, NaiveDate};

    /// Year month/day selections are resolved against (non-leap).
    pub const REFERENCE_YEAR: i32 = 2001;

    fn first_of_month(month: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(REFERENCE_YEAR, month, 1)
    }

    /// Full English month name for a 1-based month, e.g. 7 -> "July".
    pub fn month_name(month: u32) -> Option<String> {
        first_of_month(month).map(|d| d.format("%B").to_string())
    }

    /// Number of days in a 1-based month of the reference year.
    /// February always has 28.
    pub fn days_in_month(month: u32) -> Option<u32> {
        let first = first_of_month(month)?;
        let next = if month == 12 {
            NaiveDate::from_ymd_opt(REFERENCE_YEAR + 1, 1, 1)?
        } else {
            first_of_month(month + 1)?
        };
        Some(next.pred_opt()?.day())
    }

    /// `(value, label)` pairs for a month `<select>`: ("1", "January") ...
    pub fn month_options() -> Vec<(String, String)> {
        (1..=12)
            .filter_map(|m| month_name(m).map(|name| (m.to_string(), name)))
            .collect()
    }

    /// Parse a month/day pair as entered in the date step.
    pub fn parse_month_day(month: &str, day: &str) -> Option<NaiveDate> {
        let month = month.trim().parse::<u32>().ok()?;
        let day = day.trim().parse::<u32>().ok()?;
        NaiveDate::from_ymd_opt(REFERENCE_YEAR, month, day)
    }

    /// Human label for a month/day pair, e.g. ("7", "5") -> "July 05".
    pub fn target_date_label(month: &str, day: &str) -> Option<String> {
        parse_month_day(month, day).map(|d| d.format("%B %d").to_string())
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_month_name() {
            assert_eq!(month_name(1).as_deref(), Some("January"));
            assert_eq!(month_name(12).as_deref(), Some("December"));
            assert_eq!(month_name(0), None);
            assert_eq!(month_name(13), None);
        }

        #[test]
        fn test_days_in_month() {
            assert_eq!(days_in_month(1), Some(31));
            assert_eq!(days_in_month(2), Some(28));
            assert_eq!(days_in_month(4), Some(30));
            assert_eq!(days_in_month(12), Some(31));
            assert_eq!(days_in_month(13), None);
        }

        #[test]
        fn test_month_options() {
            let options = month_options();
            assert_eq!(options.len(), 12);
            assert_eq!(options[0], ("1".to_string(), "January".to_string()));
            assert_eq!(options[11], ("12".to_string(), "December".to_string()));
        }

        #[test]
        fn test_target_date_label() {
            assert_eq!(target_date_label("7", "15").as_deref(), Some("July 15"));
            assert_eq!(target_date_label("7", "5").as_deref(), Some("July 05"));
            assert_eq!(target_date_label(" 3 ", "1").as_deref(), Some("March 01"));
            // The reference year is not a leap year
            assert_eq!(target_date_label("2", "29"), None);
            assert_eq!(target_date_label("", "1"), None);
            assert_eq!(target_date_label("june", "1"), None);
        }
    }
}
