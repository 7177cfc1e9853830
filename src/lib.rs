mod clock;
mod consts;
mod format;
mod prelude;
mod range;
mod week;
mod weekday;

pub use clock::{Clock, FixedClock, SystemClock};
pub use consts::*;
pub use format::{
    DateInput, epoch_millis_to_datetime, epoch_seconds_to_datetime, epoch_seconds_to_millis,
    format_epoch_millis, format_pattern, kst_today, kst_today_string, safe_format_date,
    to_unix_seconds,
};
pub use range::{DateRange, RangeError, parse_date_strict};
pub use week::{WeekStart, korean_week_label, week_dates, week_of_month};
pub use weekday::{
    WeekdayIndex, WeekdayStyle, convert_weekday_format, date_weekday_name, is_same_weekday,
    is_weekday, is_weekend, nearest_weekday, weekday_index_of, weekday_name,
};

use crate::prelude::*;

/// Errors produced when external input cannot be interpreted.
/// The safe display formatters never surface this; only the strict entry
/// points (`parse_date_strict`, `WeekdayIndex::new`, range parsing) do.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid weekday index: {_0} (must be 0-6)")]
    InvalidWeekdayIndex(u8),
}

impl std::error::Error for ParseError {}

#[cfg(test)]
pub(crate) mod test_utils {
    use chrono::NaiveDate;

    /// Builds a date from literal components; panics on invalid input,
    /// which in tests means the literal itself is wrong.
    pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap_or_else(|| panic!("invalid test date {year}-{month:02}-{day:02}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_parse_error_display() {
        let error = ParseError::InvalidFormat("04/01/2025".to_owned());
        assert_eq!(error.to_string(), "Invalid date format: 04/01/2025");

        let error = ParseError::InvalidWeekdayIndex(9);
        assert_eq!(error.to_string(), "Invalid weekday index: 9 (must be 0-6)");
    }

    #[test]
    fn test_parse_date_strict() {
        assert_eq!(parse_date_strict("2025-04-08"), Ok(date(2025, 4, 8)));
        assert!(matches!(
            parse_date_strict("08.04.2025"),
            Err(ParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_picker_flow_with_fixed_clock() {
        // A picker resolves "today" in KST, then consults the range with it
        let clock = FixedClock(Utc.with_ymd_and_hms(2025, 4, 9, 16, 0, 0).unwrap());
        let today = kst_today(&clock);
        assert_eq!(today, date(2025, 4, 10));

        let range = DateRange::from_strs(Some("2025-04-01"), Some("2025-04-30")).unwrap();
        assert!(range.is_selectable(today, today));
        assert!(!range.is_selectable(date(2025, 4, 1), today));
        assert_eq!(range.default_open_month(today), date(2025, 4, 1));
    }

    #[test]
    fn test_weekday_label_for_formatted_epoch() {
        // 1714022400 s is 2024-04-25, a Thursday
        let instant = epoch_seconds_to_datetime(1_714_022_400).unwrap();
        let day = instant.date_naive();
        assert_eq!(format_pattern(day, "yyyy-MM-dd"), "2024-04-25");
        assert_eq!(date_weekday_name(day, WeekdayStyle::KoreanShort), "목");
        assert_eq!(korean_week_label(day), "2024년 4월 4주차");
    }
}
