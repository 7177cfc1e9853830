/// Number of days in a week; the valid `WeekdayIndex` range is `0..WEEK_LENGTH`.
pub const WEEK_LENGTH: u8 = 7;

/// Weekday index of Sunday (weeks are Sunday-first)
pub const SUNDAY_INDEX: u8 = 0;
/// Weekday index of Monday
pub const MONDAY_INDEX: u8 = 1;
/// Weekday index of Saturday
pub const SATURDAY_INDEX: u8 = 6;

/// Korean single-syllable weekday names, Sunday-first
pub const KOREAN_SHORT: [&str; 7] = ["일", "월", "화", "수", "목", "금", "토"];
/// Korean full weekday names, Sunday-first
pub const KOREAN_LONG: [&str; 7] = [
    "일요일",
    "월요일",
    "화요일",
    "수요일",
    "목요일",
    "금요일",
    "토요일",
];
/// English three-letter abbreviations, lowercase
pub const ENGLISH_SHORT_LOWER: [&str; 7] = ["sun", "mon", "tue", "wed", "thu", "fri", "sat"];
/// English three-letter abbreviations, uppercase
pub const ENGLISH_SHORT_UPPER: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];
/// English full names, lowercase
pub const ENGLISH_LONG_LOWER: [&str; 7] = [
    "sunday",
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
];
/// English full names, uppercase
pub const ENGLISH_LONG_UPPER: [&str; 7] = [
    "SUNDAY",
    "MONDAY",
    "TUESDAY",
    "WEDNESDAY",
    "THURSDAY",
    "FRIDAY",
    "SATURDAY",
];

/// Epoch values above this magnitude are treated as milliseconds, values at
/// or below it as seconds. This is a heuristic: second-epoch values past the
/// year 33658 and millisecond-epoch values before September 2001 are
/// misclassified. Inherited from the upstream display code on purpose.
pub const EPOCH_MILLIS_THRESHOLD: i64 = 1_000_000_000_000;

/// Milliseconds per second, for epoch unit conversion
pub const MILLIS_PER_SECOND: i64 = 1000;

/// Fixed KST offset from UTC, in hours. No tz database: Korea has not
/// observed DST since 1988, so a constant offset is sufficient.
pub const KST_OFFSET_HOURS: i64 = 9;

/// Placeholder emitted by the safe formatters when input cannot be rendered
pub const PLACEHOLDER: &str = "-";

/// Pattern applied by `format_epoch_millis` when callers have no preference
pub const DEFAULT_EPOCH_PATTERN: &str = "yyyy-MM-dd";

/// Strict format accepted for external date strings (ISO 8601 date)
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Range separator between the start and end sides of a `DateRange`
pub const RANGE_SEPARATOR: char = '/';
