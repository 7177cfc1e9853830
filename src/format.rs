use crate::clock::Clock;
use crate::consts::{
    DATE_FORMAT, EPOCH_MILLIS_THRESHOLD, KST_OFFSET_HOURS, MILLIS_PER_SECOND, PLACEHOLDER,
};
use crate::prelude::*;
use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, Utc};

/// A display-layer date input before interpretation.
///
/// Callers hand over whatever they have: an epoch number (seconds or
/// milliseconds, told apart by magnitude) or a date string. Interpretation
/// is deferred to `safe_format_date`, which never fails.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateInput {
    /// Epoch timestamp of ambiguous resolution
    #[display(fmt = "{_0}")]
    Epoch(i64),
    /// Free-form date text
    #[display(fmt = "{_0}")]
    Text(String),
}

impl From<i64> for DateInput {
    fn from(value: i64) -> Self {
        Self::Epoch(value)
    }
}

impl From<&str> for DateInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for DateInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl DateInput {
    /// Inputs the display layer treats as "nothing to show": the zero
    /// epoch and the empty string. Mirrors the upstream falsy check.
    fn is_blank(&self) -> bool {
        match self {
            Self::Epoch(value) => *value == 0,
            Self::Text(text) => text.is_empty(),
        }
    }

    /// Best-effort interpretation as an instant
    fn resolve(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Epoch(value) => epoch_to_datetime(*value),
            Self::Text(text) => {
                let trimmed = text.trim();
                // Fully-numeric text is an epoch value, not a date string
                if let Ok(integer) = trimmed.parse::<i64>() {
                    return epoch_to_datetime(integer);
                }
                if let Ok(float) = trimmed.parse::<f64>() {
                    if float.is_finite() {
                        #[allow(clippy::cast_possible_truncation)]
                        return epoch_to_datetime(float as i64);
                    }
                    return None;
                }
                parse_date_text(trimmed)
            }
        }
    }
}

/// Splits an ambiguous epoch value by magnitude: above the threshold it is
/// milliseconds, otherwise seconds. Returns `None` when chrono cannot
/// represent the instant.
fn epoch_to_datetime(value: i64) -> Option<DateTime<Utc>> {
    if value > EPOCH_MILLIS_THRESHOLD {
        DateTime::from_timestamp_millis(value)
    } else {
        DateTime::from_timestamp(value, 0)
    }
}

fn parse_date_text(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return Some(instant.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive.and_utc());
        }
    }
    for format in [DATE_FORMAT, "%Y/%m/%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
        }
    }
    None
}

/// Renders `date` through a token pattern.
///
/// Tokens: `yyyy` (4-digit year), `MM`/`dd` (zero-padded month/day), `M`/`d`
/// (unpadded). All occurrences are replaced; two-letter tokens are
/// substituted before their one-letter counterparts so a `M` pass cannot
/// corrupt a pending `MM`.
pub fn format_pattern(date: NaiveDate, pattern: &str) -> String {
    pattern
        .replace("yyyy", &format!("{:04}", date.year()))
        .replace("MM", &format!("{:02}", date.month()))
        .replace("dd", &format!("{:02}", date.day()))
        .replace('M', &date.month().to_string())
        .replace('d', &date.day().to_string())
}

/// Formats an arbitrary date input for display, degrading to `"-"`.
///
/// `None`, the zero epoch, and the empty string all render as the
/// placeholder. Numeric input (or fully-numeric text) is an epoch value;
/// other text is parsed leniently (RFC 3339, `YYYY-MM-DDTHH:MM:SS`,
/// `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DD`, `YYYY/MM/DD`). Unresolvable input
/// yields the placeholder and a warning log, never an error.
pub fn safe_format_date<T: Into<DateInput>>(value: Option<T>, pattern: &str) -> String {
    let Some(input) = value.map(Into::into) else {
        return PLACEHOLDER.to_owned();
    };
    if input.is_blank() {
        return PLACEHOLDER.to_owned();
    }

    match input.resolve() {
        Some(instant) => format_pattern(instant.date_naive(), pattern),
        None => {
            tracing::warn!(input = %input, "unresolvable date input, emitting placeholder");
            PLACEHOLDER.to_owned()
        }
    }
}

/// Whole seconds since the Unix epoch (floor of milliseconds / 1000)
pub fn to_unix_seconds(instant: DateTime<Utc>) -> i64 {
    instant.timestamp()
}

/// Converts second-resolution epoch to millisecond-resolution
pub const fn epoch_seconds_to_millis(seconds: i64) -> i64 {
    seconds.saturating_mul(MILLIS_PER_SECOND)
}

/// Instant at `seconds` since the Unix epoch; `None` outside chrono's range
pub fn epoch_seconds_to_datetime(seconds: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(seconds, 0)
}

/// Instant at `ms` milliseconds since the Unix epoch; `None` outside
/// chrono's range
pub fn epoch_millis_to_datetime(ms: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(ms)
}

/// Formats a millisecond epoch with a padded-token pattern.
///
/// Only `yyyy`, `MM` and `dd` are substituted; the unpadded `M`/`d` tokens
/// of `format_pattern` are deliberately not supported here, matching the
/// narrower upstream formatter. Out-of-range input degrades to `"-"`.
/// Callers without a pattern preference pass `DEFAULT_EPOCH_PATTERN`.
pub fn format_epoch_millis(ms: i64, pattern: &str) -> String {
    match DateTime::from_timestamp_millis(ms) {
        Some(instant) => {
            let date = instant.date_naive();
            pattern
                .replace("yyyy", &format!("{:04}", date.year()))
                .replace("MM", &format!("{:02}", date.month()))
                .replace("dd", &format!("{:02}", date.day()))
        }
        None => {
            tracing::warn!(ms, "epoch milliseconds out of range, emitting placeholder");
            PLACEHOLDER.to_owned()
        }
    }
}

/// Today's date in Korea: a fixed +9 h offset applied to the clock's
/// current instant, regardless of host timezone
pub fn kst_today(clock: &impl Clock) -> NaiveDate {
    (clock.now() + Duration::hours(KST_OFFSET_HOURS)).date_naive()
}

/// Today's date in Korea as a `"YYYY-MM-DD"` string
pub fn kst_today_string(clock: &impl Clock) -> String {
    kst_today(clock).format(DATE_FORMAT).to_string()
}
