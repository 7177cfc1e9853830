use std::{fmt, str::FromStr};

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::ParseError;
use crate::consts::{DATE_FORMAT, RANGE_SEPARATOR};

/// A date-picker range with optional bounds.
///
/// Either side may be absent; an absent side resolves to the reference
/// `today` value at the moment the range is consulted, not at construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

/// Error type for date range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Error parsing date component.
    #[error(transparent)]
    ParseError(#[from] ParseError),

    /// Invalid range format.
    #[error("Invalid range format: {0}")]
    InvalidFormat(String),
}

/// Strict `"YYYY-MM-DD"` parse for external date strings.
///
/// # Errors
/// Returns `ParseError::InvalidFormat` if the text is not a valid ISO date.
pub fn parse_date_strict(s: &str) -> Result<NaiveDate, ParseError> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

impl DateRange {
    /// Creates a new range; `None` on a side means "defaults to today"
    pub const fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// Parses a range from optional `"YYYY-MM-DD"` strings.
    ///
    /// # Errors
    /// Returns `RangeError::ParseError` if a present side is not a valid
    /// ISO date.
    pub fn from_strs(start: Option<&str>, end: Option<&str>) -> Result<Self, RangeError> {
        let start = start.map(parse_date_strict).transpose()?;
        let end = end.map(parse_date_strict).transpose()?;
        Ok(Self { start, end })
    }

    /// Returns the start bound, if one was given
    pub const fn start(&self) -> Option<NaiveDate> {
        self.start
    }

    /// Returns the end bound, if one was given
    pub const fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    /// Resolves both bounds against `today`: absent sides become `today`
    pub fn resolve(&self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        (self.start.unwrap_or(today), self.end.unwrap_or(today))
    }

    /// Whether a picker may let the user choose `date`.
    ///
    /// The cases are checked in order, and the order is part of the
    /// contract:
    /// 1. start == end: only that exact day is selectable, whatever `today`
    ///    is.
    /// 2. end == today: only today is selectable.
    /// 3. otherwise: `date` must lie in `start..=end` and be no earlier
    ///    than yesterday.
    pub fn is_selectable(&self, date: NaiveDate, today: NaiveDate) -> bool {
        let (start, end) = self.resolve(today);

        if start == end {
            return date == start;
        }
        if end == today {
            return date == today;
        }
        start <= date && date <= end && date >= today - Duration::days(1)
    }

    /// The month a picker should open on: the start bound when the range
    /// already began, else the end bound when the range is still open, else
    /// today. First match wins; a past start is returned even when the end
    /// bound would also qualify.
    pub fn default_open_month(&self, today: NaiveDate) -> NaiveDate {
        let (start, end) = self.resolve(today);

        if start < today {
            start
        } else if end > today {
            end
        } else {
            today
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(start) = self.start {
            write!(f, "{start}")?;
        }
        write!(f, "{RANGE_SEPARATOR}")?;
        if let Some(end) = self.end {
            write!(f, "{end}")?;
        }
        Ok(())
    }
}

impl FromStr for DateRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let separator_count = trimmed.matches(RANGE_SEPARATOR).count();

        match separator_count {
            0 => Err(RangeError::InvalidFormat(format!(
                "No range separator found (expected '{RANGE_SEPARATOR}'): {s}"
            ))),
            1 => {
                let pos = trimmed.find(RANGE_SEPARATOR).ok_or_else(|| {
                    RangeError::InvalidFormat(format!(
                        "Separator '{RANGE_SEPARATOR}' not found despite count == 1"
                    ))
                })?;
                let start_str = trimmed[..pos].trim();
                let end_str = trimmed[pos + 1..].trim();

                let start = (!start_str.is_empty()).then_some(start_str);
                let end = (!end_str.is_empty()).then_some(end_str);

                Self::from_strs(start, end)
            }
            _ => Err(RangeError::InvalidFormat(format!(
                "Too many '{RANGE_SEPARATOR}' separators: expected 1, found {separator_count}"
            ))),
        }
    }
}

impl Serialize for DateRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DateRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
