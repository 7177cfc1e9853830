use crate::ParseError;
use crate::consts::{
    ENGLISH_LONG_LOWER, ENGLISH_LONG_UPPER, ENGLISH_SHORT_LOWER, ENGLISH_SHORT_UPPER, KOREAN_LONG,
    KOREAN_SHORT, SATURDAY_INDEX, SUNDAY_INDEX, WEEK_LENGTH,
};
use crate::prelude::*;
use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A weekday position guaranteed to be in the range `0..=6`, Sunday = 0.
/// All textual weekday forms are views over this index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct WeekdayIndex(u8);

impl WeekdayIndex {
    /// Creates a new `WeekdayIndex`, validating that it's below `WEEK_LENGTH`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidWeekdayIndex` if the value is > 6.
    pub const fn new(value: u8) -> Result<Self, ParseError> {
        if value >= WEEK_LENGTH {
            return Err(ParseError::InvalidWeekdayIndex(value));
        }
        Ok(Self(value))
    }

    /// Derives the index from a calendar date's day of week
    pub fn from_date(date: NaiveDate) -> Self {
        date.weekday().into()
    }

    /// Returns the index value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl From<chrono::Weekday> for WeekdayIndex {
    // num_days_from_sunday is always 0..=6
    #[allow(clippy::cast_possible_truncation)]
    fn from(weekday: chrono::Weekday) -> Self {
        Self(weekday.num_days_from_sunday() as u8)
    }
}

impl TryFrom<u8> for WeekdayIndex {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<WeekdayIndex> for u8 {
    fn from(index: WeekdayIndex) -> Self {
        index.0
    }
}

impl fmt::Display for WeekdayIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One of the six textual renderings of a weekday: short/long Korean, and
/// short/long English in lower or upper case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WeekdayStyle {
    #[default]
    #[display(fmt = "korean-short")]
    KoreanShort,
    #[display(fmt = "korean-long")]
    KoreanLong,
    #[display(fmt = "english-short-lower")]
    EnglishShortLower,
    #[display(fmt = "english-short-upper")]
    EnglishShortUpper,
    #[display(fmt = "english-long-lower")]
    EnglishLongLower,
    #[display(fmt = "english-long-upper")]
    EnglishLongUpper,
}

impl WeekdayStyle {
    /// All styles, in table-declaration order. Text lookups search the
    /// tables in this order and stop at the first match; the six tables are
    /// pairwise disjoint, so the search order never changes the result.
    pub const ALL: [Self; 6] = [
        Self::KoreanShort,
        Self::KoreanLong,
        Self::EnglishShortLower,
        Self::EnglishShortUpper,
        Self::EnglishLongLower,
        Self::EnglishLongUpper,
    ];

    /// Returns this style's name table, indexed by `WeekdayIndex`
    pub const fn names(self) -> &'static [&'static str; 7] {
        match self {
            Self::KoreanShort => &KOREAN_SHORT,
            Self::KoreanLong => &KOREAN_LONG,
            Self::EnglishShortLower => &ENGLISH_SHORT_LOWER,
            Self::EnglishShortUpper => &ENGLISH_SHORT_UPPER,
            Self::EnglishLongLower => &ENGLISH_LONG_LOWER,
            Self::EnglishLongUpper => &ENGLISH_LONG_UPPER,
        }
    }
}

/// Returns the name of the weekday at `index`, rendered in `style`
pub const fn weekday_name(index: WeekdayIndex, style: WeekdayStyle) -> &'static str {
    style.names()[index.get() as usize]
}

/// Returns the name of `date`'s weekday, rendered in `style`
pub fn date_weekday_name(date: NaiveDate, style: WeekdayStyle) -> &'static str {
    weekday_name(WeekdayIndex::from_date(date), style)
}

/// Resolves a weekday name in any of the six styles to its index.
/// Returns `None` if `text` matches no table entry.
pub fn weekday_index_of(text: &str) -> Option<WeekdayIndex> {
    WeekdayStyle::ALL
        .iter()
        .find_map(|style| style.names().iter().position(|name| *name == text))
        .and_then(|position| u8::try_from(position).ok())
        .map(WeekdayIndex)
}

/// Re-renders a weekday name from any style into `target`.
/// Returns `None` if `text` matches no table entry.
pub fn convert_weekday_format(text: &str, target: WeekdayStyle) -> Option<&'static str> {
    weekday_index_of(text).map(|index| weekday_name(index, target))
}

/// True iff both dates fall on the same day of the week
pub fn is_same_weekday(a: NaiveDate, b: NaiveDate) -> bool {
    WeekdayIndex::from_date(a) == WeekdayIndex::from_date(b)
}

/// True iff `date` is a Saturday or Sunday
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(
        WeekdayIndex::from_date(date).get(),
        SUNDAY_INDEX | SATURDAY_INDEX
    )
}

/// True iff `date` is not a weekend day
pub fn is_weekday(date: NaiveDate) -> bool {
    !is_weekend(date)
}

/// Finds the nearest date strictly after `base` (or strictly before, when
/// `forward` is false) whose weekday matches `target`, given as a name in
/// any of the six styles. The day offset is always in `1..=7`: when `base`
/// itself already falls on the target weekday, the result is a full week
/// away, never `base`.
///
/// Returns `None` if `target` resolves to no weekday.
pub fn nearest_weekday(target: &str, base: NaiveDate, forward: bool) -> Option<NaiveDate> {
    let target_index = weekday_index_of(target)?;
    let base_index = WeekdayIndex::from_date(base);

    let gap = if forward {
        i64::from(target_index.get()) - i64::from(base_index.get())
    } else {
        i64::from(base_index.get()) - i64::from(target_index.get())
    };
    let days = match gap.rem_euclid(i64::from(WEEK_LENGTH)) {
        0 => i64::from(WEEK_LENGTH),
        n => n,
    };

    let offset = if forward { days } else { -days };
    Some(base + Duration::days(offset))
}
