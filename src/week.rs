use crate::consts::{MONDAY_INDEX, SUNDAY_INDEX, WEEK_LENGTH};
use crate::prelude::*;
use crate::weekday::WeekdayIndex;
use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// First day of the calendar week, for week enumeration.
/// Korean calendars render Sunday-first; Monday-first is offered for
/// schedule views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    #[display(fmt = "sunday")]
    Sunday,
    #[display(fmt = "monday")]
    Monday,
}

impl WeekStart {
    const fn index(self) -> u8 {
        match self {
            Self::Sunday => SUNDAY_INDEX,
            Self::Monday => MONDAY_INDEX,
        }
    }
}

/// 1-based ordinal of the week block containing `date` within its month.
///
/// Week 1 runs from the 1st of the month up to the first Saturday, so its
/// length is `7 - weekday_index(1st)` days; every following week is a full
/// Sunday-to-Saturday block.
pub fn week_of_month(date: NaiveDate) -> u32 {
    let day = date.day();
    let index = u32::from(WeekdayIndex::from_date(date).get());

    // Weekday of the 1st, recovered without constructing a second date
    let first_index = (index + 7 - (day - 1) % 7) % 7;
    let days_in_first_week = u32::from(WEEK_LENGTH) - first_index;

    if day <= days_in_first_week {
        1
    } else {
        (day - days_in_first_week).div_ceil(u32::from(WEEK_LENGTH)) + 1
    }
}

/// Renders `date`'s week as a Korean label, e.g. `"2025년 4월 4주차"`.
/// Month and week are unpadded.
pub fn korean_week_label(date: NaiveDate) -> String {
    format!(
        "{}년 {}월 {}주차",
        date.year(),
        date.month(),
        week_of_month(date)
    )
}

/// The 7 consecutive dates of the calendar week containing `date`, starting
/// from the week's first day.
pub fn week_dates(date: NaiveDate, start: WeekStart) -> [NaiveDate; 7] {
    let index = i64::from(WeekdayIndex::from_date(date).get());
    let back = (index - i64::from(start.index())).rem_euclid(i64::from(WEEK_LENGTH));
    let first = date - Duration::days(back);

    std::array::from_fn(|offset| first + Duration::days(offset as i64))
}
