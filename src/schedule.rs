//! Date arithmetic for the generation-day gate and week offsets.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Week offset {0} is out of range")]
    OffsetOutOfRange(i64),
}

/// German weekday name as used in user-facing messages.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Montag",
        Weekday::Tue => "Dienstag",
        Weekday::Wed => "Mittwoch",
        Weekday::Thu => "Donnerstag",
        Weekday::Fri => "Freitag",
        Weekday::Sat => "Samstag",
        Weekday::Sun => "Sonntag",
    }
}

pub fn is_generation_day(today: NaiveDate, generation_day: Weekday) -> bool {
    today.weekday() == generation_day
}

/// `date` shifted by whole weeks.
pub fn shift_weeks(date: NaiveDate, weeks: i64) -> Result<NaiveDate, ScheduleError> {
    Duration::try_weeks(weeks)
        .and_then(|delta| date.checked_add_signed(delta))
        .ok_or(ScheduleError::OffsetOutOfRange(weeks))
}

pub fn monday_of_week(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// Monday of the week a refresh run should cover.
pub fn refresh_target(
    today: NaiveDate,
    week_offset: i64,
    next_week: bool,
) -> Result<NaiveDate, ScheduleError> {
    let offset = week_offset
        .checked_add(i64::from(next_week))
        .ok_or(ScheduleError::OffsetOutOfRange(week_offset))?;
    shift_weeks(monday_of_week(today), offset)
}

/// Whether `date` lies in the same ISO week as `monday`.
pub fn in_week_of(date: NaiveDate, monday: NaiveDate) -> bool {
    date.iso_week() == monday.iso_week()
}
