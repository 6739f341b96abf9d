//! Truncation and ceiling of a wall-clock instant to a calendar granularity.

use crate::domain::model::{Precision, TICK};
use crate::utils::error::{Result, YearBoundError};
use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};

/// Zeroes every field of `t` finer than `precision`.
pub fn start_of_precision(t: NaiveDateTime, precision: Precision) -> Result<NaiveDateTime> {
    let date = match precision {
        Precision::Year => NaiveDate::from_ymd_opt(t.year(), 1, 1),
        Precision::Month => NaiveDate::from_ymd_opt(t.year(), t.month(), 1),
        _ => Some(t.date()),
    }
    .ok_or_else(|| YearBoundError::out_of_range("start_of_precision", t))?;

    let time = match precision {
        Precision::Year | Precision::Month | Precision::Day => NaiveTime::from_hms_opt(0, 0, 0),
        Precision::Hour => NaiveTime::from_hms_opt(t.hour(), 0, 0),
        Precision::Minute => NaiveTime::from_hms_opt(t.hour(), t.minute(), 0),
        Precision::Second => NaiveTime::from_hms_opt(t.hour(), t.minute(), t.second()),
    }
    .ok_or_else(|| YearBoundError::out_of_range("start_of_precision", t))?;

    Ok(date.and_time(time))
}

/// Last representable instant of the `precision` unit containing `t`.
pub fn end_of_precision(t: NaiveDateTime, precision: Precision) -> Result<NaiveDateTime> {
    let start = start_of_precision(t, precision)?;
    let next = next_unit(start, precision)?;
    minus_tick(next)
}

/// Calendar year offset. Feb 29 moved into a common year lands on Feb 28.
pub fn add_years(t: NaiveDateTime, years: i32) -> Result<NaiveDateTime> {
    let months = Months::new(years.unsigned_abs().saturating_mul(12));
    let shifted = if years >= 0 {
        t.checked_add_months(months)
    } else {
        t.checked_sub_months(months)
    };
    shifted.ok_or_else(|| YearBoundError::out_of_range("add_years", t))
}

pub fn minus_tick(t: NaiveDateTime) -> Result<NaiveDateTime> {
    t.checked_sub_signed(TICK)
        .ok_or_else(|| YearBoundError::out_of_range("minus_tick", t))
}

fn next_unit(t: NaiveDateTime, precision: Precision) -> Result<NaiveDateTime> {
    let shifted = match precision {
        Precision::Year => return add_years(t, 1),
        Precision::Month => t.checked_add_months(Months::new(1)),
        Precision::Day => t.checked_add_signed(TimeDelta::days(1)),
        Precision::Hour => t.checked_add_signed(TimeDelta::hours(1)),
        Precision::Minute => t.checked_add_signed(TimeDelta::minutes(1)),
        Precision::Second => t.checked_add_signed(TimeDelta::seconds(1)),
    };
    shifted.ok_or_else(|| YearBoundError::out_of_range("next_unit", t))
}
