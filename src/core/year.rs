//! Year boundaries of a wall-clock instant, with no zone conversion.
//!
//! Next and previous boundaries are always the current-year boundary moved
//! by one calendar year, never recomputed from the input.

use crate::core::precision::{add_years, minus_tick, start_of_precision};
use crate::domain::model::{NaiveBoundaries, Precision, YearWindow};
use crate::utils::error::Result;
use chrono::NaiveDateTime;

/// `t` truncated to `{year}-01-01T00:00:00`.
pub fn to_start_of_year(t: NaiveDateTime) -> Result<NaiveDateTime> {
    start_of_precision(t, Precision::Year)
}

/// One tick before the start of the following year.
pub fn to_end_of_year(t: NaiveDateTime) -> Result<NaiveDateTime> {
    minus_tick(to_start_of_next_year(t)?)
}

pub fn to_start_of_next_year(t: NaiveDateTime) -> Result<NaiveDateTime> {
    add_years(to_start_of_year(t)?, 1)
}

pub fn to_start_of_previous_year(t: NaiveDateTime) -> Result<NaiveDateTime> {
    add_years(to_start_of_year(t)?, -1)
}

pub fn to_end_of_next_year(t: NaiveDateTime) -> Result<NaiveDateTime> {
    add_years(to_end_of_year(t)?, 1)
}

pub fn to_end_of_previous_year(t: NaiveDateTime) -> Result<NaiveDateTime> {
    add_years(to_end_of_year(t)?, -1)
}

pub fn boundaries(t: NaiveDateTime) -> Result<NaiveBoundaries> {
    Ok(NaiveBoundaries {
        start_of_year: to_start_of_year(t)?,
        end_of_year: to_end_of_year(t)?,
        start_of_next_year: to_start_of_next_year(t)?,
        start_of_previous_year: to_start_of_previous_year(t)?,
        end_of_next_year: to_end_of_next_year(t)?,
        end_of_previous_year: to_end_of_previous_year(t)?,
    })
}

impl YearWindow<NaiveDateTime> {
    /// The calendar year containing `t`.
    pub fn current(t: NaiveDateTime) -> Result<Self> {
        Ok(Self {
            start: to_start_of_year(t)?,
            end: to_end_of_year(t)?,
        })
    }

    pub fn next(t: NaiveDateTime) -> Result<Self> {
        Ok(Self {
            start: to_start_of_next_year(t)?,
            end: to_end_of_next_year(t)?,
        })
    }

    pub fn previous(t: NaiveDateTime) -> Result<Self> {
        Ok(Self {
            start: to_start_of_previous_year(t)?,
            end: to_end_of_previous_year(t)?,
        })
    }
}
