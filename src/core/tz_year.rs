//! Year boundaries as observed in a time zone, for UTC inputs.
//!
//! The input is converted to the zone's wall clock, the boundary is computed
//! there, and the result is converted back to UTC. The previous-year start
//! and the next-year end are offsets of the UTC start of the current local
//! year; they are not recomputed in local time.

use crate::adapters::zone;
use crate::core::{precision, year};
use crate::domain::model::{YearWindow, ZonedBoundaries};
use crate::domain::ports::ZoneRules;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};

fn in_local<Z, F>(utc: DateTime<Utc>, zone: &Z, boundary: F) -> Result<DateTime<Utc>>
where
    Z: ZoneRules + ?Sized,
    F: FnOnce(chrono::NaiveDateTime) -> Result<chrono::NaiveDateTime>,
{
    let local = zone.to_local(utc)?;
    let local_boundary = boundary(local)?;
    let result = zone.to_utc(local_boundary)?;
    tracing::debug!(
        zone = %zone.zone_name(),
        "{} -> local {} -> boundary {} -> {}",
        utc,
        local,
        local_boundary,
        result
    );
    Ok(result)
}

fn add_utc_years(utc: DateTime<Utc>, years: i32) -> Result<DateTime<Utc>> {
    Ok(precision::add_years(utc.naive_utc(), years)?.and_utc())
}

fn minus_utc_tick(utc: DateTime<Utc>) -> Result<DateTime<Utc>> {
    Ok(precision::minus_tick(utc.naive_utc())?.and_utc())
}

pub fn to_start_of_tz_year<Z: ZoneRules + ?Sized>(utc: DateTime<Utc>, zone: &Z) -> Result<DateTime<Utc>> {
    in_local(utc, zone, year::to_start_of_year)
}

pub fn to_start_of_next_tz_year<Z: ZoneRules + ?Sized>(
    utc: DateTime<Utc>,
    zone: &Z,
) -> Result<DateTime<Utc>> {
    in_local(utc, zone, year::to_start_of_next_year)
}

pub fn to_start_of_previous_tz_year<Z: ZoneRules + ?Sized>(
    utc: DateTime<Utc>,
    zone: &Z,
) -> Result<DateTime<Utc>> {
    add_utc_years(to_start_of_tz_year(utc, zone)?, -1)
}

pub fn to_end_of_tz_year<Z: ZoneRules + ?Sized>(utc: DateTime<Utc>, zone: &Z) -> Result<DateTime<Utc>> {
    minus_utc_tick(to_start_of_next_tz_year(utc, zone)?)
}

pub fn to_end_of_previous_tz_year<Z: ZoneRules + ?Sized>(
    utc: DateTime<Utc>,
    zone: &Z,
) -> Result<DateTime<Utc>> {
    minus_utc_tick(to_start_of_tz_year(utc, zone)?)
}

pub fn to_end_of_next_tz_year<Z: ZoneRules + ?Sized>(
    utc: DateTime<Utc>,
    zone: &Z,
) -> Result<DateTime<Utc>> {
    minus_utc_tick(add_utc_years(to_start_of_tz_year(utc, zone)?, 1)?)
}

/// [`to_start_of_tz_year`] with the zone given by IANA name.
pub fn to_start_of_tz_year_named(utc: DateTime<Utc>, zone_name: &str) -> Result<DateTime<Utc>> {
    to_start_of_tz_year(utc, &zone::lookup(zone_name)?)
}

pub fn to_end_of_tz_year_named(utc: DateTime<Utc>, zone_name: &str) -> Result<DateTime<Utc>> {
    to_end_of_tz_year(utc, &zone::lookup(zone_name)?)
}

pub fn boundaries<Z: ZoneRules + ?Sized>(utc: DateTime<Utc>, zone: &Z) -> Result<ZonedBoundaries> {
    Ok(ZonedBoundaries {
        zone: zone.zone_name(),
        start_of_year: to_start_of_tz_year(utc, zone)?,
        end_of_year: to_end_of_tz_year(utc, zone)?,
        start_of_next_year: to_start_of_next_tz_year(utc, zone)?,
        start_of_previous_year: to_start_of_previous_tz_year(utc, zone)?,
        end_of_next_year: to_end_of_next_tz_year(utc, zone)?,
        end_of_previous_year: to_end_of_previous_tz_year(utc, zone)?,
    })
}

impl YearWindow<DateTime<Utc>> {
    /// The local calendar year of `zone` containing `utc`, as UTC instants.
    pub fn in_zone<Z: ZoneRules + ?Sized>(utc: DateTime<Utc>, zone: &Z) -> Result<Self> {
        Ok(Self {
            start: to_start_of_tz_year(utc, zone)?,
            end: to_end_of_tz_year(utc, zone)?,
        })
    }
}
