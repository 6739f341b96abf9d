use crate::domain::ports::ZoneRules;
use crate::utils::error::{Result, YearBoundError};
use chrono::offset::LocalResult;
use chrono::{DateTime, FixedOffset, NaiveDateTime, Offset, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;

/// Resolves an IANA zone name such as `Europe/Berlin` (or `UTC`).
pub fn lookup(name: &str) -> Result<Tz> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(YearBoundError::InvalidTimeZone {
            name: name.to_string(),
            reason: "zone name is empty".to_string(),
        });
    }

    trimmed.parse::<Tz>().map_err(|e| {
        tracing::debug!("zone lookup failed for '{}': {}", trimmed, e);
        YearBoundError::InvalidTimeZone {
            name: trimmed.to_string(),
            reason: e.to_string(),
        }
    })
}

fn local_of<Z: TimeZone>(zone: &Z, utc: DateTime<Utc>) -> Result<NaiveDateTime> {
    let naive = utc.naive_utc();
    let offset = zone.offset_from_utc_datetime(&naive).fix();
    naive
        .checked_add_signed(TimeDelta::seconds(offset.local_minus_utc().into()))
        .ok_or_else(|| YearBoundError::out_of_range("to_local", utc))
}

fn shift_to_utc(local: NaiveDateTime, offset: FixedOffset) -> Result<DateTime<Utc>> {
    local
        .checked_sub_signed(TimeDelta::seconds(offset.local_minus_utc().into()))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| YearBoundError::out_of_range("to_utc", local))
}

fn utc_of<Z: TimeZone>(zone: &Z, name: impl FnOnce() -> String, local: NaiveDateTime) -> Result<DateTime<Utc>> {
    match zone.offset_from_local_datetime(&local) {
        LocalResult::Single(offset) => shift_to_utc(local, offset.fix()),
        LocalResult::Ambiguous(first, second) => {
            // Overlap: take the standard-time reading, which is the later instant.
            let a = shift_to_utc(local, first.fix())?;
            let b = shift_to_utc(local, second.fix())?;
            tracing::debug!("{} is ambiguous, choosing {}", local, a.max(b));
            Ok(a.max(b))
        }
        LocalResult::None => {
            let zone = name();
            tracing::warn!("{} falls in a transition gap of {}", local, zone);
            Err(YearBoundError::NonexistentLocalTime { local, zone })
        }
    }
}

impl ZoneRules for Tz {
    fn zone_name(&self) -> String {
        self.name().to_string()
    }

    fn to_local(&self, utc: DateTime<Utc>) -> Result<NaiveDateTime> {
        local_of(self, utc)
    }

    fn to_utc(&self, local: NaiveDateTime) -> Result<DateTime<Utc>> {
        utc_of(self, || self.zone_name(), local)
    }
}

impl ZoneRules for FixedOffset {
    fn zone_name(&self) -> String {
        self.to_string()
    }

    fn to_local(&self, utc: DateTime<Utc>) -> Result<NaiveDateTime> {
        local_of(self, utc)
    }

    fn to_utc(&self, local: NaiveDateTime) -> Result<DateTime<Utc>> {
        utc_of(self, || self.zone_name(), local)
    }
}

impl ZoneRules for Utc {
    fn zone_name(&self) -> String {
        "UTC".to_string()
    }

    fn to_local(&self, utc: DateTime<Utc>) -> Result<NaiveDateTime> {
        Ok(utc.naive_utc())
    }

    fn to_utc(&self, local: NaiveDateTime) -> Result<DateTime<Utc>> {
        Ok(local.and_utc())
    }
}
