use crate::utils::error::Result;
use chrono::{DateTime, NaiveDateTime, Utc};

/// Read-only time zone rules: UTC to wall-clock and back.
///
/// Implementations must be pure; the same input always yields the same
/// output. Ambiguous wall-clock times resolve to the standard-time reading
/// (the later UTC instant) and wall-clock times skipped by a transition fail
/// with [`crate::YearBoundError::NonexistentLocalTime`].
pub trait ZoneRules {
    /// Name used in logs and error messages.
    fn zone_name(&self) -> String;

    fn to_local(&self, utc: DateTime<Utc>) -> Result<NaiveDateTime>;

    fn to_utc(&self, local: NaiveDateTime) -> Result<DateTime<Utc>>;
}
