use chrono::{DateTime, NaiveDateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// Smallest step between two representable instants.
pub const TICK: TimeDelta = TimeDelta::nanoseconds(1);

/// Calendar granularity used by the truncation primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

/// One calendar year expressed as an inclusive pair of instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearWindow<T> {
    pub start: T,
    pub end: T,
}

impl<T: PartialOrd> YearWindow<T> {
    pub fn contains(&self, instant: &T) -> bool {
        self.start <= *instant && *instant <= self.end
    }
}

/// Every year boundary of a single instant, zone-naive and (optionally) zone-aware.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundaryReport {
    pub instant: DateTime<Utc>,
    pub naive: NaiveBoundaries,
    pub zoned: Option<ZonedBoundaries>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NaiveBoundaries {
    pub start_of_year: NaiveDateTime,
    pub end_of_year: NaiveDateTime,
    pub start_of_next_year: NaiveDateTime,
    pub start_of_previous_year: NaiveDateTime,
    pub end_of_next_year: NaiveDateTime,
    pub end_of_previous_year: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZonedBoundaries {
    pub zone: String,
    pub start_of_year: DateTime<Utc>,
    pub end_of_year: DateTime<Utc>,
    pub start_of_next_year: DateTime<Utc>,
    pub start_of_previous_year: DateTime<Utc>,
    pub end_of_next_year: DateTime<Utc>,
    pub end_of_previous_year: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precision_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            precision: Precision,
        }

        let parsed: Wrapper = toml::from_str(r#"precision = "year""#).unwrap();
        assert_eq!(parsed.precision, Precision::Year);
    }

    #[test]
    fn test_window_contains_is_inclusive() {
        let window = YearWindow { start: 1, end: 10 };
        assert!(window.contains(&1));
        assert!(window.contains(&10));
        assert!(!window.contains(&11));
    }
}
