use crate::core::{tz_year, year};
use crate::domain::model::BoundaryReport;
use crate::domain::ports::ZoneRules;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use std::fmt::Write;

/// Collects every year boundary of `instant`. The zone-naive set reads the
/// instant's UTC wall clock.
pub fn build_report(instant: DateTime<Utc>, zone: Option<&dyn ZoneRules>) -> Result<BoundaryReport> {
    let naive = year::boundaries(instant.naive_utc())?;
    let zoned = zone.map(|z| tz_year::boundaries(instant, z)).transpose()?;

    Ok(BoundaryReport {
        instant,
        naive,
        zoned,
    })
}

impl BoundaryReport {
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "instant                {}", self.instant.to_rfc3339());
        let n = &self.naive;
        let rows = [
            ("start of year", n.start_of_year),
            ("end of year", n.end_of_year),
            ("start of next year", n.start_of_next_year),
            ("end of next year", n.end_of_next_year),
            ("start of previous year", n.start_of_previous_year),
            ("end of previous year", n.end_of_previous_year),
        ];
        for (label, value) in rows {
            let _ = writeln!(out, "{:<22} {}", label, value.format("%Y-%m-%dT%H:%M:%S%.9f"));
        }

        if let Some(z) = &self.zoned {
            let _ = writeln!(out, "\nzone                   {}", z.zone);
            let rows = [
                ("start of year", z.start_of_year),
                ("end of year", z.end_of_year),
                ("start of next year", z.start_of_next_year),
                ("end of next year", z.end_of_next_year),
                ("start of previous year", z.start_of_previous_year),
                ("end of previous year", z.end_of_previous_year),
            ];
            for (label, value) in rows {
                let _ = writeln!(
                    out,
                    "{:<22} {}",
                    label,
                    value.to_rfc3339_opts(chrono::SecondsFormat::Nanos, true)
                );
            }
        }
        out
    }
}
