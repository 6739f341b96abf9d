pub mod precision;
pub mod report;
pub mod tz_year;
pub mod year;

pub use crate::domain::model::{BoundaryReport, Precision, YearWindow, TICK};
pub use crate::domain::ports::ZoneRules;
pub use crate::utils::error::Result;
