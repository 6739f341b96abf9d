pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, OutputFormat};

pub use adapters::zone::lookup as lookup_zone;
pub use crate::core::precision::{add_years, end_of_precision, start_of_precision};
pub use crate::core::report::build_report;
pub use crate::core::tz_year::{
    to_end_of_next_tz_year, to_end_of_previous_tz_year, to_end_of_tz_year,
    to_end_of_tz_year_named, to_start_of_next_tz_year, to_start_of_previous_tz_year,
    to_start_of_tz_year, to_start_of_tz_year_named,
};
pub use crate::core::year::{
    to_end_of_next_year, to_end_of_previous_year, to_end_of_year, to_start_of_next_year,
    to_start_of_previous_year, to_start_of_year,
};
pub use domain::model::{BoundaryReport, Precision, YearWindow, TICK};
pub use domain::ports::ZoneRules;
pub use utils::error::{Result, YearBoundError};
