pub mod toml_config;

#[cfg(feature = "cli")]
use crate::utils::error::{Result, YearBoundError};
#[cfg(feature = "cli")]
use chrono::{DateTime, Utc};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "yearbound")]
#[command(about = "Print the calendar year boundaries of an instant")]
pub struct CliConfig {
    /// Instant in RFC 3339 form; defaults to now
    #[arg(long)]
    pub at: Option<String>,

    /// IANA time zone for the zone-aware boundaries
    #[arg(short, long)]
    pub zone: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn instant(&self) -> Result<DateTime<Utc>> {
        match &self.at {
            Some(value) => DateTime::parse_from_rfc3339(value)
                .map(|dt| dt.with_timezone(&Utc))
                .map_err(|e| YearBoundError::InvalidInstant {
                    value: value.clone(),
                    reason: e.to_string(),
                }),
            None => Ok(Utc::now()),
        }
    }

    /// CLI flags win over the file configuration.
    pub fn effective_zone<'a>(&'a self, file: &'a toml_config::TomlConfig) -> Option<&'a str> {
        self.zone.as_deref().or_else(|| file.default_zone())
    }

    pub fn effective_format(&self, file: &toml_config::TomlConfig) -> OutputFormat {
        match (self.format, file.output_format()) {
            (Some(format), _) => format,
            (None, Some("json")) => OutputFormat::Json,
            _ => OutputFormat::Text,
        }
    }
}
