use chrono::NaiveDateTime;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum YearBoundError {
    #[error("Date arithmetic out of range: {operation} on {value}")]
    OutOfRange {
        operation: &'static str,
        value: String,
    },

    #[error("Invalid time zone '{name}': {reason}")]
    InvalidTimeZone { name: String, reason: String },

    #[error("Local time {local} does not exist in zone {zone}")]
    NonexistentLocalTime { local: NaiveDateTime, zone: String },

    #[error("Invalid instant '{value}': {reason}")]
    InvalidInstant { value: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Calculation,
    TimeZone,
    Input,
    Configuration,
    System,
}

impl YearBoundError {
    pub(crate) fn out_of_range(operation: &'static str, value: impl ToString) -> Self {
        YearBoundError::OutOfRange {
            operation,
            value: value.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            YearBoundError::OutOfRange { .. } => ErrorCategory::Calculation,
            YearBoundError::InvalidTimeZone { .. }
            | YearBoundError::NonexistentLocalTime { .. } => ErrorCategory::TimeZone,
            YearBoundError::InvalidInstant { .. } => ErrorCategory::Input,
            YearBoundError::ConfigValidationError { .. }
            | YearBoundError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            YearBoundError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Calculation => {
                "Use an instant further from the minimum or maximum supported year"
            }
            ErrorCategory::TimeZone => {
                "Check the zone name against the IANA database, e.g. 'America/New_York'"
            }
            ErrorCategory::Input => "Pass the instant in RFC 3339 form, e.g. 2024-06-15T10:30:00Z",
            ErrorCategory::Configuration => "Review the configuration file and CLI arguments",
            ErrorCategory::System => "Check that the file exists and is readable",
        }
    }
}

pub type Result<T> = std::result::Result<T, YearBoundError>;
