use crate::adapters::zone;
use crate::utils::error::{Result, YearBoundError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_zone_name(field_name: &str, name: &str) -> Result<()> {
    zone::lookup(name).map(|_| ()).map_err(|e| match e {
        YearBoundError::InvalidTimeZone { reason, .. } => YearBoundError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason,
        },
        other => other,
    })
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(YearBoundError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Unsupported value. Valid values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(YearBoundError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_zone_name() {
        assert!(validate_zone_name("defaults.zone", "Europe/Berlin").is_ok());
        assert!(validate_zone_name("defaults.zone", "Europe/Atlantis").is_err());
    }

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("logging.format", "json", &["text", "json"]).is_ok());
        assert!(validate_one_of("logging.format", "xml", &["text", "json"]).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("defaults.zone", "UTC").is_ok());
        assert!(validate_non_empty_string("defaults.zone", "  ").is_err());
    }
}
