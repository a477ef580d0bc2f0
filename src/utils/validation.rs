use crate::utils::error::{BirthdayError, Result};
use std::net::IpAddr;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_host(field_name: &str, host: &str) -> Result<()> {
    if host.trim().is_empty() {
        return Err(BirthdayError::ConfigError {
            message: format!("{} cannot be empty", field_name),
        });
    }

    if host != "localhost" && host.parse::<IpAddr>().is_err() {
        return Err(BirthdayError::ConfigError {
            message: format!("{} must be 'localhost' or an IP address, got '{}'", field_name, host),
        });
    }

    Ok(())
}
