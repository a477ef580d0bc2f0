use thiserror::Error;

#[derive(Error, Debug)]
pub enum BirthdayError {
    #[error("Missing required parameter 'dob'")]
    MissingParameter,

    #[error("Invalid date format. Expected YYYY-MM-DD")]
    InvalidFormat,

    #[error("Date of birth cannot be in the future")]
    FutureDate,

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

impl BirthdayError {
    /// True for errors caused by the caller's input. These map to HTTP 400.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            BirthdayError::MissingParameter
                | BirthdayError::InvalidFormat
                | BirthdayError::FutureDate
        )
    }
}

pub type Result<T> = std::result::Result<T, BirthdayError>;
