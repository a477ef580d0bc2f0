pub mod core;
pub mod utils;

#[cfg(feature = "cli")]
pub mod api;
#[cfg(feature = "cli")]
pub mod config;

#[cfg(feature = "cli")]
pub use config::ServerConfig;

pub use crate::core::response::{AgeSummary, BirthdaySummary, ErrorBody};
pub use crate::core::{age_report, birthday_report};
pub use utils::error::{BirthdayError, Result};
