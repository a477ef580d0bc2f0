use crate::utils::error::Result;
use crate::utils::validation::{validate_host, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

/// Settings for the local development server that mimics the hosted runtime.
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "birthday-countdown")]
#[command(about = "Local API server for birthday countdown calculations")]
pub struct ServerConfig {
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    // 7071 is the port the static frontend expects during local development.
    #[arg(long, default_value = "7071")]
    pub port: u16,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<()> {
        validate_host("host", &self.host)
    }
}
