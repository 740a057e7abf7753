use std::env;
use std::net::SocketAddr;

use thiserror::Error;

use crate::seed::DEFAULT_SEMESTER;

pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_UPLOAD_ENDPOINT: &str = "http://localhost:8080/api/lecture/upload";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("COURSE_HUB_ADDR is not a socket address: {0}")]
    InvalidAddr(String),

    #[error("UPLOAD_ENABLED must be true or false, got {0}")]
    InvalidFlag(String),
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub addr: SocketAddr,
    pub upload_endpoint: String,
    pub upload_enabled: bool,
    pub semester: String,
}

impl AppConfig {
    pub fn new_from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_addr = lookup("COURSE_HUB_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = raw_addr
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidAddr(raw_addr.clone()))?;

        let upload_endpoint =
            lookup("UPLOAD_ENDPOINT").unwrap_or_else(|| DEFAULT_UPLOAD_ENDPOINT.to_string());

        let upload_enabled = match lookup("UPLOAD_ENABLED") {
            None => true,
            Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => return Err(ConfigError::InvalidFlag(raw)),
            },
        };

        let semester = lookup("DEFAULT_SEMESTER").unwrap_or_else(|| DEFAULT_SEMESTER.to_string());

        Ok(Self {
            addr,
            upload_endpoint,
            upload_enabled,
            semester,
        })
    }
}
