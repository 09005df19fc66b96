use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub bind_address: SocketAddr,
    pub dev_login: bool,
    /// Allowed browser origin; CORS stays closed when unset.
    pub cors_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let bind_address = std::env::var("BIND_ADDRESS")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string())
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::InvalidEnvVar {
                name: "BIND_ADDRESS".to_string(),
                reason: e.to_string(),
            })?;

        let dev_login = match std::env::var("DEV_LOGIN") {
            Ok(value) => parse_flag("DEV_LOGIN", &value)?,
            Err(_) => false,
        };

        let cors_origin = std::env::var("CORS_ORIGIN")
            .ok()
            .filter(|origin| !origin.is_empty());

        Ok(Self {
            database_url,
            bind_address,
            dev_login,
            cors_origin,
        })
    }
}

fn parse_flag(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" | "" => Ok(false),
        _ => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: format!("expected true or false, got {value:?}"),
        }),
    }
}
