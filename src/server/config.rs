use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_HTTP_ADDR: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,

    /// Credentials of the administrator account seeded at startup.
    pub admin_email: String,
    pub admin_password: String,

    pub http_addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let http_addr = std::env::var("HTTP_ADDR").unwrap_or_else(|_| DEFAULT_HTTP_ADDR.to_string());
        let http_addr = http_addr
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: "HTTP_ADDR".to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            admin_email: required("ADMIN_EMAIL")?,
            admin_password: required("ADMIN_PASSWORD")?,
            http_addr,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}
