//! Server configuration parsed from environment variables.
//!
//! `.env` is loaded by `main` before anything here runs, so values may come
//! from either the process environment or that file.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: &str = "0.0.0.0";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServerConfigError {
    #[error("invalid {var}: '{value}' is not a TCP port")]
    InvalidPort { var: String, value: String },
    #[error("{var} must not be empty")]
    EmptyHost { var: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Build server config from environment variables.
    ///
    /// Optional:
    /// - `HOST`: bind address, default `0.0.0.0`
    /// - `PORT`: default 3000
    ///
    /// # Errors
    ///
    /// Returns [`ServerConfigError`] when `PORT` is not a valid port or `HOST`
    /// is set but blank.
    pub fn from_env() -> Result<Self, ServerConfigError> {
        Ok(Self { host: env_host("HOST")?, port: env_port("PORT")? })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn env_port(key: &str) -> Result<u16, ServerConfigError> {
    match std::env::var(key) {
        Err(_) => Ok(DEFAULT_PORT),
        Ok(raw) => raw
            .trim()
            .parse::<u16>()
            .ok()
            .filter(|port| *port != 0)
            .ok_or(ServerConfigError::InvalidPort { var: key.to_owned(), value: raw }),
    }
}

fn env_host(key: &str) -> Result<String, ServerConfigError> {
    match std::env::var(key) {
        Err(_) => Ok(DEFAULT_HOST.to_owned()),
        Ok(raw) if raw.trim().is_empty() => Err(ServerConfigError::EmptyHost { var: key.to_owned() }),
        Ok(raw) => Ok(raw.trim().to_owned()),
    }
}
