//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// `PORT` is set but is not a valid port number.
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub host: String,
    pub port: u16,
}

impl SiteConfig {
    /// Build host config from environment variables.
    ///
    /// Optional:
    /// - `SITE_ADDR`: bind host, default `0.0.0.0`
    /// - `PORT`: default 3000
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidPort` if `PORT` does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(std::env::var("SITE_ADDR").ok().as_deref(), std::env::var("PORT").ok().as_deref())
    }

    /// Same rules as `from_env`, over explicit values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidPort` if `port` does not parse.
    pub fn from_values(host: Option<&str>, port: Option<&str>) -> Result<Self, ConfigError> {
        let host = host.map(str::trim).filter(|h| !h.is_empty()).unwrap_or(DEFAULT_HOST).to_owned();
        Ok(Self { host, port: parse_port(port)? })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidPort(value.to_owned())),
    }
}
