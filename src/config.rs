//! Process configuration read from environment variables (and `.env`).

use std::net::IpAddr;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} has an invalid value {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Token validation settings.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    /// Expected `iss` claim, checked only when set.
    pub issuer: Option<String>,
    /// Expected `aud` claim, checked only when set.
    pub audience: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    /// First port tried; the server walks up to 20 ports past it when busy.
    pub port: u16,
    pub jwt: JwtConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = match lookup("HOST") {
            Some(v) => v.parse().map_err(|_| ConfigError::Invalid { name: "HOST", value: v })?,
            None => IpAddr::from([127, 0, 0, 1]),
        };
        let port = match lookup("PORT") {
            Some(v) => v.parse().map_err(|_| ConfigError::Invalid { name: "PORT", value: v })?,
            None => 3000,
        };

        Ok(Self {
            host,
            port,
            jwt: JwtConfig::from_lookup(&lookup)?,
        })
    }
}

impl JwtConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = lookup("JWT_SECRET")
            .filter(|s| !s.trim().is_empty())
            .ok_or(ConfigError::Missing("JWT_SECRET"))?;

        Ok(Self {
            secret,
            issuer: lookup("JWT_ISSUER").filter(|s| !s.is_empty()),
            audience: lookup("JWT_AUDIENCE").filter(|s| !s.is_empty()),
        })
    }
}
