//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 64 * 1024 * 1024;
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?} ({reason})")]
    Invalid { var: &'static str, value: String, reason: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Backend origin without a trailing slash.
    pub backend_url: String,
    pub body_limit_bytes: usize,
    pub upstream_timeout_secs: u64,
}

impl ServerConfig {
    /// Build typed config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BACKEND_URL`: default `http://localhost:8000`
    /// - `BODY_LIMIT_BYTES`: default 64 MiB (uploads carry up to ten images)
    /// - `UPSTREAM_TIMEOUT_SECS`: default 60
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for a value that does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`] over an arbitrary lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for a value that does not parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let backend_url = parse_backend_url(lookup("BACKEND_URL"))?;
        let body_limit_bytes = parse_or("BODY_LIMIT_BYTES", lookup("BODY_LIMIT_BYTES"), DEFAULT_BODY_LIMIT_BYTES)?;
        let upstream_timeout_secs =
            parse_or("UPSTREAM_TIMEOUT_SECS", lookup("UPSTREAM_TIMEOUT_SECS"), DEFAULT_UPSTREAM_TIMEOUT_SECS)?;
        if upstream_timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                var: "UPSTREAM_TIMEOUT_SECS",
                value: "0".to_owned(),
                reason: "must be positive",
            });
        }
        Ok(Self { port, backend_url, body_limit_bytes, upstream_timeout_secs })
    }
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value: value.to_owned(), reason: "not a number" }),
    }
}

fn parse_backend_url(raw: Option<String>) -> Result<String, ConfigError> {
    let value = raw.as_deref().map(str::trim).filter(|v| !v.is_empty()).unwrap_or(DEFAULT_BACKEND_URL);
    if !(value.starts_with("http://") || value.starts_with("https://")) {
        return Err(ConfigError::Invalid {
            var: "BACKEND_URL",
            value: value.to_owned(),
            reason: "expected an http:// or https:// origin",
        });
    }
    Ok(value.trim_end_matches('/').to_owned())
}
