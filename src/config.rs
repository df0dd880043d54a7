// src/config.rs
use std::net::{IpAddr, SocketAddr};

use anyhow::{Context, Result};

use crate::error::ForwardError;

pub const URL_ENV: &str = "NOTEBOOK_CHAT_URL";
pub const AUTH_ENV: &str = "NOTEBOOK_GENERATION_AUTH";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

/// Upstream webhook settings. Both values may be absent; a missing value only
/// fails the request that needs it.
#[derive(Clone, Default)]
pub struct ForwarderConfig {
    pub webhook_url: Option<String>,
    pub auth_header: Option<String>,
}

impl std::fmt::Debug for ForwarderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForwarderConfig")
            .field("webhook_url", &self.webhook_url)
            .field("auth_header", &self.auth_header.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl ForwarderConfig {
    pub fn new(webhook_url: impl Into<String>, auth_header: impl Into<String>) -> Self {
        Self {
            webhook_url: Some(webhook_url.into()),
            auth_header: Some(auth_header.into()),
        }
    }

    pub fn from_env() -> Self {
        Self {
            webhook_url: non_empty_env(URL_ENV),
            auth_header: non_empty_env(AUTH_ENV),
        }
    }

    /// Returns `(url, authorization)` or `ConfigurationError` if either is unset.
    pub fn endpoint(&self) -> Result<(&str, &str), ForwardError> {
        match (self.webhook_url.as_deref(), self.auth_header.as_deref()) {
            (Some(url), Some(auth)) if !url.is_empty() && !auth.is_empty() => Ok((url, auth)),
            _ => Err(ForwardError::ConfigurationError),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_parts(non_empty_env("HOST"), non_empty_env("PORT"))
    }

    fn from_parts(host: Option<String>, port: Option<String>) -> Result<Self> {
        let host = host.unwrap_or_else(|| DEFAULT_HOST.to_string());
        let ip: IpAddr = host
            .parse()
            .with_context(|| format!("invalid HOST value: {host}"))?;

        let port = match port {
            Some(p) => p
                .parse::<u16>()
                .with_context(|| format!("invalid PORT value: {p}"))?,
            None => DEFAULT_PORT,
        };

        Ok(Self { addr: SocketAddr::new(ip, port) })
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_requires_both_values() {
        let cfg = ForwarderConfig::new("http://hook", "Bearer x");
        assert_eq!(cfg.endpoint().unwrap(), ("http://hook", "Bearer x"));

        let cfg = ForwarderConfig { webhook_url: None, ..ForwarderConfig::new("u", "a") };
        assert!(matches!(cfg.endpoint(), Err(ForwardError::ConfigurationError)));

        let cfg = ForwarderConfig { auth_header: Some(String::new()), ..ForwarderConfig::new("u", "a") };
        assert!(matches!(cfg.endpoint(), Err(ForwardError::ConfigurationError)));
    }

    #[test]
    fn debug_hides_authorization() {
        let cfg = ForwarderConfig::new("http://hook", "Bearer secret");
        let out = format!("{cfg:?}");
        assert!(!out.contains("secret"));
        assert!(out.contains("http://hook"));
    }

    #[test]
    fn server_defaults() {
        let cfg = ServerConfig::from_parts(None, None).unwrap();
        assert_eq!(cfg.addr, "0.0.0.0:3000".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn server_rejects_bad_port() {
        assert!(ServerConfig::from_parts(None, Some("http".into())).is_err());
        assert!(ServerConfig::from_parts(Some("not-an-ip".into()), None).is_err());

        let cfg = ServerConfig::from_parts(Some("127.0.0.1".into()), Some("8080".into())).unwrap();
        assert_eq!(cfg.addr.port(), 8080);
    }
}
