//! Runtime configuration.
//!
//! Everything is read from `SAMVIDHA_GATEWAY_*` environment variables with
//! sensible defaults; the CLI may override the bind address and port on top.

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::time::Duration;
use url::Url;

/// Upstream portal used when `SAMVIDHA_GATEWAY_PORTAL_URL` is unset.
pub const DEFAULT_PORTAL_URL: &str = "https://samvidha.iare.ac.in";

/// Default listen address for the REST API.
const DEFAULT_BIND: &str = "0.0.0.0";

/// Default listen port for the REST API.
const DEFAULT_PORT: u16 = 5000;

/// Default deadline for every outbound portal request.
const DEFAULT_UPSTREAM_TIMEOUT_MS: u64 = 15_000;

/// Gateway configuration shared by the server and the one-shot CLI commands.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the upstream portal.
    pub portal_url: Url,
    /// Address the REST API listens on.
    pub bind: SocketAddr,
    /// Deadline applied to each outbound portal request.
    pub upstream_timeout: Duration,
}

impl Config {
    /// Load configuration from the environment, falling back to defaults.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            portal_url: parse_portal_url(env_var("SAMVIDHA_GATEWAY_PORTAL_URL"))?,
            bind: parse_bind(
                env_var("SAMVIDHA_GATEWAY_BIND"),
                env_var("SAMVIDHA_GATEWAY_PORT"),
            )?,
            upstream_timeout: parse_timeout(env_var("SAMVIDHA_GATEWAY_UPSTREAM_TIMEOUT_MS"))?,
        })
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse_portal_url(raw: Option<String>) -> Result<Url> {
    let raw = raw.unwrap_or_else(|| DEFAULT_PORTAL_URL.to_string());
    let url: Url = raw
        .parse()
        .with_context(|| format!("invalid portal URL '{raw}'"))?;
    if url.cannot_be_a_base() {
        anyhow::bail!("portal URL '{raw}' cannot be used as a base URL");
    }
    Ok(url)
}

fn parse_bind(host: Option<String>, port: Option<String>) -> Result<SocketAddr> {
    let host = host.unwrap_or_else(|| DEFAULT_BIND.to_string());
    let port = match port {
        Some(p) => p
            .parse::<u16>()
            .with_context(|| format!("invalid port '{p}'"))?,
        None => DEFAULT_PORT,
    };
    format!("{host}:{port}")
        .parse()
        .with_context(|| format!("invalid bind address '{host}:{port}'"))
}

fn parse_timeout(raw: Option<String>) -> Result<Duration> {
    let ms = match raw {
        Some(v) => v
            .parse::<u64>()
            .with_context(|| format!("invalid timeout '{v}' (expected milliseconds)"))?,
        None => DEFAULT_UPSTREAM_TIMEOUT_MS,
    };
    Ok(Duration::from_millis(ms))
}
