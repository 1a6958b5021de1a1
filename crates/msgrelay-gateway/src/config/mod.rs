//! Gateway config loader (environment-based, strict parsing).
//!
//! The relay is configured entirely through environment variables; every
//! value has a default, and `from_lookup` takes the variable source as a
//! closure so tests never touch process-wide env state.

pub mod schema;

use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

use msgrelay_core::error::{RelayError, Result};

pub use schema::{GatewayConfig, HttpConfig, LogConfig, WsConfig};

pub fn load_from_env() -> Result<GatewayConfig> {
    from_lookup(|key| std::env::var(key).ok())
}

pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<GatewayConfig> {
    let mut cfg = GatewayConfig::default();

    if let Some(v) = lookup("PORT") {
        cfg.port = parse(&v, "PORT")?;
    }
    if let Some(v) = lookup("CORS_ORIGIN") {
        cfg.cors_origins = v
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
    }
    if let Some(v) = lookup("LOG_LEVEL") {
        cfg.log.level = v;
    }
    if let Some(v) = lookup("RELAY_LOG_DIR") {
        cfg.log.dir = PathBuf::from(v);
    }
    if let Some(v) = lookup("RELAY_MAX_BODY_BYTES") {
        cfg.http.max_body_bytes = parse(&v, "RELAY_MAX_BODY_BYTES")?;
    }
    if let Some(v) = lookup("RELAY_RATE_LIMIT_WINDOW_MS") {
        cfg.http.rate_limit_window_ms = parse(&v, "RELAY_RATE_LIMIT_WINDOW_MS")?;
    }
    if let Some(v) = lookup("RELAY_RATE_LIMIT_MAX") {
        cfg.http.rate_limit_max = parse(&v, "RELAY_RATE_LIMIT_MAX")?;
    }
    if let Some(v) = lookup("RELAY_RATE_LIMIT_MAX_IPS") {
        cfg.http.rate_limit_max_ips = parse(&v, "RELAY_RATE_LIMIT_MAX_IPS")?;
    }
    if let Some(v) = lookup("RELAY_PING_INTERVAL_MS") {
        cfg.ws.ping_interval_ms = parse(&v, "RELAY_PING_INTERVAL_MS")?;
    }
    if let Some(v) = lookup("RELAY_IDLE_TIMEOUT_MS") {
        cfg.ws.idle_timeout_ms = parse(&v, "RELAY_IDLE_TIMEOUT_MS")?;
    }
    if let Some(v) = lookup("RELAY_MAX_FRAME_BYTES") {
        cfg.ws.max_frame_bytes = parse(&v, "RELAY_MAX_FRAME_BYTES")?;
    }

    cfg.validate()?;
    Ok(cfg)
}

fn parse<T: FromStr>(raw: &str, key: &str) -> Result<T>
where
    T::Err: Display,
{
    raw.trim()
        .parse()
        .map_err(|e| RelayError::BadRequest(format!("invalid {key}: {e}")))
}
