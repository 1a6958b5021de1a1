use std::path::PathBuf;

use msgrelay_core::error::{RelayError, Result};

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Listen port; the gateway binds 0.0.0.0.
    pub port: u16,
    /// CORS origin allow-list.
    pub cors_origins: Vec<String>,
    pub log: LogConfig,
    pub http: HttpConfig,
    pub ws: WsConfig,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            port: 5000,
            cors_origins: vec!["http://localhost:5173".to_string()],
            log: LogConfig::default(),
            http: HttpConfig::default(),
            ws: WsConfig::default(),
        }
    }
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.cors_origins.is_empty() {
            return Err(RelayError::BadRequest(
                "CORS_ORIGIN must list at least one origin".into(),
            ));
        }
        self.http.validate()?;
        self.ws.validate()?;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    /// tracing env-filter directive (e.g. "info", "msgrelay_gateway=debug").
    pub level: String,
    /// Directory holding combined.log / error.log.
    pub dir: PathBuf,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            dir: PathBuf::from("."),
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Request body ceiling in bytes.
    pub max_body_bytes: usize,
    /// Sliding rate-limit window.
    pub rate_limit_window_ms: u64,
    /// Max requests per window per caller on /api/*.
    pub rate_limit_max: usize,
    /// Size cap for the per-IP limiter table.
    pub rate_limit_max_ips: usize,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: 10 * 1024 * 1024,
            rate_limit_window_ms: 15 * 60 * 1000,
            rate_limit_max: 100,
            rate_limit_max_ips: 10_000,
        }
    }
}

impl HttpConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_body_bytes == 0 {
            return Err(RelayError::BadRequest(
                "RELAY_MAX_BODY_BYTES must be nonzero".into(),
            ));
        }
        if self.rate_limit_window_ms < 1000 {
            return Err(RelayError::BadRequest(
                "RELAY_RATE_LIMIT_WINDOW_MS must be at least 1000".into(),
            ));
        }
        if self.rate_limit_max == 0 {
            return Err(RelayError::BadRequest(
                "RELAY_RATE_LIMIT_MAX must be at least 1".into(),
            ));
        }
        if self.rate_limit_max_ips == 0 {
            return Err(RelayError::BadRequest(
                "RELAY_RATE_LIMIT_MAX_IPS must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct WsConfig {
    pub ping_interval_ms: u64,
    pub idle_timeout_ms: u64,
    /// Inbound frame ceiling in bytes.
    pub max_frame_bytes: usize,
}

impl Default for WsConfig {
    fn default() -> Self {
        Self {
            ping_interval_ms: 20_000,
            idle_timeout_ms: 60_000,
            max_frame_bytes: 64 * 1024,
        }
    }
}

impl WsConfig {
    pub fn validate(&self) -> Result<()> {
        if !(5000..=120_000).contains(&self.ping_interval_ms) {
            return Err(RelayError::BadRequest(
                "RELAY_PING_INTERVAL_MS must be between 5000 and 120000".into(),
            ));
        }
        if !(10_000..=600_000).contains(&self.idle_timeout_ms) {
            return Err(RelayError::BadRequest(
                "RELAY_IDLE_TIMEOUT_MS must be between 10000 and 600000".into(),
            ));
        }
        if self.idle_timeout_ms <= self.ping_interval_ms {
            return Err(RelayError::BadRequest(
                "RELAY_IDLE_TIMEOUT_MS must be greater than RELAY_PING_INTERVAL_MS".into(),
            ));
        }
        if self.max_frame_bytes == 0 {
            return Err(RelayError::BadRequest(
                "RELAY_MAX_FRAME_BYTES must be nonzero".into(),
            ));
        }
        Ok(())
    }
}
