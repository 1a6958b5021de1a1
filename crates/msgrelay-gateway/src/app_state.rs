//! Shared application state for the msgrelay gateway.

use std::sync::Arc;
use std::time::Duration;

use crate::config::GatewayConfig;
use crate::policy::RateLimiter;
use crate::relay::RelayCore;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: GatewayConfig,
    relay: RelayCore,
    api_limiter: RateLimiter,
}

impl AppState {
    pub fn new(cfg: GatewayConfig) -> Self {
        let api_limiter = RateLimiter::new(
            Duration::from_millis(cfg.http.rate_limit_window_ms),
            cfg.http.rate_limit_max,
            cfg.http.rate_limit_max_ips,
        );
        Self {
            inner: Arc::new(AppStateInner {
                relay: RelayCore::new(),
                api_limiter,
                cfg,
            }),
        }
    }

    pub fn cfg(&self) -> &GatewayConfig {
        &self.inner.cfg
    }

    pub fn relay(&self) -> &RelayCore {
        &self.inner.relay
    }

    pub fn api_limiter(&self) -> &RateLimiter {
        &self.inner.api_limiter
    }
}
