//! Ingress policy: per-caller rate limiting for the REST surface.
//!
//! Applied to the `/api` subtree only; `/health` and `/ws` are exempt.

mod rate_limit;

pub use rate_limit::RateLimiter;

use std::net::SocketAddr;

use axum::extract::{ConnectInfo, Request, State};
use axum::http::{header, HeaderValue};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use msgrelay_core::error::RelayError;

use crate::app_state::AppState;
use crate::error::ApiError;

/// Middleware: reject (never queue) callers over the window limit.
pub async fn api_rate_limit(
    State(app): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    req: Request,
    next: Next,
) -> Response {
    match app.api_limiter().check(addr.ip()) {
        Ok(()) => next.run(req).await,
        Err(retry_after) => {
            tracing::warn!(ip = %addr.ip(), retry_after, "api rate limit exceeded");
            let mut resp = ApiError(RelayError::RateLimited).into_response();
            if let Ok(v) = HeaderValue::from_str(&retry_after.to_string()) {
                resp.headers_mut().insert(header::RETRY_AFTER, v);
            }
            resp
        }
    }
}
