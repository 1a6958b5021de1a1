//! Operational HTTP endpoints.
//!
//! - `GET /health`        : liveness probe with a current timestamp
//! - `GET /api/v1/status` : fixed API descriptor

use axum::response::IntoResponse;
use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde_json::json;

fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "OK", "timestamp": now_iso() }))
}

pub async fn api_status() -> impl IntoResponse {
    Json(json!({ "status": "API is running", "version": "1.0.0" }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_timestamp_is_rfc3339() {
        let ts = now_iso();
        assert!(chrono::DateTime::parse_from_rfc3339(&ts).is_ok());
        assert!(ts.ends_with('Z'));
    }
}
