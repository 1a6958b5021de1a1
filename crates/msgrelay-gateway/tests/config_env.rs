//! Environment config loading (strict parsing + validation).

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::collections::HashMap;

use msgrelay_gateway::config;

fn load(vars: &[(&str, &str)]) -> msgrelay_core::Result<config::GatewayConfig> {
    let map: HashMap<&str, &str> = vars.iter().copied().collect();
    config::from_lookup(|k| map.get(k).map(|v| v.to_string()))
}

#[test]
fn defaults_apply_with_empty_env() {
    let cfg = load(&[]).unwrap();
    assert_eq!(cfg.port, 5000);
    assert_eq!(cfg.cors_origins, vec!["http://localhost:5173".to_string()]);
    assert_eq!(cfg.log.level, "info");
    assert_eq!(cfg.http.max_body_bytes, 10 * 1024 * 1024);
    assert_eq!(cfg.http.rate_limit_window_ms, 900_000);
    assert_eq!(cfg.http.rate_limit_max, 100);
    assert_eq!(cfg.ws.ping_interval_ms, 20_000);
    assert_eq!(cfg.ws.idle_timeout_ms, 60_000);
}

#[test]
fn overrides_parse() {
    let cfg = load(&[
        ("PORT", "8080"),
        ("CORS_ORIGIN", "https://a.example, https://b.example"),
        ("LOG_LEVEL", "debug"),
        ("RELAY_RATE_LIMIT_MAX", "10"),
        ("RELAY_RATE_LIMIT_WINDOW_MS", "60000"),
        ("RELAY_MAX_BODY_BYTES", "1048576"),
    ])
    .unwrap();

    assert_eq!(cfg.port, 8080);
    assert_eq!(
        cfg.cors_origins,
        vec!["https://a.example".to_string(), "https://b.example".to_string()]
    );
    assert_eq!(cfg.log.level, "debug");
    assert_eq!(cfg.http.rate_limit_max, 10);
    assert_eq!(cfg.http.rate_limit_window_ms, 60_000);
    assert_eq!(cfg.http.max_body_bytes, 1_048_576);
}

#[test]
fn invalid_port_is_rejected() {
    let err = load(&[("PORT", "not-a-port")]).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn idle_timeout_must_exceed_ping_interval() {
    let err = load(&[
        ("RELAY_PING_INTERVAL_MS", "30000"),
        ("RELAY_IDLE_TIMEOUT_MS", "20000"),
    ])
    .expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn zero_rate_limit_is_rejected() {
    assert!(load(&[("RELAY_RATE_LIMIT_MAX", "0")]).is_err());
}

#[test]
fn empty_cors_list_is_rejected() {
    assert!(load(&[("CORS_ORIGIN", " , ")]).is_err());
}
