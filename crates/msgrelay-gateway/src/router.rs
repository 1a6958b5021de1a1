//! Axum router wiring (status endpoints, `/api` hardening, WS upgrade).
//!
//! Middleware order, outermost first: body-size ceiling, CORS, security
//! headers, panic catcher. The rate limit applies to the `/api` subtree only.

use axum::http::{header, HeaderValue, Method};
use axum::{middleware, routing::get, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::set_header::SetResponseHeaderLayer;

use msgrelay_core::error::{RelayError, Result};

use crate::{app_state::AppState, error, ops, policy, transport};

pub fn build_router(state: AppState) -> Result<Router> {
    let cors = cors_layer(&state)?;
    let max_body_bytes = state.cfg().http.max_body_bytes;

    let api = Router::new()
        .route("/v1/status", get(ops::api_status))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            policy::api_rate_limit,
        ));

    Ok(Router::new()
        .route("/health", get(ops::health))
        .nest("/api", api)
        .route("/ws", get(transport::ws::ws_upgrade))
        .fallback(error::not_found)
        .layer(CatchPanicLayer::custom(error::handle_panic))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::REFERRER_POLICY,
            HeaderValue::from_static("no-referrer"),
        ))
        .layer(cors)
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .with_state(state))
}

fn cors_layer(state: &AppState) -> Result<CorsLayer> {
    let mut origins = Vec::new();
    for o in &state.cfg().cors_origins {
        origins.push(
            HeaderValue::from_str(o)
                .map_err(|e| RelayError::BadRequest(format!("invalid CORS origin {o:?}: {e}")))?,
        );
    }

    // credentials + explicit lists (wildcards are rejected by tower-http
    // when credentials are allowed)
    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true))
}
