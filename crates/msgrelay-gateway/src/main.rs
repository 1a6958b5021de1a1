//! msgrelay Gateway
//!
//! Focus: transport & lifecycle
//! - Status endpoints: GET /health, GET /api/v1/status (rate limited)
//! - WebSocket endpoint: GET /ws
//! - Fan-out relay for user:online / message:send / message:typing
//! - Heartbeat ping + idle timeout per session

use std::net::SocketAddr;

use msgrelay_gateway::{app_state, config, obs, router};

#[tokio::main]
async fn main() {
    let cfg = config::load_from_env().expect("config load failed");
    obs::logging::init(&cfg.log).expect("logging init failed");

    let listen = SocketAddr::from(([0, 0, 0, 0], cfg.port));

    let state = app_state::AppState::new(cfg);
    let app = router::build_router(state).expect("router build failed");

    tracing::info!(%listen, "msgrelay-gateway starting");
    let listener = tokio::net::TcpListener::bind(listen).await.expect("failed to bind");

    // ConnectInfo gives the rate limiter the caller's remote address.
    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .await
        .expect("server failed");
}
