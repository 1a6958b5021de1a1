//! WebSocket relay handler.
//!
//! Responsibilities:
//! - Upgrade HTTP -> WS and register the session with the relay
//! - Lifecycle: ping/pong + idle timeout
//! - Decode-once, then fan inbound events out to all other sessions
//!
//! Events from one connection are handled in arrival order by this loop; no
//! ordering is guaranteed across connections.

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::Response;
use futures_util::{SinkExt, StreamExt};
use serde_json::json;
use tokio::sync::mpsc;
use tokio::time::{Duration, Instant};

use msgrelay_core::error::ClientCode;
use msgrelay_core::protocol::{encode_broadcast, EventKind};

use crate::app_state::AppState;
use crate::transport::codec::{self, Inbound};

fn error_frame(code: &str, msg: &str) -> String {
    json!({
        "event": "error",
        "data": { "code": code, "message": msg }
    })
    .to_string()
}

pub async fn ws_upgrade(State(app): State<AppState>, ws: WebSocketUpgrade) -> Response {
    ws.on_upgrade(move |socket| run_session(app, socket))
}

async fn run_session(app: AppState, socket: WebSocket) {
    let ping_every = Duration::from_millis(app.cfg().ws.ping_interval_ms);
    let idle_timeout = Duration::from_millis(app.cfg().ws.idle_timeout_ms);
    let max_frame_bytes = app.cfg().ws.max_frame_bytes;

    // ---- outbound channel
    let (out_tx, mut out_rx) = mpsc::channel::<Message>(256);

    // ---- split socket
    let (mut ws_tx, mut ws_rx) = socket.split();

    let session_id = app.relay().connect(out_tx.clone());

    let mut ping_tick = tokio::time::interval(ping_every);
    ping_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    let mut last_activity = Instant::now();

    loop {
        tokio::select! {
            // outbound writer
            maybe_out = out_rx.recv() => {
                match maybe_out {
                    Some(m) => {
                        if ws_tx.send(m).await.is_err() {
                            break;
                        }
                    }
                    None => break,
                }
            }

            // inbound reader
            incoming = ws_rx.next() => {
                let Some(incoming) = incoming else { break; };
                let Ok(msg) = incoming else { break; };

                last_activity = Instant::now();

                // cheap-first: size ceiling before any decode
                if codec::frame_len(&msg) > max_frame_bytes {
                    let _ = out_tx
                        .send(Message::Text(error_frame(
                            ClientCode::PayloadTooLarge.as_str(),
                            "frame too large",
                        )))
                        .await;
                    break;
                }

                match codec::decode(msg) {
                    Ok(Inbound::Event { env, .. }) => {
                        let Some(kind) = EventKind::from_name(&env.event) else {
                            // no handler registered for this name: drop it
                            tracing::debug!(session = session_id, event = %env.event, "ignoring unknown event");
                            continue;
                        };
                        match encode_broadcast(kind, env.data.as_deref()) {
                            Ok(frame) => {
                                let delivered = app.relay().broadcast_from(session_id, &frame);
                                tracing::debug!(
                                    session = session_id,
                                    event = %env.event,
                                    delivered,
                                    "event fanned out"
                                );
                            }
                            Err(e) => {
                                tracing::error!(session = session_id, error = %e, "broadcast encode failed");
                            }
                        }
                    }
                    Ok(Inbound::Ping(payload)) => {
                        let _ = out_tx.send(Message::Pong(payload)).await;
                    }
                    Ok(Inbound::Pong) => {}
                    Ok(Inbound::Close) => break,
                    Err(e) => {
                        // malformed frame: tell the sender, keep the session
                        let _ = out_tx
                            .send(Message::Text(error_frame(
                                e.client_code().as_str(),
                                &e.to_string(),
                            )))
                            .await;
                    }
                }
            }

            // heartbeat ping
            _ = ping_tick.tick() => {
                let _ = out_tx.send(Message::Ping(Vec::new())).await;
            }

            // idle timeout
            _ = tokio::time::sleep(Duration::from_millis(250)) => {
                if last_activity.elapsed() >= idle_timeout {
                    let _ = out_tx.send(Message::Text(error_frame("TIMEOUT", "idle timeout"))).await;
                    break;
                }
            }
        }
    }

    app.relay().disconnect(session_id);
}
