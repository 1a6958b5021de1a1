//! Decode-once codec for the transport layer.
//!
//! - Text frames => Envelope (lazy `RawValue` for data)
//! - Binary frames are not part of the relay protocol
//! - Ping/Pong/Close are surfaced for lifecycle management

use axum::extract::ws::Message;

use msgrelay_core::error::{RelayError, Result};
use msgrelay_core::protocol::Envelope;

#[derive(Debug)]
pub enum Inbound {
    Event { env: Envelope, bytes_len: usize },
    Ping(Vec<u8>),
    Pong,
    Close,
}

/// Frame length without decoding (cheap-first policy checks).
pub fn frame_len(msg: &Message) -> usize {
    match msg {
        Message::Text(s) => s.as_bytes().len(),
        Message::Binary(b) => b.len(),
        Message::Ping(v) => v.len(),
        Message::Pong(v) => v.len(),
        Message::Close(_) => 0,
    }
}

pub fn decode(msg: Message) -> Result<Inbound> {
    match msg {
        Message::Text(s) => {
            let bytes_len = s.as_bytes().len();
            let env: Envelope = serde_json::from_str(&s)
                .map_err(|e| RelayError::BadRequest(format!("invalid envelope json: {e}")))?;
            Ok(Inbound::Event { env, bytes_len })
        }
        Message::Binary(_) => Err(RelayError::BadRequest(
            "binary frames not supported".into(),
        )),
        Message::Ping(v) => Ok(Inbound::Ping(v)),
        Message::Pong(_) => Ok(Inbound::Pong),
        Message::Close(_) => Ok(Inbound::Close),
    }
}
