//! Relay event protocol (JSON text frames).
//!
//! Inbound frames are `{ "event": <name>, "data": <anything> }`. The envelope
//! itself is strict, but `data` is stored as `RawValue` and re-emitted verbatim
//! on broadcast: the relay never parses, validates, or transforms payloads.

use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

use crate::error::{RelayError, Result};

/// The three event kinds the relay fans out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// `user:online` — presence announcement, payload is an opaque user id.
    PresenceOnline,
    /// `message:send` — chat message, rebroadcast as `message:receive`.
    MessageSend,
    /// `message:typing` — typing indicator.
    MessageTyping,
}

impl EventKind {
    /// Resolve an inbound event name. Unknown names return `None`; the
    /// relay drops those frames rather than erroring.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "user:online" => Some(EventKind::PresenceOnline),
            "message:send" => Some(EventKind::MessageSend),
            "message:typing" => Some(EventKind::MessageTyping),
            _ => None,
        }
    }

    /// Name a frame carries when fanned out to the other connections.
    /// Only `message:send` is renamed on the way out.
    pub fn broadcast_name(self) -> &'static str {
        match self {
            EventKind::PresenceOnline => "user:online",
            EventKind::MessageSend => "message:receive",
            EventKind::MessageTyping => "message:typing",
        }
    }
}

/// Inbound event envelope (Text frame).
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Envelope {
    /// Event name (e.g., "message:send").
    pub event: String,
    /// Optional payload, stored as raw JSON (never parsed by the relay).
    #[serde(default)]
    pub data: Option<Box<RawValue>>,
}

#[derive(Serialize)]
struct BroadcastEnvelope<'a> {
    event: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a RawValue>,
}

/// Serialize a broadcast frame once; the caller clones it per recipient.
/// `data` is spliced through byte-for-byte.
pub fn encode_broadcast(kind: EventKind, data: Option<&RawValue>) -> Result<String> {
    serde_json::to_string(&BroadcastEnvelope {
        event: kind.broadcast_name(),
        data,
    })
    .map_err(|e| RelayError::Internal(format!("broadcast encode failed: {e}")))
}
