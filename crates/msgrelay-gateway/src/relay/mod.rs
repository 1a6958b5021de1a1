//! Realtime relay: connection registry + sender-excluding fan-out.

mod core;
mod registry;

pub use self::core::RelayCore;
pub use self::registry::{Connection, ConnectionRegistry, SessionId};
