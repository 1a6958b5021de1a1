use std::sync::Arc;

use axum::extract::ws::Message;
use tokio::sync::mpsc;

use super::registry::{Connection, ConnectionRegistry, SessionId};

/// RelayCore: owns the open-connection set and performs the fan-out.
#[derive(Clone, Default)]
pub struct RelayCore {
    sessions: Arc<ConnectionRegistry>,
}

impl RelayCore {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(ConnectionRegistry::new()),
        }
    }

    /// Register a new connection's outbound queue.
    pub fn connect(&self, tx: mpsc::Sender<Message>) -> SessionId {
        let id = self.sessions.insert(Connection { tx });
        tracing::info!(session = id, "client connected");
        id
    }

    /// Remove a connection; it is never a fan-out target afterwards.
    pub fn disconnect(&self, id: SessionId) {
        if self.sessions.remove(id).is_some() {
            tracing::info!(session = id, "client disconnected");
        }
    }

    pub fn active_sessions(&self) -> usize {
        self.sessions.len()
    }

    /// Fan a prepared frame out to every open connection except the sender.
    ///
    /// Fire-and-forget: a recipient with a full or closed queue is skipped,
    /// never retried, and never aborts delivery to the rest. Returns how many
    /// recipients the frame was queued to.
    pub fn broadcast_from(&self, sender: SessionId, frame: &str) -> usize {
        let mut delivered = 0;
        for (id, conn) in self.sessions.others(sender) {
            match conn.tx.try_send(Message::Text(frame.to_owned())) {
                Ok(()) => delivered += 1,
                Err(e) => {
                    tracing::debug!(session = id, error = %e, "dropping frame for slow or closed session");
                }
            }
        }
        delivered
    }
}
