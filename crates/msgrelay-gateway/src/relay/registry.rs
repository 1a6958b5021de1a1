use std::sync::atomic::{AtomicU64, Ordering};

use axum::extract::ws::Message;
use dashmap::DashMap;
use tokio::sync::mpsc;

/// Opaque per-connection identifier.
pub type SessionId = u64;

/// One session's outbound queue sender.
#[derive(Clone)]
pub struct Connection {
    pub tx: mpsc::Sender<Message>,
}

/// Open-connection set: `session_id -> Connection`.
///
/// All mutation is funneled through `insert`/`remove`; the map guards the set
/// so the fan-out path can iterate while sessions come and go.
#[derive(Default)]
pub struct ConnectionRegistry {
    sessions: DashMap<SessionId, Connection>,
    seq: AtomicU64,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
            seq: AtomicU64::new(1),
        }
    }

    pub fn insert(&self, conn: Connection) -> SessionId {
        let id = self.seq.fetch_add(1, Ordering::Relaxed);
        self.sessions.insert(id, conn);
        id
    }

    pub fn remove(&self, id: SessionId) -> Option<Connection> {
        self.sessions.remove(&id).map(|(_, conn)| conn)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Snapshot of every connection except `sender`.
    pub fn others(&self, sender: SessionId) -> Vec<(SessionId, Connection)> {
        self.sessions
            .iter()
            .filter(|e| *e.key() != sender)
            .map(|e| (*e.key(), e.value().clone()))
            .collect()
    }
}
