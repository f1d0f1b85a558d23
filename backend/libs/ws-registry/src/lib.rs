use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tokio::sync::{
    mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender},
    RwLock,
};
use uuid::Uuid;

pub mod session;

pub use session::SellerSession;

/// Unique identifier for a registered seller connection
///
/// Each WebSocket connection gets a unique ID when its channel is opened.
/// This allows for precise cleanup when the connection closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionId(Uuid);

impl ConnectionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ConnectionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One seller socket: its identity plus the channel feeding the session actor.
#[derive(Clone)]
pub struct SellerConnection {
    id: ConnectionId,
    sender: UnboundedSender<String>,
}

impl SellerConnection {
    /// Open a connection channel
    ///
    /// Returns the connection handle and the receiver half; the session actor
    /// owns the receiver and writes every payload it yields to the socket.
    pub fn open() -> (Self, UnboundedReceiver<String>) {
        let (tx, rx) = unbounded_channel();
        let conn = Self {
            id: ConnectionId::new(),
            sender: tx,
        };
        (conn, rx)
    }

    pub fn id(&self) -> ConnectionId {
        self.id
    }

    /// Readiness flag consulted at send time. A connection whose receiver has
    /// been dropped is no longer open.
    pub fn is_open(&self) -> bool {
        !self.sender.is_closed()
    }
}

/// Outcome of one broadcast send attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// Payload was enqueued to the session channel.
    Delivered,
    /// Readiness flag was not "open"; send skipped, connection kept.
    SkippedNotOpen,
    /// Send failed after the readiness check; connection kept.
    Failed,
}

/// Per-recipient results of one broadcast
///
/// Carries an outcome per registered connection rather than a bare count, so
/// callers can attribute failures to individual recipients.
#[derive(Debug, Default)]
pub struct BroadcastReport {
    outcomes: Vec<(ConnectionId, SendOutcome)>,
}

impl BroadcastReport {
    pub fn delivered(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| *outcome == SendOutcome::Delivered)
            .count()
    }

    pub fn skipped(&self) -> usize {
        self.outcomes.len() - self.delivered()
    }

    pub fn outcomes(&self) -> &[(ConnectionId, SendOutcome)] {
        &self.outcomes
    }
}

/// Connection registry for seller WebSocket sessions
///
/// Tracks every currently-connected seller socket. Handlers hold a clone of
/// this handle; all clones share one underlying map. Mutations take the write
/// lock, broadcast takes the read lock.
#[derive(Default, Clone)]
pub struct ConnectionRegistry {
    inner: Arc<RwLock<HashMap<ConnectionId, SellerConnection>>>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a connection. Re-registering the same connection replaces its
    /// entry and leaves the registry size unchanged (set semantics).
    pub async fn register(&self, conn: SellerConnection) {
        let id = conn.id;
        let mut guard = self.inner.write().await;
        guard.insert(id, conn);

        tracing::debug!(
            "Registered seller connection {}, total connections: {}",
            id,
            guard.len()
        );
    }

    /// Remove a connection. No-op if the id is absent.
    ///
    /// Called from the session's close path only; broadcast never removes
    /// entries.
    pub async fn unregister(&self, id: ConnectionId) {
        let mut guard = self.inner.write().await;
        if guard.remove(&id).is_some() {
            tracing::debug!(
                "Unregistered seller connection {}, remaining: {}",
                id,
                guard.len()
            );
        }
    }

    /// Send `payload` to every registered connection whose readiness flag is
    /// "open"
    ///
    /// Fire-and-forget per recipient: no retry, no delivery guarantee beyond
    /// the enqueue, and non-open connections are skipped but kept (cleanup
    /// happens only via the session's own close event).
    pub async fn broadcast(&self, payload: &str) -> BroadcastReport {
        let guard = self.inner.read().await;
        let mut report = BroadcastReport::default();

        for (id, conn) in guard.iter() {
            let outcome = if !conn.is_open() {
                SendOutcome::SkippedNotOpen
            } else if conn.sender.send(payload.to_string()).is_ok() {
                SendOutcome::Delivered
            } else {
                SendOutcome::Failed
            };
            report.outcomes.push((*id, outcome));
        }

        tracing::debug!(
            "Broadcast to {} connections: {} delivered, {} skipped",
            report.outcomes.len(),
            report.delivered(),
            report.skipped()
        );

        report
    }

    /// Current registry size (for logs and tests)
    pub async fn connection_count(&self) -> usize {
        self.inner.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn register_adds_connection() {
        let registry = ConnectionRegistry::new();
        let (conn, _rx) = SellerConnection::open();

        registry.register(conn).await;

        assert_eq!(registry.connection_count().await, 1);
    }

    #[tokio::test]
    async fn register_same_connection_twice_keeps_size() {
        let registry = ConnectionRegistry::new();
        let (conn, _rx) = SellerConnection::open();

        registry.register(conn.clone()).await;
        registry.register(conn).await;

        assert_eq!(registry.connection_count().await, 1);
    }

    #[tokio::test]
    async fn distinct_connections_accumulate() {
        let registry = ConnectionRegistry::new();
        let (first, _rx_a) = SellerConnection::open();
        let (second, _rx_b) = SellerConnection::open();

        registry.register(first).await;
        registry.register(second).await;

        assert_eq!(registry.connection_count().await, 2);
    }

    #[tokio::test]
    async fn unregister_removes_connection() {
        let registry = ConnectionRegistry::new();
        let (conn, _rx) = SellerConnection::open();
        let id = conn.id();

        registry.register(conn).await;
        registry.unregister(id).await;

        assert_eq!(registry.connection_count().await, 0);
    }

    #[tokio::test]
    async fn unregister_absent_is_noop() {
        let registry = ConnectionRegistry::new();
        let (conn, _rx) = SellerConnection::open();

        registry.register(conn).await;
        registry.unregister(ConnectionId::new()).await;

        assert_eq!(registry.connection_count().await, 1);
    }

    #[tokio::test]
    async fn broadcast_reaches_every_open_connection() {
        let registry = ConnectionRegistry::new();
        let (first, mut rx_a) = SellerConnection::open();
        let (second, mut rx_b) = SellerConnection::open();
        registry.register(first).await;
        registry.register(second).await;

        let report = registry.broadcast("hello sellers").await;

        assert_eq!(report.delivered(), 2);
        assert_eq!(rx_a.recv().await.unwrap(), "hello sellers");
        assert_eq!(rx_b.recv().await.unwrap(), "hello sellers");
    }

    #[tokio::test]
    async fn broadcast_skips_closed_without_removing() {
        let registry = ConnectionRegistry::new();
        let (open_conn, mut open_rx) = SellerConnection::open();
        let (dead_conn, dead_rx) = SellerConnection::open();
        registry.register(open_conn).await;
        registry.register(dead_conn).await;
        drop(dead_rx);

        let report = registry.broadcast("ping").await;

        assert_eq!(report.delivered(), 1);
        assert_eq!(report.skipped(), 1);
        assert_eq!(open_rx.recv().await.unwrap(), "ping");
        // The dead connection stays registered until its session closes.
        assert_eq!(registry.connection_count().await, 2);
    }

    #[tokio::test]
    async fn broadcast_with_no_connections_delivers_zero() {
        let registry = ConnectionRegistry::new();

        let report = registry.broadcast("ping").await;

        assert_eq!(report.delivered(), 0);
        assert!(report.outcomes().is_empty());
    }

    #[tokio::test]
    async fn closed_connection_reports_skipped_outcome() {
        let registry = ConnectionRegistry::new();
        let (conn, rx) = SellerConnection::open();
        let id = conn.id();
        registry.register(conn).await;
        drop(rx);

        let report = registry.broadcast("payload").await;

        assert_eq!(report.outcomes().len(), 1);
        assert_eq!(report.outcomes()[0], (id, SendOutcome::SkippedNotOpen));
    }

    #[tokio::test]
    async fn connection_open_flag_follows_receiver() {
        let (conn, rx) = SellerConnection::open();
        assert!(conn.is_open());

        drop(rx);
        assert!(!conn.is_open());
    }
}
