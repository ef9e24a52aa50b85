//! Session storage backends.

use dashmap::DashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::lifecycle::Shutdown;
use crate::session::Session;

/// Session lifetime when none is configured.
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Key/value store for sessions, keyed by the id carried in the session cookie.
pub trait SessionStore: Send + Sync {
    /// Live session for `session_id`. Expired sessions are never returned.
    fn get(&self, session_id: &str) -> Option<Session>;

    /// Insert or overwrite the session for `session_id`, restarting its ttl.
    fn set(&self, session_id: &str, session: Session);

    fn clear(&self, session_id: &str);

    /// Drop every expired session and return how many went.
    fn purge_expired(&self) -> usize;
}

struct Entry {
    session: Session,
    expires_at: Instant,
}

/// In-process session store. Entries expire `ttl` after they were last set.
#[derive(Clone)]
pub struct MemorySessionStore {
    inner: Arc<DashMap<String, Entry>>,
    ttl: Duration,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_SESSION_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            inner: Arc::new(DashMap::new()),
            ttl,
        }
    }

    /// Number of stored sessions, expired ones not yet purged included.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Copy of every live session, in no particular order.
    pub fn sessions(&self) -> Vec<Session> {
        let now = Instant::now();
        self.inner
            .iter()
            .filter(|r| r.value().expires_at > now)
            .map(|r| r.value().session.clone())
            .collect()
    }
}

impl Default for MemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, session_id: &str) -> Option<Session> {
        let now = Instant::now();
        // remove_if takes the shard write lock; no read guard may be alive here
        if self
            .inner
            .remove_if(session_id, |_, entry| entry.expires_at <= now)
            .is_some()
        {
            tracing::debug!("Expired session dropped on access");
            return None;
        }
        self.inner.get(session_id).map(|r| r.value().session.clone())
    }

    fn set(&self, session_id: &str, session: Session) {
        self.inner.insert(
            session_id.to_string(),
            Entry {
                session,
                expires_at: Instant::now() + self.ttl,
            },
        );
    }

    fn clear(&self, session_id: &str) {
        self.inner.remove(session_id);
    }

    fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let before = self.inner.len();
        self.inner.retain(|_, entry| entry.expires_at > now);
        before.saturating_sub(self.inner.len())
    }
}

/// Purge expired sessions every `interval` until `shutdown` fires.
pub fn spawn_sweeper(
    sessions: Arc<dyn SessionStore>,
    interval: Duration,
    shutdown: Shutdown,
) -> tokio::task::JoinHandle<()> {
    let stop = shutdown.notified();
    tokio::spawn(async move {
        tokio::pin!(stop);
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = &mut stop => break,
                _ = ticker.tick() => {
                    let purged = sessions.purge_expired();
                    if purged > 0 {
                        tracing::debug!(purged, "Expired sessions purged");
                    }
                }
            }
        }
        tracing::debug!("Session sweeper stopped");
    })
}
