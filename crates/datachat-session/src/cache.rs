//! Session cache with TTL expiry and LRU eviction.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, trace};

use crate::config::CacheConfig;
use crate::error::ConfigError;
use crate::key::SessionKey;

/// Entry stored in the cache.
#[derive(Debug, Clone)]
struct CachedSession<A> {
    /// The agent handle held for this session.
    agent: A,

    /// Hard deadline, fixed at construction time. Hits never move it.
    expires_at: Instant,

    /// Refreshed on every hit; drives LRU eviction.
    last_used_at: Instant,
}

/// Cache of conversation agents, one per `(user_id, file_id)` pair.
///
/// The cache guarantees at most one live agent per key: once a session
/// exists and has not expired, every lookup for that key returns the same
/// handle instead of rebuilding it. Growth is bounded by count
/// (`max_sessions`, LRU eviction) and by time (`ttl`, swept lazily on the
/// write path — there is no background reaper).
///
/// All operations serialize on a single lock, which is held across the
/// factory call in [`get_or_create`](AgentCache::get_or_create). That trades
/// throughput for a simple guarantee: two concurrent lookups for the same
/// key can never race a duplicate expensive build. A hung factory call
/// blocks all cache traffic; callers that cannot tolerate unbounded blocking
/// must impose their own timeout around the call.
///
/// `Clone` is shallow: clones share the same store, so one cache constructed
/// at the composition root can be handed to every request handler.
pub struct AgentCache<A> {
    sessions: Arc<Mutex<HashMap<SessionKey, CachedSession<A>>>>,
    config: CacheConfig,
}

impl<A> Clone for AgentCache<A> {
    fn clone(&self) -> Self {
        Self {
            sessions: Arc::clone(&self.sessions),
            config: self.config.clone(),
        }
    }
}

impl<A: Clone> AgentCache<A> {
    /// Create a new cache.
    ///
    /// Fails if the configuration has a zero TTL or zero capacity.
    pub fn new(config: CacheConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            config,
        })
    }

    /// Get the cache configuration.
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Return the agent for `(user_id, file_id)`, building it if needed.
    ///
    /// On a live hit the stored handle is returned and its recency
    /// refreshed; the factory is not called. Otherwise expired sessions are
    /// swept, the least recently used session is evicted if the store is at
    /// capacity, and `factory(snapshot)` is awaited while the cache lock is
    /// held.
    ///
    /// A factory error propagates to the caller unchanged and leaves the
    /// store untouched: nothing is recorded for a failed build, so a later
    /// call for the same key starts fresh.
    pub async fn get_or_create<D, F, Fut, E>(
        &self,
        user_id: &str,
        file_id: &str,
        snapshot: D,
        factory: F,
    ) -> Result<A, E>
    where
        F: FnOnce(D) -> Fut,
        Fut: Future<Output = Result<A, E>>,
    {
        let now = Instant::now();
        let key = SessionKey::new(user_id, file_id);
        let mut sessions = self.sessions.lock().await;

        if let Some(session) = sessions.get_mut(&key) {
            if session.expires_at > now {
                trace!(user_id, file_id, "session cache hit");
                session.last_used_at = now;
                return Ok(session.agent.clone());
            }
        }

        // Miss (or the entry above is past its deadline): drop every dead
        // session before measuring occupancy.
        let before = sessions.len();
        sessions.retain(|_, s| s.expires_at > now);
        if sessions.len() < before {
            debug!(
                swept = before - sessions.len(),
                "swept expired sessions on miss"
            );
        }

        if sessions.len() >= self.config.max_sessions {
            // min over (last_used_at, key): LRU, with the key ordering
            // breaking ties deterministically.
            let lru = sessions
                .iter()
                .map(|(k, s)| (s.last_used_at, k.clone()))
                .min();
            if let Some((_, evicted)) = lru {
                debug!(
                    user_id = %evicted.user_id,
                    file_id = %evicted.file_id,
                    "evicting least recently used session to make room"
                );
                sessions.remove(&evicted);
            }
        }

        // The lock stays held across construction so a concurrent lookup for
        // this key waits for this build instead of starting its own.
        let agent = factory(snapshot).await?;

        sessions.insert(
            key,
            CachedSession {
                agent: agent.clone(),
                expires_at: now + self.config.ttl,
                last_used_at: now,
            },
        );
        debug!(
            user_id,
            file_id,
            cache_size = sessions.len(),
            "constructed new session agent"
        );

        Ok(agent)
    }

    /// Get the current number of cached sessions, dead entries included.
    pub async fn len(&self) -> usize {
        self.sessions.lock().await.len()
    }

    /// Check if the cache is empty.
    pub async fn is_empty(&self) -> bool {
        self.sessions.lock().await.is_empty()
    }

    /// Check whether a live session exists for the key, without touching it.
    pub async fn contains(&self, user_id: &str, file_id: &str) -> bool {
        let key = SessionKey::new(user_id, file_id);
        let sessions = self.sessions.lock().await;
        sessions
            .get(&key)
            .is_some_and(|s| s.expires_at > Instant::now())
    }

    /// Drop the session for a key, if any.
    pub async fn invalidate(&self, user_id: &str, file_id: &str) {
        let key = SessionKey::new(user_id, file_id);
        let mut sessions = self.sessions.lock().await;
        if sessions.remove(&key).is_some() {
            debug!(user_id, file_id, "session invalidated");
        }
    }

    /// Drop every expired session and return how many were removed.
    ///
    /// The write path already sweeps on every miss, so calling this is never
    /// required for correctness; it is exposed for callers that want to
    /// release agents on their own schedule.
    pub async fn sweep_expired(&self) -> usize {
        let now = Instant::now();
        let mut sessions = self.sessions.lock().await;
        let before = sessions.len();
        sessions.retain(|_, s| s.expires_at > now);
        let swept = before - sessions.len();
        if swept > 0 {
            debug!(swept, "swept expired sessions");
        }
        swept
    }

    /// Get cache statistics.
    pub async fn stats(&self) -> CacheStats {
        CacheStats {
            size: self.sessions.lock().await.len(),
            capacity: self.config.max_sessions,
        }
    }
}

/// Cache statistics.
#[derive(Debug, Clone)]
pub struct CacheStats {
    /// Current number of cached sessions.
    pub size: usize,

    /// Maximum capacity before LRU eviction.
    pub capacity: usize,
}
