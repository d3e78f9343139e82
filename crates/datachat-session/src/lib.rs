//! Agent session cache keyed by `(user_id, file_id)`.
//!
//! This crate provides the caching layer between request handlers and an
//! agent factory. Building a conversation agent for an uploaded dataset is
//! expensive, so the cache constructs it at most once per live session and
//! bounds total resource use two ways:
//! - TTL expiry: a session dies a fixed duration after construction
//! - LRU eviction: at capacity, the least recently used session is dropped
//!
//! The cache is generic over the agent handle and knows nothing about how
//! agents are built; the caller supplies a factory closure on each lookup.
//!
//! # Example
//!
//! ```rust,ignore
//! use datachat_session::{AgentCache, CacheConfig};
//!
//! let config = CacheConfig::new()
//!     .with_ttl(Duration::from_secs(3600))
//!     .with_max_sessions(128);
//!
//! let cache: AgentCache<SharedAgent> = AgentCache::new(config)?;
//! let agent = cache
//!     .get_or_create(user_id, file_id, &dataset, |ds| factory.build(ds))
//!     .await?;
//! ```

mod cache;
mod config;
mod error;
mod key;

pub use cache::{AgentCache, CacheStats};
pub use config::{CacheConfig, DEFAULT_MAX_SESSIONS, DEFAULT_TTL};
pub use error::ConfigError;
pub use key::SessionKey;
