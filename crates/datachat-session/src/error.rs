//! Error types for cache construction.
//!
//! Cache operations themselves have no error kinds of their own: a lookup
//! either hits, or runs the caller's factory and propagates that factory's
//! error unchanged.

/// Invalid cache configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// TTL must be greater than zero.
    #[error("session ttl must be greater than zero")]
    ZeroTtl,

    /// Capacity must be greater than zero.
    #[error("max_sessions must be greater than zero")]
    ZeroCapacity,
}
