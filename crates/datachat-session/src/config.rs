//! Configuration for the session cache.

use std::time::Duration;

use crate::error::ConfigError;

/// Default time-to-live for a session: one hour from construction.
pub const DEFAULT_TTL: Duration = Duration::from_secs(60 * 60);

/// Default maximum number of sessions to cache before LRU eviction.
pub const DEFAULT_MAX_SESSIONS: usize = 128;

/// Configuration for the session cache.
///
/// Both knobs are fixed at cache construction time; there is no runtime
/// reconfiguration.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// How long a session lives after construction. The deadline is absolute:
    /// cache hits refresh recency for eviction purposes but do not extend it.
    pub ttl: Duration,

    /// Maximum number of sessions to cache before LRU eviction.
    pub max_sessions: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: DEFAULT_TTL,
            max_sessions: DEFAULT_MAX_SESSIONS,
        }
    }
}

impl CacheConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the session time-to-live.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Set the maximum number of sessions to cache.
    pub fn with_max_sessions(mut self, max: usize) -> Self {
        self.max_sessions = max;
        self
    }

    /// Check that both knobs are positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ttl.is_zero() {
            return Err(ConfigError::ZeroTtl);
        }
        if self.max_sessions == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CacheConfig::new();
        assert_eq!(config.ttl, Duration::from_secs(3600));
        assert_eq!(config.max_sessions, 128);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_ttl_rejected() {
        let config = CacheConfig::new().with_ttl(Duration::ZERO);
        assert!(matches!(config.validate(), Err(ConfigError::ZeroTtl)));
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let config = CacheConfig::new().with_max_sessions(0);
        assert!(matches!(config.validate(), Err(ConfigError::ZeroCapacity)));
    }
}
