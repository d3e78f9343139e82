//! Composite key identifying one cached session.

/// Identifies one cached agent session: a user talking to one of their files.
///
/// Equality is exact string match on both fields. The `Ord` impl orders by
/// `user_id` then `file_id`; the cache relies on this to break LRU ties
/// deterministically when two sessions share a `last_used_at`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionKey {
    /// Owning user, sourced from the authentication context.
    pub user_id: String,

    /// Uploaded file the agent is bound to.
    pub file_id: String,
}

impl SessionKey {
    /// Create a key from a user/file pair.
    pub fn new(user_id: impl Into<String>, file_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            file_id: file_id.into(),
        }
    }
}
