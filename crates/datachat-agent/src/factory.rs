//! The agent construction seam.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tracing::debug;

use crate::agent::{MockAgent, SharedAgent};
use crate::dataset::DatasetSnapshot;
use crate::error::{AgentError, Result};

/// Builds a conversation agent over a dataset snapshot.
///
/// The concrete implementation lives at the composition root and wraps the
/// actual backend (service client, credentials, model settings). Handlers
/// and the session cache only ever see this trait, so they can be exercised
/// with [`MockFactory`].
///
/// Construction may be slow and may fail; callers decide what to do with a
/// failure. The session cache in particular never retries and never stores
/// a failed attempt.
#[async_trait]
pub trait AgentFactory: Send + Sync {
    /// Build a fresh agent bound to the given dataset.
    async fn build(&self, dataset: &DatasetSnapshot) -> Result<SharedAgent>;
}

/// A factory for tests: counts builds, optionally fails.
pub struct MockFactory {
    reply_text: String,
    builds: AtomicUsize,
    fail_with: Option<String>,
}

impl MockFactory {
    /// Create a factory whose agents always answer with the given text.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            reply_text: text.into(),
            builds: AtomicUsize::new(0),
            fail_with: None,
        }
    }

    /// Create a factory that fails every build with the given message.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            reply_text: String::new(),
            builds: AtomicUsize::new(0),
            fail_with: Some(message.into()),
        }
    }

    /// Get the number of successful builds.
    pub fn build_count(&self) -> usize {
        self.builds.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AgentFactory for MockFactory {
    async fn build(&self, dataset: &DatasetSnapshot) -> Result<SharedAgent> {
        if let Some(message) = &self.fail_with {
            return Err(AgentError::Build(message.clone()));
        }

        self.builds.fetch_add(1, Ordering::SeqCst);
        debug!(
            rows = dataset.row_count(),
            columns = dataset.column_count(),
            "mock factory built agent"
        );
        Ok(Arc::new(MockAgent::with_text(self.reply_text.clone())))
    }
}
