//! The agent invocation seam.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tracing::trace;

use crate::error::{AgentError, Result};
use crate::reply::AgentReply;

/// A conversation agent bound to one dataset.
///
/// Implementations wrap whatever backend actually answers questions (an
/// LLM service, a local model, a test double). The handle is opaque to the
/// session cache; only the invocation entry point is visible here.
///
/// Thread safety of conversation state beyond `Send + Sync` is the
/// implementation's concern; the cache does not serialize agent use after
/// retrieval.
#[async_trait]
pub trait DataAgent: Send + Sync {
    /// Ask the agent a question about its dataset.
    async fn invoke(&self, message: &str) -> Result<AgentReply>;
}

/// Shared agent handle, as stored in the session cache.
pub type SharedAgent = Arc<dyn DataAgent>;

/// Invoke an agent and normalize the reply to plain answer text.
///
/// Shape mismatches never fail; only the underlying invocation can return
/// an error.
pub async fn invoke_text(agent: &dyn DataAgent, message: &str) -> Result<String> {
    trace!(message_len = message.len(), "invoking agent");
    let reply = agent.invoke(message).await?;
    Ok(reply.into_text())
}

enum Script {
    /// Always return the same reply.
    Repeating(AgentReply),
    /// Return scripted replies in order; error once exhausted.
    Queue(Mutex<Vec<AgentReply>>),
}

/// A scripted agent for tests.
pub struct MockAgent {
    script: Script,
    message_log: Mutex<Vec<String>>,
}

impl MockAgent {
    /// Create a mock agent that always answers with the given text.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            script: Script::Repeating(AgentReply::text(text)),
            message_log: Mutex::new(Vec::new()),
        }
    }

    /// Create a mock agent with scripted replies.
    ///
    /// Replies are returned in order. If more invocations are made than
    /// replies available, an error is returned.
    pub fn scripted(replies: Vec<AgentReply>) -> Self {
        Self {
            script: Script::Queue(Mutex::new(replies)),
            message_log: Mutex::new(Vec::new()),
        }
    }

    /// Get all messages this agent was invoked with.
    pub fn messages(&self) -> Vec<String> {
        self.message_log.lock().unwrap().clone()
    }

    /// Get the number of invocations made.
    pub fn invocation_count(&self) -> usize {
        self.message_log.lock().unwrap().len()
    }
}

#[async_trait]
impl DataAgent for MockAgent {
    async fn invoke(&self, message: &str) -> Result<AgentReply> {
        self.message_log.lock().unwrap().push(message.to_string());

        match &self.script {
            Script::Repeating(reply) => Ok(reply.clone()),
            Script::Queue(replies) => {
                let mut replies = replies.lock().unwrap();
                if replies.is_empty() {
                    return Err(AgentError::Invoke(
                        "MockAgent: no more replies available".to_string(),
                    ));
                }
                Ok(replies.remove(0))
            }
        }
    }
}
