//! Error types for agent construction and invocation.

use thiserror::Error;

/// Result type alias using the agent error type.
pub type Result<T> = std::result::Result<T, AgentError>;

/// Error type for agent operations.
#[derive(Debug, Clone, Error)]
pub enum AgentError {
    /// The backend model is not configured.
    #[error("no model configured: set the {0} environment variable")]
    MissingModel(&'static str),

    /// The configured temperature could not be parsed as a float.
    #[error("invalid temperature value '{0}'")]
    InvalidTemperature(String),

    /// Building an agent for a dataset failed.
    #[error("agent construction failed: {0}")]
    Build(String),

    /// Invoking an agent failed.
    #[error("agent invocation failed: {0}")]
    Invoke(String),
}
