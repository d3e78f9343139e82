//! Conversation agent abstraction for datachat.
//!
//! The session cache treats agents as opaque handles; this crate defines
//! what those handles look like and how the rest of the service talks to
//! them:
//!
//! - [`DataAgent`] — the invocation seam: `invoke(message) -> AgentReply`.
//! - [`AgentFactory`] — the construction seam, injected at the composition
//!   root so nothing else depends on the concrete agent backend.
//! - [`AgentReply`] — the tagged reply shape, with [`invoke_text`]
//!   flattening heterogeneous replies down to plain answer text.
//! - [`AgentSettings`] — environment-sourced backend configuration,
//!   validated here rather than in the cache or the handlers.
//!
//! [`MockAgent`] and [`MockFactory`] are exported so downstream code can
//! test handler and cache wiring without a real LLM backend.

mod agent;
mod dataset;
mod error;
mod factory;
mod prompt;
mod reply;
mod settings;

pub use agent::{DataAgent, MockAgent, SharedAgent, invoke_text};
pub use dataset::DatasetSnapshot;
pub use error::{AgentError, Result};
pub use factory::{AgentFactory, MockFactory};
pub use prompt::ANALYSIS_SYSTEM_PROMPT;
pub use reply::AgentReply;
pub use settings::AgentSettings;
