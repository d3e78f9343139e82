//! Environment-sourced configuration for the agent backend.

use tracing::debug;

use crate::error::{AgentError, Result};

/// Environment variable naming the backend model. Required; no default.
pub const ENV_MODEL: &str = "OPENAI_MODEL";

/// Environment variable for the sampling temperature. Optional.
pub const ENV_TEMPERATURE: &str = "OPENAI_TEMPERATURE";

/// Environment variable enabling verbose agent output. Optional.
pub const ENV_VERBOSE: &str = "DATACHAT_VERBOSE";

/// Settings a concrete agent factory needs to talk to its backend.
///
/// Validation happens here, at the collaborator that owns the backend;
/// neither the session cache nor the request handlers look at these.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentSettings {
    /// Model identifier passed to the backend.
    pub model: String,

    /// Sampling temperature. Defaults to 0.0 for deterministic analysis.
    pub temperature: f32,

    /// Whether the agent should log its intermediate steps.
    pub verbose: bool,
}

impl AgentSettings {
    /// Create settings for a model with default temperature and verbosity.
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            temperature: 0.0,
            verbose: false,
        }
    }

    /// Set the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set verbose output.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Read settings from the process environment.
    ///
    /// [`ENV_MODEL`] must be set and non-empty. [`ENV_TEMPERATURE`] must
    /// parse as a float when present. [`ENV_VERBOSE`] is truthy on `1`,
    /// `true` or `yes` (case-insensitive).
    pub fn from_env() -> Result<Self> {
        let settings = Self::from_lookup(|key| std::env::var(key).ok())?;
        debug!(model = %settings.model, "agent settings loaded from environment");
        Ok(settings)
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let model = match lookup(ENV_MODEL) {
            Some(model) if !model.trim().is_empty() => model,
            _ => return Err(AgentError::MissingModel(ENV_MODEL)),
        };

        let temperature = match lookup(ENV_TEMPERATURE) {
            Some(raw) => raw
                .trim()
                .parse::<f32>()
                .map_err(|_| AgentError::InvalidTemperature(raw))?,
            None => 0.0,
        };

        let verbose = lookup(ENV_VERBOSE).is_some_and(|raw| is_truthy(&raw));

        Ok(Self {
            model,
            temperature,
            verbose,
        })
    }
}

fn is_truthy(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes"
    )
}
