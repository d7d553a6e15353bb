//! Tracker configuration.
//!
//! Everything here is read once when the tracker is built. The input model in
//! particular is never re-evaluated for the tracker's lifetime.
//!
//! ```json
//! {
//!   "user_agent": "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)",
//!   "transition": { "duration_ms": 250, "easing": "ease-out" }
//! }
//! ```

use crate::constants::{DEFAULT_EASING, DEFAULT_TRANSITION_MS};
use crate::error::{DragError, DragResult};
use crate::input::InputModel;
use anyhow::Context as _;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Eased transition used for programmatic position changes
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionConfig {
    pub duration_ms: u64,
    pub easing: String,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_TRANSITION_MS,
            easing: DEFAULT_EASING.to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Pins the input model. Takes precedence over `user_agent`.
    pub input_model: Option<InputModel>,
    /// Host user-agent string, sniffed when `input_model` is not set
    pub user_agent: Option<String>,
    pub transition: TransitionConfig,
}

impl TrackerConfig {
    /// Config whose input model is derived from a user-agent string
    pub fn for_user_agent(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: Some(user_agent.into()),
            ..Self::default()
        }
    }

    /// Config with a fixed input model
    pub fn with_input_model(model: InputModel) -> Self {
        Self {
            input_model: Some(model),
            ..Self::default()
        }
    }

    /// Decide the input model. Falls back to pointer input when nothing is known.
    pub fn resolve_input_model(&self) -> InputModel {
        match (&self.input_model, &self.user_agent) {
            (Some(model), _) => *model,
            (None, Some(agent)) => InputModel::from_user_agent(agent),
            (None, None) => InputModel::default(),
        }
    }

    /// Parse and validate a JSON document
    pub fn from_json_str(json: &str) -> DragResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read tracker config {}", path.display()))?;
        let config = Self::from_json_str(&json)
            .with_context(|| format!("failed to parse tracker config {}", path.display()))?;
        tracing::debug!(path = %path.display(), model = ?config.resolve_input_model(), "tracker config loaded");
        Ok(config)
    }

    pub fn validate(&self) -> DragResult<()> {
        if self.transition.easing.trim().is_empty() {
            return Err(DragError::Config("transition easing must not be empty".to_string()));
        }
        Ok(())
    }
}
