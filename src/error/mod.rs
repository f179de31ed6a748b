//! Errors surfaced to the dialogue orchestrator
//!
//! Handlers themselves define no recovery logic. Anything that fails here is
//! propagated on the call contract and handled by the host framework.

use thiserror::Error;

/// Errors produced by action dispatch and the form extension points
#[derive(Debug, Error)]
pub enum ActionError {
    /// No action is registered under the requested name
    #[error("unknown action: {name}")]
    UnknownAction { name: String },

    /// No form handler is registered under the requested name
    #[error("unknown form: {name}")]
    UnknownForm { name: String },

    /// A slot value was rejected by a form's validation hook
    #[error("slot '{slot}' rejected: {reason}")]
    SlotRejected { slot: String, reason: String },

    /// The domain description could not be parsed
    #[error("invalid domain description: {0}")]
    InvalidDomain(#[from] serde_json::Error),
}

/// Result type for action handler operations
pub type ActionResult<T> = Result<T, ActionError>;
