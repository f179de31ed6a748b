//! Outbound effect vocabulary
//!
//! Handlers do not touch conversation state directly. They return effects,
//! and the orchestrator executes them: rendering and sending message
//! templates, persisting slot values. Effects are ephemeral, constructed and
//! consumed within a single turn.

use serde::{Deserialize, Serialize};

/// Request the orchestrator render and send a named message template
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmitMessage {
    /// Template name to render
    pub template: String,
}

/// Request the orchestrator persist a named value into conversation state
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SetSlot {
    /// Slot name
    pub name: String,
    /// Value to store
    pub value: serde_json::Value,
}

/// An effect returned by a handler for the orchestrator to execute
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum Effect {
    /// Send a templated message
    EmitMessage(EmitMessage),
    /// Set a conversation slot
    SetSlot(SetSlot),
}

impl Effect {
    /// Create a message emission effect
    pub fn emit_message(template: impl Into<String>) -> Self {
        Self::EmitMessage(EmitMessage {
            template: template.into(),
        })
    }

    /// Create a slot-setting effect
    pub fn set_slot(name: impl Into<String>, value: serde_json::Value) -> Self {
        Self::SetSlot(SetSlot {
            name: name.into(),
            value,
        })
    }

    /// Stable tag for this effect, matching the serialized form
    pub fn effect_type(&self) -> &'static str {
        match self {
            Self::EmitMessage(_) => "emit_message",
            Self::SetSlot(_) => "set_slot",
        }
    }
}
