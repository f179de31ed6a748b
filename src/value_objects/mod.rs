//! Value objects shared by the tracker, effects, and handlers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named piece of information tracked per conversation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Slot {
    /// Slot name
    pub name: String,
    /// Slot value
    pub value: serde_json::Value,
    /// When the value was set
    pub set_at: DateTime<Utc>,
}

/// A single turn in a conversation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Turn {
    /// Unique identifier for this turn
    pub turn_id: Uuid,
    /// Sequential turn number in the conversation
    pub turn_number: u32,
    /// Who produced this turn
    pub turn_type: TurnType,
    /// Utterance text, or the template name for bot turns
    pub text: String,
    /// When this turn occurred
    pub timestamp: DateTime<Utc>,
}

/// Type of turn in a conversation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TurnType {
    /// User utterance
    UserUtterance,
    /// Bot utterance (a rendered template)
    BotUtterance,
    /// System note (session events, orchestrator bookkeeping)
    SystemNote,
}

impl Slot {
    /// Create a slot, stamping the set time
    pub fn new(name: impl Into<String>, value: serde_json::Value) -> Self {
        Self {
            name: name.into(),
            value,
            set_at: Utc::now(),
        }
    }
}

impl Turn {
    /// Create a new turn
    pub fn new(turn_number: u32, turn_type: TurnType, text: impl Into<String>) -> Self {
        Self {
            turn_id: Uuid::new_v4(),
            turn_number,
            turn_type,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }

    /// Create a user turn
    pub fn user(turn_number: u32, text: impl Into<String>) -> Self {
        Self::new(turn_number, TurnType::UserUtterance, text)
    }

    /// Create a bot turn
    pub fn bot(turn_number: u32, text: impl Into<String>) -> Self {
        Self::new(turn_number, TurnType::BotUtterance, text)
    }
}
