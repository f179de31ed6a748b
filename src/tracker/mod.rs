//! Conversation tracker
//!
//! The tracker is the handler-facing view of a conversation: prior turns and
//! currently known slot values. It is owned and supplied by the external
//! orchestrator. Handlers read it; only the orchestrator mutates it, by
//! applying the effects handlers return.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::effects::Effect;
use crate::value_objects::{Slot, Turn, TurnType};

/// Read view of a single conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tracker {
    /// Conversation/session identifier
    sender_id: Uuid,

    /// Currently known slot values
    slots: HashMap<String, Slot>,

    /// Turns so far, oldest first
    turns: Vec<Turn>,

    /// Name of the form currently collecting slots, if any
    active_form: Option<String>,
}

impl Tracker {
    /// Create an empty tracker for a conversation
    pub fn new(sender_id: Uuid) -> Self {
        Self {
            sender_id,
            slots: HashMap::new(),
            turns: Vec::new(),
            active_form: None,
        }
    }

    /// Builder-style slot assignment, mainly for tests and fixtures
    pub fn with_slot(mut self, name: impl Into<String>, value: serde_json::Value) -> Self {
        let slot = Slot::new(name, value);
        self.slots.insert(slot.name.clone(), slot);
        self
    }

    /// Get the conversation identifier
    pub fn sender_id(&self) -> Uuid {
        self.sender_id
    }

    /// Get a slot value by name
    pub fn slot(&self, name: &str) -> Option<&serde_json::Value> {
        self.slots.get(name).map(|s| &s.value)
    }

    /// Check whether a slot has a value
    pub fn has_slot(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }

    /// Get all known slots
    pub fn slots(&self) -> &HashMap<String, Slot> {
        &self.slots
    }

    /// Get the turns so far
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Text of the most recent user turn, if any
    pub fn latest_user_text(&self) -> Option<&str> {
        self.turns
            .iter()
            .rev()
            .find(|t| t.turn_type == TurnType::UserUtterance)
            .map(|t| t.text.as_str())
    }

    /// Name of the form currently collecting slots, if any
    pub fn active_form(&self) -> Option<&str> {
        self.active_form.as_deref()
    }

    /// Mark a form as the one currently collecting slots
    pub fn set_active_form(&mut self, name: Option<String>) {
        self.active_form = name;
    }

    /// Record a user utterance as the next turn
    pub fn record_user_utterance(&mut self, text: impl Into<String>) {
        let turn_number = self.turns.len() as u32 + 1;
        self.turns.push(Turn::user(turn_number, text));
    }

    /// Apply a handler effect to this conversation
    ///
    /// This is the orchestrator side of the contract: `SetSlot` writes the
    /// slot (last write wins per name), `EmitMessage` records a bot turn
    /// carrying the template name.
    pub fn apply(&mut self, effect: &Effect) {
        match effect {
            Effect::SetSlot(set) => {
                let slot = Slot::new(set.name.clone(), set.value.clone());
                self.slots.insert(slot.name.clone(), slot);
            }
            Effect::EmitMessage(emit) => {
                let turn_number = self.turns.len() as u32 + 1;
                self.turns.push(Turn::bot(turn_number, emit.template.clone()));
            }
        }
    }

    /// Apply a list of handler effects in order
    pub fn apply_all(&mut self, effects: &[Effect]) {
        for effect in effects {
            self.apply(effect);
        }
    }
}
