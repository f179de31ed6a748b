//! Custom dialogue actions module
//!
//! This crate is the custom-action side of a conversational assistant: the
//! leaf callbacks an external dialogue orchestrator invokes once per turn.
//! It provides:
//! - An effect vocabulary (emit a message template, set a slot) returned to
//!   the orchestrator for execution
//! - A tracker view with read access to prior turns and known slot values
//! - Action and form handler traits implemented by independent value types
//! - A registry that routes handler names to handlers through an explicit
//!   lookup table
//!
//! The orchestrator owns the conversation state machine, message rendering,
//! and persistence. Handlers here only declare what they need and return the
//! effects they want applied.

pub mod domain;
pub mod effects;
pub mod error;
pub mod handlers;
pub mod registry;
pub mod tracker;
pub mod value_objects;

// Re-export main types
pub use domain::{Domain, ResponseTemplate};

pub use effects::{Effect, EmitMessage, SetSlot};

pub use error::{ActionError, ActionResult};

pub use handlers::{
    Action, FormHandler,
    GreetingHandler, NameCollectionHandler,
};

pub use registry::ActionRegistry;

pub use tracker::Tracker;

pub use value_objects::{Slot, Turn, TurnType};
