//! Action and form handler traits plus the built-in handlers
//!
//! Handlers are independent value types implementing a fixed capability set:
//! `{ name, run }` for simple actions, `{ name, required_slots, on_submit }`
//! for form-style handlers. The orchestrator reaches them through the lookup
//! table in [`crate::registry`], never through inheritance.

use async_trait::async_trait;

use crate::domain::Domain;
use crate::effects::Effect;
use crate::error::ActionResult;
use crate::tracker::Tracker;

pub mod greet;
pub mod name_form;

pub use greet::GreetingHandler;
pub use name_form::NameCollectionHandler;

/// A simple custom action invoked once per matching turn
#[async_trait]
pub trait Action: Send + Sync {
    /// Stable identifier used for routing
    fn name(&self) -> &'static str;

    /// Produce the effects the orchestrator should execute for this turn
    async fn run(&self, tracker: &Tracker, domain: &Domain) -> ActionResult<Vec<Effect>>;
}

/// A form-style handler: declares required slots, runs a completion callback
/// once the externally-owned form machinery has collected them all
#[async_trait]
pub trait FormHandler: Send + Sync {
    /// Stable identifier used for routing
    fn name(&self) -> &'static str;

    /// Ordered list of slots this form needs before it is satisfied
    fn required_slots(&self, tracker: &Tracker) -> Vec<String>;

    /// Completion callback, invoked once all required slots are filled
    async fn on_submit(&self, tracker: &Tracker, domain: &Domain) -> ActionResult<Vec<Effect>>;

    /// First required slot not yet present in the tracker
    fn next_slot(&self, tracker: &Tracker) -> Option<String> {
        self.required_slots(tracker)
            .into_iter()
            .find(|slot| !tracker.has_slot(slot))
    }

    /// Whether every required slot is present in the tracker
    fn is_complete(&self, tracker: &Tracker) -> bool {
        self.next_slot(tracker).is_none()
    }

    /// Slot-value validation hook
    ///
    /// Accepts every value by default. Implementors may reject values with
    /// [`crate::error::ActionError::SlotRejected`]; the orchestrator decides
    /// what to do with the rejection.
    fn validate_slot(
        &self,
        _slot: &str,
        _value: &serde_json::Value,
        _tracker: &Tracker,
    ) -> ActionResult<()> {
        Ok(())
    }
}
