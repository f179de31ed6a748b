//! Name collection form - ask for the user's name, confirm on submit

use async_trait::async_trait;
use tracing::debug;

use crate::domain::Domain;
use crate::effects::Effect;
use crate::error::ActionResult;
use crate::handlers::FormHandler;
use crate::tracker::Tracker;

/// Single-slot form collecting the user's name
///
/// Declares one required slot regardless of tracker contents. The collecting
/// state machine lives in the orchestrator; this type supplies only the leaf
/// callbacks.
pub struct NameCollectionHandler;

#[async_trait]
impl FormHandler for NameCollectionHandler {
    fn name(&self) -> &'static str {
        "name_form"
    }

    fn required_slots(&self, _tracker: &Tracker) -> Vec<String> {
        vec!["user_name".to_string()]
    }

    async fn on_submit(&self, _tracker: &Tracker, _domain: &Domain) -> ActionResult<Vec<Effect>> {
        debug!(form = self.name(), "form submitted");

        Ok(vec![Effect::emit_message("utter_submit")])
    }
}
