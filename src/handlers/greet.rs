//! Greeting action - utter the greeting template

use async_trait::async_trait;
use tracing::debug;

use crate::domain::Domain;
use crate::effects::Effect;
use crate::error::ActionResult;
use crate::handlers::Action;
use crate::tracker::Tracker;

/// Greeting action
///
/// Stateless: the tracker and domain are received for contract parity and
/// ignored. Always produces exactly one effect.
pub struct GreetingHandler;

#[async_trait]
impl Action for GreetingHandler {
    fn name(&self) -> &'static str {
        "action_greet"
    }

    async fn run(&self, _tracker: &Tracker, _domain: &Domain) -> ActionResult<Vec<Effect>> {
        debug!(action = self.name(), "emitting greeting");

        Ok(vec![Effect::emit_message("utter_greet")])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_greet_emits_single_template() {
        let handler = GreetingHandler;
        assert_eq!(handler.name(), "action_greet");

        let tracker = Tracker::new(Uuid::new_v4());
        let domain = Domain::default();

        let effects = tokio_test::block_on(handler.run(&tracker, &domain)).unwrap();

        assert_eq!(effects, vec![Effect::emit_message("utter_greet")]);
    }

    #[test]
    fn test_greet_ignores_tracker_contents() {
        let handler = GreetingHandler;
        let tracker = Tracker::new(Uuid::new_v4()).with_slot("user_name", serde_json::json!("Bob"));
        let domain = Domain::default();

        let effects = tokio_test::block_on(handler.run(&tracker, &domain)).unwrap();

        assert_eq!(effects, vec![Effect::emit_message("utter_greet")]);
    }
}
