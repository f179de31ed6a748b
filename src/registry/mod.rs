//! Handler registry - the explicit lookup table the orchestrator routes through
//!
//! Handlers are registered under their stable names at startup. Dispatch is a
//! map lookup; unknown names are routing errors surfaced to the orchestrator.
//! The registry is populated once and only read afterwards.

use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::Domain;
use crate::effects::Effect;
use crate::error::{ActionError, ActionResult};
use crate::handlers::{Action, FormHandler, GreetingHandler, NameCollectionHandler};
use crate::tracker::Tracker;

/// Lookup table binding handler names to handler values
pub struct ActionRegistry {
    /// Simple actions by name
    actions: HashMap<String, Arc<dyn Action>>,

    /// Form handlers by name
    forms: HashMap<String, Arc<dyn FormHandler>>,
}

impl ActionRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            actions: HashMap::new(),
            forms: HashMap::new(),
        }
    }

    /// Create a registry pre-loaded with the built-in handlers
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register_action(Arc::new(GreetingHandler));
        registry.register_form(Arc::new(NameCollectionHandler));
        registry
    }

    /// Register an action under its name, replacing any previous entry
    pub fn register_action(&mut self, action: Arc<dyn Action>) {
        debug!(action = action.name(), "registering action");
        self.actions.insert(action.name().to_string(), action);
    }

    /// Register a form handler under its name, replacing any previous entry
    pub fn register_form(&mut self, form: Arc<dyn FormHandler>) {
        debug!(form = form.name(), "registering form");
        self.forms.insert(form.name().to_string(), form);
    }

    /// Names of all registered actions
    pub fn action_names(&self) -> Vec<&str> {
        self.actions.keys().map(|n| n.as_str()).collect()
    }

    /// Names of all registered forms
    pub fn form_names(&self) -> Vec<&str> {
        self.forms.keys().map(|n| n.as_str()).collect()
    }

    /// Route an action invocation by name
    pub async fn run_action(
        &self,
        name: &str,
        tracker: &Tracker,
        domain: &Domain,
    ) -> ActionResult<Vec<Effect>> {
        let action = self.actions.get(name).ok_or_else(|| {
            warn!(action = name, "no action registered under this name");
            ActionError::UnknownAction {
                name: name.to_string(),
            }
        })?;

        debug!(action = name, sender_id = %tracker.sender_id(), "running action");
        let effects = action.run(tracker, domain).await?;
        debug!(action = name, effects = effects.len(), "action finished");

        Ok(effects)
    }

    /// Look up the slots a form still needs collected
    pub fn required_slots(&self, name: &str, tracker: &Tracker) -> ActionResult<Vec<String>> {
        let form = self.form(name)?;
        Ok(form.required_slots(tracker))
    }

    /// Route a form submission by name
    pub async fn submit_form(
        &self,
        name: &str,
        tracker: &Tracker,
        domain: &Domain,
    ) -> ActionResult<Vec<Effect>> {
        let form = self.form(name)?;

        debug!(form = name, sender_id = %tracker.sender_id(), "submitting form");
        let effects = form.on_submit(tracker, domain).await?;
        debug!(form = name, effects = effects.len(), "form submission finished");

        Ok(effects)
    }

    /// Get a registered form handler by name
    pub fn form(&self, name: &str) -> ActionResult<&Arc<dyn FormHandler>> {
        self.forms.get(name).ok_or_else(|| {
            warn!(form = name, "no form registered under this name");
            ActionError::UnknownForm {
                name: name.to_string(),
            }
        })
    }
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_builtin_registry_routes_by_name() {
        let registry = ActionRegistry::builtin();
        let tracker = Tracker::new(Uuid::new_v4());
        let domain = Domain::default();

        let effects = registry
            .run_action("action_greet", &tracker, &domain)
            .await
            .unwrap();
        assert_eq!(effects, vec![Effect::emit_message("utter_greet")]);

        let slots = registry.required_slots("name_form", &tracker).unwrap();
        assert_eq!(slots, vec!["user_name"]);
    }

    #[tokio::test]
    async fn test_unknown_names_are_routing_errors() {
        let registry = ActionRegistry::builtin();
        let tracker = Tracker::new(Uuid::new_v4());
        let domain = Domain::default();

        let result = registry.run_action("action_missing", &tracker, &domain).await;
        match result {
            Err(ActionError::UnknownAction { name }) => assert_eq!(name, "action_missing"),
            other => panic!("expected UnknownAction, got {other:?}"),
        }

        let result = registry.submit_form("missing_form", &tracker, &domain).await;
        assert!(matches!(result, Err(ActionError::UnknownForm { .. })));
    }

    #[test]
    fn test_registration_lists_names() {
        let registry = ActionRegistry::builtin();

        assert_eq!(registry.action_names(), vec!["action_greet"]);
        assert_eq!(registry.form_names(), vec!["name_form"]);
    }
}
