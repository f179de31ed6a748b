//! Domain description handed to handlers
//!
//! The domain lists the named, pre-authored message templates the
//! orchestrator can render. Handlers receive it on every invocation for
//! contract parity with the host framework; the built-in handlers do not
//! read it.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::ActionResult;

/// A pre-authored message pattern rendered by the orchestrator
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResponseTemplate {
    /// Template text
    pub text: String,
}

/// Description of the assistant's response surface
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Domain {
    /// Response templates by name
    pub responses: HashMap<String, ResponseTemplate>,
}

impl Domain {
    /// Load a domain description from serialized JSON
    pub fn from_json_str(json: &str) -> ActionResult<Self> {
        let domain = serde_json::from_str(json)?;
        Ok(domain)
    }

    /// Check whether a template is known
    pub fn has_template(&self, name: &str) -> bool {
        self.responses.contains_key(name)
    }

    /// Get a template by name
    pub fn template(&self, name: &str) -> Option<&ResponseTemplate> {
        self.responses.get(name)
    }

    /// Add or replace a response template
    pub fn insert_response(&mut self, name: impl Into<String>, text: impl Into<String>) {
        self.responses
            .insert(name.into(), ResponseTemplate { text: text.into() });
    }
}
