//! Job execution context
//!
//! Holds the explicit variable set a pipeline runs with. Tasks resolve
//! their command lines against this context instead of reading ambient
//! process environment, so runs are reproducible without env mutation.

use std::collections::HashMap;

/// Context available to tasks during construction and execution
#[derive(Debug, Clone, Default)]
pub struct JobContext {
    /// Variables available for substitution in command lines
    pub variables: HashMap<String, String>,
}

impl JobContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context from a variable map
    pub fn from_variables(variables: HashMap<String, String>) -> Self {
        Self { variables }
    }

    /// Set a single variable, overriding any existing value
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(key.into(), value.into());
    }

    /// Render a template with variable substitution
    ///
    /// Replaces placeholders in the form `{{ variable_name }}`. Unknown
    /// placeholders are left untouched.
    pub fn render(&self, template: &str) -> String {
        let mut rendered = template.to_string();

        for (key, value) in &self.variables {
            let placeholder = format!("{{{{ {} }}}}", key);
            rendered = rendered.replace(&placeholder, value);
        }

        rendered
    }
}
