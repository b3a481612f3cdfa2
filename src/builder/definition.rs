//! Declarative transition tables.
//!
//! A table is a JSON document listing transitions in order:
//!
//! ```json
//! {
//!   "initial": "Stopped",
//!   "transitions": [
//!     { "from": "Stopped", "event": "Play", "to": "Playing", "side_effect": "StartAudio" },
//!     { "from": "Playing", "event": "Stop", "to": "Stopped" }
//!   ]
//! }
//! ```
//!
//! Order is preserved, so duplicate keys follow the same last-write-wins
//! rule as hand-built tables.

use crate::builder::error::BuildError;
use crate::builder::machine::StateMachineBuilder;
use crate::core::{Event, SideEffect, State, Transition};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Serializable description of a machine: its initial state and table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineDefinition<S, E, F> {
    pub initial: S,
    #[serde(default = "Vec::new")]
    pub transitions: Vec<Transition<S, E, F>>,
}

impl<S, E, F> MachineDefinition<S, E, F>
where
    S: State + DeserializeOwned,
    E: Event + DeserializeOwned,
    F: SideEffect + DeserializeOwned,
{
    /// Parse a definition from JSON.
    pub fn from_json(json: &str) -> Result<Self, BuildError> {
        serde_json::from_str(json).map_err(|e| BuildError::InvalidDefinition(e.to_string()))
    }

    /// Seed a builder with this definition.
    ///
    /// The returned builder can still take an observer or more transitions.
    pub fn into_builder(self) -> StateMachineBuilder<S, E, F> {
        StateMachineBuilder::new()
            .initial(self.initial)
            .transitions(self.transitions)
    }
}

impl<S, E, F> MachineDefinition<S, E, F>
where
    S: Serialize,
    E: Serialize,
    F: Serialize,
{
    /// Render the definition as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, BuildError> {
        serde_json::to_string_pretty(self).map_err(|e| BuildError::InvalidDefinition(e.to_string()))
    }
}

/// Parse a bare JSON array of transitions, keeping their order.
pub fn transitions_from_json<S, E, F>(json: &str) -> Result<Vec<Transition<S, E, F>>, BuildError>
where
    S: State + DeserializeOwned,
    E: Event + DeserializeOwned,
    F: SideEffect + DeserializeOwned,
{
    serde_json::from_str(json).map_err(|e| BuildError::InvalidDefinition(e.to_string()))
}
