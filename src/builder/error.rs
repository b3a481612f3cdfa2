//! Build errors for state machine and transition builders.

use thiserror::Error;

/// Errors that can occur when building state machines and transitions.
///
/// These belong to the builder layer only. Constructing a
/// [`StateMachine`](crate::machine::StateMachine) directly never fails.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Transition source state not specified. Call .from(state)")]
    MissingFromState,

    #[error("Transition event not specified. Call .on(event)")]
    MissingEvent,

    #[error("Transition target state not specified. Call .to(state)")]
    MissingToState,

    #[error("Duplicate transition from '{from}' on '{event}'")]
    DuplicateTransition { from: String, event: String },

    #[error("Invalid transition definition: {0}")]
    InvalidDefinition(String),
}
