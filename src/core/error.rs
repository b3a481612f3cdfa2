//! The engine's single error kind.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors reported to the observer when an event cannot be applied.
///
/// The error is never returned from `apply` and never fatal: the machine
/// stays in `state` and accepts further events.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransitionError<S, E> {
    #[error("No transition defined from state {state:?} on event {event:?}")]
    UndefinedTransition { state: S, event: E },
}

impl<S, E> TransitionError<S, E> {
    /// The state the machine was in when the event was rejected.
    pub fn state(&self) -> &S {
        match self {
            Self::UndefinedTransition { state, .. } => state,
        }
    }

    /// The rejected event.
    pub fn event(&self) -> &E {
        match self {
            Self::UndefinedTransition { event, .. } => event,
        }
    }
}
