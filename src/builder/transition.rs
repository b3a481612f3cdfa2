//! Builder for constructing state transitions.

use crate::builder::error::BuildError;
use crate::core::{Event, SideEffect, State, Transition};

/// Builder for constructing transitions with a fluent API.
pub struct TransitionBuilder<S, E, F> {
    from: Option<S>,
    event: Option<E>,
    to: Option<S>,
    side_effect: Option<F>,
}

impl<S: State, E: Event, F: SideEffect> TransitionBuilder<S, E, F> {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self {
            from: None,
            event: None,
            to: None,
            side_effect: None,
        }
    }

    /// Set the source state (required).
    pub fn from(mut self, state: S) -> Self {
        self.from = Some(state);
        self
    }

    /// Set the triggering event (required).
    pub fn on(mut self, event: E) -> Self {
        self.event = Some(event);
        self
    }

    /// Set the target state (required).
    pub fn to(mut self, state: S) -> Self {
        self.to = Some(state);
        self
    }

    /// Attach a side effect (optional).
    pub fn side_effect(mut self, side_effect: F) -> Self {
        self.side_effect = Some(side_effect);
        self
    }

    /// Target the source state, producing a self-loop.
    /// The source state must be set with `.from()` first.
    pub fn stays(mut self) -> Result<Self, BuildError> {
        let from = self.from.clone().ok_or(BuildError::MissingFromState)?;
        self.to = Some(from);
        Ok(self)
    }

    /// Build the transition.
    pub fn build(self) -> Result<Transition<S, E, F>, BuildError> {
        let from = self.from.ok_or(BuildError::MissingFromState)?;
        let event = self.event.ok_or(BuildError::MissingEvent)?;
        let to = self.to.ok_or(BuildError::MissingToState)?;

        Ok(Transition {
            from,
            event,
            to,
            side_effect: self.side_effect,
        })
    }
}

impl<S: State, E: Event, F: SideEffect> Default for TransitionBuilder<S, E, F> {
    fn default() -> Self {
        Self::new()
    }
}
