//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::core::{Event, SideEffect, State, Transition, TransitionResult};
use crate::machine::{Observer, StateMachine};
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Builder for constructing state machines with a fluent API.
///
/// [`build`](Self::build) is as permissive as
/// [`StateMachine::new`]: an empty table, duplicate keys and orphaned
/// states are all accepted. [`build_strict`](Self::build_strict) is the
/// opt-in validated mode.
pub struct StateMachineBuilder<S, E, F> {
    initial: Option<S>,
    transitions: Vec<Transition<S, E, F>>,
    on_transition: Option<Observer<S, E, F>>,
}

impl<S: State, E: Event, F: SideEffect> StateMachineBuilder<S, E, F> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            transitions: Vec::new(),
            on_transition: None,
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Add a transition using a builder.
    /// Returns an error if the builder fails validation.
    pub fn transition(mut self, builder: TransitionBuilder<S, E, F>) -> Result<Self, BuildError> {
        let transition = builder.build()?;
        self.transitions.push(transition);
        Ok(self)
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, transition: Transition<S, E, F>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add multiple transitions at once, keeping their order.
    pub fn transitions<I>(mut self, transitions: I) -> Self
    where
        I: IntoIterator<Item = Transition<S, E, F>>,
    {
        self.transitions.extend(transitions);
        self
    }

    /// Register the observer. A second call replaces the first.
    pub fn on_transition<C>(mut self, callback: C) -> Self
    where
        C: FnMut(TransitionResult<S, E, F>) + Send + 'static,
    {
        self.on_transition = Some(Box::new(callback));
        self
    }

    /// Collect every problem strict mode would reject.
    ///
    /// Reports a missing initial state and each `(from, event)` pair that
    /// appears more than once, all in a single pass.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<BuildError>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<BuildError>>> = Vec::new();

        if self.initial.is_none() {
            checks.push(Validation::fail(BuildError::MissingInitialState));
        }

        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        for transition in &self.transitions {
            let key = (&transition.from, &transition.event);
            if !seen.insert(key) && reported.insert(key) {
                checks.push(Validation::fail(BuildError::DuplicateTransition {
                    from: format!("{:?}", transition.from),
                    event: format!("{:?}", transition.event),
                }));
            }
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Build the state machine.
    /// Returns an error only if the initial state is missing.
    pub fn build(self) -> Result<StateMachine<S, E, F>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        Ok(StateMachine::build(
            initial,
            self.transitions,
            self.on_transition,
        ))
    }

    /// Build the state machine, rejecting duplicate `(from, event)` pairs.
    /// Returns ALL problems found, not just the first.
    pub fn build_strict(self) -> Result<StateMachine<S, E, F>, NonEmptyVec<BuildError>> {
        if let Validation::Failure(errors) = self.validate() {
            return Err(errors);
        }

        let initial = self
            .initial
            .ok_or_else(|| NonEmptyVec::singleton(BuildError::MissingInitialState))?;

        Ok(StateMachine::build(
            initial,
            self.transitions,
            self.on_transition,
        ))
    }
}

impl<S: State, E: Event, F: SideEffect> Default for StateMachineBuilder<S, E, F> {
    fn default() -> Self {
        Self::new()
    }
}
