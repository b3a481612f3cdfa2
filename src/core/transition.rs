//! The transition record and its lookup key.

use super::error::TransitionError;
use super::state::{Event, SideEffect, State};
use serde::{Deserialize, Serialize};

/// One legal edge in the state graph.
///
/// A transition is an immutable value: when the machine is in `from` and
/// receives `event`, it moves to `to` and hands the optional `side_effect`
/// to its observer.
///
/// # Example
///
/// ```rust
/// use tabula::core::Transition;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum Light { Red, Green }
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum Tick { Timer }
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum Lamp { Switch }
///
/// let plain: Transition<Light, Tick, Lamp> =
///     Transition::new(Light::Red, Tick::Timer, Light::Green);
/// assert!(plain.side_effect.is_none());
///
/// let with_effect = plain.clone().with_side_effect(Lamp::Switch);
/// assert_eq!(with_effect.side_effect, Some(Lamp::Switch));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transition<S, E, F> {
    /// The state the transition leaves
    pub from: S,
    /// The event that triggers it
    pub event: E,
    /// The state the transition enters
    pub to: S,
    /// Payload handed to the observer, if any
    pub side_effect: Option<F>,
}

impl<S: State, E: Event, F: SideEffect> Transition<S, E, F> {
    /// Create a transition without a side effect.
    pub fn new(from: S, event: E, to: S) -> Self {
        Self {
            from,
            event,
            to,
            side_effect: None,
        }
    }

    /// Attach a side effect, replacing any previous one.
    pub fn with_side_effect(mut self, side_effect: F) -> Self {
        self.side_effect = Some(side_effect);
        self
    }

    /// Check if this transition leaves `state` on `event` (pure).
    pub fn matches(&self, state: &S, event: &E) -> bool {
        self.from == *state && self.event == *event
    }

    /// Check if the transition returns to the state it left.
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }

    pub(crate) fn key(&self) -> TransitionKey<S, E> {
        TransitionKey::new(self.from.clone(), self.event.clone())
    }
}

/// Outcome of applying one event, as delivered to the observer.
///
/// `Ok` carries the matched transition (side effect included), `Err`
/// carries the rejected state and event.
pub type TransitionResult<S, E, F> = Result<Transition<S, E, F>, TransitionError<S, E>>;

/// Composite `(state, event)` index into the transition table.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct TransitionKey<S, E> {
    state: S,
    event: E,
}

impl<S: State, E: Event> TransitionKey<S, E> {
    pub(crate) fn new(state: S, event: E) -> Self {
        Self { state, event }
    }

    pub(crate) fn state(&self) -> &S {
        &self.state
    }

    pub(crate) fn event(&self) -> &E {
        &self.event
    }

    pub(crate) fn into_parts(self) -> (S, E) {
        (self.state, self.event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestState {
        Start,
        Middle,
    }

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestEvent {
        Go,
        Stay,
    }

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestEffect {
        Notify,
    }

    type TestTransition = Transition<TestState, TestEvent, TestEffect>;

    #[test]
    fn new_has_no_side_effect() {
        let transition = TestTransition::new(TestState::Start, TestEvent::Go, TestState::Middle);

        assert_eq!(transition.from, TestState::Start);
        assert_eq!(transition.event, TestEvent::Go);
        assert_eq!(transition.to, TestState::Middle);
        assert!(transition.side_effect.is_none());
    }

    #[test]
    fn matches_requires_both_state_and_event() {
        let transition = TestTransition::new(TestState::Start, TestEvent::Go, TestState::Middle);

        assert!(transition.matches(&TestState::Start, &TestEvent::Go));
        assert!(!transition.matches(&TestState::Start, &TestEvent::Stay));
        assert!(!transition.matches(&TestState::Middle, &TestEvent::Go));
    }

    #[test]
    fn self_loop_is_detected() {
        let looping = TestTransition::new(TestState::Start, TestEvent::Stay, TestState::Start);
        let moving = TestTransition::new(TestState::Start, TestEvent::Go, TestState::Middle);

        assert!(looping.is_self_loop());
        assert!(!moving.is_self_loop());
    }

    #[test]
    fn key_is_built_from_source_and_event() {
        let transition = TestTransition::new(TestState::Start, TestEvent::Go, TestState::Middle)
            .with_side_effect(TestEffect::Notify);
        let key = transition.key();

        assert_eq!(key.state(), &TestState::Start);
        assert_eq!(key.event(), &TestEvent::Go);
        assert_eq!(key, TransitionKey::new(TestState::Start, TestEvent::Go));
    }

    #[test]
    fn transition_deserializes_without_side_effect_field() {
        let json = r#"{"from":"Start","event":"Go","to":"Middle"}"#;
        let transition: TestTransition = serde_json::from_str(json).unwrap();

        assert_eq!(
            transition,
            TestTransition::new(TestState::Start, TestEvent::Go, TestState::Middle)
        );
    }

    #[test]
    fn side_effect_type_needs_no_default() {
        // TestEffect has no Default impl
        let json = r#"{"from":"Start","event":"Go","to":"Middle","side_effect":"Notify"}"#;
        let transition: TestTransition = serde_json::from_str(json).unwrap();

        assert_eq!(transition.side_effect, Some(TestEffect::Notify));
    }
}
