//! State machine that routes events through an immutable transition table.

use crate::core::{Event, SideEffect, State, Transition, TransitionError, TransitionKey};
use crate::machine::callback::Observer;
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// State machine driven by a fixed `(state, event) -> transition` table.
///
/// The table is built once from the transitions handed to the constructor
/// and never changes. Later transitions with the same `(from, event)` pair
/// replace earlier ones; nothing else about the table is validated.
///
/// `apply` takes `&mut self`, so concurrent callers must serialize access
/// themselves (e.g. behind a `Mutex`).
///
/// # Example
///
/// ```rust
/// use tabula::core::Transition;
/// use tabula::machine::StateMachine;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum Door { Open, Closed }
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum Push { Open, Close }
///
/// let mut door: StateMachine<Door, Push, ()> = StateMachine::new(
///     Door::Closed,
///     vec![
///         Transition::new(Door::Closed, Push::Open, Door::Open),
///         Transition::new(Door::Open, Push::Close, Door::Closed),
///     ],
/// );
///
/// door.apply(Push::Open);
/// assert_eq!(door.state(), &Door::Open);
///
/// // Undefined: ignored without an observer
/// door.apply(Push::Open);
/// assert_eq!(door.state(), &Door::Open);
/// ```
pub struct StateMachine<S, E, F> {
    current: S,
    table: HashMap<TransitionKey<S, E>, Transition<S, E, F>>,
    on_transition: Option<Observer<S, E, F>>,
}

impl<S: State, E: Event, F: SideEffect> StateMachine<S, E, F> {
    /// Create a machine in `initial` without an observer.
    pub fn new<I>(initial: S, transitions: I) -> Self
    where
        I: IntoIterator<Item = Transition<S, E, F>>,
    {
        Self::build(initial, transitions, None)
    }

    /// Create a machine that reports every `apply` outcome to `observer`.
    pub fn with_observer<I>(initial: S, transitions: I, observer: Observer<S, E, F>) -> Self
    where
        I: IntoIterator<Item = Transition<S, E, F>>,
    {
        Self::build(initial, transitions, Some(observer))
    }

    pub(crate) fn build<I>(
        initial: S,
        transitions: I,
        on_transition: Option<Observer<S, E, F>>,
    ) -> Self
    where
        I: IntoIterator<Item = Transition<S, E, F>>,
    {
        let mut table = HashMap::new();
        for transition in transitions {
            let key = transition.key();
            if table.contains_key(&key) {
                debug!(
                    state = ?key.state(),
                    event = ?key.event(),
                    "later transition replaces earlier definition"
                );
            }
            table.insert(key, transition);
        }

        debug!(
            initial = ?initial,
            transitions = table.len(),
            observed = on_transition.is_some(),
            "state machine constructed"
        );

        Self {
            current: initial,
            table,
            on_transition,
        }
    }

    /// Get current state (pure)
    pub fn state(&self) -> &S {
        &self.current
    }

    /// Apply one event.
    ///
    /// On a defined transition the machine moves to its target state and the
    /// observer receives `Ok(transition)`. Otherwise the state is left as is
    /// and the observer receives `Err(TransitionError::UndefinedTransition)`.
    /// Nothing is returned: without an observer, failures are only visible
    /// as an unchanged [`state`](Self::state).
    pub fn apply(&mut self, event: E) {
        let key = TransitionKey::new(self.current.clone(), event);

        let result = match self.table.get(&key) {
            Some(transition) => {
                debug!(
                    from = ?transition.from,
                    event = ?transition.event,
                    to = ?transition.to,
                    side_effect = ?transition.side_effect,
                    "transition applied"
                );
                self.current = transition.to.clone();
                Ok(transition.clone())
            }
            None => {
                debug!(
                    state = ?key.state(),
                    event = ?key.event(),
                    "undefined transition"
                );
                let (state, event) = key.into_parts();
                Err(TransitionError::UndefinedTransition { state, event })
            }
        };

        if let Some(observer) = self.on_transition.as_mut() {
            observer(result);
        }
    }

    /// Check if `event` would be accepted in the current state (pure).
    pub fn can_apply(&self, event: &E) -> bool {
        self.table
            .contains_key(&TransitionKey::new(self.current.clone(), event.clone()))
    }

    /// Iterate over the reachable transitions, in no particular order.
    ///
    /// Transitions shadowed by a later duplicate are not included.
    pub fn transitions(&self) -> impl Iterator<Item = &Transition<S, E, F>> {
        self.table.values()
    }

    /// Check if an observer was registered at construction.
    pub fn has_observer(&self) -> bool {
        self.on_transition.is_some()
    }
}

impl<S: fmt::Debug, E: fmt::Debug, F: fmt::Debug> fmt::Debug for StateMachine<S, E, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateMachine")
            .field("current", &self.current)
            .field("transitions", &self.table.len())
            .field("observed", &self.on_transition.is_some())
            .finish()
    }
}


#[cfg(test)]
mod integration_tests {
    use super::*;
    use crate::machine::observer;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    enum Session {
        LoggedOut,
        LoggingIn,
        LoggedIn,
    }

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    enum Signal {
        Submit,
        Accepted,
        Rejected,
        Logout,
    }

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    enum Action {
        CallLoginApi,
        ShowAlert,
        PurgeCookies,
    }

    #[test]
    fn consumer_executes_side_effects_from_observer() {
        let executed: Arc<Mutex<Vec<Action>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&executed);

        let mut machine = StateMachine::with_observer(
            Session::LoggedOut,
            vec![
                Transition::new(Session::LoggedOut, Signal::Submit, Session::LoggingIn)
                    .with_side_effect(Action::CallLoginApi),
                Transition::new(Session::LoggingIn, Signal::Accepted, Session::LoggedIn),
                Transition::new(Session::LoggingIn, Signal::Rejected, Session::LoggedOut)
                    .with_side_effect(Action::ShowAlert),
                Transition::new(Session::LoggedIn, Signal::Logout, Session::LoggedOut)
                    .with_side_effect(Action::PurgeCookies),
            ],
            observer(move |result| {
                if let Ok(Transition {
                    side_effect: Some(action),
                    ..
                }) = result
                {
                    sink.lock().unwrap().push(action);
                }
            }),
        );

        machine.apply(Signal::Submit);
        machine.apply(Signal::Rejected);
        machine.apply(Signal::Submit);
        machine.apply(Signal::Accepted);
        machine.apply(Signal::Accepted);
        machine.apply(Signal::Logout);

        assert_eq!(machine.state(), &Session::LoggedOut);
        assert_eq!(
            *executed.lock().unwrap(),
            vec![
                Action::CallLoginApi,
                Action::ShowAlert,
                Action::CallLoginApi,
                Action::PurgeCookies,
            ]
        );
    }
}
