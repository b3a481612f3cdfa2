//! Value contracts for states, events and side effects.
//!
//! The engine never looks inside these values. It only needs to clone them,
//! compare them and hash them so they can form a lookup key.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine states.
///
/// Any `Clone + Eq + Hash + Debug` type is a state, so a plain enum
/// (or one declared with [`state_enum!`](crate::state_enum)) works
/// without an explicit impl.
///
/// # Example
///
/// ```rust
/// use tabula::core::State;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum Door {
///     Open,
///     Closed,
/// }
///
/// fn assert_state<S: State>(_: &S) {}
/// assert_state(&Door::Open);
/// ```
pub trait State: Clone + Eq + Hash + Debug {}

impl<T> State for T where T: Clone + Eq + Hash + Debug {}

/// Trait for the stimuli that drive transitions.
///
/// Same shape as [`State`]: comparable, hashable, cloneable.
pub trait Event: Clone + Eq + Hash + Debug {}

impl<T> Event for T where T: Clone + Eq + Hash + Debug {}

/// Trait for payloads attached to a transition.
///
/// Side effects are carried through to the observer untouched; the
/// consumer decides what they mean.
pub trait SideEffect: Clone + Eq + Hash + Debug {}

impl<T> SideEffect for T where T: Clone + Eq + Hash + Debug {}
