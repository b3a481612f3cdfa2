//! Builder API for ergonomic state machine construction.
//!
//! This module provides fluent builders, a declaration macro and JSON
//! transition tables for creating state machines with minimal boilerplate
//! while maintaining type safety.

pub mod definition;
pub mod error;
pub mod machine;
pub mod macros;
pub mod transition;

pub use definition::{transitions_from_json, MachineDefinition};
pub use error::BuildError;
pub use machine::StateMachineBuilder;
pub use transition::TransitionBuilder;

use crate::core::{Event, SideEffect, State, Transition};

/// Create a transition without a side effect.
///
/// # Example
///
/// ```
/// use tabula::builder::simple_transition;
/// use tabula::state_enum;
///
/// state_enum! {
///     enum Light {
///         Red,
///         Green,
///     }
/// }
///
/// state_enum! {
///     enum Tick {
///         Timer,
///     }
/// }
///
/// let transition = simple_transition::<Light, Tick, ()>(Light::Red, Tick::Timer, Light::Green);
/// assert!(transition.side_effect.is_none());
/// ```
pub fn simple_transition<S, E, F>(from: S, event: E, to: S) -> Transition<S, E, F>
where
    S: State,
    E: Event,
    F: SideEffect,
{
    Transition::new(from, event, to)
}

/// Create a transition that carries a side effect.
///
/// # Example
///
/// ```
/// use tabula::builder::effect_transition;
/// use tabula::state_enum;
///
/// state_enum! {
///     enum Session {
///         LoggedIn,
///         LoggedOut,
///     }
/// }
///
/// state_enum! {
///     enum Signal {
///         Logout,
///     }
/// }
///
/// state_enum! {
///     enum Cleanup {
///         PurgeCookies,
///     }
/// }
///
/// let transition = effect_transition(
///     Session::LoggedIn,
///     Signal::Logout,
///     Session::LoggedOut,
///     Cleanup::PurgeCookies,
/// );
/// assert_eq!(transition.side_effect, Some(Cleanup::PurgeCookies));
/// ```
pub fn effect_transition<S, E, F>(from: S, event: E, to: S, side_effect: F) -> Transition<S, E, F>
where
    S: State,
    E: Event,
    F: SideEffect,
{
    Transition::new(from, event, to).with_side_effect(side_effect)
}
