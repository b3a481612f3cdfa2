//! Core value types of the state machine.
//!
//! This module contains the plain data the engine works with:
//! - State, event and side-effect contracts
//! - The immutable `Transition` record
//! - The `TransitionError` reported for undefined transitions
//!
//! Nothing here mutates anything; the only mutable piece of the crate is
//! the current state held by [`StateMachine`](crate::machine::StateMachine).

mod error;
mod state;
mod transition;

pub use error::TransitionError;
pub use state::{Event, SideEffect, State};
pub use transition::{Transition, TransitionResult};

pub(crate) use transition::TransitionKey;
