//! The transition table engine.
//!
//! This module holds the only mutable piece of the crate: the current state
//! of a [`StateMachine`]. Every `apply` performs one table lookup, at most
//! one state update, and exactly one observer call, all on the caller's
//! stack.
//!
//! # Key Concepts
//!
//! - **Transition table**: built once at construction, never modified
//! - **Observer**: optional single-slot callback receiving each outcome
//! - **Failures**: reported, never returned or panicked

mod callback;
mod state_machine;

pub use callback::{observer, Observer};
pub use state_machine::StateMachine;
