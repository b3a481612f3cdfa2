//! Tabula: a minimal transition-table state machine
//!
//! A [`StateMachine`] holds a current state and an immutable table mapping
//! `(state, event)` pairs to [`Transition`]s. Applying an event either moves
//! the machine along the matching transition or leaves it where it was; in
//! both cases the outcome is handed to an optional observer callback.
//!
//! # Core Concepts
//!
//! - **State / Event / SideEffect**: any `Clone + Eq + Hash + Debug` value
//! - **Transition**: `from --event--> to`, with an optional side effect the
//!   engine never interprets
//! - **Observer**: one callback receiving `Ok(transition)` or
//!   `Err(TransitionError::UndefinedTransition { .. })` per `apply`
//!
//! # Example
//!
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use tabula::{state_enum, StateMachineBuilder, Transition, TransitionError};
//!
//! state_enum! {
//!     enum Player {
//!         Stopped,
//!         Playing,
//!         Paused,
//!     }
//! }
//!
//! state_enum! {
//!     enum Control {
//!         Play,
//!         Pause,
//!         Stop,
//!     }
//! }
//!
//! let failures = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&failures);
//!
//! let mut player = StateMachineBuilder::<Player, Control, ()>::new()
//!     .initial(Player::Stopped)
//!     .transitions(vec![
//!         Transition::new(Player::Stopped, Control::Play, Player::Playing),
//!         Transition::new(Player::Playing, Control::Pause, Player::Paused),
//!         Transition::new(Player::Playing, Control::Stop, Player::Stopped),
//!         Transition::new(Player::Paused, Control::Play, Player::Playing),
//!         Transition::new(Player::Paused, Control::Stop, Player::Stopped),
//!     ])
//!     .on_transition(move |result| {
//!         if let Err(error) = result {
//!             sink.lock().unwrap().push(error);
//!         }
//!     })
//!     .build()
//!     .unwrap();
//!
//! player.apply(Control::Play);
//! player.apply(Control::Stop);
//! player.apply(Control::Stop);
//!
//! assert_eq!(player.state(), &Player::Stopped);
//! assert_eq!(
//!     failures.lock().unwrap().as_slice(),
//!     &[TransitionError::UndefinedTransition {
//!         state: Player::Stopped,
//!         event: Control::Stop,
//!     }]
//! );
//! ```

pub mod builder;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use builder::{BuildError, MachineDefinition, StateMachineBuilder, TransitionBuilder};
pub use core::{Event, SideEffect, State, Transition, TransitionError, TransitionResult};
pub use machine::{observer, Observer, StateMachine};
