//! Media Player State Machine
//!
//! This example drives a three-state player and shows how a consumer
//! interprets side effects inside the observer.
//!
//! Key concepts:
//! - Closed state/event/side-effect sets via `state_enum!`
//! - Side effects are data; the observer decides what they do
//! - Undefined transitions are reported, not fatal
//!
//! Run with: cargo run --example media_player

use tabula::{state_enum, StateMachineBuilder, Transition};

state_enum! {
    enum Player {
        Stopped,
        Playing,
        Paused,
    }
}

state_enum! {
    enum Control {
        Play,
        Pause,
        Stop,
    }
}

state_enum! {
    enum Audio {
        Start,
        Halt,
    }
}

fn main() {
    println!("=== Media Player State Machine ===\n");

    let mut player = StateMachineBuilder::<Player, Control, Audio>::new()
        .initial(Player::Stopped)
        .transitions(vec![
            Transition::new(Player::Stopped, Control::Play, Player::Playing)
                .with_side_effect(Audio::Start),
            Transition::new(Player::Playing, Control::Pause, Player::Paused),
            Transition::new(Player::Playing, Control::Stop, Player::Stopped)
                .with_side_effect(Audio::Halt),
            Transition::new(Player::Paused, Control::Play, Player::Playing),
            Transition::new(Player::Paused, Control::Stop, Player::Stopped)
                .with_side_effect(Audio::Halt),
        ])
        .on_transition(|result| match result {
            Ok(transition) => {
                println!(
                    "  {} --{}--> {}",
                    transition.from, transition.event, transition.to
                );
                match transition.side_effect {
                    Some(Audio::Start) => println!("    (audio device opened)"),
                    Some(Audio::Halt) => println!("    (audio device released)"),
                    None => {}
                }
            }
            Err(error) => println!("  rejected: {error}"),
        })
        .build()
        .expect("initial state is set");

    println!("Initial state: {}\n", player.state());

    for control in [
        Control::Play,
        Control::Pause,
        Control::Play,
        Control::Stop,
        Control::Stop,
    ] {
        player.apply(control);
    }

    println!("\nFinal state: {}", player.state());
    println!("\n=== Example Complete ===");
}
