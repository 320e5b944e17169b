// Copyright 2025 the Furrow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! State machine basics.
//!
//! This minimal example registers a press/release table over a tiny counter
//! context, fires a few events, and prints each outcome, including an event
//! with no transition in the current state and a rejected registration.
//!
//! Run:
//! - `cargo run -p furrow_demos --example fsm_basics`

use furrow_fsm::mouse::{MouseAction, MouseMachine, MouseState, mouse_machine};

#[derive(Debug, Default)]
struct Clicks {
    down: u32,
    up: u32,
}

fn main() -> anyhow::Result<()> {
    let mut machine: MouseMachine<Clicks> = mouse_machine();
    machine.on(
        MouseState::Default,
        MouseAction::LeftPress,
        MouseState::LeftPressed,
        |c| {
            c.down += 1;
            Ok(())
        },
    )?;
    machine.on(
        MouseState::LeftPressed,
        MouseAction::LeftRelease,
        MouseState::Default,
        |c| {
            c.up += 1;
            Ok(())
        },
    )?;

    // Movement carries a payload, so a no-payload handler is refused.
    if let Err(e) = machine.on(
        MouseState::Default,
        MouseAction::Movement,
        MouseState::Default,
        |_| Ok(()),
    ) {
        println!("rejected: {e}");
    }

    let mut clicks = Clicks::default();
    println!("== Dispatch ==");
    for action in [
        MouseAction::LeftPress,
        MouseAction::ScrollUp,
        MouseAction::LeftRelease,
        MouseAction::LeftRelease,
    ] {
        let outcome = machine.fire(&mut clicks, action)?;
        println!("  {action:?}  -> {outcome:?}  (now {:?})", machine.current());
    }
    println!("{clicks:?}");
    Ok(())
}
