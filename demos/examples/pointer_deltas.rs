// Copyright 2025 the Furrow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer deltas.
//!
//! Feeds absolute window positions through a `PointerTracker` and routes the
//! resulting deltas as `Movement` payloads while the right button is held.
//!
//! Run:
//! - `cargo run -p furrow_demos --example pointer_deltas`

use furrow_fsm::mouse::{MouseAction, MouseMachine, MouseState, mouse_machine};
use furrow_fsm::pointer::PointerTracker;

fn main() -> anyhow::Result<()> {
    let mut machine: MouseMachine<(f32, f32)> = mouse_machine();
    machine.on(
        MouseState::Default,
        MouseAction::RightPress,
        MouseState::RightPressed,
        |_| Ok(()),
    )?;
    machine.on_move(
        MouseState::RightPressed,
        MouseAction::Movement,
        MouseState::RightPressed,
        |orbit, dx, dy| {
            orbit.0 += dx;
            orbit.1 += dy;
            Ok(())
        },
    )?;
    machine.on(
        MouseState::RightPressed,
        MouseAction::RightRelease,
        MouseState::Default,
        |_| Ok(()),
    )?;

    let mut orbit = (0.0_f32, 0.0_f32);
    let mut tracker = PointerTracker::new();
    let samples = [
        (400.0, 300.0),
        (405.0, 298.0),
        (415.0, 290.0),
        (420.0, 291.0),
    ];

    machine.fire(&mut orbit, MouseAction::RightPress)?;
    for (x, y) in samples {
        let delta = tracker.update(x, y);
        machine.fire_with(&mut orbit, MouseAction::Movement, delta)?;
        println!("  pointer=({x}, {y})  delta={delta:?}  orbit={orbit:?}");
    }
    machine.fire(&mut orbit, MouseAction::RightRelease)?;

    // Released: further movement has no transition.
    let delta = tracker.update(500.0, 500.0);
    let outcome = machine.fire_with(&mut orbit, MouseAction::Movement, delta)?;
    println!("after release: {outcome:?}, orbit={orbit:?}");
    Ok(())
}
