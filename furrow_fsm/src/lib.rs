// Copyright 2025 the Furrow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Furrow FSM: a deterministic, `no_std` input state machine.
//!
//! ## Overview
//!
//! This crate routes input events (button presses, scroll notches, pointer
//! movement) to application behavior through a finite-state transition table.
//! Each transition maps `(state, action)` to `(next state, handler)`.
//! The host registers the table once at startup, then forwards every input
//! event as it arrives; the machine runs at most one handler per event and
//! updates its current state.
//!
//! ## Payload shapes
//!
//! Actions carry different payloads: a click carries nothing, a pointer move
//! carries two deltas. Every [`Action`](crate::types::Action) declares its
//! [`Shape`](crate::types::Shape), and every [`Handler`](crate::types::Handler)
//! is a tagged variant over the same shapes.
//!
//! - Registration compares the two and rejects a mismatch with
//!   [`RegisterError`](crate::error::RegisterError) before the table changes.
//! - Dispatch matches the handler against the supplied
//!   [`Payload`](crate::types::Payload); a mismatch is reported as
//!   [`DispatchError::Payload`](crate::error::DispatchError::Payload), never cast.
//!
//! ## Semantics
//!
//! - Lookup is by exact `(current, action)` pair. There is no wildcard state.
//! - Registering a pair twice replaces the first transition.
//! - An unregistered pair is a no-op reported as
//!   [`Outcome::Unhandled`](crate::types::Outcome::Unhandled).
//! - The state advances only after the handler returns `Ok`. A failing handler
//!   leaves the state where it was and its error is returned to the caller.
//!
//! ## Context
//!
//! Handlers do not capture the objects they mutate. They receive a `&mut C`
//! passed to each dispatch call, so the machine and the context have
//! independent lifetimes.
//!
//! ## Example
//!
//! ```
//! use furrow_fsm::mouse::{MouseAction, MouseMachine, MouseState, mouse_machine};
//!
//! #[derive(Default)]
//! struct Brush { offset: (f32, f32), strokes: u32 }
//!
//! let mut m: MouseMachine<Brush> = mouse_machine();
//! m.on(MouseState::Default, MouseAction::LeftPress, MouseState::LeftPressed, |_| Ok(()))?;
//! m.on_move(MouseState::LeftPressed, MouseAction::Movement, MouseState::LeftPressed, |b, dx, dz| {
//!     b.offset.0 += dx;
//!     b.offset.1 += dz;
//!     Ok(())
//! })?;
//! m.on(MouseState::LeftPressed, MouseAction::LeftRelease, MouseState::Default, |b| {
//!     b.strokes += 1;
//!     Ok(())
//! })?;
//!
//! let mut brush = Brush::default();
//! m.fire(&mut brush, MouseAction::LeftPress).unwrap();
//! m.fire_with(&mut brush, MouseAction::Movement, (2.0, -1.0)).unwrap();
//! m.fire_with(&mut brush, MouseAction::Movement, (1.0, 1.0)).unwrap();
//! m.fire(&mut brush, MouseAction::LeftRelease).unwrap();
//!
//! assert_eq!(brush.offset, (3.0, 0.0));
//! assert_eq!(brush.strokes, 1);
//! assert_eq!(m.current(), MouseState::Default);
//! # Ok::<(), furrow_fsm::error::RegisterError>(())
//! ```
//!
//! ## Concurrency
//!
//! Dispatch takes `&mut self` and runs handlers inline. Share a machine across
//! threads only behind your own synchronization.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod adapters;
pub mod error;
pub mod machine;
pub mod mouse;
pub mod pointer;
pub mod types;
