// Copyright 2025 the Furrow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the state machine: payload shapes, payloads, actions, handlers, and outcomes.
//!
//! ## Overview
//!
//! Every [`Action`] declares a fixed [`Shape`]. A [`Handler`] is a tagged
//! variant over the same closed set of shapes, so the
//! [machine](crate::machine::StateMachine) can compare the two when a
//! transition is registered and match on them when it fires.

use alloc::boxed::Box;

/// Payload shape carried by an action.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Shape {
    /// No payload (button press/release, scroll notch).
    Unit,
    /// Two `f32` values (pointer movement deltas).
    Pair,
}

/// A payload supplied at dispatch time.
///
/// Appears as the last argument of
/// [`StateMachine::dispatch`](crate::machine::StateMachine::dispatch).
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Payload {
    /// No payload.
    Unit,
    /// Two `f32` values.
    Pair(f32, f32),
}

impl Payload {
    /// Shape of this payload.
    pub const fn shape(&self) -> Shape {
        match self {
            Self::Unit => Shape::Unit,
            Self::Pair(..) => Shape::Pair,
        }
    }
}

impl From<()> for Payload {
    fn from((): ()) -> Self {
        Self::Unit
    }
}

impl From<(f32, f32)> for Payload {
    fn from((a, b): (f32, f32)) -> Self {
        Self::Pair(a, b)
    }
}

/// An input event kind with a statically known payload shape.
///
/// Implement this for a closed enum of event kinds. The shape must be a pure
/// function of the variant; it is consulted once per registration.
pub trait Action: Copy + Ord + core::fmt::Debug {
    /// Payload shape every occurrence of this action carries.
    fn shape(&self) -> Shape;
}

/// Handler signature for [`Shape::Unit`] actions.
pub type UnitFn<C, E> = dyn FnMut(&mut C) -> Result<(), E>;

/// Handler signature for [`Shape::Pair`] actions.
pub type PairFn<C, E> = dyn FnMut(&mut C, f32, f32) -> Result<(), E>;

/// Behavior attached to a transition.
///
/// Handlers receive the context `C` explicitly instead of capturing host
/// objects, so they never outlive what they mutate. Returning `Err` aborts the
/// transition; see [`StateMachine::dispatch`](crate::machine::StateMachine::dispatch).
pub enum Handler<C, E> {
    /// Takes no payload.
    Unit(Box<UnitFn<C, E>>),
    /// Takes a two-float payload.
    Pair(Box<PairFn<C, E>>),
}

impl<C, E> Handler<C, E> {
    /// Wrap a no-payload closure.
    pub fn unit(f: impl FnMut(&mut C) -> Result<(), E> + 'static) -> Self {
        Self::Unit(Box::new(f))
    }

    /// Wrap a two-float closure.
    pub fn pair(f: impl FnMut(&mut C, f32, f32) -> Result<(), E> + 'static) -> Self {
        Self::Pair(Box::new(f))
    }

    /// A no-payload handler that does nothing.
    pub fn noop() -> Self
    where
        C: 'static,
        E: 'static,
    {
        Self::unit(|_: &mut C| Ok(()))
    }

    /// Shape of the payload this handler accepts.
    pub const fn shape(&self) -> Shape {
        match self {
            Self::Unit(_) => Shape::Unit,
            Self::Pair(_) => Shape::Pair,
        }
    }
}

impl<C, E> core::fmt::Debug for Handler<C, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Handler").field(&self.shape()).finish()
    }
}

/// A registered transition: the state to enter and the handler to run first.
#[derive(Debug)]
pub struct Transition<S, C, E> {
    /// State entered once the handler returns `Ok`.
    pub end: S,
    /// Behavior run when the transition fires.
    pub handler: Handler<C, E>,
}

/// Result of a dispatch that did not fail.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Outcome<S> {
    /// No transition is registered for the current state and action.
    Unhandled,
    /// The handler ran and the machine moved from `from` to `to`.
    Transitioned {
        /// State before the dispatch.
        from: S,
        /// State after the dispatch.
        to: S,
    },
}

impl<S> Outcome<S> {
    /// Whether a handler ran.
    pub const fn is_handled(&self) -> bool {
        matches!(self, Self::Transitioned { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_shapes() {
        assert_eq!(Payload::Unit.shape(), Shape::Unit);
        assert_eq!(Payload::Pair(1.0, 2.0).shape(), Shape::Pair);
        assert_eq!(Payload::from(()), Payload::Unit);
        assert_eq!(Payload::from((1.5, -2.0)), Payload::Pair(1.5, -2.0));
    }

    #[test]
    fn handler_shapes() {
        let unit: Handler<u32, ()> = Handler::unit(|n| {
            *n += 1;
            Ok(())
        });
        let pair: Handler<u32, ()> = Handler::pair(|_, _, _| Ok(()));
        assert_eq!(unit.shape(), Shape::Unit);
        assert_eq!(pair.shape(), Shape::Pair);
        assert_eq!(Handler::<u32, ()>::noop().shape(), Shape::Unit);
    }

    #[test]
    fn outcome_is_handled() {
        assert!(!Outcome::<u8>::Unhandled.is_handled());
        assert!(Outcome::Transitioned { from: 0_u8, to: 1 }.is_handled());
    }
}
