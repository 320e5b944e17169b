// Copyright 2025 the Furrow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! State machine implementation.
//!
//! ## Overview
//!
//! Holds a transition table keyed by `(state, action)` and the current state.
//! Routes each incoming action to at most one handler.
//!
//! ## Lookup
//!
//! - Exact `(current, action)` match only; no wildcard states, no action hierarchy.
//! - At most one transition per pair. Registering the same pair again replaces
//!   the earlier transition; the last registration wins.
//! - A missing pair is a silent no-op reported as [`Outcome::Unhandled`].
//!
//! ## Atomicity
//!
//! The current state is written only after the handler returns `Ok`.
//! A handler that returns `Err` (or unwinds) leaves the state untouched.

use alloc::collections::BTreeMap;
use core::convert::Infallible;

use crate::error::{DispatchError, RegisterError};
use crate::types::{Action, Handler, Outcome, Payload, Transition};

/// Finite-state dispatcher over states `S`, actions `A`, and a context `C`.
///
/// ## Usage
///
/// - Construct with [`StateMachine::new`], naming the initial state.
/// - Describe the table once at startup with [`StateMachine::register`], or
///   the shape-specific [`StateMachine::on`] and [`StateMachine::on_move`].
/// - Forward each input event with [`StateMachine::fire`] (no payload) or
///   [`StateMachine::fire_with`] (two-float payload), passing the context the
///   handlers should mutate.
///
/// `E` is the handler error type; it defaults to [`Infallible`] for tables
/// whose handlers cannot fail.
pub struct StateMachine<S, A, C, E = Infallible> {
    table: BTreeMap<(S, A), Transition<S, C, E>>,
    initial: S,
    current: S,
}

impl<S: core::fmt::Debug, A, C, E> core::fmt::Debug for StateMachine<S, A, C, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StateMachine")
            .field("initial", &self.initial)
            .field("current", &self.current)
            .field("transitions", &self.table.len())
            .finish_non_exhaustive()
    }
}

impl<S, A, C, E> StateMachine<S, A, C, E>
where
    S: Copy + Ord + core::fmt::Debug,
    A: Action,
{
    /// Create a machine with an empty table, starting in `initial`.
    pub fn new(initial: S) -> Self {
        Self {
            table: BTreeMap::new(),
            initial,
            current: initial,
        }
    }

    /// The state the machine was constructed with.
    pub fn initial(&self) -> S {
        self.initial
    }

    /// The current state.
    pub fn current(&self) -> S {
        self.current
    }

    /// Number of registered transitions.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether no transitions are registered.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Whether a transition is registered for `(start, action)`.
    pub fn contains(&self, start: S, action: A) -> bool {
        self.table.contains_key(&(start, action))
    }

    /// The state `(start, action)` leads to, if registered.
    pub fn target(&self, start: S, action: A) -> Option<S> {
        self.table.get(&(start, action)).map(|t| t.end)
    }

    /// Register a transition from `start` to `end` on `action`.
    ///
    /// Fails if the handler's shape differs from [`Action::shape`]; the table is
    /// left untouched in that case. Otherwise replaces any transition already
    /// registered for `(start, action)`.
    pub fn register(
        &mut self,
        start: S,
        action: A,
        end: S,
        handler: Handler<C, E>,
    ) -> Result<(), RegisterError> {
        let declared = action.shape();
        let supplied = handler.shape();
        if declared != supplied {
            tracing::warn!(?start, ?action, ?declared, ?supplied, "rejected transition");
            return Err(RegisterError::ShapeMismatch { declared, supplied });
        }
        if self
            .table
            .insert((start, action), Transition { end, handler })
            .is_some()
        {
            tracing::debug!(?start, ?action, ?end, "replaced transition");
        }
        Ok(())
    }

    /// Register a no-payload transition.
    pub fn on(
        &mut self,
        start: S,
        action: A,
        end: S,
        f: impl FnMut(&mut C) -> Result<(), E> + 'static,
    ) -> Result<(), RegisterError> {
        self.register(start, action, end, Handler::unit(f))
    }

    /// Register a two-float-payload transition.
    pub fn on_move(
        &mut self,
        start: S,
        action: A,
        end: S,
        f: impl FnMut(&mut C, f32, f32) -> Result<(), E> + 'static,
    ) -> Result<(), RegisterError> {
        self.register(start, action, end, Handler::pair(f))
    }

    /// Route `action` with `payload` from the current state.
    ///
    /// - No transition for `(current, action)`: returns [`Outcome::Unhandled`]
    ///   without checking the payload.
    /// - Payload shape differs from the handler's: returns
    ///   [`DispatchError::Payload`]; nothing runs.
    /// - Handler returns `Err(e)`: returns [`DispatchError::Handler`]; the state
    ///   does not advance.
    /// - Otherwise the state advances to the transition's `end`.
    pub fn dispatch(
        &mut self,
        ctx: &mut C,
        action: A,
        payload: Payload,
    ) -> Result<Outcome<S>, DispatchError<E>> {
        let from = self.current;
        let Some(transition) = self.table.get_mut(&(from, action)) else {
            tracing::trace!(state = ?from, ?action, "unhandled");
            return Ok(Outcome::Unhandled);
        };
        let result = match (&mut transition.handler, payload) {
            (Handler::Unit(f), Payload::Unit) => f(ctx),
            (Handler::Pair(f), Payload::Pair(a, b)) => f(ctx, a, b),
            (handler, payload) => {
                return Err(DispatchError::Payload {
                    expected: handler.shape(),
                    supplied: payload.shape(),
                });
            }
        };
        if let Err(e) = result {
            tracing::warn!(state = ?from, ?action, "handler failed");
            return Err(DispatchError::Handler(e));
        }
        let to = transition.end;
        self.current = to;
        tracing::debug!(?from, ?to, ?action, "transition");
        Ok(Outcome::Transitioned { from, to })
    }

    /// Route a no-payload action.
    pub fn fire(&mut self, ctx: &mut C, action: A) -> Result<Outcome<S>, DispatchError<E>> {
        self.dispatch(ctx, action, Payload::Unit)
    }

    /// Route a two-float-payload action.
    pub fn fire_with(
        &mut self,
        ctx: &mut C,
        action: A,
        (a, b): (f32, f32),
    ) -> Result<Outcome<S>, DispatchError<E>> {
        self.dispatch(ctx, action, Payload::Pair(a, b))
    }
}
