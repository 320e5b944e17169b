// Copyright 2025 the Furrow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors surfaced by registration and dispatch.
//!
//! An action with no transition in the current state is not an error; it is
//! reported as [`Outcome::Unhandled`](crate::types::Outcome::Unhandled).

use crate::types::Shape;

/// A transition was rejected before it reached the table.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum RegisterError {
    /// The handler's payload shape differs from the one the action declares.
    #[error("handler accepts a {supplied:?} payload but the action carries {declared:?}")]
    ShapeMismatch {
        /// Shape declared by the action.
        declared: Shape,
        /// Shape accepted by the supplied handler.
        supplied: Shape,
    },
}

/// A dispatch that found a transition but could not complete it.
///
/// In both cases the current state is left as it was.
#[derive(Debug, Eq, PartialEq, thiserror::Error)]
pub enum DispatchError<E> {
    /// The caller supplied a payload of the wrong shape; the handler did not run.
    #[error("supplied a {supplied:?} payload where {expected:?} was expected")]
    Payload {
        /// Shape the registered handler accepts.
        expected: Shape,
        /// Shape the caller supplied.
        supplied: Shape,
    },
    /// The handler returned an error.
    #[error("transition handler failed")]
    Handler(#[source] E),
}

impl<E> DispatchError<E> {
    /// The handler's own error, if that is what failed.
    pub fn into_handler_error(self) -> Option<E> {
        match self {
            Self::Handler(e) => Some(e),
            Self::Payload { .. } => None,
        }
    }
}
