// Copyright 2025 the Furrow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mouse states and actions for pointer-driven editors.
//!
//! These are the closed sets the sandbox routes: three button modes and seven
//! event kinds. Only [`MouseAction::Movement`] carries a payload, the
//! `(dx, dz)` pointer delta.

use crate::machine::StateMachine;
use crate::types::{Action, Shape};

/// Which button, if any, is currently held.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum MouseState {
    /// No button held.
    #[default]
    Default,
    /// Primary button held.
    LeftPressed,
    /// Secondary button held.
    RightPressed,
}

/// Pointer, button, and scroll events.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum MouseAction {
    /// Primary button went down.
    LeftPress,
    /// Primary button went up.
    LeftRelease,
    /// Secondary button went down.
    RightPress,
    /// Secondary button went up.
    RightRelease,
    /// One scroll notch away from the user.
    ScrollUp,
    /// One scroll notch toward the user.
    ScrollDown,
    /// Pointer moved; carries `(dx, dz)`.
    Movement,
}

impl MouseAction {
    /// Every action, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::LeftPress,
        Self::LeftRelease,
        Self::RightPress,
        Self::RightRelease,
        Self::ScrollUp,
        Self::ScrollDown,
        Self::Movement,
    ];

    /// Map a vertical scroll offset to a notch action; zero maps to `None`.
    pub fn from_scroll(dy: f64) -> Option<Self> {
        if dy > 0.0 {
            Some(Self::ScrollUp)
        } else if dy < 0.0 {
            Some(Self::ScrollDown)
        } else {
            None
        }
    }
}

impl Action for MouseAction {
    fn shape(&self) -> Shape {
        match self {
            Self::Movement => Shape::Pair,
            _ => Shape::Unit,
        }
    }
}

/// A [`StateMachine`] over mouse states and actions, starting from
/// [`MouseState::Default`] when built with [`mouse_machine`].
pub type MouseMachine<C, E = core::convert::Infallible> =
    StateMachine<MouseState, MouseAction, C, E>;

/// Create an empty mouse machine in [`MouseState::Default`].
pub fn mouse_machine<C, E>() -> MouseMachine<C, E> {
    StateMachine::new(MouseState::default())
}
