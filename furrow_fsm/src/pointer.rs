// Copyright 2025 the Furrow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer delta helper: turn absolute cursor positions into movement payloads.
//!
//! Window systems usually report where the pointer is, while editors want how
//! far it moved. [`PointerTracker`] remembers the last sample and yields the
//! delta for [`MouseAction::Movement`](crate::mouse::MouseAction::Movement).
//!
//! ## Minimal example
//!
//! ```
//! use furrow_fsm::pointer::PointerTracker;
//! let mut p = PointerTracker::new();
//! assert_eq!(p.update(400.0, 300.0), (0.0, 0.0));
//! assert_eq!(p.update(410.0, 290.0), (10.0, 10.0));
//! ```

/// Tracks the last pointer position and reports deltas.
///
/// - The first sample after [`PointerTracker::new`] or [`PointerTracker::reset`]
///   yields `(0.0, 0.0)` so a jump into the window does not read as a drag.
/// - The vertical delta is reversed: window y grows downward, so moving the
///   pointer up yields a positive value.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PointerTracker {
    last: Option<(f64, f64)>,
}

impl PointerTracker {
    /// Create a tracker with no prior sample.
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Forget the last sample, e.g. after the pointer is recaptured.
    pub fn reset(&mut self) {
        self.last = None;
    }

    /// The last absolute position seen, if any.
    pub fn last(&self) -> Option<(f64, f64)> {
        self.last
    }

    /// Record an absolute position and return `(dx, dy)` since the previous one.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Movement payloads are f32."
    )]
    pub fn update(&mut self, x: f64, y: f64) -> (f32, f32) {
        let (last_x, last_y) = self.last.unwrap_or((x, y));
        self.last = Some((x, y));
        ((x - last_x) as f32, (last_y - y) as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sample_is_zero() {
        let mut p = PointerTracker::new();
        assert_eq!(p.last(), None);
        assert_eq!(p.update(12.0, 34.0), (0.0, 0.0));
        assert_eq!(p.last(), Some((12.0, 34.0)));
    }

    #[test]
    fn vertical_axis_is_reversed() {
        let mut p = PointerTracker::new();
        p.update(0.0, 0.0);
        assert_eq!(p.update(3.0, 5.0), (3.0, -5.0));
        assert_eq!(p.update(1.0, 1.0), (-2.0, 4.0));
    }

    #[test]
    fn reset_swallows_next_jump() {
        let mut p = PointerTracker::new();
        p.update(0.0, 0.0);
        p.reset();
        assert_eq!(p.update(500.0, 500.0), (0.0, 0.0));
        assert_eq!(p.update(501.0, 500.0), (1.0, 0.0));
    }
}
