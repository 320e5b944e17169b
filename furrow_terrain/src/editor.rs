// Copyright 2025 the Furrow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core editor implementation: lattice layout, stamping, level control.

use alloc::vec::Vec;
use kurbo::Point;

use crate::types::{Changes, ConfigError, Cursor, EditorConfig};

/// Vertex layout of a `width x depth` lattice centered on the origin.
///
/// Vertices are unit-spaced and stored row-major: row `i` runs along x at
/// `z = 0.5 - depth / 2 + i`, column `j` sits at `x = 0.5 - width / 2 + j`.
/// Only positions are produced here; strip indices and buffer upload belong to
/// the renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct Lattice {
    width: u32,
    depth: u32,
    positions: Vec<Point>,
}

impl Lattice {
    /// Lay out a lattice with `width` columns and `depth` rows.
    ///
    /// Allocates every vertex up front. [`EditorConfig::validate`] bounds the
    /// size at [`MAX_VERTICES`](crate::MAX_VERTICES); direct callers must stay
    /// within memory themselves.
    pub fn new(width: u32, depth: u32) -> Self {
        let x0 = 0.5 - f64::from(width) / 2.0;
        let z0 = 0.5 - f64::from(depth) / 2.0;
        let mut positions = Vec::with_capacity(width as usize * depth as usize);
        for i in 0..depth {
            for j in 0..width {
                positions.push(Point::new(x0 + f64::from(j), z0 + f64::from(i)));
            }
        }
        Self {
            width,
            depth,
            positions,
        }
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the lattice has no vertices.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Vertex positions in the xz plane, row-major.
    pub fn positions(&self) -> &[Point] {
        &self.positions
    }

    /// Index of the vertex at `(row, col)`, if in range.
    pub fn index_of(&self, row: u32, col: u32) -> Option<usize> {
        (row < self.depth && col < self.width)
            .then(|| row as usize * self.width as usize + col as usize)
    }
}

/// Heightfield editor driven by a brush [`Cursor`].
///
/// ## Usage
///
/// - Move the brush with [`Editor::move_cursor`].
/// - Pick a level with [`Editor::raise`], [`Editor::lower`] or [`Editor::reset_level`].
/// - Call [`Editor::stamp`] to write the level into every vertex under the brush.
/// - Drain [`Editor::take_changes`] once per frame to learn what to re-upload.
#[derive(Clone, Debug)]
pub struct Editor {
    lattice: Lattice,
    heights: Vec<f64>,
    cursor: Cursor,
    level: f64,
    min_level: f64,
    max_level: f64,
    level_step: f64,
    changes: Changes,
}

impl Default for Editor {
    fn default() -> Self {
        Self::build(&EditorConfig::default())
    }
}

impl Editor {
    /// Create an editor from a validated configuration.
    pub fn new(config: &EditorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: &EditorConfig) -> Self {
        let lattice = Lattice::new(config.width, config.depth);
        let heights = alloc::vec![0.0; lattice.len()];
        Self {
            lattice,
            heights,
            cursor: Cursor::new(&config.cursor),
            level: 0.0,
            min_level: config.min_level,
            max_level: config.max_level,
            level_step: config.level_step,
            changes: Changes::empty(),
        }
    }

    /// Lattice layout.
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// Per-vertex heights, parallel to [`Lattice::positions`].
    pub fn heights(&self) -> &[f64] {
        &self.heights
    }

    /// The brush cursor.
    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// Current brush level.
    pub fn level(&self) -> f64 {
        self.level
    }

    /// Configured scroll step.
    pub fn level_step(&self) -> f64 {
        self.level_step
    }

    /// Move the cursor by pointer deltas.
    pub fn move_cursor(&mut self, dx: f32, dz: f32) {
        self.cursor.translate(f64::from(dx), f64::from(dz));
        self.changes |= Changes::CURSOR;
    }

    /// Write the current level into every vertex covered by the brush.
    ///
    /// Returns the number of vertices covered. Vertices outside the brush keep
    /// their height.
    pub fn stamp(&mut self) -> usize {
        let mut covered = 0;
        for (p, h) in self.lattice.positions.iter().zip(self.heights.iter_mut()) {
            if self.cursor.covers(*p) {
                *h = self.level;
                covered += 1;
            }
        }
        if covered > 0 {
            self.changes |= Changes::HEIGHTS;
        }
        tracing::debug!(covered, level = self.level, "stamped");
        covered
    }

    /// Add `delta` to the level, clamped to the configured range.
    ///
    /// A non-finite `delta` is ignored.
    pub fn adjust(&mut self, delta: f64) {
        if !delta.is_finite() {
            return;
        }
        let next = (self.level + delta).clamp(self.min_level, self.max_level);
        if next != self.level {
            self.level = next;
            self.changes |= Changes::LEVEL;
        }
    }

    /// Raise the level by `step`.
    pub fn raise(&mut self, step: f64) {
        self.adjust(step);
    }

    /// Lower the level by `step`.
    pub fn lower(&mut self, step: f64) {
        self.adjust(-step);
    }

    /// Return the level to zero.
    pub fn reset_level(&mut self) {
        if self.level != 0.0 {
            self.level = 0.0;
            self.changes |= Changes::LEVEL;
        }
    }

    /// Return and clear the changes accumulated since the last call.
    pub fn take_changes(&mut self) -> Changes {
        core::mem::take(&mut self.changes)
    }
}
