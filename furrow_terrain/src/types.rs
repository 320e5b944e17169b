// Copyright 2025 the Furrow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the terrain editor: change flags, the brush cursor, and configuration.

use kurbo::{Point, Vec2};

bitflags::bitflags! {
    /// What changed on an [`Editor`](crate::Editor) since the host last looked.
    ///
    /// Accumulated by editor operations and drained with
    /// [`Editor::take_changes`](crate::Editor::take_changes). A host typically
    /// re-uploads vertex data on [`HEIGHTS`](Self::HEIGHTS) and refreshes
    /// cursor uniforms on [`CURSOR`](Self::CURSOR).
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Changes: u8 {
        /// At least one vertex height was rewritten.
        const HEIGHTS = 0b0000_0001;
        /// The cursor moved.
        const CURSOR  = 0b0000_0010;
        /// The brush level changed.
        const LEVEL   = 0b0000_0100;
    }
}

/// Linear RGB color, components in `0.0..=1.0`.
pub type Color = [f32; 3];

/// Configuration for the brush [`Cursor`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CursorConfig {
    /// Brush radius in lattice units.
    pub radius: f64,
    /// Scale applied to pointer deltas before moving the cursor.
    pub sensitivity: f64,
    /// Display color handed to the host renderer.
    pub color: Color,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            radius: 0.5,
            sensitivity: 0.03,
            color: [0.79, 0.071, 0.13],
        }
    }
}

/// Largest lattice, in vertices, an [`EditorConfig`] may describe.
pub const MAX_VERTICES: u64 = 1 << 24;

/// Configuration for an [`Editor`](crate::Editor).
///
/// All fields have defaults, so a partial TOML document (with the `serde`
/// feature) only needs to name what it overrides.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EditorConfig {
    /// Number of vertex columns (along x).
    pub width: u32,
    /// Number of vertex rows (along z).
    pub depth: u32,
    /// Lowest brush level.
    pub min_level: f64,
    /// Highest brush level.
    pub max_level: f64,
    /// Amount a single scroll notch raises or lowers the level.
    pub level_step: f64,
    /// Brush cursor settings.
    pub cursor: CursorConfig,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            width: 10,
            depth: 10,
            min_level: -10.0,
            max_level: 10.0,
            level_step: 1.0,
            cursor: CursorConfig::default(),
        }
    }
}

/// Reasons an [`EditorConfig`] is rejected.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The lattice needs at least two vertices along each axis.
    #[error("lattice must be at least 2x2 vertices, got {width}x{depth}")]
    LatticeTooSmall {
        /// Configured column count.
        width: u32,
        /// Configured row count.
        depth: u32,
    },
    /// The lattice has more than [`MAX_VERTICES`] vertices.
    #[error("lattice of {width}x{depth} vertices exceeds the cap of {} vertices", MAX_VERTICES)]
    LatticeTooLarge {
        /// Configured column count.
        width: u32,
        /// Configured row count.
        depth: u32,
    },
    /// `min_level` is above `max_level`, or either bound is not finite.
    #[error("invalid level range [{min}, {max}]")]
    LevelRange {
        /// Configured lower bound.
        min: f64,
        /// Configured upper bound.
        max: f64,
    },
    /// A scalar that must be positive and finite is not.
    #[error("`{field}` must be positive and finite, got {value}")]
    NotPositive {
        /// Name of the offending field.
        field: &'static str,
        /// Configured value.
        value: f64,
    },
}

impl EditorConfig {
    /// Check the configuration for values the editor cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < 2 || self.depth < 2 {
            return Err(ConfigError::LatticeTooSmall {
                width: self.width,
                depth: self.depth,
            });
        }
        if u64::from(self.width) * u64::from(self.depth) > MAX_VERTICES {
            return Err(ConfigError::LatticeTooLarge {
                width: self.width,
                depth: self.depth,
            });
        }
        if !self.min_level.is_finite()
            || !self.max_level.is_finite()
            || self.min_level > self.max_level
        {
            return Err(ConfigError::LevelRange {
                min: self.min_level,
                max: self.max_level,
            });
        }
        for (field, value) in [
            ("level_step", self.level_step),
            ("cursor.radius", self.cursor.radius),
            ("cursor.sensitivity", self.cursor.sensitivity),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        Ok(())
    }
}

/// Circular brush that hovers over the lattice.
///
/// The center lives in the xz plane; `Point::x` is world x and `Point::y` is world z.
#[derive(Clone, Debug, PartialEq)]
pub struct Cursor {
    center: Point,
    radius: f64,
    sensitivity: f64,
    color: Color,
}

impl Cursor {
    /// Create a cursor at the origin.
    pub fn new(config: &CursorConfig) -> Self {
        Self {
            center: Point::ORIGIN,
            radius: config.radius,
            sensitivity: config.sensitivity,
            color: config.color,
        }
    }

    /// Center of the brush in the xz plane.
    pub fn center(&self) -> Point {
        self.center
    }

    /// Brush radius.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Display color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Move the center by pointer deltas scaled by the sensitivity.
    pub fn translate(&mut self, dx: f64, dz: f64) {
        self.center += Vec2::new(dx, dz) * self.sensitivity;
    }

    /// Whether `p` lies on or inside the brush circle.
    pub fn covers(&self, p: Point) -> bool {
        (p - self.center).hypot2() <= self.radius * self.radius
    }
}
