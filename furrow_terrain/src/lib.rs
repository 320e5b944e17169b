// Copyright 2025 the Furrow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Furrow Terrain: a Kurbo-native heightfield editor.
//!
//! A unit-spaced vertex lattice lies in the xz plane, centered on the origin.
//! A circular brush [`Cursor`] hovers over it, and [`Editor::stamp`] writes the
//! current brush level into every vertex under the brush.
//!
//! ## Not a renderer
//!
//! This crate does not generate strip indices, upload buffers, or draw.
//! The host reads [`Lattice::positions`] and [`Editor::heights`] and turns them
//! into whatever vertex format its graphics API wants.
//! [`Editor::take_changes`] reports what moved since the last frame so the host
//! can skip redundant uploads.
//!
//! ## API overview
//!
//! - [`Editor`]: heightfield, cursor, and brush level.
//! - [`Lattice`]: vertex positions of the grid.
//! - [`Cursor`]: brush center, radius, sensitivity, and color.
//! - [`EditorConfig`] / [`CursorConfig`]: construction parameters, validated by
//!   [`EditorConfig::validate`]. With the `serde` feature they can be read from
//!   any serde format.
//! - [`Changes`]: bitflags drained once per frame.
//!
//! ### Minimal usage
//!
//! ```
//! use furrow_terrain::{Changes, Editor, EditorConfig};
//!
//! let mut editor = Editor::new(&EditorConfig { width: 3, depth: 3, ..Default::default() })?;
//! editor.raise(2.0);
//! assert_eq!(editor.stamp(), 1);
//! assert!(editor.take_changes().contains(Changes::HEIGHTS | Changes::LEVEL));
//! # Ok::<(), furrow_terrain::ConfigError>(())
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod editor;
mod types;

pub use editor::{Editor, Lattice};
pub use types::{Changes, Color, ConfigError, Cursor, CursorConfig, EditorConfig, MAX_VERTICES};
