// Copyright 2025 the Furrow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapters to integrate with other Furrow crates.
//!
//! Enabled via feature flags to keep the core small and `no_std` by default.

#[cfg(feature = "terrain_adapter")]
pub mod terrain;
