// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for UI values,
//! ensuring they are always within valid ranges.

// =============================================================================
// Swipe Threshold Bounds
// =============================================================================

/// Swipe threshold bounds in device pixels (10 to 400).
pub mod swipe_bounds {
    /// Minimum horizontal travel for a swipe.
    pub const MIN_PX: f32 = 10.0;
    /// Maximum horizontal travel for a swipe.
    pub const MAX_PX: f32 = 400.0;
    /// Default horizontal travel for a swipe.
    pub const DEFAULT_PX: f32 = 50.0;
}

// =============================================================================
// SwipeThreshold
// =============================================================================

/// Horizontal distance a touch must travel before it counts as a swipe.
///
/// Movements whose magnitude is less than or equal to the threshold are
/// treated as taps or scrolls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeThreshold(f32);

impl SwipeThreshold {
    /// Creates a new threshold, clamping the value to the valid range.
    ///
    /// Non-finite values fall back to the default.
    #[must_use]
    pub fn new(px: f32) -> Self {
        if !px.is_finite() {
            return Self::default();
        }
        Self(px.clamp(swipe_bounds::MIN_PX, swipe_bounds::MAX_PX))
    }

    /// Returns the raw pixel value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns whether a horizontal displacement exceeds the threshold.
    #[must_use]
    pub fn is_exceeded_by(self, displacement: f32) -> bool {
        displacement.abs() > self.0
    }
}

impl Default for SwipeThreshold {
    fn default() -> Self {
        Self(swipe_bounds::DEFAULT_PX)
    }
}

// =============================================================================
// Grid Column Bounds
// =============================================================================

/// Thumbnail grid column bounds (1 to 8).
pub mod grid_bounds {
    pub const MIN: u16 = 1;
    pub const MAX: u16 = 8;
    pub const DEFAULT: u16 = 3;
}

// =============================================================================
// GridColumns
// =============================================================================

/// Number of thumbnail columns in the gallery grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridColumns(u16);

impl GridColumns {
    /// Creates a new column count, clamping to valid range.
    #[must_use]
    pub fn new(value: u16) -> Self {
        Self(value.clamp(grid_bounds::MIN, grid_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> u16 {
        self.0
    }

    /// Returns the column count as a `usize` for chunking.
    #[must_use]
    pub fn as_usize(self) -> usize {
        usize::from(self.0)
    }
}

impl Default for GridColumns {
    fn default() -> Self {
        Self(grid_bounds::DEFAULT)
    }
}

// =============================================================================
// Tests
// =============================================================================
