// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! Constants are organized by category. Touch and gallery bounds are
//! owned by the domain newtypes and re-exported here under config names.
//!
//! # Categories
//!
//! - **Touch**: Swipe detection threshold
//! - **Gallery**: Thumbnail grid layout
//! - **Locale**: Fallback language

use crate::domain::ui::newtypes::{grid_bounds, swipe_bounds};

// ==========================================================================
// Touch Defaults
// ==========================================================================

/// Default horizontal travel (device pixels) a touch must exceed to count as a swipe.
pub const DEFAULT_SWIPE_THRESHOLD_PX: f32 = swipe_bounds::DEFAULT_PX;

/// Minimum allowed swipe threshold.
pub const MIN_SWIPE_THRESHOLD_PX: f32 = swipe_bounds::MIN_PX;

/// Maximum allowed swipe threshold.
pub const MAX_SWIPE_THRESHOLD_PX: f32 = swipe_bounds::MAX_PX;

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Default number of thumbnail columns.
pub const DEFAULT_GRID_COLUMNS: u16 = grid_bounds::DEFAULT;

/// Minimum number of thumbnail columns.
pub const MIN_GRID_COLUMNS: u16 = grid_bounds::MIN;

/// Maximum number of thumbnail columns.
pub const MAX_GRID_COLUMNS: u16 = grid_bounds::MAX;

/// File extensions picked up when scanning a gallery directory.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp"];

// ==========================================================================
// Locale Defaults
// ==========================================================================

/// Locale used when neither CLI, config nor OS provide an available one.
pub const DEFAULT_LOCALE: &str = "en-US";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_SWIPE_THRESHOLD_PX > 0.0);
    assert!(MAX_SWIPE_THRESHOLD_PX > MIN_SWIPE_THRESHOLD_PX);
    assert!(DEFAULT_SWIPE_THRESHOLD_PX >= MIN_SWIPE_THRESHOLD_PX);
    assert!(DEFAULT_SWIPE_THRESHOLD_PX <= MAX_SWIPE_THRESHOLD_PX);

    assert!(MIN_GRID_COLUMNS > 0);
    assert!(MAX_GRID_COLUMNS >= MIN_GRID_COLUMNS);
    assert!(DEFAULT_GRID_COLUMNS >= MIN_GRID_COLUMNS);
    assert!(DEFAULT_GRID_COLUMNS <= MAX_GRID_COLUMNS);
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ui::{GridColumns, SwipeThreshold};

    #[test]
    fn defaults_build_default_newtypes() {
        let threshold = SwipeThreshold::new(DEFAULT_SWIPE_THRESHOLD_PX);
        assert_eq!(threshold, SwipeThreshold::default());
        assert_eq!(GridColumns::new(DEFAULT_GRID_COLUMNS), GridColumns::default());
    }

    #[test]
    fn image_extensions_are_lowercase() {
        assert!(IMAGE_EXTENSIONS
            .iter()
            .all(|ext| ext.chars().all(|c| c.is_ascii_lowercase())));
    }
}
