// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core gallery logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`gallery`]: Gallery types ([`ImageSet`](gallery::ImageSet),
//!   [`ViewerState`](gallery::ViewerState), [`ImagePosition`](gallery::ImagePosition))
//! - [`ui`]: UI value objects ([`SwipeThreshold`](ui::SwipeThreshold),
//!   [`GridColumns`](ui::GridColumns))

pub mod gallery;
pub mod ui;
