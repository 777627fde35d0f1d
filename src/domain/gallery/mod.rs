// SPDX-License-Identifier: MPL-2.0
//! Gallery domain types.

pub mod image_set;
pub mod viewer_state;

pub use image_set::{ImageRef, ImageSet};
pub use viewer_state::{ImagePosition, ViewerState};
