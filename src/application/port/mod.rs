// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`presentation`]: What the lightbox shows (image, label, overlay, scroll lock)
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles)
//! - Methods are infallible: presenting state cannot fail from the viewer's point of view

pub mod presentation;

pub use presentation::{PresentationSurface, RetainedSurface};
