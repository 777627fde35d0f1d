// SPDX-License-Identifier: MPL-2.0
//! Application layer - Ports between the gallery core and its front-ends.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Front-ends implement application layer ports
//! - The lightbox viewer drives the ports, never a concrete widget
//!
//! # Example
//!
//! ```
//! use roost_gallery::application::port::{PresentationSurface, RetainedSurface};
//! use roost_gallery::domain::gallery::ImageRef;
//!
//! let mut surface = RetainedSurface::new();
//! surface.set_displayed_image(&ImageRef::new("bowl.jpg"));
//! assert_eq!(surface.displayed_image().map(ImageRef::as_str), Some("bowl.jpg"));
//! ```

pub mod port;
