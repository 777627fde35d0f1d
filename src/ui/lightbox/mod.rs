// SPDX-License-Identifier: MPL-2.0
//! Lightbox gallery viewer.
//!
//! The viewer is framework-agnostic: it owns the open/closed state and the
//! current index, and reports changes through a
//! [`PresentationSurface`](crate::application::port::PresentationSurface).
//!
//! # Example
//!
//! ```
//! use roost_gallery::application::port::RetainedSurface;
//! use roost_gallery::config::Config;
//! use roost_gallery::i18n::fluent::I18n;
//! use roost_gallery::ui::lightbox::{GalleryViewer, Key, Message};
//!
//! let images = ["a.jpg", "b.jpg", "c.jpg"].into_iter().collect();
//! let i18n = I18n::new(Some("en-US".into()), &Config::default());
//! let mut viewer = GalleryViewer::new(images, RetainedSurface::new(), i18n);
//!
//! viewer.update(Message::ItemClicked(2));
//! viewer.update(Message::KeyPressed(Key::ArrowRight));
//! assert_eq!(viewer.surface().accessible_label(), "Image 1 of 3");
//! ```

pub mod input;
pub mod swipe;
pub mod viewer;

pub use input::{Command, Key, Message};
pub use swipe::{FingerId, SwipeDirection, SwipeTracker, TouchGesture};
pub use viewer::GalleryViewer;
