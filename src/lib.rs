// SPDX-License-Identifier: MPL-2.0
//! `roost_gallery` is a gallery lightbox viewer built with the Iced GUI framework.
//!
//! The core [`GalleryViewer`](ui::lightbox::GalleryViewer) owns the open/closed
//! state and current index over a fixed [`ImageSet`](domain::gallery::ImageSet),
//! and accepts pointer, keyboard and touch-swipe input through a single
//! message type. Rendering goes through the
//! [`PresentationSurface`](application::port::PresentationSurface) port, so the
//! viewer runs the same under Iced, in tests, or behind any other front-end.

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod gallery_scanner;
pub mod i18n;
pub mod ui;
