// SPDX-License-Identifier: MPL-2.0
//! Presentation port definition.
//!
//! This module defines the [`PresentationSurface`] trait the gallery viewer
//! drives whenever its state changes, and [`RetainedSurface`], an in-memory
//! adapter that keeps the last presented values so a renderer (or a test)
//! can read them back.

use crate::domain::gallery::ImageRef;

// =============================================================================
// PresentationSurface Trait
// =============================================================================

/// Capabilities the viewer needs from whatever actually shows the lightbox.
///
/// Implementations only reflect what they are told; they never call back
/// into the viewer.
pub trait PresentationSurface {
    /// Shows `image` as the lightbox picture.
    fn set_displayed_image(&mut self, image: &ImageRef);

    /// Sets the accessible text describing the picture (e.g. "Image 2 of 5").
    fn set_accessible_label(&mut self, label: &str);

    /// Shows or hides the lightbox overlay.
    fn set_open_visual_state(&mut self, open: bool);

    /// Locks or unlocks scrolling of the page behind the overlay.
    fn set_background_scroll_suppressed(&mut self, suppressed: bool);
}

impl<S: PresentationSurface + ?Sized> PresentationSurface for &mut S {
    fn set_displayed_image(&mut self, image: &ImageRef) {
        (**self).set_displayed_image(image);
    }

    fn set_accessible_label(&mut self, label: &str) {
        (**self).set_accessible_label(label);
    }

    fn set_open_visual_state(&mut self, open: bool) {
        (**self).set_open_visual_state(open);
    }

    fn set_background_scroll_suppressed(&mut self, suppressed: bool) {
        (**self).set_background_scroll_suppressed(suppressed);
    }
}

// =============================================================================
// RetainedSurface
// =============================================================================

/// Surface that retains the most recent value of every presentation call.
///
/// The Iced front-end renders from it, and tests use [`updates`](Self::updates)
/// to assert that an input produced no presentation change at all.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RetainedSurface {
    displayed_image: Option<ImageRef>,
    accessible_label: String,
    open: bool,
    scroll_suppressed: bool,
    updates: u64,
}

impl RetainedSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Image currently shown in the lightbox, if one was ever presented.
    #[must_use]
    pub fn displayed_image(&self) -> Option<&ImageRef> {
        self.displayed_image.as_ref()
    }

    #[must_use]
    pub fn accessible_label(&self) -> &str {
        &self.accessible_label
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn is_scroll_suppressed(&self) -> bool {
        self.scroll_suppressed
    }

    /// Total number of presentation calls received.
    #[must_use]
    pub fn updates(&self) -> u64 {
        self.updates
    }
}

impl PresentationSurface for RetainedSurface {
    fn set_displayed_image(&mut self, image: &ImageRef) {
        self.displayed_image = Some(image.clone());
        self.updates += 1;
    }

    fn set_accessible_label(&mut self, label: &str) {
        label.clone_into(&mut self.accessible_label);
        self.updates += 1;
    }

    fn set_open_visual_state(&mut self, open: bool) {
        self.open = open;
        self.updates += 1;
    }

    fn set_background_scroll_suppressed(&mut self, suppressed: bool) {
        self.scroll_suppressed = suppressed;
        self.updates += 1;
    }
}
