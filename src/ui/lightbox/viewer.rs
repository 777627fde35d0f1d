// SPDX-License-Identifier: MPL-2.0
//! The gallery viewer: single owner of the lightbox state.

use super::input::{Command, Message};
use super::swipe::SwipeTracker;
use crate::application::port::PresentationSurface;
use crate::domain::gallery::{ImagePosition, ImageRef, ImageSet, ViewerState};
use crate::domain::ui::SwipeThreshold;
use crate::i18n::fluent::I18n;
use fluent_bundle::FluentValue;
use unic_langid::LanguageIdentifier;

/// Presents one image at a time out of an [`ImageSet`].
///
/// All input channels go through [`update`](Self::update), which maps a
/// [`Message`] to a [`Command`] and runs the matching operation. Every
/// state change is pushed to the [`PresentationSurface`] synchronously.
#[derive(Debug)]
pub struct GalleryViewer<S: PresentationSurface> {
    images: ImageSet,
    state: ViewerState,
    surface: S,
    i18n: I18n,
    swipe: SwipeTracker,
    swipe_threshold: SwipeThreshold,
}

impl<S: PresentationSurface> GalleryViewer<S> {
    pub fn new(images: ImageSet, surface: S, i18n: I18n) -> Self {
        Self {
            images,
            state: ViewerState::new(),
            surface,
            i18n,
            swipe: SwipeTracker::new(),
            swipe_threshold: SwipeThreshold::default(),
        }
    }

    #[must_use]
    pub fn with_swipe_threshold(mut self, threshold: SwipeThreshold) -> Self {
        self.swipe_threshold = threshold;
        self
    }

    pub fn images(&self) -> &ImageSet {
        &self.images
    }

    pub fn state(&self) -> ViewerState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Image at the current (or last viewed) index.
    pub fn current_image(&self) -> Option<&ImageRef> {
        self.images.get(self.state.current_index())
    }

    pub fn position(&self) -> Option<ImagePosition> {
        (!self.images.is_empty()).then(|| ImagePosition {
            index: self.state.current_index(),
            total: self.images.len(),
        })
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn i18n(&self) -> &I18n {
        &self.i18n
    }

    pub fn swipe_threshold(&self) -> SwipeThreshold {
        self.swipe_threshold
    }

    /// Switches language and refreshes the label of an open lightbox.
    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        self.i18n.set_locale(locale);
        if self.state.is_open() {
            let label = self.label();
            self.surface.set_accessible_label(&label);
        }
    }

    /// Opens the lightbox on image `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a valid index into the image set. Callers
    /// derive indices from the same set, so this is a contract violation.
    pub fn open(&mut self, index: usize) {
        assert!(
            index < self.images.len(),
            "gallery index {index} out of range for {} images",
            self.images.len()
        );
        self.state.open_at(index);
        tracing::debug!(index, total = self.images.len(), "lightbox opened");
        self.present_current();
        self.surface.set_open_visual_state(true);
        self.surface.set_background_scroll_suppressed(true);
    }

    /// Closes the lightbox. Closing a closed lightbox does nothing.
    pub fn close(&mut self) {
        self.swipe.reset();
        if !self.state.close() {
            return;
        }
        tracing::debug!(index = self.state.current_index(), "lightbox closed");
        self.surface.set_open_visual_state(false);
        self.surface.set_background_scroll_suppressed(false);
    }

    /// Shows the next image, wrapping from the last to the first.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) {
        if self.state.advance(self.images.len()) {
            tracing::debug!(index = self.state.current_index(), "lightbox next");
            self.present_current();
        }
    }

    /// Shows the previous image, wrapping from the first to the last.
    pub fn previous(&mut self) {
        if self.state.retreat(self.images.len()) {
            tracing::debug!(index = self.state.current_index(), "lightbox previous");
            self.present_current();
        }
    }

    /// Runs one operation.
    pub fn execute(&mut self, command: Command) {
        match command {
            Command::Open(index) => self.open(index),
            Command::Close => self.close(),
            Command::Next => self.next(),
            Command::Previous => self.previous(),
        }
    }

    /// Handles one input message and returns the command it triggered, if any.
    pub fn update(&mut self, message: Message) -> Option<Command> {
        let command = self.route(message)?;
        self.execute(command);
        Some(command)
    }

    fn route(&mut self, message: Message) -> Option<Command> {
        match message {
            Message::ItemClicked(index) => Some(Command::Open(index)),
            Message::CloseClicked | Message::ScrimClicked => Some(Command::Close),
            Message::ImageClicked => None,
            // Everything below is only wired while the lightbox is visible.
            _ if !self.state.is_open() => None,
            Message::PreviousClicked => Some(Command::Previous),
            Message::NextClicked => Some(Command::Next),
            Message::KeyPressed(key) => key.command(),
            Message::TouchStarted { finger, x } => {
                self.swipe.start(finger, x);
                None
            }
            Message::ScrimTouched { finger, x } => {
                self.swipe.start_on_scrim(finger, x);
                None
            }
            Message::TouchEnded { finger, x } => self
                .swipe
                .finish(finger, x, self.swipe_threshold)
                .map(Command::from),
            Message::TouchLost { finger } => {
                self.swipe.cancel(finger);
                None
            }
        }
    }

    fn present_current(&mut self) {
        let Some(image) = self.images.get(self.state.current_index()) else {
            return;
        };
        let label = self.label();
        self.surface.set_displayed_image(image);
        self.surface.set_accessible_label(&label);
    }

    fn label(&self) -> String {
        let Some(position) = self.position() else {
            return String::new();
        };
        self.i18n.tr_with_args(
            "lightbox-image-label",
            &[
                ("position", FluentValue::from(position.ordinal())),
                ("total", FluentValue::from(position.total)),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::RetainedSurface;
    use crate::config::Config;
    use crate::ui::lightbox::input::Key;

    fn english() -> I18n {
        I18n::new(Some("en-US".to_string()), &Config::default())
    }

    fn viewer(images: &[&str]) -> GalleryViewer<RetainedSurface> {
        GalleryViewer::new(
            images.iter().copied().collect(),
            RetainedSurface::new(),
            english(),
        )
    }

    fn shown(viewer: &GalleryViewer<RetainedSurface>) -> (&str, &str) {
        let surface = viewer.surface();
        (
            surface.displayed_image().map_or("", ImageRef::as_str),
            surface.accessible_label(),
        )
    }

    #[test]
    fn open_presents_image_and_locks_scroll() {
        let mut viewer = viewer(&["a.jpg", "b.jpg", "c.jpg"]);
        viewer.open(1);

        assert!(viewer.is_open());
        assert_eq!(viewer.current_image().map(ImageRef::as_str), Some("b.jpg"));
        assert_eq!(shown(&viewer), ("b.jpg", "Image 2 of 3"));
        assert_eq!(viewer.position(), Some(ImagePosition { index: 1, total: 3 }));
        assert!(viewer.surface().is_open());
        assert!(viewer.surface().is_scroll_suppressed());
    }

    #[test]
    fn open_yields_requested_image_for_every_index() {
        let images = ["a.jpg", "b.jpg", "c.jpg", "d.jpg"];
        let mut viewer = viewer(&images);
        for (index, expected) in images.iter().enumerate() {
            viewer.open(index);
            assert_eq!(viewer.current_image().map(ImageRef::as_str), Some(*expected));
        }
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn open_out_of_range_is_contract_violation() {
        let mut viewer = viewer(&["a.jpg"]);
        viewer.open(1);
    }

    #[test]
    fn close_releases_scroll_and_keeps_index() {
        let mut viewer = viewer(&["a.jpg", "b.jpg", "c.jpg"]);
        viewer.open(2);
        viewer.close();

        assert!(!viewer.is_open());
        assert!(!viewer.surface().is_open());
        assert!(!viewer.surface().is_scroll_suppressed());
        assert_eq!(viewer.state().current_index(), 2);
    }

    #[test]
    fn close_is_idempotent() {
        let mut viewer = viewer(&["a.jpg", "b.jpg"]);
        viewer.open(0);
        viewer.close();
        let after_first = viewer.surface().clone();
        let state_after_first = viewer.state();

        viewer.close();
        assert_eq!(viewer.surface(), &after_first);
        assert_eq!(viewer.state(), state_after_first);
    }

    #[test]
    fn close_on_fresh_viewer_touches_nothing() {
        let mut viewer = viewer(&["a.jpg"]);
        viewer.close();
        assert_eq!(viewer.surface().updates(), 0);
    }

    #[test]
    fn next_and_previous_wrap() {
        let mut viewer = viewer(&["a.jpg", "b.jpg", "c.jpg"]);
        viewer.open(2);
        viewer.next();
        assert_eq!(shown(&viewer), ("a.jpg", "Image 1 of 3"));
        viewer.previous();
        assert_eq!(shown(&viewer), ("c.jpg", "Image 3 of 3"));
    }

    #[test]
    fn empty_gallery_navigation_is_noop() {
        let mut viewer = viewer(&[]);
        viewer.next();
        viewer.previous();
        assert_eq!(viewer.state(), ViewerState::new());
        assert_eq!(viewer.surface().updates(), 0);
        assert_eq!(viewer.position(), None);
    }

    #[test]
    fn keyboard_is_ignored_while_closed() {
        let mut viewer = viewer(&["a.jpg", "b.jpg"]);
        for key in [Key::Escape, Key::ArrowLeft, Key::ArrowRight] {
            assert_eq!(viewer.update(Message::KeyPressed(key)), None);
        }
        assert_eq!(viewer.state(), ViewerState::new());
        assert_eq!(viewer.surface().updates(), 0);
    }

    #[test]
    fn keyboard_routes_while_open() {
        let mut viewer = viewer(&["a.jpg", "b.jpg", "c.jpg"]);
        viewer.update(Message::ItemClicked(0));

        assert_eq!(
            viewer.update(Message::KeyPressed(Key::ArrowRight)),
            Some(Command::Next)
        );
        assert_eq!(viewer.state().current_index(), 1);
        assert_eq!(
            viewer.update(Message::KeyPressed(Key::ArrowLeft)),
            Some(Command::Previous)
        );
        assert_eq!(viewer.state().current_index(), 0);
        assert_eq!(viewer.update(Message::KeyPressed(Key::Other)), None);
        assert_eq!(
            viewer.update(Message::KeyPressed(Key::Escape)),
            Some(Command::Close)
        );
        assert!(!viewer.is_open());
    }

    #[test]
    fn repeated_arrows_advance_once_each() {
        let mut viewer = viewer(&["a.jpg", "b.jpg", "c.jpg", "d.jpg"]);
        viewer.open(0);
        viewer.update(Message::KeyPressed(Key::ArrowRight));
        viewer.update(Message::KeyPressed(Key::ArrowRight));
        assert_eq!(viewer.state().current_index(), 2);
    }

    #[test]
    fn scrim_closes_but_image_click_does_not() {
        let mut viewer = viewer(&["a.jpg", "b.jpg"]);
        viewer.open(0);
        assert_eq!(viewer.update(Message::ImageClicked), None);
        assert!(viewer.is_open());
        assert_eq!(viewer.update(Message::ScrimClicked), Some(Command::Close));
        assert!(!viewer.is_open());
    }

    #[test]
    fn close_control_closes() {
        let mut viewer = viewer(&["a.jpg"]);
        viewer.open(0);
        assert_eq!(viewer.update(Message::CloseClicked), Some(Command::Close));
        assert!(!viewer.is_open());
    }

    #[test]
    fn arrow_controls_navigate_only_while_open() {
        let mut viewer = viewer(&["a.jpg", "b.jpg"]);
        assert_eq!(viewer.update(Message::NextClicked), None);
        viewer.open(0);
        assert_eq!(viewer.update(Message::NextClicked), Some(Command::Next));
        assert_eq!(viewer.update(Message::PreviousClicked), Some(Command::Previous));
        assert_eq!(viewer.state().current_index(), 0);
    }

    #[test]
    fn swipe_threshold_boundary() {
        let mut viewer = viewer(&["a.jpg", "b.jpg", "c.jpg"]);
        viewer.open(0);

        viewer.update(Message::TouchStarted { finger: 0, x: 200.0 });
        assert_eq!(viewer.update(Message::TouchEnded { finger: 0, x: 150.0 }), None);
        assert_eq!(viewer.state().current_index(), 0);

        viewer.update(Message::TouchStarted { finger: 0, x: 200.0 });
        assert_eq!(
            viewer.update(Message::TouchEnded { finger: 0, x: 149.0 }),
            Some(Command::Next)
        );
        assert_eq!(viewer.state().current_index(), 1);

        viewer.update(Message::TouchStarted { finger: 0, x: 149.0 });
        assert_eq!(
            viewer.update(Message::TouchEnded { finger: 0, x: 200.0 }),
            Some(Command::Previous)
        );
        assert_eq!(viewer.state().current_index(), 0);
    }

    #[test]
    fn touch_is_ignored_while_closed() {
        let mut viewer = viewer(&["a.jpg", "b.jpg"]);
        viewer.update(Message::TouchStarted { finger: 0, x: 400.0 });
        assert_eq!(viewer.update(Message::TouchEnded { finger: 0, x: 0.0 }), None);
        assert_eq!(viewer.surface().updates(), 0);

        // A gesture begun while closed must not leak into the next open.
        viewer.open(0);
        assert_eq!(viewer.update(Message::TouchEnded { finger: 0, x: 0.0 }), None);
        assert_eq!(viewer.state().current_index(), 0);
    }

    #[test]
    fn tap_on_scrim_closes() {
        let mut viewer = viewer(&["a.jpg", "b.jpg"]);
        viewer.open(1);
        viewer.update(Message::ScrimTouched { finger: 2, x: 40.0 });
        assert_eq!(
            viewer.update(Message::TouchEnded { finger: 2, x: 42.0 }),
            Some(Command::Close)
        );
        assert!(!viewer.is_open());
        assert_eq!(viewer.state().current_index(), 1);
    }

    #[test]
    fn tap_on_image_does_not_close() {
        let mut viewer = viewer(&["a.jpg", "b.jpg"]);
        viewer.open(0);
        viewer.update(Message::TouchStarted { finger: 2, x: 40.0 });
        assert_eq!(viewer.update(Message::TouchEnded { finger: 2, x: 40.0 }), None);
        assert!(viewer.is_open());
    }

    #[test]
    fn scrim_touch_is_ignored_while_closed() {
        let mut viewer = viewer(&["a.jpg"]);
        viewer.update(Message::ScrimTouched { finger: 0, x: 10.0 });
        assert_eq!(viewer.update(Message::TouchEnded { finger: 0, x: 10.0 }), None);
        assert_eq!(viewer.surface().updates(), 0);
    }

    #[test]
    fn lost_touch_does_not_navigate() {
        let mut viewer = viewer(&["a.jpg", "b.jpg"]);
        viewer.open(0);
        viewer.update(Message::TouchStarted { finger: 3, x: 400.0 });
        viewer.update(Message::TouchLost { finger: 3 });
        assert_eq!(viewer.update(Message::TouchEnded { finger: 3, x: 0.0 }), None);
    }

    #[test]
    fn configured_threshold_is_used() {
        let mut viewer =
            viewer(&["a.jpg", "b.jpg"]).with_swipe_threshold(SwipeThreshold::new(120.0));
        viewer.open(0);
        viewer.update(Message::TouchStarted { finger: 0, x: 300.0 });
        assert_eq!(viewer.update(Message::TouchEnded { finger: 0, x: 200.0 }), None);
    }

    #[test]
    fn set_locale_relabels_open_lightbox() {
        let mut viewer = viewer(&["a.jpg", "b.jpg", "c.jpg"]);
        viewer.open(0);
        viewer.set_locale("it".parse().unwrap());
        assert_eq!(viewer.surface().accessible_label(), "Immagine 1 di 3");
    }
}
