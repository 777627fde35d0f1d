// SPDX-License-Identifier: MPL-2.0
//! Application root state for the desktop gallery.
//!
//! The `App` struct wires the gallery viewer to Iced: widgets and native
//! events become [`lightbox::Message`](crate::ui::lightbox::Message)s, and
//! the view renders whatever the viewer last presented on its
//! [`RetainedSurface`].

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::application::port::RetainedSurface;
use crate::config::{self, Config};
use crate::domain::gallery::ImageSet;
use crate::domain::ui::GridColumns;
use crate::gallery_scanner;
use crate::i18n::fluent::I18n;
use crate::ui::lightbox::GalleryViewer;
use iced::{window, Element, Subscription};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    viewer: GalleryViewer<RetainedSurface>,
    gallery_dir: PathBuf,
    columns: GridColumns,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("gallery_dir", &self.gallery_dir)
            .field("images", &self.viewer.images().len())
            .field("lightbox_open", &self.viewer.is_open())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 360;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an Fn boot closure; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads settings, scans the gallery directory once and builds the viewer.
    pub fn new(flags: Flags) -> Self {
        let config = load_config(flags.config_path.as_deref());
        let i18n = I18n::new(flags.lang, &config);

        let images = gallery_scanner::scan_directory(&flags.gallery_dir).unwrap_or_else(|err| {
            tracing::warn!("Failed to scan {}: {}", flags.gallery_dir.display(), err);
            ImageSet::default()
        });

        let viewer = GalleryViewer::new(images, RetainedSurface::new(), i18n)
            .with_swipe_threshold(config.swipe_threshold());

        Self {
            viewer,
            gallery_dir: flags.gallery_dir,
            columns: config.grid_columns(),
        }
    }

    pub fn title(&self) -> String {
        self.viewer.i18n().tr("window-title")
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Lightbox(message) => {
                if let Some(command) = self.viewer.update(message) {
                    tracing::trace!(?command, "lightbox command executed");
                }
            }
            Message::BackgroundScrollBlocked | Message::ControlsPressed => {}
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: self.viewer.i18n(),
            images: self.viewer.images(),
            surface: self.viewer.surface(),
            columns: self.columns,
            gallery_dir: &self.gallery_dir,
        })
    }

    pub fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    pub fn viewer(&self) -> &GalleryViewer<RetainedSurface> {
        &self.viewer
    }
}

fn load_config(path: Option<&std::path::Path>) -> Config {
    let loaded = match path {
        Some(path) => config::load_from_path(path),
        None => config::load(),
    };
    loaded.unwrap_or_else(|err| {
        tracing::warn!("Using default settings: {}", err);
        Config::default()
    })
}
