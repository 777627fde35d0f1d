// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::lightbox;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Input for the gallery viewer, from widgets or native events.
    Lightbox(lightbox::Message),
    /// Wheel input swallowed by the overlay while background scrolling is suppressed.
    BackgroundScrollBlocked,
    /// Press on the label or between the lightbox controls; keeps it off the scrim.
    ControlsPressed,
}

impl From<lightbox::Message> for Message {
    fn from(message: lightbox::Message) -> Self {
        Message::Lightbox(message)
    }
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `it`, `en-US`).
    pub lang: Option<String>,
    /// Optional settings file overriding the platform config location.
    pub config_path: Option<PathBuf>,
    /// Directory whose images make up the gallery.
    pub gallery_dir: PathBuf,
}
