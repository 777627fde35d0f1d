// SPDX-License-Identifier: MPL-2.0
//! Input messages and the commands they map to.
//!
//! Every input channel (pointer, keyboard, touch) is expressed as a
//! [`Message`]; the viewer turns messages into at most one [`Command`] and
//! executes it. Adapters never touch viewer state directly.

use super::swipe::{FingerId, SwipeDirection, TouchGesture};

/// The four operations of the gallery viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Show the image at the given index.
    Open(usize),
    /// Dismiss the lightbox.
    Close,
    /// Advance to the next image, wrapping to the first.
    Next,
    /// Go back to the previous image, wrapping to the last.
    Previous,
}

impl From<SwipeDirection> for Command {
    fn from(direction: SwipeDirection) -> Self {
        match direction {
            SwipeDirection::Left => Command::Next,
            SwipeDirection::Right => Command::Previous,
        }
    }
}

impl From<TouchGesture> for Command {
    fn from(gesture: TouchGesture) -> Self {
        match gesture {
            TouchGesture::Swipe(direction) => direction.into(),
            TouchGesture::ScrimTap => Command::Close,
        }
    }
}

/// Keys the lightbox reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    /// Any key without a lightbox binding.
    Other,
}

impl Key {
    /// Keyboard binding table.
    #[must_use]
    pub fn command(self) -> Option<Command> {
        match self {
            Key::Escape => Some(Command::Close),
            Key::ArrowRight => Some(Command::Next),
            Key::ArrowLeft => Some(Command::Previous),
            Key::Other => None,
        }
    }
}

/// Raw input delivered to the viewer by an adapter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// Pointer click on gallery entry `i`.
    ItemClicked(usize),
    /// Pointer click on the close control.
    CloseClicked,
    /// Pointer click on the dimmed background around the image.
    ScrimClicked,
    /// Pointer click on the displayed image itself.
    ImageClicked,
    /// Pointer click on the previous control.
    PreviousClicked,
    /// Pointer click on the next control.
    NextClicked,
    KeyPressed(Key),
    /// A touch began on the image or a control.
    TouchStarted { finger: FingerId, x: f32 },
    /// A touch began on the dimmed background around the image.
    ScrimTouched { finger: FingerId, x: f32 },
    TouchEnded { finger: FingerId, x: f32 },
    /// The platform lost track of a touch (e.g. it left the window).
    TouchLost { finger: FingerId },
}
