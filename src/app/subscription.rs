// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! This module translates native keyboard, mouse and touch events into
//! lightbox messages. The viewer decides whether they apply; this layer
//! only filters out what widgets already consumed.

use super::Message;
use crate::ui::lightbox::{self, FingerId, Key};
use iced::{event, keyboard, mouse, touch, Event, Subscription};

/// Creates the global event subscription feeding the lightbox.
///
/// - Keyboard: only keys no widget captured, and only the bound ones
/// - Mouse: an uncaptured left press is a click on the scrim
/// - Touch: always forwarded; an uncaptured press is a touch on the scrim
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => match status {
            event::Status::Ignored => match map_key(&key) {
                Key::Other => None,
                key => Some(Message::Lightbox(lightbox::Message::KeyPressed(key))),
            },
            event::Status::Captured => None,
        },
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => match status {
            event::Status::Ignored => Some(Message::Lightbox(lightbox::Message::ScrimClicked)),
            event::Status::Captured => None,
        },
        Event::Touch(touch::Event::FingerPressed { id, position }) => {
            Some(Message::Lightbox(map_finger_press(id.0, position.x, status)))
        }
        Event::Touch(touch::Event::FingerLifted { id, position }) => Some(Message::Lightbox(
            lightbox::Message::TouchEnded {
                finger: id.0,
                x: position.x,
            },
        )),
        Event::Touch(touch::Event::FingerLost { id, .. }) => {
            Some(Message::Lightbox(lightbox::Message::TouchLost {
                finger: id.0,
            }))
        }
        _ => None,
    })
}

fn map_finger_press(finger: FingerId, x: f32, status: event::Status) -> lightbox::Message {
    match status {
        event::Status::Ignored => lightbox::Message::ScrimTouched { finger, x },
        event::Status::Captured => lightbox::Message::TouchStarted { finger, x },
    }
}

fn map_key(key: &keyboard::Key) -> Key {
    match key {
        keyboard::Key::Named(keyboard::key::Named::Escape) => Key::Escape,
        keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => Key::ArrowLeft,
        keyboard::Key::Named(keyboard::key::Named::ArrowRight) => Key::ArrowRight,
        _ => Key::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_keys_map_to_lightbox_keys() {
        assert_eq!(
            map_key(&keyboard::Key::Named(keyboard::key::Named::Escape)),
            Key::Escape
        );
        assert_eq!(
            map_key(&keyboard::Key::Named(keyboard::key::Named::ArrowLeft)),
            Key::ArrowLeft
        );
        assert_eq!(
            map_key(&keyboard::Key::Named(keyboard::key::Named::ArrowRight)),
            Key::ArrowRight
        );
        assert_eq!(
            map_key(&keyboard::Key::Named(keyboard::key::Named::ArrowUp)),
            Key::Other
        );
        assert_eq!(map_key(&keyboard::Key::Character("x".into())), Key::Other);
    }

    #[test]
    fn uncaptured_finger_press_lands_on_scrim() {
        assert_eq!(
            map_finger_press(4, 12.0, event::Status::Ignored),
            lightbox::Message::ScrimTouched { finger: 4, x: 12.0 }
        );
        assert_eq!(
            map_finger_press(4, 12.0, event::Status::Captured),
            lightbox::Message::TouchStarted { finger: 4, x: 12.0 }
        );
    }
}
