// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! The keyboard listener is installed once for the whole app lifetime. It
//! only forwards keys that have a preview binding; whether the preview is open
//! is decided when the message is handled.

use super::Message;
use crate::preview::keyboard::command_for_key;
use iced::{event, keyboard, Subscription};

/// Creates the global key press subscription.
pub fn create_keyboard_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. })
            if command_for_key(&key).is_some() =>
        {
            Some(Message::KeyPressed(key))
        }
        _ => None,
    })
}
