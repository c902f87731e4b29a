// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::keyboard::key::Named;
use iced::keyboard::Key;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Listens for keyboard events the widgets did not capture.
///
/// Escape dismisses the active overlay (or leaves the settings screen); all
/// other keys stay with the focused widget.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window| {
        if status == event::Status::Captured {
            return None;
        }

        match event {
            event::Event::Keyboard(iced::keyboard::Event::KeyPressed {
                key: Key::Named(Named::Escape),
                ..
            }) => Some(Message::EscapePressed),
            _ => None,
        }
    })
}

/// Creates a periodic tick subscription for spinner rotation and
/// notification auto-dismiss. Idle screens subscribe to nothing.
pub fn create_tick_subscription(needs_tick: bool) -> Subscription<Message> {
    if needs_tick {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
