// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! A single window listener feeds the opening size and later resizes to the
//! grid, and closes the lightbox on Escape. Scroll events come from the
//! grid's scrollable.

use super::{App, Message};
use iced::keyboard::{self, key};
use iced::{event, window, Event, Subscription};

impl App {
    pub(super) fn subscription(&self) -> Subscription<Message> {
        event::listen_with(|event, status, _window_id| match event {
            Event::Window(
                window::Event::Opened { size, .. } | window::Event::Resized(size),
            ) => Some(Message::WindowResized(size)),
            Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(key::Named::Escape),
                ..
            }) if matches!(status, event::Status::Ignored) => Some(Message::CloseViewer),
            _ => None,
        })
    }
}
