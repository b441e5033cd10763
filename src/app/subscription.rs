// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Two sources feed the app: native window events (resize, for the
//! large-screen breakpoint) and a periodic tick that advances pending
//! press-hold timers. The tick subscription only exists while some card
//! reports a pending press, so the timer resource is released as soon as
//! nothing waits on it.

use super::Message;
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Granularity of the press-hold timer.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Routes native events to app messages.
///
/// Only window resizes are of interest; pointer input reaches the cards
/// through their own `mouse_area` handlers.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| {
        if let event::Event::Window(window::Event::Resized(size)) = event {
            Some(Message::WindowResized(size))
        } else {
            None
        }
    })
}

/// Creates the periodic tick subscription while a press is pending.
pub fn create_tick_subscription(press_pending: bool) -> Subscription<Message> {
    if press_pending {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
