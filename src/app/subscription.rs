// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard events drive reel navigation; periodic ticks drive notification
//! auto-dismiss and overlay fade repaints. The tick subscriptions only run
//! while there is something for them to do.

use super::{App, Message};
use crate::ui::viewer::component;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Tick cadence for notification auto-dismiss checks.
const NOTIFICATION_TICK: Duration = Duration::from_millis(250);

/// Repaint cadence while the overlay fade is animating (~60 fps).
const ANIMATION_TICK: Duration = Duration::from_millis(16);

/// Builds the subscription set for the current application state.
pub fn subscription(app: &App) -> Subscription<Message> {
    let mut subscriptions = vec![event::listen_with(route_event)];

    if app.notifications.has_notifications() {
        subscriptions.push(time::every(NOTIFICATION_TICK).map(Message::Tick));
    }

    if app.viewer.is_animating() {
        subscriptions.push(
            time::every(ANIMATION_TICK)
                .map(|instant| Message::Viewer(component::Message::AnimationTick(instant))),
        );
    }

    Subscription::batch(subscriptions)
}

/// Routes runtime events to the viewer.
///
/// Only keyboard events the widgets ignored are forwarded; captured events
/// (e.g. a focused widget consuming a key) stay where they were handled.
fn route_event(
    event: event::Event,
    status: event::Status,
    window_id: iced::window::Id,
) -> Option<Message> {
    if let event::Event::Keyboard(..) = &event {
        return match status {
            event::Status::Ignored => Some(Message::Viewer(component::Message::RawEvent {
                window: window_id,
                event,
            })),
            event::Status::Captured => None,
        };
    }

    None
}
