// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::ApiError;
use crate::feed::Photo;
use crate::ui::notifications;
use crate::ui::viewer::component;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Viewer(component::Message),
    Notification(notifications::NotificationMessage),
    /// The delete confirmation dialog resolved.
    DeleteDialogResult { id: String, confirmed: bool },
    /// The deletion request finished.
    DeleteCompleted {
        id: String,
        result: Result<String, ApiError>,
    },
    /// Periodic tick for notification auto-dismiss.
    Tick(Instant),
}

/// Runtime inputs handed over by the caller: the photo sequence to show,
/// where to start, and a couple of startup overrides.
#[derive(Debug, Default)]
pub struct Flags {
    /// Ordered photo sequence (the screen never fetches it itself).
    pub photos: Vec<Photo>,
    /// Initial page index; clamped into bounds.
    pub index: usize,
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional API base URL override (takes precedence over config).
    pub api_base: Option<String>,
}
