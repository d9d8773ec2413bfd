// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Non-intrusive notifications following the toast/snackbar pattern: they
//! appear temporarily (delete succeeded, delete failed, a photo would not
//! load) without blocking interaction with the reel.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with severity levels
//! - [`manager`] - `Manager` for queuing and lifecycle management
//! - [`toast`] - Toast widget component for rendering notifications
//!
//! Success and info toasts dismiss themselves after ~3s, warnings after
//! ~5s; errors stay until dismissed. At most three toasts are visible at a
//! time, the rest queue.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, Severity};
pub use toast::Toast;
