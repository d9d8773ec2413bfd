// SPDX-License-Identifier: MPL-2.0
//! UI building blocks: design tokens, icons, the activity catalog, toast
//! notifications, and the reel viewer itself.

pub mod activity;
pub mod design_tokens;
pub mod icons;
pub mod notifications;
pub mod viewer;
