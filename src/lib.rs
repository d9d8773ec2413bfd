// SPDX-License-Identifier: MPL-2.0
//! `iced_reel` is a full-screen, vertically paginated photo viewer built
//! with the Iced GUI framework.
//!
//! The user pages through an activity-tagged photo feed one photo per
//! screen, and can delete photos they own through a confirmation dialog
//! backed by an HTTP API. The crate also demonstrates internationalization
//! with Fluent, user preference management, and modular UI design.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod feed;
pub mod i18n;
pub mod media;
pub mod ui;

#[cfg(test)]
mod test_utils;
