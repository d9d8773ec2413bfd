// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent
//! localization system. It handles language detection, translation loading,
//! and string formatting.
//!
//! # Features
//!
//! - Automatic locale detection from CLI, config, or system settings
//! - `.ftl` translation bundles embedded at compile time
//! - Runtime language switching
//! - Fallback to the default locale when translations are missing

pub mod fluent;
