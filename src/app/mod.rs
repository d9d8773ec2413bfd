// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration around the reel viewer.
//!
//! The `App` struct wires together the domains (viewer, localization,
//! notifications, the API client) and translates viewer effects into side
//! effects like the confirmation dialog, the deletion request, and window
//! close. Policy decisions (window sizing, startup snapping, locale
//! resolution inputs) stay close to the main loop so user-facing behavior is
//! easy to audit.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::api::PhotoApi;
use crate::config;
use crate::feed::PhotoReel;
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{self, Notification};
use crate::ui::viewer::component;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: u32 = 450;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 360;
pub const MIN_WINDOW_HEIGHT: u32 = 640;

/// Root Iced application state bridging the viewer, localization, and the
/// photo API.
pub struct App {
    pub i18n: I18n,
    reel: PhotoReel,
    viewer: component::State,
    notifications: notifications::Manager,
    api: PhotoApi,
    window_id: Option<window::Id>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("photos", &self.reel.len())
            .field("current_page", &self.viewer.current_page())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce).
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Creates the application state and the startup tasks: an animation-free
    /// snap to the requested page and the first photo fetches.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);

        let mut api_config = config.api.clone();
        if let Some(base) = flags.api_base {
            api_config.base_url = base;
        }
        let api = PhotoApi::from_config(&api_config)
            .expect("failed to initialize the HTTP client");

        let reel = PhotoReel::new(flags.photos, flags.index);
        let mut viewer = component::State::new(reel.len(), reel.current_index());
        let mut notifications = notifications::Manager::new();

        if config_warning.is_some() {
            notifications.push(Notification::warning("notification-config-invalid"));
        }

        let snap = viewer.initial_snap().map(Message::Viewer);
        let fetches =
            update::ensure_photos_loaded(&mut viewer, &reel, &api, reel.current_index());

        let app = Self {
            i18n,
            reel,
            viewer,
            notifications,
            api,
            window_id: None,
        };

        (app, Task::batch([snap, fetches]))
    }

    /// Window title, localized.
    pub fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    /// The reel always renders on the dark theme.
    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            reel: &mut self.reel,
            viewer: &mut self.viewer,
            notifications: &mut self.notifications,
            api: &self.api,
            window_id: &mut self.window_id,
        };
        update::update(&mut ctx, message)
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        subscription::subscription(self)
    }
}
