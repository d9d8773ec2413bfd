// SPDX-License-Identifier: MPL-2.0
//! Viewer component encapsulating state and update logic.
//!
//! The component orchestrates the pager, the delete menu, the overlay fade,
//! and the photo image cache. Anything that needs collaborators it does not
//! own (the reel, the API client, dialogs, window handles) is surfaced as an
//! [`Effect`] for the application to act on.

use crate::error::Error;
use crate::feed::Photo;
use crate::i18n::fluent::I18n;
use crate::media::{ImageCache, PhotoHandle};
use crate::ui::viewer::pane;
use crate::ui::viewer::subcomponents::{delete_menu, fade, pager};
use iced::widget::scrollable::AbsoluteOffset;
use iced::widget::{operation, Id};
use iced::{event, keyboard, window, Element, Rectangle, Task};
use std::time::Instant;

/// Identifier used for the reel scrollable widget.
pub const SCROLLABLE_ID: &str = "photo-reel-scrollable";

/// Messages emitted by viewer-related widgets.
#[derive(Debug, Clone)]
pub enum Message {
    /// The reel scrollable reported new geometry.
    ViewportChanged {
        bounds: Rectangle,
        offset: AbsoluteOffset,
    },
    /// Delete-menu interaction (overflow, delete button, dialog outcomes).
    DeleteMenu(delete_menu::Message),
    /// A photo fetch finished.
    PhotoFetched {
        id: String,
        result: Result<PhotoHandle, Error>,
    },
    /// Raw runtime event (keyboard navigation, window bookkeeping).
    RawEvent {
        window: window::Id,
        event: event::Event,
    },
    /// Periodic repaint driver while the overlay fade is live.
    AnimationTick(Instant),
}

/// Side effects the application should perform after handling a viewer
/// message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The user asked to delete the current photo; show the confirmation
    /// dialog for it.
    RequestDeleteConfirmation,
    /// The confirmation dialog was accepted; issue the deletion request.
    DeleteConfirmed,
    /// A new page settled as current; neighbors should be prefetched.
    PageSettled { page: usize },
    /// A photo failed to fetch or decode.
    PhotoLoadFailed,
    /// The user asked to leave the screen.
    CloseRequested,
}

/// Environment information required to render the viewer.
#[derive(Clone, Copy)]
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
    /// The reel's ordered photo sequence; owned by the application.
    pub photos: &'a [Photo],
}

/// Complete viewer component state.
#[derive(Debug, Default)]
pub struct State {
    pager: pager::State,
    delete_menu: delete_menu::State,
    fade: fade::State,
    images: ImageCache,
}

impl State {
    /// Creates the viewer positioned at `initial_page` of `page_count` pages.
    #[must_use]
    pub fn new(page_count: usize, initial_page: usize) -> Self {
        Self {
            pager: pager::State::new(page_count, initial_page),
            delete_menu: delete_menu::State::default(),
            fade: fade::State::default(),
            images: ImageCache::new(),
        }
    }

    /// Snap to the initial page without animation and start the first
    /// overlay fade-in. Called once, when the screen opens.
    pub fn initial_snap(&mut self) -> Task<Message> {
        self.fade.restart();
        operation::snap_to(
            Id::new(SCROLLABLE_ID),
            self.pager.relative_offset_for(self.pager.current_page()),
        )
    }

    /// Handle a viewer message.
    pub fn update(&mut self, message: Message) -> (Effect, Task<Message>) {
        match message {
            Message::ViewportChanged { bounds, offset } => {
                let effect = self.pager.handle(pager::Message::ViewportChanged {
                    height: bounds.height,
                    offset_y: offset.y,
                });
                match effect {
                    pager::Effect::Settled { page } => self.settle_on(page),
                    pager::Effect::None => (Effect::None, Task::none()),
                }
            }
            Message::DeleteMenu(msg) => {
                let effect = self.delete_menu.handle(msg);
                let effect = match effect {
                    delete_menu::Effect::OpenConfirmDialog => Effect::RequestDeleteConfirmation,
                    delete_menu::Effect::BeginDelete => Effect::DeleteConfirmed,
                    delete_menu::Effect::None => Effect::None,
                };
                (effect, Task::none())
            }
            Message::PhotoFetched { id, result } => match result {
                Ok(handle) => {
                    self.images.insert_ready(&id, handle);
                    (Effect::None, Task::none())
                }
                Err(_) => {
                    self.images.insert_failed(&id);
                    (Effect::PhotoLoadFailed, Task::none())
                }
            },
            Message::RawEvent { event, .. } => self.handle_raw_event(&event),
            Message::AnimationTick(_) => (Effect::None, Task::none()),
        }
    }

    /// Shrinks the reel after a successful deletion and repositions on the
    /// clamped index.
    pub fn apply_removal(&mut self, remaining: usize, index: usize) -> Task<Message> {
        self.pager.set_page_count(remaining);
        match self.pager.handle(pager::Message::JumpTo(index)) {
            pager::Effect::Settled { page } => self.settle_on(page).1,
            pager::Effect::None => Task::none(),
        }
    }

    fn settle_on(&mut self, page: usize) -> (Effect, Task<Message>) {
        self.delete_menu.handle(delete_menu::Message::PageChanged);
        self.fade.restart();
        let snap = operation::snap_to(
            Id::new(SCROLLABLE_ID),
            self.pager.relative_offset_for(page),
        );
        (Effect::PageSettled { page }, snap)
    }

    fn handle_raw_event(&mut self, event: &event::Event) -> (Effect, Task<Message>) {
        let event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) = event else {
            return (Effect::None, Task::none());
        };

        use keyboard::key::Named;
        use keyboard::Key;

        let target = match key.as_ref() {
            Key::Named(Named::ArrowDown | Named::PageDown | Named::Space) => {
                self.pager.has_next().then(|| self.pager.current_page() + 1)
            }
            Key::Named(Named::ArrowUp | Named::PageUp) => self
                .pager
                .has_previous()
                .then(|| self.pager.current_page() - 1),
            Key::Named(Named::Home) => Some(0),
            Key::Named(Named::End) => Some(self.pager.page_count().saturating_sub(1)),
            Key::Named(Named::Escape) => return (Effect::CloseRequested, Task::none()),
            _ => None,
        };

        match target {
            Some(page) if page != self.pager.current_page() => {
                match self.pager.handle(pager::Message::JumpTo(page)) {
                    pager::Effect::Settled { page } => self.settle_on(page),
                    pager::Effect::None => (Effect::None, Task::none()),
                }
            }
            _ => (Effect::None, Task::none()),
        }
    }

    /// Renders the viewer.
    pub fn view<'a>(&'a self, env: ViewEnv<'a>) -> Element<'a, Message> {
        pane::view(pane::ViewContext {
            i18n: env.i18n,
            photos: env.photos,
            images: &self.images,
            stage: self.delete_menu.stage(),
            fade_opacity: self.fade.opacity(),
            current_page: self.pager.current_page(),
        })
    }

    // ═══════════════════════════════════════════════════════════════════════
    // ACCESSORS
    // ═══════════════════════════════════════════════════════════════════════

    /// The page currently considered visible.
    #[must_use]
    pub fn current_page(&self) -> usize {
        self.pager.current_page()
    }

    /// Current stage of the delete flow.
    #[must_use]
    pub fn delete_stage(&self) -> delete_menu::Stage {
        self.delete_menu.stage()
    }

    /// Whether the delete button is revealed.
    #[must_use]
    pub fn is_delete_menu_visible(&self) -> bool {
        self.delete_menu.is_menu_visible()
    }

    /// Whether a deletion request is outstanding.
    #[must_use]
    pub fn is_delete_in_flight(&self) -> bool {
        self.delete_menu.is_in_flight()
    }

    /// Whether a repaint tick subscription is needed.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.fade.is_animating()
    }

    /// Checks whether a photo already has a cache slot.
    #[must_use]
    pub fn has_photo(&self, id: &str) -> bool {
        self.images.contains(id)
    }

    /// Marks a photo as being fetched so it is not requested twice.
    pub fn mark_photo_loading(&mut self, id: &str) {
        self.images.mark_loading(id);
    }

    /// Promotes a photo in the cache (called when its page settles).
    pub fn touch_photo(&mut self, id: &str) {
        self.images.touch(id);
    }
}
