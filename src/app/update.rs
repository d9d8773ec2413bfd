// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the main `update` function and the handlers that
//! translate viewer effects into side effects: the confirmation dialog, the
//! deletion request, photo prefetching, and window close.

use super::Message;
use crate::api::PhotoApi;
use crate::error::ApiError;
use crate::feed::{PhotoReel, RemoveOutcome};
use crate::i18n::fluent::I18n;
use crate::media;
use crate::ui::notifications::{self, Notification};
use crate::ui::viewer::component;
use crate::ui::viewer::subcomponents::delete_menu;
use iced::{window, Task};

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub reel: &'a mut PhotoReel,
    pub viewer: &'a mut component::State,
    pub notifications: &'a mut notifications::Manager,
    pub api: &'a PhotoApi,
    pub window_id: &'a mut Option<window::Id>,
}

/// Main update entrypoint; dispatches top-level messages.
pub fn update(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::Viewer(msg) => {
            // Any raw event tells us which window we live in; remember it
            // for the eventual close request.
            if let component::Message::RawEvent { window, .. } = &msg {
                *ctx.window_id = Some(*window);
            }

            let (effect, task) = ctx.viewer.update(msg);
            let follow_up = handle_viewer_effect(ctx, effect);
            Task::batch([task.map(Message::Viewer), follow_up])
        }
        Message::DeleteDialogResult { id, confirmed } => {
            handle_delete_dialog_result(ctx, id, confirmed)
        }
        Message::DeleteCompleted { id, result } => handle_delete_completed(ctx, &id, result),
        Message::Notification(msg) => {
            ctx.notifications.handle_message(&msg);
            Task::none()
        }
        Message::Tick(_) => {
            ctx.notifications.tick();
            Task::none()
        }
    }
}

fn handle_viewer_effect(ctx: &mut UpdateContext<'_>, effect: component::Effect) -> Task<Message> {
    match effect {
        component::Effect::None => Task::none(),
        component::Effect::RequestDeleteConfirmation => open_delete_dialog(ctx),
        component::Effect::DeleteConfirmed => {
            // Normally reached via the dialog result; resolve the id from the
            // current photo if the confirmation arrived another way.
            match ctx.reel.current() {
                Some(photo) => begin_delete(ctx.api, photo.id.clone()),
                None => Task::none(),
            }
        }
        component::Effect::PageSettled { page } => {
            ctx.reel.set_current_index(page);
            if let Some(photo) = ctx.reel.current() {
                let id = photo.id.clone();
                ctx.viewer.touch_photo(&id);
            }
            ensure_photos_loaded(ctx.viewer, ctx.reel, ctx.api, page)
        }
        component::Effect::PhotoLoadFailed => {
            ctx.notifications
                .push(Notification::warning("notification-photo-load-error"));
            Task::none()
        }
        component::Effect::CloseRequested => close_window(ctx.window_id),
    }
}

/// Opens the native confirmation dialog for the current photo.
///
/// The photo id is captured here, when the dialog opens; the eventual
/// deletion targets that id even if the user pages elsewhere meanwhile.
fn open_delete_dialog(ctx: &UpdateContext<'_>) -> Task<Message> {
    let Some(photo) = ctx.reel.current() else {
        return Task::none();
    };
    let id = photo.id.clone();
    let title = ctx.i18n.tr("delete-confirm-title");
    let description = ctx.i18n.tr("delete-confirm-description");

    Task::perform(
        async move {
            let result = rfd::AsyncMessageDialog::new()
                .set_level(rfd::MessageLevel::Warning)
                .set_title(&title)
                .set_description(&description)
                .set_buttons(rfd::MessageButtons::OkCancel)
                .show()
                .await;
            (id, matches!(result, rfd::MessageDialogResult::Ok))
        },
        |(id, confirmed)| Message::DeleteDialogResult { id, confirmed },
    )
}

fn handle_delete_dialog_result(
    ctx: &mut UpdateContext<'_>,
    id: String,
    confirmed: bool,
) -> Task<Message> {
    if !confirmed {
        let _ = ctx.viewer.update(component::Message::DeleteMenu(
            delete_menu::Message::DialogCancelled,
        ));
        return Task::none();
    }

    let (effect, _task) = ctx.viewer.update(component::Message::DeleteMenu(
        delete_menu::Message::DialogConfirmed,
    ));
    if effect == component::Effect::DeleteConfirmed {
        begin_delete(ctx.api, id)
    } else {
        // The in-flight guard swallowed the confirmation.
        Task::none()
    }
}

fn begin_delete(api: &PhotoApi, id: String) -> Task<Message> {
    let api = api.clone();
    Task::perform(
        async move {
            let result = api.delete_photo(&id).await;
            (id, result)
        },
        |(id, result)| Message::DeleteCompleted { id, result },
    )
}

/// Handles the deletion outcome.
///
/// Every path resets the delete-menu flags first, so the screen always
/// returns to idle regardless of how the request ended.
fn handle_delete_completed(
    ctx: &mut UpdateContext<'_>,
    id: &str,
    result: Result<String, ApiError>,
) -> Task<Message> {
    let _ = ctx
        .viewer
        .update(component::Message::DeleteMenu(delete_menu::Message::Completed));

    match result {
        Ok(_ack) => {
            ctx.notifications
                .push(Notification::success("notification-delete-success"));

            match ctx.reel.remove(id) {
                Some(RemoveOutcome::Emptied) => close_window(ctx.window_id),
                Some(RemoveOutcome::Remaining { index }) => {
                    let reposition = ctx
                        .viewer
                        .apply_removal(ctx.reel.len(), index)
                        .map(Message::Viewer);
                    let fetches = ensure_photos_loaded(ctx.viewer, ctx.reel, ctx.api, index);
                    Task::batch([reposition, fetches])
                }
                None => Task::none(),
            }
        }
        Err(err) => {
            let mut notification = Notification::error(err.i18n_key());
            if let Some(reason) = err.server_message() {
                notification = notification.with_arg("reason", reason);
            }
            ctx.notifications.push(notification);
            Task::none()
        }
    }
}

/// Spawns fetch tasks for the settled page and its direct neighbors, skipping
/// photos that already have a cache slot.
pub fn ensure_photos_loaded(
    viewer: &mut component::State,
    reel: &PhotoReel,
    api: &PhotoApi,
    page: usize,
) -> Task<Message> {
    if reel.is_empty() {
        return Task::none();
    }

    let start = page.saturating_sub(1);
    let end = (page + 1).min(reel.len() - 1);

    let mut tasks = Vec::new();
    for index in start..=end {
        let Some(photo) = reel.get(index) else {
            continue;
        };
        if viewer.has_photo(&photo.id) {
            continue;
        }
        viewer.mark_photo_loading(&photo.id);

        let client = api.client();
        let id = photo.id.clone();
        let url = photo.image_url.clone();
        tasks.push(Task::perform(
            async move {
                let result = media::fetch_photo(client, url).await;
                (id, result)
            },
            |(id, result)| Message::Viewer(component::Message::PhotoFetched { id, result }),
        ));
    }

    if tasks.is_empty() {
        Task::none()
    } else {
        Task::batch(tasks)
    }
}

fn close_window(window_id: &Option<window::Id>) -> Task<Message> {
    match window_id {
        Some(id) => window::close(*id),
        None => iced::exit(),
    }
}
