// SPDX-License-Identifier: MPL-2.0
//! Top-level view composition: the reel with the toast overlay stacked on
//! top.

use super::{App, Message};
use crate::ui::notifications::Toast;
use crate::ui::viewer::component;
use iced::widget::Stack;
use iced::Element;

pub fn view(app: &App) -> Element<'_, Message> {
    let viewer = app
        .viewer
        .view(component::ViewEnv {
            i18n: &app.i18n,
            photos: app.reel.photos(),
        })
        .map(Message::Viewer);

    let toasts = Toast::view_overlay(&app.notifications, &app.i18n).map(Message::Notification);

    Stack::new().push(viewer).push(toasts).into()
}
