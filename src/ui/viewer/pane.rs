// SPDX-License-Identifier: MPL-2.0
//! Reel pane: renders one full-viewport page per photo inside a vertically
//! paginated scrollable with hidden scrollbars.

use crate::feed::Photo;
use crate::i18n::fluent::I18n;
use crate::media::{ImageCache, PhotoImage};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::viewer::component::{Message, SCROLLABLE_ID};
use crate::ui::viewer::overlay;
use crate::ui::viewer::subcomponents::delete_menu::Stage;
use iced::widget::image::Image;
use iced::widget::{
    container, responsive, text, Column, Container, Scrollable, Stack, Text,
};
use iced::{
    widget::scrollable::{Direction, Scrollbar, Viewport},
    widget::Id,
    Background, ContentFit, Element, Length, Theme,
};

/// Everything the pane needs from its owners to render.
#[derive(Clone, Copy)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub photos: &'a [Photo],
    pub images: &'a ImageCache,
    /// Delete-flow stage of the current page; other pages render idle.
    pub stage: Stage,
    /// Overlay fade-in opacity of the current page.
    pub fade_opacity: f32,
    pub current_page: usize,
}

/// Renders the vertical photo reel.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    responsive(move |size| {
        if ctx.photos.is_empty() {
            // The screen exits when the reel empties; this only flashes for
            // the frame between removal and window close.
            return Container::new(text(""))
                .width(Length::Fill)
                .height(Length::Fill)
                .style(page_background)
                .into();
        }

        let pages: Vec<Element<'_, Message>> = ctx
            .photos
            .iter()
            .enumerate()
            .map(|(index, photo)| page(ctx, index, photo, size.height))
            .collect();

        Scrollable::new(Column::with_children(pages).width(Length::Fill))
            .id(Id::new(SCROLLABLE_ID))
            .width(Length::Fill)
            .height(Length::Fill)
            .direction(Direction::Vertical(Scrollbar::hidden()))
            .on_scroll(|viewport: Viewport| Message::ViewportChanged {
                bounds: viewport.bounds(),
                offset: viewport.absolute_offset(),
            })
            .into()
    })
    .into()
}

/// One full-viewport page: the photo layer with the overlay stacked on top.
fn page<'a>(
    ctx: ViewContext<'a>,
    index: usize,
    photo: &'a Photo,
    height: f32,
) -> Element<'a, Message> {
    let is_current = index == ctx.current_page;
    let stage = if is_current { ctx.stage } else { Stage::Idle };
    let opacity = if is_current { ctx.fade_opacity } else { 1.0 };

    let photo_layer: Element<'a, Message> = match ctx.images.slot(&photo.id) {
        Some(PhotoImage::Ready(handle)) => Image::new(handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Cover)
            .into(),
        Some(PhotoImage::Failed) => failed_placeholder(ctx.i18n),
        Some(PhotoImage::Loading) | None => loading_placeholder(ctx.i18n),
    };

    let stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(photo_layer)
        .push(overlay::view(photo, ctx.i18n, stage, opacity));

    Container::new(stack)
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .clip(true)
        .style(page_background)
        .into()
}

fn loading_placeholder<'a>(i18n: &I18n) -> Element<'a, Message> {
    let label = Text::new(i18n.tr("viewer-photo-loading"))
        .size(typography::BODY)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::GRAY_400),
        });

    centered(label.into())
}

fn failed_placeholder<'a>(i18n: &I18n) -> Element<'a, Message> {
    let label = Text::new(i18n.tr("viewer-photo-failed"))
        .size(typography::BODY)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::GRAY_400),
        });

    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(iced::alignment::Horizontal::Center)
        .push(icons::sized(icons::warning(), sizing::ICON_LG))
        .push(label);

    centered(content.into())
}

fn centered(content: Element<'_, Message>) -> Element<'_, Message> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(iced::alignment::Horizontal::Center)
        .align_y(iced::alignment::Vertical::Center)
        .into()
}

fn page_background(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::BLACK)),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn photo(id: &str) -> Photo {
        Photo {
            id: id.to_string(),
            image_url: format!("https://photos.example/{id}.jpg"),
            activity: "running".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 7, 17, 9, 30, 0).unwrap(),
        }
    }

    #[test]
    fn pane_renders_with_photos() {
        let i18n = I18n::default();
        let photos = vec![photo("a"), photo("b")];
        let images = ImageCache::new();
        let _element = view(ViewContext {
            i18n: &i18n,
            photos: &photos,
            images: &images,
            stage: Stage::Idle,
            fade_opacity: 1.0,
            current_page: 0,
        });
    }

    #[test]
    fn pane_renders_empty_reel() {
        let i18n = I18n::default();
        let images = ImageCache::new();
        let _element = view(ViewContext {
            i18n: &i18n,
            photos: &[],
            images: &images,
            stage: Stage::Idle,
            fade_opacity: 1.0,
            current_page: 0,
        });
    }
}
