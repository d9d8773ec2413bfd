// SPDX-License-Identifier: MPL-2.0
//! Per-photo overlay: contrast scrim, date badge, activity pill, inert
//! interaction bar, and the overflow/delete controls.
//!
//! The whole overlay honors the fade-in opacity of its page; colors are
//! alpha-multiplied rather than composited so no extra layers are needed.

use crate::feed::Photo;
use crate::i18n::fluent::I18n;
use crate::ui::activity;
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::viewer::component::Message;
use crate::ui::viewer::subcomponents::delete_menu::{self, Stage};
use chrono::Datelike;
use iced::widget::svg::{self, Svg};
use iced::widget::{button, container, Column, Container, Row, Space, Text};
use iced::{alignment, Background, Color, Element, Gradient, Length, Radians, Theme};

/// The interaction bar is presentation-only: counts are fixed placeholders.
const LIKE_COUNT_PLACEHOLDER: &str = "1.2k";
const COMMENT_COUNT_PLACEHOLDER: &str = "86";
const SHARE_COUNT_PLACEHOLDER: &str = "344";

/// Renders the overlay for one photo page.
pub fn view<'a>(
    photo: &'a Photo,
    i18n: &'a I18n,
    stage: Stage,
    fade_opacity: f32,
) -> Element<'a, Message> {
    let badges = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(date_badge(photo, i18n, fade_opacity))
        .push(activity_pill(photo, fade_opacity))
        .push(Space::new().width(Length::Fill).height(Length::Shrink));

    let bar = interaction_bar(stage, fade_opacity);

    let scrim_content = Column::new()
        .spacing(spacing::LG)
        .push(badges)
        .push(bar)
        .width(Length::Fill);

    let scrim = Container::new(scrim_content)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(move |_theme: &Theme| scrim_style(fade_opacity));

    // Push the scrim to the bottom of the page.
    Column::new()
        .push(Space::new().width(Length::Shrink).height(Length::Fill))
        .push(scrim)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Day-of-month over localized short month.
fn date_badge<'a>(photo: &Photo, i18n: &I18n, fade_opacity: f32) -> Element<'a, Message> {
    let day = Text::new(photo.created_at.day().to_string())
        .size(typography::DISPLAY)
        .style(move |_theme: &Theme| faded_text(palette::WHITE, fade_opacity));

    let month_key = format!("month-short-{}", photo.created_at.month());
    let month = Text::new(i18n.tr(&month_key).to_uppercase())
        .size(typography::CAPTION)
        .style(move |_theme: &Theme| faded_text(palette::GRAY_200, fade_opacity));

    let content = Column::new()
        .align_x(alignment::Horizontal::Center)
        .push(day)
        .push(month);

    Container::new(content)
        .width(Length::Fixed(sizing::DATE_BADGE_WIDTH))
        .padding(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(faded(
                Color {
                    a: opacity::BADGE_BACKGROUND,
                    ..palette::BLACK
                },
                fade_opacity,
            ))),
            border: iced::Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

/// Gradient pill showing the activity icon, or text-only for labels the
/// catalog does not know.
fn activity_pill<'a>(photo: &'a Photo, fade_opacity: f32) -> Element<'a, Message> {
    let style = activity::lookup(&photo.activity);
    let (start, stop) = style.map_or(activity::FALLBACK_GRADIENT, |s| s.gradient);

    let label = Text::new(title_case(&photo.activity))
        .size(typography::CAPTION)
        .style(move |_theme: &Theme| faded_text(palette::WHITE, fade_opacity));

    let mut content = Row::new()
        .spacing(spacing::XXS)
        .align_y(alignment::Vertical::Center);
    if let Some(style) = style {
        content = content.push(faded_icon((style.icon)(), sizing::ICON_SM, fade_opacity));
    }
    content = content.push(label);

    Container::new(content)
        .height(Length::Fixed(sizing::ACTIVITY_PILL_HEIGHT))
        .padding([spacing::XXS, spacing::SM])
        .align_y(alignment::Vertical::Center)
        .style(move |_theme: &Theme| container::Style {
            background: Some(pill_gradient(start, stop, fade_opacity)),
            border: iced::Border {
                radius: radius::PILL.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

/// Like/comment/share placeholders plus the overflow or delete control.
fn interaction_bar<'a>(stage: Stage, fade_opacity: f32) -> Element<'a, Message> {
    let stats = Row::new()
        .spacing(spacing::LG)
        .align_y(alignment::Vertical::Center)
        .push(stat(icons::heart(), LIKE_COUNT_PLACEHOLDER, fade_opacity))
        .push(stat(icons::comment(), COMMENT_COUNT_PLACEHOLDER, fade_opacity))
        .push(stat(icons::share(), SHARE_COUNT_PLACEHOLDER, fade_opacity));

    let control: Element<'a, Message> = match stage {
        Stage::Idle => button(faded_icon(
            icons::ellipsis_horizontal(),
            sizing::ICON_MD,
            fade_opacity,
        ))
        .on_press(Message::DeleteMenu(delete_menu::Message::OverflowPressed))
        .padding(spacing::XS)
        .style(move |_theme, status| overflow_button_style(status, fade_opacity))
        .into(),
        Stage::ConfirmPending => delete_button(fade_opacity, true),
        Stage::InFlight => delete_button(fade_opacity, false),
    };

    Row::new()
        .height(Length::Fixed(sizing::INTERACTION_BAR_HEIGHT))
        .align_y(alignment::Vertical::Center)
        .push(stats)
        .push(Space::new().width(Length::Fill).height(Length::Shrink))
        .push(control)
        .into()
}

/// The revealed delete control; disabled while a request is outstanding.
fn delete_button<'a>(fade_opacity: f32, enabled: bool) -> Element<'a, Message> {
    let mut widget = button(faded_icon(icons::trash(), sizing::ICON_MD, fade_opacity))
        .padding(spacing::XS)
        .style(move |_theme, status| delete_button_style(status, fade_opacity, enabled));

    if enabled {
        widget = widget.on_press(Message::DeleteMenu(delete_menu::Message::DeletePressed));
    }

    widget.into()
}

/// One inert icon-plus-count group.
fn stat<'a>(icon: Svg<'static>, count: &'a str, fade_opacity: f32) -> Element<'a, Message> {
    let count_text = Text::new(count)
        .size(typography::CAPTION)
        .style(move |_theme: &Theme| faded_text(palette::WHITE, fade_opacity));

    Row::new()
        .spacing(spacing::XXS)
        .align_y(alignment::Vertical::Center)
        .push(faded_icon(icon, sizing::ICON_MD, fade_opacity))
        .push(count_text)
        .into()
}

fn scrim_style(fade_opacity: f32) -> container::Style {
    let top = Color {
        a: opacity::TRANSPARENT,
        ..palette::BLACK
    };
    let bottom = faded(
        Color {
            a: opacity::SCRIM_STRONG,
            ..palette::BLACK
        },
        fade_opacity,
    );

    container::Style {
        background: Some(Background::Gradient(Gradient::Linear(
            iced::gradient::Linear::new(Radians(std::f32::consts::PI))
                .add_stop(0.0, top)
                .add_stop(1.0, bottom),
        ))),
        ..Default::default()
    }
}

fn pill_gradient(start: Color, stop: Color, fade_opacity: f32) -> Background {
    Background::Gradient(Gradient::Linear(
        iced::gradient::Linear::new(Radians(std::f32::consts::FRAC_PI_2))
            .add_stop(0.0, faded(start, fade_opacity))
            .add_stop(1.0, faded(stop, fade_opacity)),
    ))
}

fn overflow_button_style(status: button::Status, fade_opacity: f32) -> button::Style {
    let base_alpha = match status {
        button::Status::Hovered => opacity::CONTROL_HOVER,
        button::Status::Pressed => opacity::CONTROL_PRESSED,
        _ => opacity::BADGE_BACKGROUND,
    };

    button::Style {
        background: Some(Background::Color(faded(
            Color {
                a: base_alpha,
                ..palette::GRAY_900
            },
            fade_opacity,
        ))),
        border: iced::Border {
            radius: radius::PILL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

fn delete_button_style(
    status: button::Status,
    fade_opacity: f32,
    enabled: bool,
) -> button::Style {
    let mut color = palette::ERROR_500;
    if !enabled {
        color.a = opacity::SCRIM_MEDIUM;
    } else if matches!(status, button::Status::Hovered | button::Status::Pressed) {
        color.a = opacity::CONTROL_PRESSED;
    }

    button::Style {
        background: Some(Background::Color(faded(color, fade_opacity))),
        border: iced::Border {
            radius: radius::PILL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

fn faded_icon(icon: Svg<'static>, size: f32, fade_opacity: f32) -> Svg<'static> {
    icons::sized(icon, size).style(move |_theme: &Theme, _status| svg::Style {
        color: Some(faded(palette::WHITE, fade_opacity)),
    })
}

fn faded_text(color: Color, fade_opacity: f32) -> iced::widget::text::Style {
    iced::widget::text::Style {
        color: Some(faded(color, fade_opacity)),
    }
}

fn faded(color: Color, fade_opacity: f32) -> Color {
    Color {
        a: color.a * fade_opacity,
        ..color
    }
}

fn title_case(label: &str) -> String {
    let mut chars = label.trim().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn photo(activity: &str) -> Photo {
        Photo {
            id: "p1".to_string(),
            image_url: "https://photos.example/p1.jpg".to_string(),
            activity: activity.to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 12, 3, 18, 0, 0).unwrap(),
        }
    }

    #[test]
    fn overlay_renders_for_each_stage() {
        let i18n = I18n::default();
        let photo = photo("running");
        for stage in [Stage::Idle, Stage::ConfirmPending, Stage::InFlight] {
            let _element = view(&photo, &i18n, stage, 1.0);
        }
    }

    #[test]
    fn overlay_renders_unknown_activity_without_icon() {
        let i18n = I18n::default();
        let photo = photo("base jumping");
        let _element = view(&photo, &i18n, Stage::Idle, 0.5);
    }

    #[test]
    fn title_case_uppercases_first_letter() {
        assert_eq!(title_case("running"), "Running");
        assert_eq!(title_case(" yoga "), "Yoga");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn faded_multiplies_alpha() {
        let color = Color {
            a: 0.8,
            ..palette::WHITE
        };
        let result = faded(color, 0.5);
        assert!((result.a - 0.4).abs() < f32::EPSILON);
    }
}
