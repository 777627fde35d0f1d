// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The root is always a `Stack` holding the gallery grid, so the grid keeps
//! its scroll position across opening and closing. The lightbox overlay is
//! pushed on top whenever the retained surface reports the open visual state.

use super::Message;
use crate::application::port::RetainedSurface;
use crate::domain::gallery::{ImageRef, ImageSet};
use crate::domain::ui::GridColumns;
use crate::i18n::fluent::I18n;
use crate::ui::lightbox;
use fluent_bundle::FluentValue;
use iced::widget::{button, column, container, image, mouse_area, row, scrollable, text};
use iced::widget::{Column, Row, Stack};
use iced::{mouse, Alignment, Color, ContentFit, Element, Length, Theme};
use std::path::Path;

const GRID_SPACING: f32 = 12.0;
const THUMBNAIL_HEIGHT: f32 = 180.0;
const SCRIM_ALPHA: f32 = 0.92;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub images: &'a ImageSet,
    pub surface: &'a RetainedSurface,
    pub columns: GridColumns,
    pub gallery_dir: &'a Path,
}

/// Renders the gallery and, when open, the lightbox above it.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let gallery = scrollable(gallery_grid(&ctx))
        .width(Length::Fill)
        .height(Length::Fill);

    let mut stack = Stack::new().push(gallery);
    if ctx.surface.is_open() {
        stack = stack.push(lightbox_overlay(&ctx));
    }
    stack.into()
}

fn gallery_grid<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    if ctx.images.is_empty() {
        let directory = ctx.gallery_dir.display().to_string();
        let message = ctx
            .i18n
            .tr_with_args("gallery-empty", &[("directory", FluentValue::from(directory))]);
        // Height must stay shrink: this sits inside a vertical scrollable.
        return container(text(message))
            .padding(24)
            .center_x(Length::Fill)
            .into();
    }

    let columns = ctx.columns.as_usize();
    let entries: Vec<(usize, &ImageRef)> = ctx.images.iter().enumerate().collect();

    let rows = entries.chunks(columns).map(|chunk| -> Element<'a, Message> {
        let mut cells: Vec<Element<'a, Message>> = chunk
            .iter()
            .map(|(index, image_ref)| thumbnail(*index, image_ref))
            .collect();
        // Pad the last row so thumbnails keep the same width.
        while cells.len() < columns {
            cells.push(container(text("")).width(Length::FillPortion(1)).into());
        }
        Row::with_children(cells).spacing(GRID_SPACING).into()
    });

    Column::with_children(rows)
        .spacing(GRID_SPACING)
        .padding(24)
        .width(Length::Fill)
        .into()
}

fn thumbnail<'a>(index: usize, image_ref: &ImageRef) -> Element<'a, Message> {
    button(
        image(image::Handle::from_path(image_ref.as_str()))
            .width(Length::Fill)
            .height(Length::Fixed(THUMBNAIL_HEIGHT))
            .content_fit(ContentFit::Cover),
    )
    .on_press(Message::Lightbox(lightbox::Message::ItemClicked(index)))
    .padding(0)
    .width(Length::FillPortion(1))
    .into()
}

fn lightbox_overlay<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let picture: Element<'a, Message> = match ctx.surface.displayed_image() {
        Some(image_ref) => mouse_area(
            image(image::Handle::from_path(image_ref.as_str())).content_fit(ContentFit::Contain),
        )
        .on_press(Message::Lightbox(lightbox::Message::ImageClicked))
        .into(),
        None => text("").into(),
    };

    let controls = row![
        button(text(i18n.tr("lightbox-previous")))
            .on_press(Message::Lightbox(lightbox::Message::PreviousClicked)),
        text(ctx.surface.accessible_label().to_string())
            .size(16)
            .color(Color::WHITE),
        button(text(i18n.tr("lightbox-next")))
            .on_press(Message::Lightbox(lightbox::Message::NextClicked)),
        button(text(i18n.tr("lightbox-close")))
            .on_press(Message::Lightbox(lightbox::Message::CloseClicked)),
    ]
    .spacing(16)
    .align_y(Alignment::Center);
    let controls = mouse_area(controls).on_press(Message::ControlsPressed);

    let content = column![
        container(picture)
            .center_x(Length::Fill)
            .center_y(Length::Fill),
        controls
    ]
    .spacing(GRID_SPACING)
    .padding(24)
    .align_x(Alignment::Center);

    let scrim = container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(scrim_style);

    // Scrim clicks and touches arrive as uncaptured presses (see the event
    // subscription); this layer only keeps the gallery underneath from reacting.
    let overlay = mouse_area(scrim).interaction(mouse::Interaction::Idle);
    if ctx.surface.is_scroll_suppressed() {
        overlay
            .on_scroll(|_| Message::BackgroundScrollBlocked)
            .into()
    } else {
        overlay.into()
    }
}

fn scrim_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Color::from_rgba(0.0, 0.0, 0.0, SCRIM_ALPHA).into()),
        text_color: Some(Color::WHITE),
        ..container::Style::default()
    }
}
