// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the active screen, then stacks the modal overlay (lightbox or
//! upload form) and the toast layer on top of it. The modal backdrop blocks
//! interaction with the screen below and dismisses on click.

use super::{App, Message, Overlay, Screen};
use crate::ui::gallery;
use crate::ui::lightbox;
use crate::ui::navbar;
use crate::ui::notifications::Toast;
use crate::ui::settings;
use crate::ui::styles::overlay as overlay_styles;
use crate::ui::upload_form;
use iced::widget::{center, mouse_area, opaque, stack, text, Column, Container};
use iced::{Element, Length};

/// Renders the current application view.
pub fn view(app: &App) -> Element<'_, Message> {
    let navbar = navbar::view(navbar::ViewContext {
        i18n: &app.i18n,
        on_settings_screen: app.screen == Screen::Settings,
    })
    .map(Message::Navbar);

    let screen: Element<'_, Message> = match app.screen {
        Screen::Gallery => gallery::view(gallery::ViewContext {
            i18n: &app.i18n,
            feed: &app.feed,
            state: &app.gallery,
            grid_columns: app.config.grid_columns(),
            spinner_rotation: app.spinner_rotation,
        })
        .map(Message::Gallery),
        Screen::Settings => settings::view(settings::ViewContext {
            i18n: &app.i18n,
            config: &app.config,
        })
        .map(Message::Settings),
    };

    let base: Element<'_, Message> = Column::new()
        .push(navbar)
        .push(
            Container::new(screen)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .into();

    let mut layers: Vec<Element<'_, Message>> = vec![base];

    if let Some(overlay) = &app.overlay {
        layers.push(view_overlay(app, overlay));
    }

    if app.notifications.has_notifications() {
        layers.push(Toast::view_overlay(&app.notifications, &app.i18n).map(Message::Notification));
    }

    stack(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Renders the modal layer: dimmed backdrop, centered content, click-outside
/// dismissal.
fn view_overlay<'a>(app: &'a App, overlay: &'a Overlay) -> Element<'a, Message> {
    let content: Element<'a, Message> = match overlay {
        Overlay::Lightbox { record_id } => match app.feed.find(record_id) {
            Some(record) => lightbox::view(lightbox::ViewContext {
                i18n: &app.i18n,
                record,
                image: app.gallery.thumbnail(&record.url),
                spinner_rotation: app.spinner_rotation,
            })
            .map(Message::Lightbox),
            // The record can vanish under the lightbox when the feed is
            // refreshed; render nothing until the overlay is dismissed.
            None => text("").into(),
        },
        Overlay::Upload(state) => upload_form::view(upload_form::ViewContext {
            i18n: &app.i18n,
            form: &state.form,
            preview: state.preview.as_ref(),
            preview_dimensions: state.preview_dimensions,
            spinner_rotation: app.spinner_rotation,
        })
        .map(Message::UploadForm),
    };

    opaque(
        mouse_area(
            center(opaque(content)).style(overlay_styles::backdrop),
        )
        .on_press(Message::BackdropPressed),
    )
}
