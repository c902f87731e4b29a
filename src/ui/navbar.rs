// SPDX-License-Identifier: MPL-2.0
//! Top navigation bar.
//!
//! Shows the application title and, depending on the active screen, either
//! the add-image and settings actions or a back control.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles::button as button_styles;
use iced::widget::{button, space, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Messages emitted by the navbar buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    AddImagePressed,
    SettingsPressed,
    BackPressed,
}

/// Events the parent translates into navigation and overlay changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    OpenUploadForm,
    OpenSettings,
    Back,
}

/// Maps a navbar message to its parent-facing event.
pub fn update(message: Message) -> Event {
    match message {
        Message::AddImagePressed => Event::OpenUploadForm,
        Message::SettingsPressed => Event::OpenSettings,
        Message::BackPressed => Event::Back,
    }
}

/// Context required to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// When true, the actions collapse into a single back control.
    pub on_settings_screen: bool,
}

/// Renders the navbar row.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = Text::new(ctx.i18n.tr("window-title")).size(typography::TITLE);

    let mut row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(title)
        .push(space::horizontal());

    if ctx.on_settings_screen {
        row = row.push(
            button(Text::new(ctx.i18n.tr("navbar-back")).size(typography::BODY))
                .on_press(Message::BackPressed)
                .padding([spacing::XXS, spacing::MD])
                .style(button_styles::secondary),
        );
    } else {
        row = row
            .push(
                button(Text::new(ctx.i18n.tr("navbar-settings")).size(typography::BODY))
                    .on_press(Message::SettingsPressed)
                    .padding([spacing::XXS, spacing::MD])
                    .style(button_styles::secondary),
            )
            .push(
                button(Text::new(ctx.i18n.tr("navbar-add-image")).size(typography::BODY))
                    .on_press(Message::AddImagePressed)
                    .padding([spacing::XXS, spacing::MD])
                    .style(button_styles::primary),
            );
    }

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .padding([spacing::XXS, spacing::MD])
        .align_y(alignment::Vertical::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_map_to_matching_events() {
        assert_eq!(update(Message::AddImagePressed), Event::OpenUploadForm);
        assert_eq!(update(Message::SettingsPressed), Event::OpenSettings);
        assert_eq!(update(Message::BackPressed), Event::Back);
    }

    #[test]
    fn view_renders_for_both_screen_modes() {
        let i18n = I18n::default();
        let _gallery = view(ViewContext {
            i18n: &i18n,
            on_settings_screen: false,
        });
        let _settings = view(ViewContext {
            i18n: &i18n,
            on_settings_screen: true,
        });
    }
}
