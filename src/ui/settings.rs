// SPDX-License-Identifier: MPL-2.0
//! Settings screen: language selection and a read-only view of the
//! configured endpoints.
//!
//! Languages come from the embedded Fluent locales; picking one switches the
//! UI immediately and the choice is persisted to `settings.toml` by the
//! parent. The endpoints are shown so users can verify which API and upload
//! host the client talks to without opening the config file.

use crate::config::Config;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles::button as button_styles;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Element, Length};
use unic_langid::LanguageIdentifier;

/// Messages emitted by the settings widgets.
#[derive(Debug, Clone)]
pub enum Message {
    LanguageSelected(LanguageIdentifier),
}

/// Events the parent translates into state and config changes.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    LanguageChanged(LanguageIdentifier),
}

/// Maps a settings message to its parent-facing event.
pub fn update(message: Message) -> Event {
    match message {
        Message::LanguageSelected(locale) => Event::LanguageChanged(locale),
    }
}

/// Context required to render the settings screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub config: &'a Config,
}

/// Renders the settings screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = Text::new(ctx.i18n.tr("settings-title")).size(typography::HEADLINE);

    let mut language_column = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(ctx.i18n.tr("select-language-label")).size(typography::SUBTITLE));

    for locale in &ctx.i18n.available_locales {
        // Prefer the language's self-description, e.g. "language-name-pt-BR".
        let translated_name = ctx.i18n.tr(&format!("language-name-{}", locale));
        let label = if translated_name.starts_with("MISSING:") {
            locale.to_string()
        } else {
            translated_name
        };

        let is_current = ctx.i18n.current_locale() == locale;
        let mut language_button = button(Text::new(label).size(typography::BODY))
            .padding([spacing::XXS, spacing::MD])
            .on_press(Message::LanguageSelected(locale.clone()));

        if is_current {
            language_button = language_button.style(button_styles::primary);
        } else {
            language_button = language_button.style(button_styles::secondary);
        }

        language_column = language_column.push(language_button);
    }

    let endpoints_column = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(ctx.i18n.tr("settings-api-heading")).size(typography::SUBTITLE))
        .push(endpoint_row(
            ctx.i18n.tr("settings-api-base-url"),
            ctx.config.api_base_url().to_string(),
        ))
        .push(endpoint_row(
            ctx.i18n.tr("settings-upload-url"),
            ctx.config.upload_url().to_string(),
        ));

    let content = Column::new()
        .spacing(spacing::XL)
        .max_width(560.0)
        .push(title)
        .push(language_column)
        .push(endpoints_column);

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::XL)
        .align_x(alignment::Horizontal::Center)
        .into()
}

fn endpoint_row<'a>(label: String, value: String) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::SM)
        .push(Text::new(label).size(typography::BODY))
        .push(Text::new(value).size(typography::BODY))
        .into()
}
