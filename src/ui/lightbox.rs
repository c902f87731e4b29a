// SPDX-License-Identifier: MPL-2.0
//! Lightbox overlay: a centered modal presenting a single image.
//!
//! The backdrop and dismissal wiring (click outside, Escape) live in the
//! application view; this component only renders the modal card itself. The
//! footer shows the external image URL as selectable text so the user can
//! copy it into a browser.

use crate::api::models::ImageRecord;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::gallery::Thumbnail;
use crate::ui::styles::{button as button_styles, overlay as overlay_styles};
use crate::ui::widgets::spinner::Spinner;
use iced::widget::{button, Column, Container, Image, Row, Text};
use iced::{alignment, ContentFit, Element, Length};

/// Messages emitted by the lightbox chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    ClosePressed,
}

/// Context required to render the lightbox.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub record: &'a ImageRecord,
    pub image: Option<&'a Thumbnail>,
    pub spinner_rotation: f32,
}

/// Renders the modal card: close control, image area, footer link.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let close_button = button(Text::new("×").size(typography::TITLE))
        .on_press(Message::ClosePressed)
        .padding(spacing::XXS)
        .style(button_styles::bare);

    let header = Row::new()
        .width(Length::Fill)
        .push(iced::widget::space::horizontal())
        .push(close_button);

    let image_area: Element<'_, Message> = match ctx.image {
        Some(Thumbnail::Ready(handle)) => Image::new(handle.clone())
            .width(Length::Shrink)
            .height(Length::Shrink)
            .content_fit(ContentFit::Contain)
            .into(),
        Some(Thumbnail::Failed) => Container::new(
            Text::new(ctx.i18n.tr("lightbox-image-failed")).size(typography::BODY),
        )
        .padding(spacing::XL)
        .into(),
        None => Container::new(
            Spinner::new(
                palette::PRIMARY_500,
                ctx.spinner_rotation,
                sizing::SPINNER_LG,
            )
            .into_element(),
        )
        .padding(spacing::XL)
        .into(),
    };

    let footer = Container::new(
        Row::new()
            .spacing(spacing::XS)
            .push(
                Text::new(ctx.i18n.tr("lightbox-open-original")).size(typography::CAPTION),
            )
            .push(Text::new(ctx.record.url.clone()).size(typography::CAPTION)),
    )
    .width(Length::Fill)
    .padding([spacing::XXS, spacing::SM])
    .style(overlay_styles::footer);

    let content = Column::new()
        .push(header)
        .push(
            Container::new(image_area)
                .max_width(sizing::LIGHTBOX_MAX_WIDTH)
                .max_height(sizing::LIGHTBOX_MAX_HEIGHT)
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center),
        )
        .push(footer);

    Container::new(content)
        .max_width(sizing::LIGHTBOX_MAX_WIDTH)
        .style(crate::ui::styles::container::panel)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ImageRecord {
        ImageRecord {
            id: "a1".to_string(),
            title: "Dunes".to_string(),
            description: "Evening light".to_string(),
            url: "https://img.example/a1.png".to_string(),
            ts: 0,
        }
    }

    #[test]
    fn view_renders_without_a_loaded_image() {
        let i18n = I18n::default();
        let record = record();
        let _element = view(ViewContext {
            i18n: &i18n,
            record: &record,
            image: None,
            spinner_rotation: 0.0,
        });
    }

    #[test]
    fn view_renders_the_failed_state() {
        let i18n = I18n::default();
        let record = record();
        let _element = view(ViewContext {
            i18n: &i18n,
            record: &record,
            image: Some(&Thumbnail::Failed),
            spinner_rotation: 0.0,
        });
    }
}
