// SPDX-License-Identifier: MPL-2.0
//! Upload form overlay.
//!
//! Renders the [`Form`](crate::upload::form::Form) state: file picker with
//! local preview, title and description inputs with their first failing
//! validation message, and the submit control, which stays disabled while
//! the side-channel upload or the submission itself is in flight.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles::{button as button_styles, container as container_styles};
use crate::ui::widgets::spinner::Spinner;
use crate::upload::form::{Form, UploadStatus};
use crate::upload::validate::Rejection;
use iced::widget::image::Handle;
use iced::widget::{button, text, text_input, Column, Container, Image, Text};
use iced::{alignment, ContentFit, Element, Length, Theme};

/// Messages emitted by the form widgets.
#[derive(Debug, Clone)]
pub enum Message {
    TitleChanged(String),
    DescriptionChanged(String),
    PickFilePressed,
    SubmitPressed,
    CancelPressed,
}

/// Context required to render the upload form.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub form: &'a Form,
    /// Decoded preview of the picked file, if it could be decoded locally.
    pub preview: Option<&'a Handle>,
    /// Pixel dimensions of the picked file, for the caption under the preview.
    pub preview_dimensions: Option<(u32, u32)>,
    pub spinner_rotation: f32,
}

/// Renders the modal form card.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title_heading = Text::new(ctx.i18n.tr("upload-form-title")).size(typography::TITLE);

    let mut content = Column::new()
        .spacing(spacing::MD)
        .push(title_heading)
        .push(view_file_area(&ctx));

    if let Some(rejection) = ctx.form.file_error() {
        content = content.push(view_field_error(&ctx, rejection));
    }

    content = content.push(
        text_input(
            &ctx.i18n.tr("upload-title-placeholder"),
            ctx.form.title(),
        )
        .on_input(Message::TitleChanged)
        .padding(spacing::XS)
        .size(typography::BODY),
    );
    if let Some(rejection) = ctx.form.title_error() {
        content = content.push(view_field_error(&ctx, rejection));
    }

    content = content.push(
        text_input(
            &ctx.i18n.tr("upload-description-placeholder"),
            ctx.form.description(),
        )
        .on_input(Message::DescriptionChanged)
        .padding(spacing::XS)
        .size(typography::BODY),
    );
    if let Some(rejection) = ctx.form.description_error() {
        content = content.push(view_field_error(&ctx, rejection));
    }

    content = content.push(view_actions(&ctx));

    Container::new(content)
        .width(Length::Fixed(sizing::UPLOAD_FORM_WIDTH))
        .padding(spacing::LG)
        .style(container_styles::panel)
        .into()
}

/// The file area cycles through pick button, upload progress, and preview.
fn view_file_area<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let inner: Element<'a, Message> = match ctx.form.upload_status() {
        UploadStatus::Uploading => Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .push(
                Spinner::new(
                    palette::PRIMARY_500,
                    ctx.spinner_rotation,
                    sizing::SPINNER_SM,
                )
                .into_element(),
            )
            .push(Text::new(ctx.i18n.tr("upload-uploading")).size(typography::CAPTION))
            .into(),
        _ => match ctx.preview {
            Some(handle) => {
                let mut preview_column = Column::new()
                    .spacing(spacing::XXS)
                    .align_x(alignment::Horizontal::Center)
                    .push(
                        Image::new(handle.clone())
                            .width(Length::Fill)
                            .height(Length::Fixed(
                                sizing::UPLOAD_PREVIEW_HEIGHT - spacing::LG,
                            ))
                            .content_fit(ContentFit::Contain),
                    );
                if let Some((width, height)) = ctx.preview_dimensions {
                    preview_column = preview_column.push(
                        Text::new(ctx.i18n.tr_with_args(
                            "upload-picked-dimensions",
                            &[
                                ("width", width.to_string().as_str()),
                                ("height", height.to_string().as_str()),
                            ],
                        ))
                        .size(typography::CAPTION),
                    );
                }
                preview_column.into()
            }
            None => button(Text::new(ctx.i18n.tr("upload-pick-file")).size(typography::BODY))
                .on_press(Message::PickFilePressed)
                .padding([spacing::XS, spacing::LG])
                .style(button_styles::secondary)
                .into(),
        },
    };

    Container::new(inner)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::UPLOAD_PREVIEW_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(container_styles::image_placeholder)
        .into()
}

/// First failing validation message for a field, in the accent error color.
fn view_field_error<'a>(ctx: &ViewContext<'a>, rejection: Rejection) -> Element<'a, Message> {
    let args = rejection.i18n_args();
    let message = if args.is_empty() {
        ctx.i18n.tr(rejection.i18n_key())
    } else {
        let borrowed: Vec<(&str, &str)> = args
            .iter()
            .map(|(name, value)| (*name, value.as_str()))
            .collect();
        ctx.i18n.tr_with_args(rejection.i18n_key(), &borrowed)
    };

    Text::new(message)
        .size(typography::CAPTION)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::ERROR_500),
        })
        .into()
}

fn view_actions<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let submit_label = Text::new(ctx.i18n.tr("upload-submit")).size(typography::BODY);
    let mut submit = button(
        Container::new(submit_label)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(button_styles::primary);
    if ctx.form.can_submit() {
        submit = submit.on_press(Message::SubmitPressed);
    }

    let cancel = button(Text::new(ctx.i18n.tr("upload-cancel")).size(typography::BODY))
        .on_press(Message::CancelPressed)
        .padding([spacing::XXS, spacing::MD])
        .style(button_styles::bare);

    Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(submit)
        .push(cancel)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upload::form::PickedFile;

    #[test]
    fn view_renders_a_pristine_form() {
        let i18n = I18n::default();
        let form = Form::new();
        let _element = view(ViewContext {
            i18n: &i18n,
            form: &form,
            preview: None,
            preview_dimensions: None,
            spinner_rotation: 0.0,
        });
    }

    #[test]
    fn view_renders_while_uploading() {
        let i18n = I18n::default();
        let mut form = Form::new();
        assert!(form.accept_file(PickedFile {
            name: "photo.png".to_string(),
            mime: "image/png".to_string(),
            size_bytes: 1_000,
        }));
        let _element = view(ViewContext {
            i18n: &i18n,
            form: &form,
            preview: None,
            preview_dimensions: None,
            spinner_rotation: 0.0,
        });
    }

    #[test]
    fn view_renders_field_errors() {
        let i18n = I18n::default();
        let mut form = Form::new();
        form.validate_fields();
        let _element = view(ViewContext {
            i18n: &i18n,
            form: &form,
            preview: None,
            preview_dimensions: None,
            spinner_rotation: 0.0,
        });
    }
}
