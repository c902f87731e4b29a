// SPDX-License-Identifier: MPL-2.0
//! Button styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Filled accent button used for the main action of a surface (submit,
/// load more, add image).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Active => palette::PRIMARY_500,
        button::Status::Hovered => palette::PRIMARY_400,
        button::Status::Pressed => palette::PRIMARY_600,
        button::Status::Disabled => Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::PRIMARY_500
        },
    };

    let text_color = if status == button::Status::Disabled {
        Color {
            a: opacity::OVERLAY_STRONG,
            ..palette::WHITE
        }
    } else {
        palette::WHITE
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Quiet outlined button for secondary actions (cancel, retry, language rows).
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let extended = theme.extended_palette();

    let background = match status {
        button::Status::Active | button::Status::Disabled => None,
        button::Status::Hovered => Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::GRAY_400
        })),
        button::Status::Pressed => Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::GRAY_400
        })),
    };

    button::Style {
        background,
        text_color: extended.background.base.text,
        border: Border {
            color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::GRAY_400
            },
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Invisible button wrapping a gallery card; hover lifts the card with a
/// shadow instead of recoloring it.
pub fn card(theme: &Theme, status: button::Status) -> button::Style {
    let extended = theme.extended_palette();

    button::Style {
        background: Some(Background::Color(extended.background.weak.color)),
        text_color: extended.background.base.text,
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: match status {
            button::Status::Hovered | button::Status::Pressed => shadow::MD,
            _ => shadow::NONE,
        },
        snap: true,
    }
}

/// Bare text button, used for toast dismissal and the lightbox close control.
pub fn bare(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    let background = match status {
        button::Status::Hovered => Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::GRAY_400
        })),
        button::Status::Pressed => Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::GRAY_400
        })),
        _ => None,
    };

    button::Style {
        background,
        text_color: base.text,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
