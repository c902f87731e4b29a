// SPDX-License-Identifier: MPL-2.0
//! Reusable full-area error display with consistent styling.
//!
//! Shows a severity-colored title, a user-friendly message, and an optional
//! action button (e.g. "Try again"). Used for the gallery's initial-load
//! failure and the lightbox's image failure.

use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles::button as button_styles;
use iced::widget::{button, text, Column, Container, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Severity level determines the title color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorSeverity {
    /// Critical error - prevents operation (red)
    #[default]
    Error,
    /// Warning - operation degraded but possible (orange)
    Warning,
    /// Informational - no action required (blue)
    Info,
}

impl ErrorSeverity {
    /// Returns the primary color for this severity level.
    pub fn color(&self) -> Color {
        match self {
            ErrorSeverity::Error => palette::ERROR_500,
            ErrorSeverity::Warning => palette::WARNING_500,
            ErrorSeverity::Info => palette::INFO_500,
        }
    }
}

/// Configuration for the error display.
#[derive(Debug, Clone)]
pub struct ErrorDisplay<Message> {
    severity: ErrorSeverity,
    title: Option<String>,
    message: Option<String>,
    action_label: Option<String>,
    action_message: Option<Message>,
}

impl<Message> Default for ErrorDisplay<Message> {
    fn default() -> Self {
        Self {
            severity: ErrorSeverity::default(),
            title: None,
            message: None,
            action_label: None,
            action_message: None,
        }
    }
}

impl<Message: Clone + 'static> ErrorDisplay<Message> {
    /// Creates a new error display with the given severity.
    pub fn new(severity: ErrorSeverity) -> Self {
        Self {
            severity,
            ..Self::default()
        }
    }

    /// Sets the title (main heading).
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the message (user-friendly explanation).
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Adds an action button.
    pub fn action(mut self, label: impl Into<String>, message: Message) -> Self {
        self.action_label = Some(label.into());
        self.action_message = Some(message);
        self
    }

    /// Builds the element, centered in the available area.
    pub fn view<'a>(self) -> Element<'a, Message> {
        let severity_color = self.severity.color();
        let mut column = Column::new()
            .spacing(spacing::MD)
            .align_x(alignment::Horizontal::Center);

        if let Some(title) = self.title {
            column = column.push(Text::new(title).size(typography::TITLE).style(
                move |_theme: &Theme| text::Style {
                    color: Some(severity_color),
                },
            ));
        }

        if let Some(message) = self.message {
            column = column.push(Text::new(message).size(typography::BODY));
        }

        if let (Some(label), Some(message)) = (self.action_label, self.action_message) {
            column = column.push(
                button(Text::new(label).size(typography::BODY))
                    .on_press(message)
                    .padding([spacing::XS, spacing::LG])
                    .style(button_styles::secondary),
            );
        }

        Container::new(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum TestMessage {
        Retry,
    }

    #[test]
    fn severity_colors_are_distinct() {
        assert_ne!(ErrorSeverity::Error.color(), ErrorSeverity::Warning.color());
        assert_ne!(ErrorSeverity::Error.color(), ErrorSeverity::Info.color());
    }

    #[test]
    fn builder_renders_with_all_parts() {
        let _element: Element<'_, TestMessage> = ErrorDisplay::new(ErrorSeverity::Error)
            .title("Unable to load the gallery")
            .message("Check your connection")
            .action("Try again", TestMessage::Retry)
            .view();
        // Smoke test: building the element must not panic.
    }
}
