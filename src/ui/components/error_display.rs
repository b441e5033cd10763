// SPDX-License-Identifier: MPL-2.0
//! Reusable error display component with consistent styling.
//!
//! Renders a recoverable error as an accented panel with a user-friendly
//! message and an optional action button (e.g., "Retry"). Collaborator
//! failures surface through this component instead of leaking into
//! gesture or modal state.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::components::error_display::{ErrorDisplay, ErrorSeverity};
//!
//! ErrorDisplay::new(ErrorSeverity::Error)
//!     .message("Could not reach the savings service.")
//!     .action("Retry", Message::Retry)
//!     .view()
//! ```

use crate::ui::design_tokens::{palette, radius, spacing, typography};
use crate::ui::styles::button as button_styles;
use iced::widget::{button, container, Column, Container, Text};
use iced::{Background, Border, Color, Element, Length, Theme};

/// Severity level determines the color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorSeverity {
    /// Critical error - prevents the operation (red)
    #[default]
    Error,
    /// Informational - no action required (brand green)
    Info,
}

impl ErrorSeverity {
    /// Returns the accent color for this severity level.
    pub fn color(&self) -> Color {
        match self {
            ErrorSeverity::Error => palette::ERROR_500,
            ErrorSeverity::Info => palette::PRIMARY_500,
        }
    }
}

/// Configuration for the ErrorDisplay component.
#[derive(Debug, Clone)]
pub struct ErrorDisplay<Message> {
    severity: ErrorSeverity,
    message: Option<String>,
    action_label: Option<String>,
    action_message: Option<Message>,
}

impl<Message> Default for ErrorDisplay<Message> {
    fn default() -> Self {
        Self {
            severity: ErrorSeverity::default(),
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

    /// Builds the element.
    pub fn view<'a>(self) -> Element<'a, Message>
    where
        Message: 'a,
    {
        let accent = self.severity.color();

        let mut column = Column::new().spacing(spacing::XS);

        if let Some(message) = self.message {
            column = column.push(Text::new(message).size(typography::BODY).color(accent));
        }

        if let (Some(label), Some(message)) = (self.action_label, self.action_message) {
            column = column.push(
                button(Text::new(label).size(typography::BODY))
                    .padding(spacing::XS)
                    .style(button_styles::secondary)
                    .on_press(message),
            );
        }

        Container::new(column)
            .width(Length::Fill)
            .padding(spacing::SM)
            .style(move |_theme: &Theme| container::Style {
                background: Some(Background::Color(Color { a: 0.08, ..accent })),
                border: Border {
                    color: accent,
                    width: 1.0,
                    radius: radius::MD.into(),
                },
                ..Default::default()
            })
            .into()
    }
}
