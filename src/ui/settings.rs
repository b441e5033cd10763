// SPDX-License-Identifier: MPL-2.0
//! Settings screen: language selection and the backend URL.
//!
//! Language changes apply and persist immediately; the backend URL is a
//! draft committed with the save button, which also re-quotes the
//! calculator against the new backend.

use crate::app::{App, Message};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text_input, Button, Column, Container, Text};
use iced::{Alignment, Element, Length};

/// Renders the settings screen.
pub fn view_settings(app: &App) -> Element<'_, Message> {
    let i18n = &app.i18n;

    let mut language_column = Column::new().spacing(spacing::XS).push(
        Text::new(i18n.tr("settings-language"))
            .size(typography::TITLE_SM)
            .color(palette::GRAY_900),
    );

    for locale in &app.i18n.available_locales {
        let mut entry = Button::new(Text::new(locale.to_string()).size(typography::BODY))
            .padding(spacing::XS)
            .on_press(Message::LanguageSelected(locale.clone()));

        if locale == app.i18n.current_locale() {
            entry = entry.style(styles::button_primary); // Highlight current language
        } else {
            entry = entry.style(styles::button::secondary);
        }

        language_column = language_column.push(entry);
    }

    let backend_column = Column::new()
        .spacing(spacing::XS)
        .push(
            Text::new(i18n.tr("settings-backend-url"))
                .size(typography::TITLE_SM)
                .color(palette::GRAY_900),
        )
        .push(
            text_input("https://…", app.backend_draft())
                .on_input(Message::BackendUrlEdited)
                .padding(spacing::XS),
        )
        .push(
            button(Text::new(i18n.tr("settings-save")).size(typography::BODY))
                .padding(spacing::XS)
                .style(styles::button_primary)
                .on_press(Message::SaveSettings),
        );

    let mut column = Column::new()
        .spacing(spacing::LG)
        .max_width(480)
        .push(
            Text::new(i18n.tr("settings-title"))
                .size(typography::TITLE_LG)
                .color(palette::PRIMARY_500),
        )
        .push(language_column)
        .push(backend_column);

    if app.settings_saved() {
        column = column.push(
            Text::new(i18n.tr("settings-saved"))
                .size(typography::BODY)
                .color(palette::SUCCESS_500),
        );
    }

    Container::new(column)
        .width(Length::Fill)
        .align_x(Alignment::Center)
        .padding(spacing::LG)
        .into()
}
