// SPDX-License-Identifier: MPL-2.0
//! Top-level view composition.
//!
//! Builds the navbar plus the active screen, and stacks a card's detail
//! modal over everything whenever one is open.

use super::{App, Message, Screen};
use crate::ui::calculator;
use crate::ui::card;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::modal;
use crate::ui::navbar;
use crate::ui::settings;
use chrono::Utc;
use iced::widget::{Column, Container, Row, Scrollable, Stack, Text};
use iced::{Alignment, Element, Length};

/// Cards per storefront row.
const GRID_COLUMNS: usize = 3;

/// Renders the whole application.
pub fn view(app: &App) -> Element<'_, Message> {
    let navbar = navbar::view(navbar::ViewContext {
        i18n: &app.i18n,
        active: app.screen,
    })
    .map(Message::Navbar);

    let body: Element<'_, Message> = match app.screen {
        Screen::Storefront => storefront(app),
        Screen::Calculator => calculator::view(
            &app.calculator,
            calculator::ViewContext { i18n: &app.i18n },
        )
        .map(Message::Calculator),
        Screen::Settings => settings::view_settings(app),
    };

    let base: Element<'_, Message> = Column::new().push(navbar).push(body).into();

    // An open detail modal overlays everything, navbar included.
    match app
        .cards
        .iter()
        .enumerate()
        .find(|(_, card)| card.modal.is_visible())
    {
        Some((index, card)) => {
            let overlay = modal::view(
                &card.modal,
                card.item(),
                modal::ViewContext {
                    i18n: &app.i18n,
                    store: &app.images,
                },
            )
            .map(move |message| Message::Card {
                index,
                message: card::Message::Modal(message),
            });

            Stack::new().push(base).push(overlay).into()
        }
        None => base,
    }
}

fn storefront(app: &App) -> Element<'_, Message> {
    if app.cards.is_empty() {
        return Container::new(
            Text::new(app.i18n.tr("storefront-empty"))
                .size(typography::TITLE_SM)
                .color(palette::GRAY_400),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Alignment::Center)
        .align_y(Alignment::Center)
        .into();
    }

    let now = Utc::now();
    let mut grid = Column::new().spacing(spacing::LG);
    let mut row = Row::new().spacing(spacing::LG);
    let mut in_row = 0;

    for (index, card) in app.cards.iter().enumerate() {
        let element = card::view(
            card,
            card::ViewContext {
                i18n: &app.i18n,
                store: &app.images,
                now,
            },
        )
        .map(move |message| Message::Card { index, message });

        row = row.push(element);
        in_row += 1;
        if in_row == GRID_COLUMNS {
            grid = grid.push(row);
            row = Row::new().spacing(spacing::LG);
            in_row = 0;
        }
    }
    if in_row > 0 {
        grid = grid.push(row);
    }

    Scrollable::new(
        Container::new(grid)
            .width(Length::Fill)
            .align_x(Alignment::Center)
            .padding(spacing::LG),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}
