// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for app-level navigation.
//!
//! The bar shows the SunWise brand and the screen links (storefront,
//! calculator, settings). It emits events the app translates into screen
//! switches; it holds no state of its own.

use crate::app::Screen;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, Container, Row, Text};
use iced::{Alignment, Background, Element, Length, Theme};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub active: Screen,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    OpenStorefront,
    OpenCalculator,
    OpenSettings,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    SwitchTo(Screen),
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::OpenStorefront => Event::SwitchTo(Screen::Storefront),
        Message::OpenCalculator => Event::SwitchTo(Screen::Calculator),
        Message::OpenSettings => Event::SwitchTo(Screen::Settings),
    }
}

/// Render the navigation bar.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let brand = Text::new(ctx.i18n.tr("app-title"))
        .size(typography::TITLE_MD)
        .color(palette::WHITE);

    let row = Row::new()
        .spacing(spacing::MD)
        .align_y(Alignment::Center)
        .push(brand)
        .push(iced::widget::Space::new().width(Length::Fill))
        .push(nav_link(
            ctx.i18n.tr("nav-storefront"),
            ctx.active == Screen::Storefront,
            Message::OpenStorefront,
        ))
        .push(nav_link(
            ctx.i18n.tr("nav-calculator"),
            ctx.active == Screen::Calculator,
            Message::OpenCalculator,
        ))
        .push(nav_link(
            ctx.i18n.tr("nav-settings"),
            ctx.active == Screen::Settings,
            Message::OpenSettings,
        ));

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .padding([spacing::XS, spacing::MD])
        .align_y(Alignment::Center)
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(palette::PRIMARY_700)),
            ..Default::default()
        })
        .into()
}

fn nav_link(label: String, active: bool, message: Message) -> Element<'static, Message> {
    let link = button(Text::new(label).size(typography::BODY)).padding(spacing::XS);

    let link = if active {
        link.style(styles::button_primary)
    } else {
        link.style(styles::button_overlay(palette::WHITE, 0.0, 0.25))
    };

    link.on_press(message).into()
}
