// SPDX-License-Identifier: MPL-2.0
//! Product card rendering.
//!
//! The strip is wrapped in a `mouse_area` that feeds the swipe tracker;
//! the body below it is the tap / press-hold surface. Badges overlay the
//! strip corners the way the listing page lays them out.

use super::{Message, State};
use crate::catalog::Elapsed;
use crate::i18n::fluent::I18n;
use crate::images::ImageStore;
use crate::ui::carousel;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles;
use chrono::{DateTime, Utc};
use iced::widget::{button, container, mouse_area, Column, Container, Row, Stack, Text};
use iced::{mouse, Alignment, Element, Length, Theme};

/// Contextual data needed to render a card.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub store: &'a ImageStore,
    /// "Now" for the listed-ago label; injected so rendering stays pure.
    pub now: DateTime<Utc>,
}

/// Renders the compact card.
pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let item = state.item();

    let mut tags = Row::new().spacing(spacing::XXS);
    for tag in item.tags.iter().take(3) {
        tags = tags.push(
            Container::new(Text::new(tag.as_str()).size(typography::CAPTION))
                .padding([spacing::XXS, spacing::XS])
                .style(styles::badge(palette::GRAY_100, palette::GRAY_700)),
        );
    }

    // The body below the strip is the modal-open surface.
    let body = mouse_area(
        Column::new()
            .spacing(spacing::XS)
            .push(Text::new(item.description.as_str()).size(typography::BODY))
            .push(tags),
    )
    .on_press(Message::BodyPressed)
    .on_release(Message::BodyReleased)
    .on_exit(Message::BodyExited);

    let column = Column::new()
        .spacing(spacing::SM)
        .push(seller_header(state, &ctx))
        .push(strip(state, &ctx))
        .push(
            Container::new(carousel::dots(state.carousel.len(), state.carousel.index()))
                .width(Length::Fill)
                .align_x(Alignment::Center),
        )
        .push(body);

    Container::new(column)
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .padding(spacing::MD)
        .style(styles::card_surface)
        .into()
}

fn seller_header<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let item = state.item();
    let i18n = ctx.i18n;

    let initial = item
        .seller
        .username
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default();

    let avatar = Container::new(Text::new(initial).size(typography::BODY_LG))
        .width(Length::Fixed(sizing::AVATAR_SIZE))
        .height(Length::Fixed(sizing::AVATAR_SIZE))
        .align_x(Alignment::Center)
        .align_y(Alignment::Center)
        .style(styles::badge(palette::PRIMARY_200, palette::PRIMARY_700));

    let listed = listed_label(i18n, item.seller.listed_at, ctx.now);

    let header = Row::new()
        .spacing(spacing::XS)
        .align_y(Alignment::Center)
        .push(avatar)
        .push(
            Column::new()
                .push(Text::new(item.seller.username.as_str()).size(typography::BODY))
                .push(
                    Text::new(listed)
                        .size(typography::CAPTION)
                        .color(palette::GRAY_400),
                ),
        );

    mouse_area(header)
        .on_press(Message::SellerPressed)
        .interaction(mouse::Interaction::Pointer)
        .into()
}

fn listed_label(i18n: &I18n, listed_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    match Elapsed::since(listed_at, now) {
        Elapsed::JustNow => i18n.tr("time-just-now"),
        Elapsed::Minutes(n) => i18n.tr_args("time-minutes-ago", &[("count", n.to_string())]),
        Elapsed::Hours(n) => i18n.tr_args("time-hours-ago", &[("count", n.to_string())]),
        Elapsed::Days(n) => i18n.tr_args("time-days-ago", &[("count", n.to_string())]),
    }
}

fn strip<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let item = state.item();
    let i18n = ctx.i18n;

    let track = carousel::strip(
        &item.images,
        ctx.store,
        i18n.tr("carousel-empty"),
        state.carousel.index(),
        state.translate_x(),
        sizing::CARD_IMAGE_HEIGHT,
    );

    let mut stack = Stack::new().push(track);

    stack = stack.push(corner_badge(
        Text::new(item.condition.as_str()).size(typography::CAPTION),
        styles::badge(palette::SUCCESS_500, palette::WHITE),
        Alignment::Start,
        Alignment::Start,
    ));
    stack = stack.push(corner_badge(
        Text::new(item.category.as_str()).size(typography::CAPTION),
        styles::badge(palette::GRAY_100, palette::GRAY_700),
        Alignment::End,
        Alignment::Start,
    ));
    stack = stack.push(corner_badge(
        Text::new(i18n.tr_args("price-tag", &[("amount", format!("{:.0}", item.price))]))
            .size(typography::BODY),
        styles::badge(palette::WHITE, palette::GRAY_900),
        Alignment::End,
        Alignment::End,
    ));

    // Drag navigation is off in large-screen mode; explicit arrows take over.
    if state.is_large_screen() && !item.images.is_empty() {
        stack = stack.push(arrow_zone(
            "‹",
            state.carousel.has_previous(),
            Message::PreviousImage,
            Alignment::Start,
        ));
        stack = stack.push(arrow_zone(
            "›",
            state.carousel.has_next(),
            Message::NextImage,
            Alignment::End,
        ));
    }

    let cursor = if state.is_large_screen() {
        mouse::Interaction::default()
    } else if state.is_dragging() {
        mouse::Interaction::Grabbing
    } else {
        mouse::Interaction::Grab
    };

    mouse_area(stack)
        .on_move(|position| Message::PointerMoved(position.x))
        .on_press(Message::StripPressed)
        .on_release(Message::StripReleased)
        .on_exit(Message::StripExited)
        .interaction(cursor)
        .into()
}

fn corner_badge<'a>(
    label: Text<'a, Theme, iced::Renderer>,
    style: impl Fn(&Theme) -> container::Style + 'a,
    horizontal: Alignment,
    vertical: Alignment,
) -> Element<'a, Message> {
    Container::new(
        Container::new(label)
            .padding([spacing::XXS, spacing::XS])
            .style(style),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::CARD_IMAGE_HEIGHT))
    .align_x(horizontal)
    .align_y(vertical)
    .padding(spacing::XS)
    .into()
}

fn arrow_zone(
    glyph: &str,
    enabled: bool,
    message: Message,
    side: Alignment,
) -> Element<'_, Message> {
    let arrow = button(Text::new(glyph.to_string()).size(typography::TITLE_MD))
        .padding(spacing::XXS)
        .style(styles::button_overlay(
            palette::WHITE,
            opacity::OVERLAY_SUBTLE,
            opacity::OVERLAY_STRONG,
        ));
    let arrow = if enabled { arrow.on_press(message) } else { arrow };

    Container::new(arrow)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::CARD_IMAGE_HEIGHT))
        .align_x(side)
        .align_y(Alignment::Center)
        .padding(spacing::XXS)
        .into()
}
