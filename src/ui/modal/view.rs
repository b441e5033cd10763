// SPDX-License-Identifier: MPL-2.0
//! Detail modal rendering.
//!
//! The modal is a dimmed full-window backdrop with a centered content
//! card. The backdrop is a `mouse_area` that closes the modal; the
//! content sits inside its own `mouse_area` that captures presses first,
//! so clicks on the content never reach the backdrop handler.

use super::{Message, Section, State};
use crate::catalog::Item;
use crate::i18n::fluent::I18n;
use crate::images::ImageStore;
use crate::ui::carousel;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, mouse_area, scrollable::Viewport, Column, Container, Row, Scrollable, Stack, Text};
use iced::{Alignment, Element, Length};

/// Contextual data needed to render the modal.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub store: &'a ImageStore,
}

/// Renders the full-window modal overlay.
pub fn view<'a>(state: &'a State, item: &'a Item, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let card = Container::new(content(state, item, &ctx))
        .width(Length::Fixed(560.0))
        .padding(spacing::LG)
        .style(styles::card_surface);

    let centered = Container::new(mouse_area(card).on_press(Message::ContentPressed))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Alignment::Center)
        .align_y(Alignment::Center)
        .style(styles::backdrop);

    mouse_area(centered).on_press(Message::BackdropPressed).into()
}

fn content<'a>(state: &'a State, item: &'a Item, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let sections = Column::new()
        .push(snap_section(details_section(state, item, ctx)))
        .push(snap_section(reviews_section(item, i18n)))
        .push(snap_section(recommended_section(item, i18n)));

    let body = Scrollable::new(sections)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::MODAL_SECTION_HEIGHT))
        .on_scroll(|viewport: Viewport| Message::Scrolled {
            offset_y: viewport.absolute_offset().y,
        });

    let buttons = Row::new()
        .spacing(spacing::SM)
        .push(
            button(Text::new(i18n.tr("modal-close")).size(typography::BODY))
                .padding(spacing::XS)
                .style(styles::button::secondary)
                .on_press(Message::CloseRequested),
        )
        .push(iced::widget::Space::new().width(Length::Fill))
        .push(
            button(Text::new(i18n.tr("modal-buy")).size(typography::BODY))
                .padding(spacing::XS)
                .style(styles::button_primary)
                .on_press(Message::BuyPressed),
        );

    Column::new()
        .spacing(spacing::MD)
        .push(body)
        .push(section_indicator(state, i18n))
        .push(buttons)
        .into()
}

/// Wraps a section so every section occupies exactly one scroll page.
fn snap_section(content: Element<'_, Message>) -> Element<'_, Message> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::MODAL_SECTION_HEIGHT))
        .clip(true)
        .into()
}

/// The "current section" indicator driven by the scroll position.
fn section_indicator<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::MD).align_y(Alignment::Center);

    for (i, section) in Section::ALL.iter().enumerate() {
        let color = if i == state.section() {
            palette::PRIMARY_500
        } else {
            palette::GRAY_400
        };
        row = row.push(
            Text::new(i18n.tr(section.i18n_key()))
                .size(typography::CAPTION)
                .color(color),
        );
    }

    row.into()
}

fn details_section<'a>(
    state: &'a State,
    item: &'a Item,
    ctx: &ViewContext<'a>,
) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let strip = carousel::strip(
        &item.images,
        ctx.store,
        i18n.tr("carousel-empty"),
        state.carousel.index(),
        0.0,
        sizing::MODAL_IMAGE_HEIGHT,
    );

    // Explicit prev/next controls; clamped, so the buttons go inert at the
    // ends instead of wrapping.
    let mut stack = Stack::new().push(strip);
    stack = stack.push(arrow_zone("‹", state.carousel.has_previous(), Message::PreviousImage, Alignment::Start));
    stack = stack.push(arrow_zone("›", state.carousel.has_next(), Message::NextImage, Alignment::End));

    let mut tags = Row::new().spacing(spacing::XXS);
    for tag in &item.tags {
        tags = tags.push(
            Container::new(Text::new(tag.as_str()).size(typography::CAPTION))
                .padding([spacing::XXS, spacing::XS])
                .style(styles::badge(palette::GRAY_100, palette::GRAY_700)),
        );
    }

    let mut details = Column::new().spacing(spacing::XXS);
    details = details.push(
        Text::new(i18n.tr("modal-details-heading"))
            .size(typography::TITLE_SM)
            .color(palette::GRAY_900),
    );
    for detail in &item.details {
        details = details.push(
            Text::new(format!("{}: {}", detail.key, detail.value)).size(typography::BODY),
        );
    }

    Column::new()
        .spacing(spacing::SM)
        .push(stack)
        .push(Text::new(item.description.as_str()).size(typography::TITLE_MD))
        .push(
            Text::new(format!(
                "{}: {}",
                i18n.tr("modal-price"),
                i18n.tr_args("price-tag", &[("amount", format!("{:.0}", item.price))])
            ))
            .size(typography::BODY_LG),
        )
        .push(tags)
        .push(
            button(Text::new(i18n.tr("modal-chat")).size(typography::BODY))
                .padding(spacing::XS)
                .style(styles::button::secondary)
                .on_press(Message::ChatPressed),
        )
        .push(details)
        .into()
}

fn arrow_zone(
    glyph: &str,
    enabled: bool,
    message: Message,
    side: Alignment,
) -> Element<'_, Message> {
    let arrow = button(Text::new(glyph.to_string()).size(typography::TITLE_MD))
        .padding(spacing::XS)
        .style(styles::button_overlay(
            palette::WHITE,
            opacity::OVERLAY_SUBTLE,
            opacity::OVERLAY_STRONG,
        ));
    let arrow = if enabled { arrow.on_press(message) } else { arrow };

    Container::new(arrow)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::MODAL_IMAGE_HEIGHT))
        .align_x(side)
        .align_y(Alignment::Center)
        .padding(spacing::XS)
        .into()
}

fn reviews_section<'a>(item: &'a Item, i18n: &'a I18n) -> Element<'a, Message> {
    let mut column = Column::new().spacing(spacing::SM).push(
        Text::new(i18n.tr("modal-reviews-heading"))
            .size(typography::TITLE_SM)
            .color(palette::GRAY_900),
    );

    for review in &item.seller_reviews {
        column = column.push(
            Column::new()
                .spacing(spacing::XXS)
                .push(
                    Text::new(format!("{}: {}", i18n.tr("modal-reviewer"), review.reviewer))
                        .size(typography::BODY),
                )
                .push(
                    Text::new(format!("{}: {} / 5", i18n.tr("modal-rating"), review.rating))
                        .size(typography::BODY),
                )
                .push(
                    Text::new(format!("{}: {}", i18n.tr("modal-comment"), review.comment))
                        .size(typography::BODY)
                        .color(palette::GRAY_700),
                ),
        );
    }

    column.into()
}

fn recommended_section<'a>(item: &'a Item, i18n: &'a I18n) -> Element<'a, Message> {
    let mut column = Column::new().spacing(spacing::SM).push(
        Text::new(i18n.tr("modal-recommended-heading"))
            .size(typography::TITLE_SM)
            .color(palette::GRAY_900),
    );

    for entry in &item.recommended {
        column = column.push(
            Row::new()
                .spacing(spacing::SM)
                .push(Text::new(entry.description.as_str()).size(typography::BODY))
                .push(
                    Text::new(i18n.tr_args("price-tag", &[("amount", format!("{:.0}", entry.price))]))
                        .size(typography::BODY)
                        .color(palette::PRIMARY_600),
                ),
        );
    }

    column.into()
}
