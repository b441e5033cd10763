// SPDX-License-Identifier: MPL-2.0
//! Savings calculator rendering.

use super::{format_amount, Message, State, BILL_MAX, BILL_MIN, BILL_STEP};
use crate::i18n::fluent::I18n;
use crate::ui::components::{ErrorDisplay, ErrorSeverity};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, rule, slider, Column, Container, Row, Text};
use iced::{Alignment, Element, Length};

/// Contextual data needed to render the calculator.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Renders the calculator panel.
pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let mut column = Column::new()
        .spacing(spacing::LG)
        .width(Length::Fixed(720.0))
        .push(
            Text::new(i18n.tr("calc-heading"))
                .size(typography::TITLE_LG)
                .color(palette::PRIMARY_500),
        )
        .push(bill_panel(state, i18n));

    if let Some(error) = state.error() {
        column = column.push(
            ErrorDisplay::new(ErrorSeverity::Error)
                .message(i18n.tr(error.i18n_key()))
                .action(i18n.tr("calc-retry"), Message::Retry)
                .view(),
        );
    } else if state.is_loading() {
        column = column.push(
            Text::new(i18n.tr("calc-loading"))
                .size(typography::BODY)
                .color(palette::GRAY_400),
        );
    }

    column = column
        .push(results_row(state, i18n))
        .push(
            Text::new(i18n.tr("calc-system-size"))
                .size(typography::TITLE_SM)
                .color(palette::GRAY_900),
        )
        .push(size_selector(state, i18n));

    Container::new(column)
        .width(Length::Fill)
        .align_x(Alignment::Center)
        .padding(spacing::LG)
        .into()
}

/// The slider card with its mark labels.
fn bill_panel<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let mut marks = Row::new();
    let mut mark = BILL_MIN;
    while mark <= BILL_MAX {
        marks = marks.push(
            Container::new(
                Text::new(mark.to_string())
                    .size(typography::CAPTION)
                    .color(palette::GRAY_400),
            )
            .width(Length::Fill)
            .align_x(Alignment::Center),
        );
        mark += BILL_STEP;
    }

    let column = Column::new()
        .spacing(spacing::SM)
        .push(
            Text::new(i18n.tr("calc-title"))
                .size(typography::TITLE_SM)
                .color(palette::PRIMARY_500),
        )
        .push(
            Text::new(i18n.tr("calc-subtitle"))
                .size(typography::BODY)
                .color(palette::GRAY_700),
        )
        .push(rule::horizontal(1))
        .push(Text::new(i18n.tr("calc-bill-label")).size(typography::BODY_LG))
        .push(
            slider(BILL_MIN..=BILL_MAX, state.bill(), Message::BillChanged).step(BILL_STEP),
        )
        .push(marks);

    Container::new(column)
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(styles::card_surface)
        .into()
}

/// The three result cards: saving, current bill, new bill.
fn results_row<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let saving_card = amount_card(
        i18n.tr("calc-most-saving"),
        i18n.tr_args("price-tag", &[("amount", format_amount(state.most_saving()))]),
        Some(i18n.tr("calc-after-rental")),
    );

    let current_card = amount_card(
        i18n.tr_args("price-tag", &[("amount", state.bill().to_string())]),
        i18n.tr("calc-current-bill"),
        None,
    );

    let new_card = amount_card(
        i18n.tr_args("price-tag", &[("amount", format_amount(state.min_bill()))]),
        i18n.tr("calc-new-bill"),
        None,
    );

    Row::new()
        .spacing(spacing::LG)
        .push(saving_card)
        .push(current_card)
        .push(new_card)
        .into()
}

fn amount_card<'a>(
    title: String,
    subtitle: String,
    footer: Option<String>,
) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::XS)
        .align_x(Alignment::Center)
        .push(Text::new(title).size(typography::TITLE_MD))
        .push(rule::horizontal(1))
        .push(
            Text::new(subtitle)
                .size(typography::BODY)
                .color(palette::GRAY_700),
        );

    if let Some(footer) = footer {
        column = column.push(
            Text::new(footer)
                .size(typography::BODY)
                .color(palette::GRAY_400),
        );
    }

    Container::new(column)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::card_surface)
        .into()
}

/// The prev/next system-size selector.
fn size_selector<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let at_first = state.system_size_index() == 0;
    let at_last = state.system_size_index() + 1 >= super::SYSTEM_SIZES_KWP.len();

    let previous = step_button("«", !at_first, Message::PreviousSize);
    let next = step_button("»", !at_last, Message::NextSize);

    let label = Text::new(i18n.tr_args(
        "calc-system-size-unit",
        &[("size", format!("{:.2}", state.system_size_kwp()))],
    ))
    .size(typography::TITLE_MD);

    let row = Row::new()
        .spacing(spacing::LG)
        .align_y(Alignment::Center)
        .push(previous)
        .push(label)
        .push(next);

    Container::new(row)
        .padding(spacing::MD)
        .style(styles::card_surface)
        .into()
}

fn step_button(glyph: &str, enabled: bool, message: Message) -> Element<'_, Message> {
    let base = button(Text::new(glyph.to_string()).size(typography::TITLE_MD)).padding(spacing::XS);
    let styled = if enabled {
        base.style(styles::button_primary).on_press(message)
    } else {
        base.style(styles::button::disabled())
    };
    styled.into()
}
