// SPDX-License-Identifier: MPL-2.0
//! Carousel rendering shared by the card strip and the detail modal.
//!
//! The state half lives in [`crate::ui::state::carousel`]; this module
//! renders a [`CarouselState`] plus the live drag offset as a sliding
//! track, with a dot indicator underneath. An empty image list degrades
//! to a placeholder pane rather than an empty track.

use crate::images::ImageStore;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::widgets::carousel_track;
use iced::widget::{container, image::Image, Container, Row, Text};
use iced::{Alignment, Background, Border, Element, Length, Theme};

/// Renders the sliding image strip for one carousel.
///
/// `translate_x` is the live drag offset; it is zero whenever no drag is
/// in progress, which lets the strip rest exactly on the committed index.
pub fn strip<'a, Message: 'a>(
    images: &'a [String],
    store: &'a ImageStore,
    empty_label: String,
    index: usize,
    translate_x: f32,
    height: f32,
) -> Element<'a, Message> {
    if images.is_empty() {
        return placeholder(empty_label, height);
    }

    let slides = images.iter().map(|source| slide(store, source, height));
    carousel_track(slides, index, translate_x, height).into()
}

/// One slide: the resolved image, or a placeholder while it loads.
fn slide<'a, Message: 'a>(
    store: &'a ImageStore,
    source: &'a str,
    height: f32,
) -> Element<'a, Message> {
    match store.get(source) {
        Some(handle) => Image::new(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .content_fit(iced::ContentFit::Cover)
            .into(),
        None => placeholder(String::new(), height),
    }
}

fn placeholder<'a, Message: 'a>(label: String, height: f32) -> Element<'a, Message> {
    Container::new(Text::new(label).size(typography::BODY))
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .align_x(Alignment::Center)
        .align_y(Alignment::Center)
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(palette::GRAY_100)),
            text_color: Some(palette::GRAY_400),
            border: Border::default(),
            ..Default::default()
        })
        .into()
}

/// Dot indicator marking the committed index.
pub fn dots<'a, Message: 'a>(len: usize, index: usize) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::XXS).align_y(Alignment::Center);

    for i in 0..len {
        let color = if i == index {
            palette::PRIMARY_500
        } else {
            palette::GRAY_200
        };
        row = row.push(Text::new("●").size(typography::CAPTION).color(color));
    }

    row.into()
}
