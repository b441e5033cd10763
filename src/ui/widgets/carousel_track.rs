// SPDX-License-Identifier: MPL-2.0
//! A horizontally sliding track of equally sized slides.
//!
//! The track lays every slide out side by side at the track's own width
//! and shifts the whole strip by the display offset: the committed index
//! positions the strip, and the live drag offset is added on top. Drawing
//! is clipped to the track bounds, so only the current slide (and, mid
//! drag, a sliver of its neighbor) is visible.

use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::renderer;
use iced::advanced::widget::{self, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{Element, Event, Length, Point, Rectangle, Size};

/// Computes the horizontal offset of the whole strip.
///
/// The committed `index` shifts the strip left by whole slide widths; the
/// live `translate_x` is additive while a drag is in progress and goes
/// back to zero once the drag commits.
#[must_use]
pub fn display_offset(index: usize, translate_x: f32, slide_width: f32) -> f32 {
    -(index as f32 * slide_width) + translate_x
}

/// Widget rendering one visible slide of a larger strip.
pub struct CarouselTrack<'a, Message, Theme, Renderer> {
    slides: Vec<Element<'a, Message, Theme, Renderer>>,
    index: usize,
    translate_x: f32,
    height: f32,
}

impl<'a, Message, Theme, Renderer> CarouselTrack<'a, Message, Theme, Renderer> {
    /// Creates a track over the given slides.
    pub fn new(
        slides: impl IntoIterator<Item = Element<'a, Message, Theme, Renderer>>,
        index: usize,
        translate_x: f32,
        height: f32,
    ) -> Self {
        Self {
            slides: slides.into_iter().collect(),
            index,
            translate_x,
            height,
        }
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for CarouselTrack<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn size(&self) -> Size<Length> {
        Size {
            width: Length::Fill,
            height: Length::Fixed(self.height),
        }
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let size = limits.resolve(Length::Fill, Length::Fixed(self.height), Size::ZERO);
        let slide_limits = layout::Limits::new(size, size);
        let offset = display_offset(self.index, self.translate_x, size.width);

        let children = self
            .slides
            .iter_mut()
            .zip(tree.children.iter_mut())
            .enumerate()
            .map(|(i, (slide, slide_tree))| {
                slide
                    .as_widget_mut()
                    .layout(slide_tree, renderer, &slide_limits)
                    .move_to(Point::new(offset + i as f32 * size.width, 0.0))
            })
            .collect();

        layout::Node::with_children(size, children)
    }

    fn children(&self) -> Vec<widget::Tree> {
        self.slides.iter().map(widget::Tree::new).collect()
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&self.slides);
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();

        renderer.with_layer(bounds, |renderer| {
            for ((slide, slide_tree), slide_layout) in self
                .slides
                .iter()
                .zip(tree.children.iter())
                .zip(layout.children())
            {
                // Off-strip slides are fully clipped; skip them.
                if slide_layout.bounds().intersects(&bounds) {
                    slide.as_widget().draw(
                        slide_tree,
                        renderer,
                        theme,
                        style,
                        slide_layout,
                        cursor,
                        &bounds,
                    );
                }
            }
        });
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        for ((slide, slide_tree), slide_layout) in self
            .slides
            .iter_mut()
            .zip(tree.children.iter_mut())
            .zip(layout.children())
        {
            slide.as_widget_mut().update(
                slide_tree,
                event,
                slide_layout,
                cursor,
                renderer,
                clipboard,
                shell,
                viewport,
            );
        }
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        self.slides
            .iter()
            .zip(tree.children.iter())
            .zip(layout.children())
            .filter(|(_, slide_layout)| cursor.is_over(slide_layout.bounds()))
            .map(|((slide, slide_tree), slide_layout)| {
                slide
                    .as_widget()
                    .mouse_interaction(slide_tree, slide_layout, cursor, viewport, renderer)
            })
            .next()
            .unwrap_or_default()
    }
}

impl<'a, Message, Theme, Renderer> From<CarouselTrack<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(track: CarouselTrack<'a, Message, Theme, Renderer>) -> Self {
        Self::new(track)
    }
}

/// Helper function to create a carousel track.
pub fn carousel_track<'a, Message, Theme, Renderer>(
    slides: impl IntoIterator<Item = Element<'a, Message, Theme, Renderer>>,
    index: usize,
    translate_x: f32,
    height: f32,
) -> CarouselTrack<'a, Message, Theme, Renderer> {
    CarouselTrack::new(slides, index, translate_x, height)
}
