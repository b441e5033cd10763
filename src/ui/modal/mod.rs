// SPDX-License-Identifier: MPL-2.0
//! Detail modal for a product card.
//!
//! The modal owns its visibility, its own image index (seeded from the
//! card exactly once, at open time), and a scroll-derived section
//! indicator. Buy and chat actions resolve to routes and are handed back
//! to the app as effects; the modal never navigates on its own.

mod view;

pub use view::{view, ViewContext};

use crate::catalog::Item;
use crate::routes::Route;
use crate::ui::design_tokens::sizing::MODAL_SECTION_HEIGHT;
use crate::ui::state::CarouselState;

/// Number of scroll-snapped sections in the modal body.
pub const SECTION_COUNT: usize = 3;

/// The scroll-snapped sections, in scroll order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Details,
    Reviews,
    Recommended,
}

impl Section {
    /// All sections in scroll order.
    pub const ALL: [Section; SECTION_COUNT] = [Section::Details, Section::Reviews, Section::Recommended];

    /// The section at a scroll-derived index (clamped).
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index.min(SECTION_COUNT - 1)]
    }

    /// The i18n key of the section heading.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Section::Details => "modal-details-heading",
            Section::Reviews => "modal-reviews-heading",
            Section::Recommended => "modal-recommended-heading",
        }
    }
}

/// Modal component state.
#[derive(Debug, Clone)]
pub struct State {
    visible: bool,
    /// The modal's own image track, independent of the card's.
    pub carousel: CarouselState,
    section: usize,
}

impl State {
    /// Creates a closed modal over `image_count` images.
    #[must_use]
    pub fn new(image_count: usize) -> Self {
        Self {
            visible: false,
            carousel: CarouselState::new(image_count),
            section: 0,
        }
    }

    /// Opens the modal, seeding its image index from the card.
    ///
    /// This is the only coupling between the two indices; navigation in
    /// either view afterwards leaves the other untouched.
    pub fn open(&mut self, seed_index: usize) {
        self.visible = true;
        self.carousel.set(seed_index);
        self.section = 0;
    }

    /// Closes the modal.
    pub fn close(&mut self) {
        self.visible = false;
    }

    /// Recomputes the section indicator from the scroll position.
    ///
    /// Purely observational: it drives the indicator, never navigation or
    /// data fetching.
    pub fn on_scroll(&mut self, scroll_top: f32, section_height: f32) {
        if section_height <= 0.0 {
            return;
        }
        self.section = ((scroll_top / section_height).round() as usize).min(SECTION_COUNT - 1);
    }

    /// Whether the modal is shown.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Scroll-derived index of the active section.
    #[must_use]
    pub fn section(&self) -> usize {
        self.section
    }
}

/// Messages emitted by the modal view.
#[derive(Debug, Clone)]
pub enum Message {
    /// The explicit close control.
    CloseRequested,
    /// A press on the dimmed backdrop outside the content.
    BackdropPressed,
    /// A press inside the content; captured so it never reaches the
    /// backdrop handler.
    ContentPressed,
    PreviousImage,
    NextImage,
    /// The section scrollable moved.
    Scrolled { offset_y: f32 },
    BuyPressed,
    ChatPressed,
}

/// Effects the owning card propagates to the app.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Navigate(Route),
}

impl State {
    /// Processes a modal message against the item it presents.
    pub fn update(&mut self, item: &Item, message: Message) -> Effect {
        match message {
            Message::CloseRequested | Message::BackdropPressed => {
                self.close();
                Effect::None
            }
            Message::ContentPressed => Effect::None,
            Message::PreviousImage => {
                self.carousel.previous();
                Effect::None
            }
            Message::NextImage => {
                self.carousel.next();
                Effect::None
            }
            Message::Scrolled { offset_y } => {
                self.on_scroll(offset_y, MODAL_SECTION_HEIGHT);
                Effect::None
            }
            Message::BuyPressed => Effect::Navigate(Route::Buy {
                destination: item.buy_destination.clone(),
            }),
            Message::ChatPressed => Effect::Navigate(Route::Chat {
                seller: item.seller.id.clone(),
                item: item.id.clone(),
            }),
        }
    }
}
