// SPDX-License-Identifier: MPL-2.0
//! Product card component.
//!
//! A card owns the compact storefront view of one listing: the image
//! strip with its swipe gesture, the open trigger for the detail modal,
//! and the modal itself. The card carousel and the modal carousel are
//! independent tracks; opening the modal copies the card index across
//! exactly once.
//!
//! Two open triggers exist, matching the two card variants the product
//! ships: the detailed card opens on a tap of the card body, the simpler
//! card opens after a sustained press anywhere on it.

mod view;

pub use view::{view, ViewContext};

use crate::catalog::Item;
use crate::routes::Route;
use crate::ui::modal;
use crate::ui::state::{CarouselState, PressHold, SwipeTracker, SWIPE_THRESHOLD};
use std::time::{Duration, Instant};

/// How a card opens its detail modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenTrigger {
    /// A tap on the card body opens the modal.
    Tap,
    /// A sustained press opens the modal; taps do nothing.
    PressHold,
}

/// Messages emitted by the card view.
#[derive(Debug, Clone)]
pub enum Message {
    /// Pointer moved over the image strip (x in strip coordinates).
    PointerMoved(f32),
    StripPressed,
    StripReleased,
    StripExited,
    BodyPressed,
    BodyReleased,
    BodyExited,
    /// Explicit controls, shown in large-screen mode.
    PreviousImage,
    NextImage,
    SellerPressed,
    Modal(modal::Message),
}

/// Effects the app resolves after a card update.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Navigate(Route),
}

/// Complete card component state.
#[derive(Debug, Clone)]
pub struct State {
    item: Item,
    /// The compact view's image track.
    pub carousel: CarouselState,
    swipe: SwipeTracker,
    press_hold: PressHold,
    trigger: OpenTrigger,
    pub modal: modal::State,
    /// Last pointer x seen over the strip; the swipe anchor on press.
    cursor_x: Option<f32>,
    large_screen: bool,
}

impl State {
    /// Creates a card for one catalog item.
    #[must_use]
    pub fn new(item: Item, trigger: OpenTrigger, hold: Duration) -> Self {
        let image_count = item.images.len();
        Self {
            item,
            carousel: CarouselState::new(image_count),
            swipe: SwipeTracker::new(),
            press_hold: PressHold::new(hold),
            trigger,
            modal: modal::State::new(image_count),
            cursor_x: None,
            large_screen: false,
        }
    }

    /// The listing this card presents.
    #[must_use]
    pub fn item(&self) -> &Item {
        &self.item
    }

    /// The configured open trigger.
    #[must_use]
    pub fn trigger(&self) -> OpenTrigger {
        self.trigger
    }

    /// Live drag offset for the strip renderer.
    #[must_use]
    pub fn translate_x(&self) -> f32 {
        self.swipe.translate_x()
    }

    /// Whether a strip drag is active (drives the cursor shape).
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.swipe.is_dragging()
    }

    /// Whether the viewport is currently in large-screen mode.
    #[must_use]
    pub fn is_large_screen(&self) -> bool {
        self.large_screen
    }

    /// Whether a press is waiting on the hold timer.
    ///
    /// The app keeps its tick subscription alive only while some card
    /// reports a pending press.
    #[must_use]
    pub fn has_pending_press(&self) -> bool {
        self.press_hold.is_pending()
    }

    /// Re-evaluates large-screen mode from a resize event.
    pub fn layout_changed(&mut self, is_large: bool) {
        self.large_screen = is_large;
    }

    /// Processes one message; `now` anchors press timing.
    pub fn update(&mut self, message: Message, now: Instant) -> Effect {
        match message {
            Message::PointerMoved(x) => {
                self.cursor_x = Some(x);
                self.swipe.translate_to(x);
                Effect::None
            }
            Message::StripPressed => {
                if let Some(x) = self.cursor_x {
                    self.swipe.begin(x, self.large_screen);
                }
                if self.trigger == OpenTrigger::PressHold {
                    self.press_hold.press(now);
                }
                Effect::None
            }
            Message::StripReleased => {
                self.press_hold.release();
                self.commit_swipe();
                Effect::None
            }
            Message::StripExited => {
                // Leaving the strip while down counts as a release.
                self.cursor_x = None;
                self.press_hold.release();
                self.commit_swipe();
                Effect::None
            }
            Message::BodyPressed => {
                if self.trigger == OpenTrigger::PressHold {
                    self.press_hold.press(now);
                }
                Effect::None
            }
            Message::BodyReleased => {
                match self.trigger {
                    OpenTrigger::Tap => self.open_modal(),
                    OpenTrigger::PressHold => self.press_hold.release(),
                }
                Effect::None
            }
            Message::BodyExited => {
                self.press_hold.release();
                Effect::None
            }
            Message::PreviousImage => {
                self.carousel.previous();
                Effect::None
            }
            Message::NextImage => {
                self.carousel.next();
                Effect::None
            }
            Message::SellerPressed => Effect::Navigate(Route::Profile {
                seller: self.item.seller.id.clone(),
            }),
            Message::Modal(message) => match self.modal.update(&self.item, message) {
                modal::Effect::None => Effect::None,
                modal::Effect::Navigate(route) => Effect::Navigate(route),
            },
        }
    }

    /// Advances the hold timer; returns true when the modal just opened.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.press_hold.fire_if_elapsed(now) {
            self.open_modal();
            true
        } else {
            false
        }
    }

    fn open_modal(&mut self) {
        self.modal.open(self.carousel.index());
    }

    fn commit_swipe(&mut self) {
        let committed = self
            .swipe
            .end(self.carousel.index(), self.carousel.len(), SWIPE_THRESHOLD);
        self.carousel.set(committed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{self, Item};
    use crate::ui::state::DEFAULT_HOLD;

    fn sample_item() -> Item {
        catalog::load_sample().expect("sample catalog must parse").items[0].clone()
    }

    fn tap_card() -> State {
        State::new(sample_item(), OpenTrigger::Tap, DEFAULT_HOLD)
    }

    fn hold_card() -> State {
        State::new(sample_item(), OpenTrigger::PressHold, DEFAULT_HOLD)
    }

    fn swipe(card: &mut State, from: f32, to: f32, now: Instant) {
        card.update(Message::PointerMoved(from), now);
        card.update(Message::StripPressed, now);
        card.update(Message::PointerMoved(to), now);
        card.update(Message::StripReleased, now);
    }

    #[test]
    fn left_swipe_advances_the_card_index() {
        let mut card = tap_card();
        card.carousel.set(2);

        swipe(&mut card, 200.0, 120.0, Instant::now()); // net -80
        assert_eq!(card.carousel.index(), 3);
        assert_eq!(card.translate_x(), 0.0);
    }

    #[test]
    fn left_swipe_at_last_image_clamps() {
        let mut card = tap_card();
        card.carousel.set(6);

        swipe(&mut card, 200.0, 120.0, Instant::now());
        assert_eq!(card.carousel.index(), 6);
    }

    #[test]
    fn short_swipe_keeps_the_index() {
        let mut card = tap_card();
        card.carousel.set(2);

        swipe(&mut card, 200.0, 170.0, Instant::now()); // net -30
        assert_eq!(card.carousel.index(), 2);
    }

    #[test]
    fn large_screen_mode_disables_dragging() {
        let mut card = tap_card();
        card.layout_changed(true);
        card.carousel.set(2);

        swipe(&mut card, 200.0, 80.0, Instant::now());
        assert_eq!(card.carousel.index(), 2);

        // Explicit controls still navigate.
        card.update(Message::NextImage, Instant::now());
        assert_eq!(card.carousel.index(), 3);
        card.update(Message::PreviousImage, Instant::now());
        assert_eq!(card.carousel.index(), 2);
    }

    #[test]
    fn leaving_the_strip_commits_the_drag() {
        let mut card = tap_card();
        card.carousel.set(1);
        let now = Instant::now();

        card.update(Message::PointerMoved(300.0), now);
        card.update(Message::StripPressed, now);
        card.update(Message::PointerMoved(380.0), now); // net +80
        card.update(Message::StripExited, now);

        assert_eq!(card.carousel.index(), 0);
        assert!(!card.is_dragging());
    }

    #[test]
    fn tap_on_the_body_opens_the_modal_seeded_from_the_card() {
        let mut card = tap_card();
        card.carousel.set(4);

        card.update(Message::BodyReleased, Instant::now());
        assert!(card.modal.is_visible());
        assert_eq!(card.modal.carousel.index(), 4);
    }

    #[test]
    fn card_and_modal_indices_diverge_after_open() {
        let mut card = tap_card();
        card.carousel.set(2);
        let now = Instant::now();

        card.update(Message::BodyReleased, now);
        assert_eq!(card.modal.carousel.index(), 2);

        // Card swipes on; the modal does not follow.
        swipe(&mut card, 200.0, 100.0, now);
        assert_eq!(card.carousel.index(), 3);
        assert_eq!(card.modal.carousel.index(), 2);

        // Modal navigates; the card does not follow.
        card.update(Message::Modal(modal::Message::NextImage), now);
        assert_eq!(card.modal.carousel.index(), 3);
        assert_eq!(card.carousel.index(), 3);

        card.update(Message::Modal(modal::Message::NextImage), now);
        assert_eq!(card.modal.carousel.index(), 4);
        assert_eq!(card.carousel.index(), 3);
    }

    #[test]
    fn sustained_press_opens_the_modal_exactly_once() {
        let mut card = hold_card();
        let t0 = Instant::now();

        card.update(Message::BodyPressed, t0);
        assert!(card.has_pending_press());

        assert!(!card.tick(t0 + Duration::from_millis(1900)));
        assert!(!card.modal.is_visible());

        assert!(card.tick(t0 + Duration::from_millis(2100)));
        assert!(card.modal.is_visible());

        // A release after the fire must not close it.
        card.update(Message::BodyReleased, t0 + Duration::from_millis(2100));
        assert!(card.modal.is_visible());
        assert!(!card.tick(t0 + Duration::from_millis(4000)));
    }

    #[test]
    fn quick_press_and_release_does_not_open() {
        let mut card = hold_card();
        let t0 = Instant::now();

        card.update(Message::BodyPressed, t0);
        card.update(Message::BodyReleased, t0 + Duration::from_millis(300));

        assert!(!card.tick(t0 + Duration::from_millis(3000)));
        assert!(!card.modal.is_visible());
    }

    #[test]
    fn pointer_leaving_while_down_cancels_the_hold() {
        let mut card = hold_card();
        let t0 = Instant::now();

        card.update(Message::BodyPressed, t0);
        card.update(Message::BodyExited, t0 + Duration::from_millis(500));

        assert!(!card.tick(t0 + Duration::from_millis(3000)));
        assert!(!card.modal.is_visible());
    }

    #[test]
    fn taps_do_nothing_on_the_press_hold_variant() {
        let mut card = hold_card();
        card.update(Message::BodyReleased, Instant::now());
        assert!(!card.modal.is_visible());
    }

    #[test]
    fn seller_press_navigates_to_the_profile() {
        let mut card = tap_card();
        let seller = card.item().seller.id.clone();

        match card.update(Message::SellerPressed, Instant::now()) {
            Effect::Navigate(Route::Profile { seller: s }) => assert_eq!(s, seller),
            other => panic!("expected profile navigation, got {:?}", other),
        }
    }

    #[test]
    fn modal_effects_bubble_up_through_the_card() {
        let mut card = tap_card();
        card.update(Message::BodyReleased, Instant::now());

        match card.update(
            Message::Modal(modal::Message::BuyPressed),
            Instant::now(),
        ) {
            Effect::Navigate(Route::Buy { destination }) => {
                assert_eq!(destination, card.item().buy_destination);
            }
            other => panic!("expected buy navigation, got {:?}", other),
        }
    }
}
