// SPDX-License-Identifier: MPL-2.0
use std::time::{Duration, Instant};
use sunwise::catalog;
use sunwise::config::{self, Config};
use sunwise::i18n::fluent::I18n;
use sunwise::routes::Route;
use sunwise::ui::card::{self, OpenTrigger};
use sunwise::ui::modal;
use sunwise::ui::state::DEFAULT_HOLD;
use tempfile::tempdir;

fn seven_image_card(trigger: OpenTrigger) -> card::State {
    let item = catalog::load_sample()
        .expect("sample catalog must parse")
        .items
        .into_iter()
        .find(|item| item.images.len() == 7)
        .expect("sample catalog has a seven-image listing");
    card::State::new(item, trigger, DEFAULT_HOLD)
}

fn swipe(card: &mut card::State, from: f32, to: f32) {
    let now = Instant::now();
    card.update(card::Message::PointerMoved(from), now);
    card.update(card::Message::StripPressed, now);
    card.update(card::Message::PointerMoved(to), now);
    card.update(card::Message::StripReleased, now);
}

#[test]
fn test_language_change_via_config() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        language: Some("en-US".to_string()),
        backend_url: None,
        hold_ms: Some(config::DEFAULT_HOLD_MS),
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    // Load i18n with initial config
    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to ms
    let malay_config = Config {
        language: Some("ms".to_string()),
        backend_url: None,
        hold_ms: Some(config::DEFAULT_HOLD_MS),
    };
    config::save_to_path(&malay_config, &temp_config_file_path)
        .expect("Failed to write malay config file");

    // Load i18n with malay config
    let loaded_malay_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load malay config from path");
    let i18n_ms = I18n::new(None, &loaded_malay_config);
    assert_eq!(i18n_ms.current_locale().to_string(), "ms");

    // Clean up temporary directory
    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_swipe_then_modal_journey() {
    let mut card = seven_image_card(OpenTrigger::Tap);
    card.carousel.set(2);

    // A left swipe of -80 at index 2 lands on 3.
    swipe(&mut card, 200.0, 120.0);
    assert_eq!(card.carousel.index(), 3);

    // A below-threshold wiggle changes nothing.
    swipe(&mut card, 200.0, 170.0);
    assert_eq!(card.carousel.index(), 3);

    // Tapping the body opens the modal seeded from the card index.
    card.update(card::Message::BodyReleased, Instant::now());
    assert!(card.modal.is_visible());
    assert_eq!(card.modal.carousel.index(), 3);

    // The two indices now diverge: the modal steps forward, the card
    // swipes forward, and neither follows the other.
    card.update(
        card::Message::Modal(modal::Message::NextImage),
        Instant::now(),
    );
    swipe(&mut card, 200.0, 100.0);
    assert_eq!(card.modal.carousel.index(), 4);
    assert_eq!(card.carousel.index(), 4);

    swipe(&mut card, 200.0, 100.0);
    assert_eq!(card.carousel.index(), 5);
    assert_eq!(card.modal.carousel.index(), 4);

    // Scrolling the modal body moves the section indicator only.
    card.update(
        card::Message::Modal(modal::Message::Scrolled { offset_y: 700.0 }),
        Instant::now(),
    );
    assert_eq!(card.modal.section(), 2);
    assert_eq!(card.modal.carousel.index(), 4);

    // Chat resolves to the encoded route without touching modal state.
    match card.update(
        card::Message::Modal(modal::Message::ChatPressed),
        Instant::now(),
    ) {
        card::Effect::Navigate(route @ Route::Chat { .. }) => {
            let path = route.to_path();
            assert!(path.starts_with("/chat?seller="));
            assert!(path.ends_with("&action=chat"));
        }
        other => panic!("expected chat navigation, got {:?}", other),
    }
    assert!(card.modal.is_visible());

    // The backdrop closes it; a re-open re-seeds from the card.
    card.update(
        card::Message::Modal(modal::Message::BackdropPressed),
        Instant::now(),
    );
    assert!(!card.modal.is_visible());

    card.update(card::Message::BodyReleased, Instant::now());
    assert_eq!(card.modal.carousel.index(), 5);
}

#[test]
fn test_swipe_clamps_at_the_last_image() {
    let mut card = seven_image_card(OpenTrigger::Tap);
    card.carousel.set(6);

    swipe(&mut card, 200.0, 120.0);
    assert_eq!(card.carousel.index(), 6);
}

#[test]
fn test_press_hold_journey() {
    let mut card = seven_image_card(OpenTrigger::PressHold);
    let t0 = Instant::now();

    // A quick press-and-release is not a hold.
    card.update(card::Message::BodyPressed, t0);
    card.update(card::Message::BodyReleased, t0 + Duration::from_millis(400));
    assert!(!card.tick(t0 + Duration::from_millis(3000)));
    assert!(!card.modal.is_visible());

    // A sustained press opens the modal after the hold duration, and the
    // release afterwards does not close it.
    let t1 = t0 + Duration::from_millis(5000);
    card.update(card::Message::BodyPressed, t1);
    assert!(card.tick(t1 + Duration::from_millis(2100)));
    assert!(card.modal.is_visible());

    card.update(card::Message::BodyReleased, t1 + Duration::from_millis(2100));
    assert!(card.modal.is_visible());
}
