// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the storefront,
//! calculator and settings views.
//!
//! The `App` struct wires together the catalog, the card components, the
//! savings calculator and localization, and translates component effects
//! into side effects like config persistence or router navigation. Policy
//! decisions (window sizing, catalog fallback, persistence format) stay
//! close to the main update loop so user-facing behavior is easy to audit.

mod message;
mod screen;
mod subscription;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::api::SavingsClient;
use crate::catalog::{self, Catalog};
use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::images::{self, ImageStore};
use crate::routes::{LogRouter, Router};
use crate::ui::calculator;
use crate::ui::card::{self, OpenTrigger};
use crate::ui::navbar;
use crate::ui::state::Breakpoint;
use iced::{window, Element, Subscription, Task, Theme};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use std::time::Instant;

/// Root Iced application state bridging the UI components, localization,
/// and persisted preferences.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    config: Config,
    breakpoint: Breakpoint,
    cards: Vec<card::State>,
    calculator: calculator::State,
    images: ImageStore,
    router: Box<dyn Router>,
    /// Settings screen draft for the backend URL field.
    backend_draft: String,
    settings_saved: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("cards", &self.cards.len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 1200;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 600;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    let icon = crate::icon::load_window_icon();

    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Builds the initial state and the startup tasks: the first savings
    /// quote and one image fetch per unique catalog source.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang.clone(), &config);
        let catalog = load_catalog(flags.catalog_path.as_deref());

        let hold = config.hold();
        let cards: Vec<card::State> = catalog
            .items
            .into_iter()
            .map(|item| {
                let trigger = if item.compact {
                    OpenTrigger::PressHold
                } else {
                    OpenTrigger::Tap
                };
                card::State::new(item, trigger, hold)
            })
            .collect();

        let mut calculator = calculator::State::new(SavingsClient::new(config.backend_url()));
        let mut tasks = vec![calculator.boot().map(Message::Calculator)];

        let mut seen = HashSet::new();
        for card in &cards {
            for source in &card.item().images {
                if seen.insert(source.clone()) {
                    tasks.push(Task::perform(
                        images::fetch(source.clone()),
                        Message::ImageFetched,
                    ));
                }
            }
        }

        let backend_draft = config.backend_url();

        (
            Self {
                i18n,
                screen: Screen::Storefront,
                config,
                breakpoint: Breakpoint::new(),
                cards,
                calculator,
                images: ImageStore::new(),
                router: Box::new(LogRouter),
                backend_draft,
                settings_saved: false,
            },
            Task::batch(tasks),
        )
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("app-title");
        match self.screen {
            Screen::Storefront => app_name,
            Screen::Calculator => format!("{} — {}", app_name, self.i18n.tr("nav-calculator")),
            Screen::Settings => format!("{} — {}", app_name, self.i18n.tr("nav-settings")),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        let press_pending = self.cards.iter().any(card::State::has_pending_press);

        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(press_pending),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Card { index, message } => {
                if let Some(card) = self.cards.get_mut(index) {
                    match card.update(message, Instant::now()) {
                        card::Effect::None => {}
                        card::Effect::Navigate(route) => self.router.open(&route),
                    }
                }
                Task::none()
            }
            Message::Calculator(message) => {
                self.calculator.update(message).map(Message::Calculator)
            }
            Message::Navbar(message) => {
                let navbar::Event::SwitchTo(screen) = navbar::update(message);
                self.screen = screen;
                self.settings_saved = false;
                Task::none()
            }
            Message::WindowResized(size) => {
                // The breakpoint is re-evaluated on every resize and pushed
                // to every mounted card.
                self.breakpoint.update(size.width);
                let is_large = self.breakpoint.is_large();
                for card in &mut self.cards {
                    card.layout_changed(is_large);
                }
                Task::none()
            }
            Message::Tick(now) => {
                for card in &mut self.cards {
                    card.tick(now);
                }
                Task::none()
            }
            Message::ImageFetched(Ok((source, handle))) => {
                self.images.insert(source, handle);
                Task::none()
            }
            Message::ImageFetched(Err(error)) => {
                eprintln!("Failed to load catalog image: {}", error);
                Task::none()
            }
            Message::LanguageSelected(locale) => {
                self.i18n.set_locale(locale.clone());
                self.config.language = Some(locale.to_string());
                if let Err(error) = config::save(&self.config) {
                    eprintln!("Failed to save settings: {}", error);
                }
                self.settings_saved = true;
                Task::none()
            }
            Message::BackendUrlEdited(value) => {
                self.backend_draft = value;
                self.settings_saved = false;
                Task::none()
            }
            Message::SaveSettings => {
                let trimmed = self.backend_draft.trim();
                self.config.backend_url = if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                };
                if let Err(error) = config::save(&self.config) {
                    eprintln!("Failed to save settings: {}", error);
                }
                self.settings_saved = true;

                // The calculator talks to the newly configured backend from
                // here on; refresh its quote right away.
                let mut calculator =
                    calculator::State::new(SavingsClient::new(self.config.backend_url()));
                let task = calculator.boot().map(Message::Calculator);
                self.calculator = calculator;
                task
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    /// Settings screen draft for the backend URL field.
    #[must_use]
    pub fn backend_draft(&self) -> &str {
        &self.backend_draft
    }

    /// Whether the settings were persisted since the last edit.
    #[must_use]
    pub fn settings_saved(&self) -> bool {
        self.settings_saved
    }
}

/// Loads the catalog from the CLI path, falling back to the embedded
/// sample; an unreadable catalog degrades to an empty storefront.
fn load_catalog(path: Option<&str>) -> Catalog {
    let loaded = match path {
        Some(path) => catalog::load_from_path(Path::new(path)),
        None => catalog::load_sample(),
    };

    match loaded {
        Ok(catalog) => catalog,
        Err(error) => {
            eprintln!("Failed to load catalog: {}", error);
            Catalog::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::modal;
    use std::time::Duration;

    fn booted() -> App {
        App::new(Flags::default()).0
    }

    #[test]
    fn new_app_builds_a_card_per_sample_item() {
        let app = booted();
        let sample = catalog::load_sample().expect("sample must parse");

        assert_eq!(app.cards.len(), sample.items.len());
        assert_eq!(app.screen, Screen::Storefront);
    }

    #[test]
    fn compact_items_use_the_press_hold_variant() {
        let app = booted();

        let triggers: Vec<OpenTrigger> =
            app.cards.iter().map(|card| card.trigger()).collect();
        assert!(triggers.contains(&OpenTrigger::PressHold));
        assert!(triggers.contains(&OpenTrigger::Tap));
    }

    #[test]
    fn resize_pushes_the_breakpoint_to_every_card() {
        let mut app = booted();

        let _ = app.update(Message::WindowResized(iced::Size::new(1440.0, 900.0)));
        assert!(app.cards.iter().all(card::State::is_large_screen));

        let _ = app.update(Message::WindowResized(iced::Size::new(800.0, 900.0)));
        assert!(app.cards.iter().all(|card| !card.is_large_screen()));
    }

    #[test]
    fn tick_fires_pending_press_holds() {
        let mut app = booted();
        let compact_index = app
            .cards
            .iter()
            .position(|card| card.trigger() == OpenTrigger::PressHold)
            .expect("sample catalog has a compact item");

        let _ = app.update(Message::Card {
            index: compact_index,
            message: card::Message::BodyPressed,
        });
        assert!(app.cards[compact_index].has_pending_press());

        let _ = app.update(Message::Tick(Instant::now() + Duration::from_millis(2100)));
        assert!(app.cards[compact_index].modal.is_visible());
    }

    #[test]
    fn navbar_events_switch_screens() {
        let mut app = booted();

        let _ = app.update(Message::Navbar(navbar::Message::OpenCalculator));
        assert_eq!(app.screen, Screen::Calculator);

        let _ = app.update(Message::Navbar(navbar::Message::OpenStorefront));
        assert_eq!(app.screen, Screen::Storefront);
    }

    #[test]
    fn fetched_images_land_in_the_store() {
        let mut app = booted();
        let handle = iced::widget::image::Handle::from_rgba(1, 1, vec![0, 0, 0, 255]);

        let _ = app.update(Message::ImageFetched(Ok((
            "assets/catalog/images/pv-450-front.jpg".to_string(),
            handle,
        ))));

        assert!(app
            .images
            .get("assets/catalog/images/pv-450-front.jpg")
            .is_some());
    }

    #[test]
    fn modal_messages_reach_the_right_card() {
        let mut app = booted();

        let _ = app.update(Message::Card {
            index: 0,
            message: card::Message::BodyReleased,
        });
        assert!(app.cards[0].modal.is_visible());

        let _ = app.update(Message::Card {
            index: 0,
            message: card::Message::Modal(modal::Message::CloseRequested),
        });
        assert!(!app.cards[0].modal.is_visible());
    }

    #[test]
    fn backend_url_draft_saves_into_config() {
        let mut app = booted();

        let _ = app.update(Message::BackendUrlEdited(
            "https://api.sunwise.example".to_string(),
        ));
        let _ = app.update(Message::SaveSettings);

        assert_eq!(
            app.config.backend_url.as_deref(),
            Some("https://api.sunwise.example")
        );
        assert!(app.settings_saved);
    }
}
