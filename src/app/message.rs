// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::ui::calculator;
use crate::ui::card;
use crate::ui::navbar;
use iced::widget::image;
use iced::Size;
use std::time::Instant;
use unic_langid::LanguageIdentifier;

/// Values collected from the command line before the app boots.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Locale override (`--lang`).
    pub lang: Option<String>,
    /// Optional catalog file; the embedded sample is used otherwise.
    pub catalog_path: Option<String>,
}

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// A message for the card at `index` in the storefront grid.
    Card {
        index: usize,
        message: card::Message,
    },
    Calculator(calculator::Message),
    Navbar(navbar::Message),
    /// The window was resized; re-evaluates large-screen mode.
    WindowResized(Size),
    /// Periodic tick driving pending press-hold timers.
    Tick(Instant),
    /// A catalog image source resolved (or failed to).
    ImageFetched(Result<(String, image::Handle), Error>),
    LanguageSelected(LanguageIdentifier),
    BackendUrlEdited(String),
    SaveSettings,
}
