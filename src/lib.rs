// SPDX-License-Identifier: MPL-2.0
//! `sunwise` is a solar marketplace storefront built with the Iced GUI framework.
//!
//! It renders a grid of product cards with swipeable image carousels and a
//! press-hold / tap detail modal, alongside a solar savings calculator that
//! quotes monthly savings from a backend. It demonstrates
//! internationalization with Fluent, user preference management, and
//! modular UI design.

#![doc(html_root_url = "https://docs.rs/sunwise/0.2.0")]

pub mod api;
pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod images;
pub mod routes;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
