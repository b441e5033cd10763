// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`calculator`] - Solar savings calculator with the bill slider
//! - [`settings`] - Application preferences and configuration
//!
//! # Components
//!
//! - [`card`] - Product card with its swipe gesture and detail modal
//! - [`modal`] - The detail modal (own image index, scroll sections)
//! - [`carousel`] - Carousel rendering shared by card and modal
//! - [`navbar`] - Navigation bar with screen links
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Reusable interaction state (swipe, press-hold, carousel, breakpoint)
//! - [`components`] - Reusable UI components (error display)
//! - [`widgets`] - Custom Iced widgets (carousel track)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod calculator;
pub mod card;
pub mod carousel;
pub mod components;
pub mod design_tokens;
pub mod modal;
pub mod navbar;
pub mod settings;
pub mod state;
pub mod styles;
pub mod widgets;
