// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! This module contains the interaction state logic separated from the
//! card and app structs, following the principle of separation of
//! concerns.

pub mod carousel;
pub mod gesture;
pub mod press_hold;
pub mod viewport;

// Re-export commonly used types for convenience
pub use carousel::CarouselState;
pub use gesture::{SwipeTracker, SWIPE_THRESHOLD};
pub use press_hold::{PressHold, DEFAULT_HOLD};
pub use viewport::{Breakpoint, LARGE_SCREEN_BREAKPOINT};
