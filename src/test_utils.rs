// SPDX-License-Identifier: MPL-2.0
//! Test helpers shared across unit tests.
//!
//! Re-exports the `approx` crate's assertion macros, which handle the
//! floating-point precision issues that `assert_eq!` cannot (offsets and
//! displacements are all f32 arithmetic).

pub use approx::{assert_abs_diff_eq, assert_relative_eq};
