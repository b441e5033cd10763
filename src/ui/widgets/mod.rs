// SPDX-License-Identifier: MPL-2.0
pub mod carousel_track;

pub use carousel_track::{carousel_track, CarouselTrack};
