// SPDX-License-Identifier: MPL-2.0
//! Window/application icon loading.
//! Rasterizes the embedded brand SVG at startup into an RGBA icon for the
//! window title bar. Falls back to `None` if rendering fails, in which
//! case the window simply has no icon.

use iced::window::{icon, Icon};
use resvg::usvg;

/// Edge length of the rasterized icon in pixels.
const ICON_SIZE: u32 = 128;

/// Rasterize the embedded SVG icon.
/// Returns `None` if parsing or rendering fails.
pub fn load_window_icon() -> Option<Icon> {
    // Embedded so packaging does not need to locate assets on disk.
    const SVG_SOURCE: &str = include_str!("../assets/branding/sunwise.svg");

    let tree = usvg::Tree::from_data(SVG_SOURCE.as_bytes(), &usvg::Options::default()).ok()?;

    let source_size = tree.size();
    let transform = tiny_skia::Transform::from_scale(
        ICON_SIZE as f32 / source_size.width(),
        ICON_SIZE as f32 / source_size.height(),
    );

    let mut pixmap = tiny_skia::Pixmap::new(ICON_SIZE, ICON_SIZE)?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    icon::from_rgba(pixmap.data().to_vec(), ICON_SIZE, ICON_SIZE).ok()
}
