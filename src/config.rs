// SPDX-License-Identifier: GPL-3.0-or-later
// src/config.rs
//
// Runtime configuration for a selection session.

use crate::constant::{DEFAULT_DISPLAY_HEIGHT, DEFAULT_DISPLAY_WIDTH};
use crate::domain::geometry::Rect;
use crate::domain::mapping::ContentMode;

/// Global configuration for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Display area, in the coordinate space pointer events use.
    pub display_frame: Rect,
    /// How the image is laid out inside the display area.
    pub content_mode: ContentMode,
    /// Overrides the pixel scale of the loaded document.
    pub pixel_scale: Option<f64>,
    /// Re-extract on every pointer move instead of only when the gesture ends.
    pub live_extraction: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            display_frame: Rect::new(0.0, 0.0, DEFAULT_DISPLAY_WIDTH, DEFAULT_DISPLAY_HEIGHT),
            content_mode: ContentMode::AspectFit,
            pixel_scale: None,
            live_extraction: false,
        }
    }
}
