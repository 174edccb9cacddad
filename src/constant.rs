// SPDX-License-Identifier: GPL-3.0-or-later
// src/constant.rs
//
// Application constants that should not be changed by the user.

use image::Rgba;

/// Selection overlay fill (green at 20% opacity).
pub const SELECTION_FILL: Rgba<u8> = Rgba([0, 255, 0, 51]);

/// Selection overlay border color.
pub const SELECTION_BORDER: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Selection overlay border width in display units.
pub const SELECTION_BORDER_WIDTH: f64 = 2.0;

/// Preview frame background (visible in the letterbox bars).
pub const PREVIEW_BACKGROUND: Rgba<u8> = Rgba([32, 32, 32, 255]);

/// Default pixel scale for bitmaps without density information.
pub const DEFAULT_PIXEL_SCALE: f64 = 1.0;

/// Default display area size when none is configured.
pub const DEFAULT_DISPLAY_WIDTH: f64 = 800.0;
pub const DEFAULT_DISPLAY_HEIGHT: f64 = 600.0;
