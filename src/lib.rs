// SPDX-License-Identifier: GPL-3.0-or-later
// src/lib.rs
//
// Drag out a rectangle over an aspect-fit image and extract the pixels under it.

pub mod app;
pub mod config;
pub mod constant;
pub mod domain;

pub use app::view::crop::{PointerId, SelectionState, Transition};
pub use domain::document::operations::crop::CropRegion;
pub use domain::geometry::{AffineTransform, Point, Rect, Size};
pub use domain::mapping::{
    ContentMode, DisplayContext, MapError, compute_fit_transform, map_selection_to_image_pixels,
};
