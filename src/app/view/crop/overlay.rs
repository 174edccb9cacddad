// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/crop/overlay.rs
//
// Selection overlay appearance and the surface it is drawn on.

use image::Rgba;

use crate::app::view::crop::selection::Transition;
use crate::constant::{SELECTION_BORDER, SELECTION_BORDER_WIDTH, SELECTION_FILL};
use crate::domain::geometry::Rect;

/// Look of the semi-transparent selection rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayStyle {
    pub fill: Rgba<u8>,
    pub border: Rgba<u8>,
    pub border_width: f64,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            fill: SELECTION_FILL,
            border: SELECTION_BORDER,
            border_width: SELECTION_BORDER_WIDTH,
        }
    }
}

/// Something that can show a single selection overlay.
///
/// Rectangles are in the coordinate space pointer events are reported in.
pub trait OverlaySurface {
    /// Show the overlay at `rect`.
    fn add_overlay(&mut self, rect: Rect, style: &OverlayStyle);

    /// Move/resize the visible overlay.
    fn resize_overlay(&mut self, rect: Rect);

    /// Hide the overlay.
    fn remove_overlay(&mut self);
}

/// Mirror a selection transition on the surface.
pub fn apply_transition<S: OverlaySurface + ?Sized>(
    surface: &mut S,
    transition: Transition,
    style: &OverlayStyle,
) {
    match transition {
        Transition::Started(rect) => surface.add_overlay(rect, style),
        Transition::Resized(rect) => surface.resize_overlay(rect),
        Transition::Finished(rect) => {
            surface.resize_overlay(rect);
            surface.remove_overlay();
        }
        Transition::Cancelled => surface.remove_overlay(),
        Transition::Ignored => {}
    }
}

/// Surface for callers that do not render anything.
#[derive(Debug, Default)]
pub struct HiddenSurface;

impl OverlaySurface for HiddenSurface {
    fn add_overlay(&mut self, rect: Rect, _style: &OverlayStyle) {
        log::trace!("overlay added at {rect}");
    }

    fn resize_overlay(&mut self, rect: Rect) {
        log::trace!("overlay resized to {rect}");
    }

    fn remove_overlay(&mut self) {
        log::trace!("overlay removed");
    }
}
