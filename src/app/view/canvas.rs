// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/canvas.rs
//
// Raster preview of the display area: letterboxed image plus selection overlay.

use image::imageops::{self, FilterType};
use image::{DynamicImage, Pixel, RgbaImage};

use super::crop::{OverlayStyle, OverlaySurface};
use crate::constant::PREVIEW_BACKGROUND;
use crate::domain::geometry::Rect;
use crate::domain::mapping::{DisplayContext, MapError};

/// Draw `image` aspect-fit into its display area on a `width` x `height` canvas.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn compose_frame(
    image: &DynamicImage,
    ctx: &DisplayContext,
    width: u32,
    height: u32,
) -> Result<RgbaImage, MapError> {
    let mut canvas = RgbaImage::from_pixel(width, height, PREVIEW_BACKGROUND);
    let frame = ctx.image_frame()?;

    let scaled_w = frame.width().round().max(1.0) as u32;
    let scaled_h = frame.height().round().max(1.0) as u32;
    let scaled = imageops::resize(&image.to_rgba8(), scaled_w, scaled_h, FilterType::Triangle);
    imageops::overlay(
        &mut canvas,
        &scaled,
        frame.min_x().round() as i64,
        frame.min_y().round() as i64,
    );

    Ok(canvas)
}

/// Overlay surface backed by a preview frame.
///
/// Keeps the last overlay around after removal so a finished gesture can
/// still be rendered.
pub struct FrameSurface {
    base: RgbaImage,
    overlay: Option<(Rect, OverlayStyle)>,
    last_overlay: Option<(Rect, OverlayStyle)>,
}

impl FrameSurface {
    pub fn new(base: RgbaImage) -> Self {
        Self {
            base,
            overlay: None,
            last_overlay: None,
        }
    }

    pub fn is_showing_overlay(&self) -> bool {
        self.overlay.is_some()
    }

    /// Frame with the overlay as currently shown.
    pub fn render(&self) -> RgbaImage {
        self.render_with(self.overlay.as_ref())
    }

    /// Frame with the most recent overlay, even if it has been removed.
    pub fn render_last_selection(&self) -> RgbaImage {
        self.render_with(self.last_overlay.as_ref())
    }

    fn render_with(&self, overlay: Option<&(Rect, OverlayStyle)>) -> RgbaImage {
        let mut frame = self.base.clone();
        if let Some((rect, style)) = overlay {
            paint_overlay(&mut frame, rect, style);
        }
        frame
    }
}

impl OverlaySurface for FrameSurface {
    fn add_overlay(&mut self, rect: Rect, style: &OverlayStyle) {
        self.overlay = Some((rect, *style));
        self.last_overlay = self.overlay;
    }

    fn resize_overlay(&mut self, rect: Rect) {
        if let Some((current, _)) = self.overlay.as_mut() {
            *current = rect;
            self.last_overlay = self.overlay;
        }
    }

    fn remove_overlay(&mut self) {
        self.overlay = None;
    }
}

/// Blend the fill over every pixel whose center lies in `rect`, then stroke
/// the border along the inside edge.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn paint_overlay(frame: &mut RgbaImage, rect: &Rect, style: &OverlayStyle) {
    let rect = rect.standardized();
    if rect.is_empty() {
        return;
    }

    let (width, height) = frame.dimensions();
    let x0 = rect.min_x().floor().max(0.0) as u32;
    let y0 = rect.min_y().floor().max(0.0) as u32;
    let x1 = (rect.max_x().ceil().max(0.0) as u32).min(width);
    let y1 = (rect.max_y().ceil().max(0.0) as u32).min(height);
    let inner = Rect::new(
        rect.min_x() + style.border_width,
        rect.min_y() + style.border_width,
        rect.width() - 2.0 * style.border_width,
        rect.height() - 2.0 * style.border_width,
    );

    for y in y0..y1 {
        for x in x0..x1 {
            let cx = f64::from(x) + 0.5;
            let cy = f64::from(y) + 0.5;
            if cx < rect.min_x() || cx > rect.max_x() || cy < rect.min_y() || cy > rect.max_y() {
                continue;
            }

            let pixel = frame.get_pixel_mut(x, y);
            pixel.blend(&style.fill);
            let in_inner = inner.size.width > 0.0
                && inner.size.height > 0.0
                && cx > inner.min_x()
                && cx < inner.max_x()
                && cy > inner.min_y()
                && cy < inner.max_y();
            if !in_inner {
                pixel.blend(&style.border);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::view::crop::{PointerId, SelectionState, apply_transition};
    use crate::constant::SELECTION_BORDER;
    use crate::domain::geometry::Point;
    use crate::domain::mapping::ContentMode;
    use image::Rgba;

    fn red_image(w: u32, h: u32) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(w, h, Rgba([255, 0, 0, 255])))
    }

    fn ctx(w: u32, h: u32) -> DisplayContext {
        DisplayContext::for_bitmap(
            w,
            h,
            1.0,
            Rect::new(0.0, 0.0, 100.0, 100.0),
            ContentMode::AspectFit,
        )
        .expect("valid context")
    }

    #[test]
    fn test_compose_frame_letterboxes() {
        let frame = compose_frame(&red_image(200, 100), &ctx(200, 100), 100, 100).expect("frame");
        assert_eq!(frame.dimensions(), (100, 100));
        assert_eq!(*frame.get_pixel(50, 10), PREVIEW_BACKGROUND);
        assert_eq!(*frame.get_pixel(50, 50), Rgba([255, 0, 0, 255]));
        assert_eq!(*frame.get_pixel(50, 90), PREVIEW_BACKGROUND);
    }

    #[test]
    fn test_compose_frame_unsupported_mode() {
        let mut ctx = ctx(10, 10);
        ctx.content_mode = ContentMode::Center;
        assert!(matches!(
            compose_frame(&red_image(10, 10), &ctx, 100, 100),
            Err(MapError::UnsupportedContentMode(ContentMode::Center))
        ));
    }

    #[test]
    fn test_overlay_border_and_fill() {
        let base = RgbaImage::from_pixel(50, 50, Rgba([0, 0, 0, 255]));
        let mut surface = FrameSurface::new(base);
        surface.add_overlay(Rect::new(10.0, 10.0, 20.0, 20.0), &OverlayStyle::default());

        let frame = surface.render();
        assert_eq!(*frame.get_pixel(10, 10), SELECTION_BORDER);
        assert_eq!(*frame.get_pixel(5, 5), Rgba([0, 0, 0, 255]));

        let inside = frame.get_pixel(20, 20);
        assert_eq!(inside[0], 0);
        assert!(inside[1] > 0 && inside[1] < 255);
        assert_eq!(inside[2], 0);
    }

    #[test]
    fn test_surface_follows_gesture() {
        let base = RgbaImage::from_pixel(50, 50, Rgba([0, 0, 0, 255]));
        let mut surface = FrameSurface::new(base.clone());
        let style = OverlayStyle::default();

        let (state, t) = SelectionState::Idle.begin(PointerId(1), Point::new(40.0, 40.0));
        apply_transition(&mut surface, t, &style);
        assert!(surface.is_showing_overlay());

        let (state, t) = state.update(PointerId(1), Point::new(20.0, 20.0));
        apply_transition(&mut surface, t, &style);
        let (_, t) = state.end(PointerId(1), Point::new(10.0, 10.0));
        apply_transition(&mut surface, t, &style);

        assert!(!surface.is_showing_overlay());
        assert_eq!(surface.render(), base);
        assert_eq!(*surface.render_last_selection().get_pixel(10, 10), SELECTION_BORDER);
    }
}
