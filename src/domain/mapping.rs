// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/mapping.rs
//
// Map a selection drawn over the display area back onto source image pixels.

use std::fmt;

use thiserror::Error;

use crate::domain::document::operations::crop::CropRegion;
use crate::domain::geometry::{AffineTransform, Point, Rect, Size};

/// How the image is laid out inside the display area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentMode {
    /// Scale uniformly until the whole image fits, letterboxing the rest.
    #[default]
    AspectFit,
    /// Scale uniformly until the display area is covered, cropping overflow.
    AspectFill,
    /// Stretch each axis independently to the display area.
    ScaleToFill,
    /// Keep native size, centered.
    Center,
}

impl fmt::Display for ContentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AspectFit => write!(f, "aspect-fit"),
            Self::AspectFill => write!(f, "aspect-fill"),
            Self::ScaleToFill => write!(f, "scale-to-fill"),
            Self::Center => write!(f, "center"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MapError {
    #[error("content mode {0} is not supported, only aspect-fit is")]
    UnsupportedContentMode(ContentMode),

    #[error("image size {image} and display size {display} must both be positive")]
    DegenerateSize { image: Size, display: Size },

    #[error("pixel scale {0} must be positive")]
    InvalidPixelScale(f64),
}

/// Everything needed to relate display coordinates to image pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayContext {
    /// Image size in logical units (pixel dimensions divided by `pixel_scale`).
    pub image_size: Size,
    /// Display area in the coordinate space pointer events are reported in.
    pub display_frame: Rect,
    pub content_mode: ContentMode,
    /// Device pixels per logical unit.
    pub pixel_scale: f64,
}

impl DisplayContext {
    /// Build a context for a bitmap of `pixel_width` x `pixel_height`.
    pub fn for_bitmap(
        pixel_width: u32,
        pixel_height: u32,
        pixel_scale: f64,
        display_frame: Rect,
        content_mode: ContentMode,
    ) -> Result<Self, MapError> {
        check_pixel_scale(pixel_scale)?;

        Ok(Self {
            image_size: Size::new(
                f64::from(pixel_width) / pixel_scale,
                f64::from(pixel_height) / pixel_scale,
            ),
            display_frame: display_frame.standardized(),
            content_mode,
            pixel_scale,
        })
    }

    /// Image bounds in logical units.
    pub fn image_bounds(&self) -> Rect {
        Rect::from_origin_size(Point::ORIGIN, self.image_size)
    }

    /// Transform from image coordinates to display-area coordinates.
    pub fn fit_transform(&self) -> Result<AffineTransform, MapError> {
        match self.content_mode {
            ContentMode::AspectFit => {
                compute_fit_transform(self.image_size, self.display_frame.size)
            }
            mode => Err(MapError::UnsupportedContentMode(mode)),
        }
    }

    /// Where the image is drawn, in the same space as `display_frame`.
    pub fn image_frame(&self) -> Result<Rect, MapError> {
        let fit = self.fit_transform()?;
        let origin = self.display_frame.origin;
        Ok(self.image_bounds().apply(&fit).offset(origin.x, origin.y))
    }
}

fn check_pixel_scale(pixel_scale: f64) -> Result<(), MapError> {
    if pixel_scale.is_finite() && pixel_scale > 0.0 {
        Ok(())
    } else {
        Err(MapError::InvalidPixelScale(pixel_scale))
    }
}

/// Aspect-fit transform placing `image_size` centered inside `display_size`.
///
/// Scale is the smaller of the two axis ratios so the image never overflows.
pub fn compute_fit_transform(
    image_size: Size,
    display_size: Size,
) -> Result<AffineTransform, MapError> {
    if !image_size.is_positive() || !display_size.is_positive() {
        return Err(MapError::DegenerateSize {
            image: image_size,
            display: display_size,
        });
    }

    let scale = (display_size.width / image_size.width)
        .min(display_size.height / image_size.height);
    let offset_x = (display_size.width - image_size.width * scale) / 2.0;
    let offset_y = (display_size.height - image_size.height * scale) / 2.0;

    Ok(AffineTransform::scale(scale, scale).then(&AffineTransform::translate(offset_x, offset_y)))
}

/// Convert a selection into the smallest enclosing pixel region of the image.
///
/// `Ok(None)` means the selection does not overlap the image at all.
pub fn map_selection_to_image_pixels(
    selection: &Rect,
    ctx: &DisplayContext,
) -> Result<Option<CropRegion>, MapError> {
    let fit = ctx.fit_transform()?;
    check_pixel_scale(ctx.pixel_scale)?;
    let Some(inverse) = fit.invert() else {
        return Err(MapError::DegenerateSize {
            image: ctx.image_size,
            display: ctx.display_frame.size,
        });
    };

    let origin = ctx.display_frame.origin;
    let in_display = selection.standardized().offset(-origin.x, -origin.y);
    let in_image = in_display.apply(&inverse);

    let Some(clipped) = in_image.intersection(&ctx.image_bounds()) else {
        log::debug!("selection {in_image} misses image bounds {}", ctx.image_bounds());
        return Ok(None);
    };

    let in_pixels = clipped.apply(&AffineTransform::scale(ctx.pixel_scale, ctx.pixel_scale));
    Ok(CropRegion::enclosing(&in_pixels))
}
