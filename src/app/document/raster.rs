// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/document/raster.rs

use std::path::Path;

use image::{DynamicImage, GenericImageView, ImageReader};

use crate::constant::DEFAULT_PIXEL_SCALE;
use crate::domain::document::operations::crop::CropRegion;

/// Represents a raster image document (PNG, JPEG, ...).
pub struct RasterDocument {
    /// The decoded image document.
    document: DynamicImage,
    /// Device pixels per logical unit.
    pixel_scale: f64,
}

impl RasterDocument {
    /// Load a raster document from disk.
    ///
    /// Pixel scale is taken from an `@2x`-style file name suffix, or 1.
    pub fn open(path: &Path) -> image::ImageResult<Self> {
        let document = ImageReader::open(path)?.with_guessed_format()?.decode()?;
        let pixel_scale = super::pixel_scale_from_path(path).unwrap_or(DEFAULT_PIXEL_SCALE);

        Ok(Self::new(document, pixel_scale))
    }

    /// Wrap an already decoded image.
    pub fn new(document: DynamicImage, pixel_scale: f64) -> Self {
        Self {
            document,
            pixel_scale,
        }
    }

    /// Returns the native pixel dimensions (width, height).
    pub fn dimensions(&self) -> (u32, u32) {
        self.document.dimensions()
    }

    pub fn pixel_scale(&self) -> f64 {
        self.pixel_scale
    }

    pub fn image(&self) -> &DynamicImage {
        &self.document
    }

    /// Copy out `region`, clipped to the bitmap. `None` if nothing is left.
    pub fn crop(&self, region: CropRegion) -> Option<DynamicImage> {
        let (width, height) = self.dimensions();
        let clipped = region.clipped_to(width, height)?;
        if clipped != region {
            log::debug!("crop region {region:?} clipped to {clipped:?}");
        }

        let (x, y, w, h) = clipped.as_tuple();
        Some(self.document.crop_imm(x, y, w, h))
    }
}
