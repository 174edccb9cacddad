// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/document/mod.rs
//
// Document module root: loading bitmaps and reading their pixel density.

pub mod raster;

use std::path::Path;

pub use self::raster::RasterDocument;

/// Pixel scale encoded in a file name such as `photo@2x.png`.
///
/// Returns `None` when the stem carries no `@<n>x` suffix.
pub fn pixel_scale_from_path(path: &Path) -> Option<f64> {
    let stem = path.file_stem()?.to_str()?;
    let (_, suffix) = stem.rsplit_once('@')?;
    let factor = suffix.strip_suffix('x').or_else(|| suffix.strip_suffix('X'))?;
    let scale: f64 = factor.parse().ok()?;

    (scale.is_finite() && scale > 0.0).then_some(scale)
}
