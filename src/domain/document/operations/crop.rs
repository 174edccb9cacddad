// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/document/operations/crop.rs
//
// Crop operation domain model.

use crate::domain::geometry::Rect;

/// Crop region in pixel coordinates.
///
/// Pure domain model - represents a rectangular region to crop.
/// No UI concerns, just data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRegion {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Convert a pixel-space rectangle, snapping it outward to whole pixels.
    ///
    /// Parts left of or above zero are dropped. Returns `None` when nothing
    /// with positive area remains.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn enclosing(rect: &Rect) -> Option<Self> {
        let snapped = rect.integral();
        let left = snapped.min_x().max(0.0);
        let top = snapped.min_y().max(0.0);
        let right = snapped.max_x();
        let bottom = snapped.max_y();
        if !(right > left && bottom > top) || !right.is_finite() || !bottom.is_finite() {
            return None;
        }

        Some(Self::new(
            left as u32,
            top as u32,
            (right - left) as u32,
            (bottom - top) as u32,
        ))
    }

    pub fn as_tuple(&self) -> (u32, u32, u32, u32) {
        (self.x, self.y, self.width, self.height)
    }

    /// Restrict the region to a `width` x `height` bitmap.
    pub fn clipped_to(&self, width: u32, height: u32) -> Option<Self> {
        let right = self.x.saturating_add(self.width).min(width);
        let bottom = self.y.saturating_add(self.height).min(height);
        if self.x >= right || self.y >= bottom {
            return None;
        }
        Some(Self::new(self.x, self.y, right - self.x, bottom - self.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enclosing_snaps_outward() {
        let region = CropRegion::enclosing(&Rect::new(19.5, 10.25, 40.1, 19.5));
        assert_eq!(region, Some(CropRegion::new(19, 10, 41, 20)));
    }

    #[test]
    fn test_enclosing_empty() {
        assert_eq!(CropRegion::enclosing(&Rect::new(5.0, 5.0, 0.0, 3.0)), None);
        assert_eq!(CropRegion::enclosing(&Rect::new(-10.0, 0.0, 5.0, 3.0)), None);
    }

    #[test]
    fn test_clipped_to_bitmap() {
        let region = CropRegion::new(90, 40, 20, 20);
        assert_eq!(region.clipped_to(100, 50), Some(CropRegion::new(90, 40, 10, 10)));
        assert_eq!(region.clipped_to(90, 50), None);
    }
}
