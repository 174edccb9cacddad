// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/model.rs
//
// Application state.

use image::DynamicImage;

use crate::app::document::RasterDocument;
use crate::app::view::crop::{OverlayStyle, SelectionState};
use crate::config::AppConfig;
use crate::domain::document::operations::crop::CropRegion;
use crate::domain::mapping::{DisplayContext, MapError};

// =============================================================================
// Model
// =============================================================================

pub struct AppModel {
    // Document.
    pub document: Option<RasterDocument>,

    // Selection.
    pub selection: SelectionState,
    pub overlay_style: OverlayStyle,

    // Output of the last successful extraction.
    pub extracted: Option<DynamicImage>,
    pub extracted_region: Option<CropRegion>,

    pub config: AppConfig,
}

impl AppModel {
    pub fn new(config: AppConfig) -> Self {
        Self {
            document: None,
            selection: SelectionState::Idle,
            overlay_style: OverlayStyle::default(),
            extracted: None,
            extracted_region: None,
            config,
        }
    }

    /// Replace the displayed document. Any previous extraction is kept.
    pub fn set_document(&mut self, document: RasterDocument) {
        let (w, h) = document.dimensions();
        log::info!("document loaded: {w}x{h} px @{}x", document.pixel_scale());
        self.document = Some(document);
    }

    /// Layout of the current document in the display area.
    ///
    /// `None` when no document is loaded.
    pub fn display_context(&self) -> Option<Result<DisplayContext, MapError>> {
        let document = self.document.as_ref()?;
        let (width, height) = document.dimensions();
        // Configured override wins over the document's own density.
        let pixel_scale = self.config.pixel_scale.unwrap_or(document.pixel_scale());

        Some(DisplayContext::for_bitmap(
            width,
            height,
            pixel_scale,
            self.config.display_frame,
            self.config.content_mode,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    fn model_with_scale(document_scale: f64, configured: Option<f64>) -> AppModel {
        let mut model = AppModel::new(AppConfig {
            pixel_scale: configured,
            ..AppConfig::default()
        });
        let img = DynamicImage::ImageRgba8(RgbaImage::new(400, 200));
        model.set_document(RasterDocument::new(img, document_scale));
        model
    }

    #[test]
    fn test_display_context_uses_document_scale() {
        let ctx = model_with_scale(2.0, None)
            .display_context()
            .expect("document loaded")
            .expect("valid context");
        assert_eq!(ctx.pixel_scale, 2.0);
        assert_eq!(ctx.image_size.width, 200.0);
        assert_eq!(ctx.image_size.height, 100.0);
    }

    #[test]
    fn test_display_context_prefers_configured_scale() {
        let ctx = model_with_scale(2.0, Some(4.0))
            .display_context()
            .expect("document loaded")
            .expect("valid context");
        assert_eq!(ctx.pixel_scale, 4.0);
        assert_eq!(ctx.image_size.width, 100.0);
    }

    #[test]
    fn test_display_context_without_document() {
        assert!(AppModel::new(AppConfig::default()).display_context().is_none());
    }
}
