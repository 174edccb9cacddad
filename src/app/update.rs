// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/update.rs
//
// Route pointer messages through the selection state, overlay and extractor.

use anyhow::Context;

use crate::app::message::AppMessage;
use crate::app::model::AppModel;
use crate::app::view::crop::{OverlaySurface, SelectionState, Transition, apply_transition};
use crate::domain::document::operations::crop::CropRegion;
use crate::domain::geometry::Rect;
use crate::domain::mapping::map_selection_to_image_pixels;

/// Handle one pointer message.
///
/// Mapping errors (e.g. an unsupported content mode) abort the gesture and
/// are returned to the caller.
pub fn update<S: OverlaySurface + ?Sized>(
    model: &mut AppModel,
    surface: &mut S,
    message: AppMessage,
) -> anyhow::Result<()> {
    let state = std::mem::take(&mut model.selection);
    let (state, transition) = match message {
        AppMessage::PointerDown { pointer, at } => state.begin(pointer, at),
        AppMessage::PointerMove { pointer, at } => state.update(pointer, at),
        AppMessage::PointerUp { pointer, at } => state.end(pointer, at),
        AppMessage::PointerCancel { pointer } => state.cancel(pointer),
    };
    model.selection = state;

    if transition == Transition::Ignored {
        log::trace!("ignored {message:?}");
        return Ok(());
    }
    log::debug!("{message:?} -> {transition:?}");
    apply_transition(surface, transition, &model.overlay_style);

    let result = match transition {
        Transition::Finished(rect) => extract_selection(model, &rect).map(|_| ()),
        Transition::Resized(rect) if model.config.live_extraction => {
            extract_selection(model, &rect).map(|_| ())
        }
        _ => Ok(()),
    };

    if result.is_err() && model.selection.is_active() {
        model.selection = SelectionState::Idle;
        surface.remove_overlay();
    }
    result
}

/// Crop the document to `selection` and store the result in the model.
///
/// Returns the pixel region that was extracted. When there is no document or
/// the selection misses the image, nothing changes and `Ok(None)` is returned.
pub fn extract_selection(
    model: &mut AppModel,
    selection: &Rect,
) -> anyhow::Result<Option<CropRegion>> {
    let Some(ctx) = model.display_context() else {
        log::warn!("no document loaded, skipping extraction");
        return Ok(None);
    };
    let ctx = ctx.context("invalid display configuration")?;

    let region = map_selection_to_image_pixels(selection, &ctx)
        .with_context(|| format!("failed to map selection {selection} onto the image"))?;
    let Some(region) = region else {
        log::info!("selection {selection} does not overlap the image");
        return Ok(None);
    };

    let Some(cropped) = model.document.as_ref().and_then(|doc| doc.crop(region)) else {
        log::info!("crop region {region:?} lies outside the bitmap");
        return Ok(None);
    };

    log::info!(
        "extracted {}x{} px at ({}, {})",
        region.width,
        region.height,
        region.x,
        region.y
    );
    model.extracted = Some(cropped);
    model.extracted_region = Some(region);
    Ok(Some(region))
}
