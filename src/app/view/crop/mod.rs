// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/crop/mod.rs
//
// Crop selection module: gesture state and overlay surface.

mod overlay;
mod selection;

pub use overlay::{HiddenSurface, OverlayStyle, OverlaySurface, apply_transition};
pub use selection::{ActiveSelection, PointerId, SelectionState, Transition};
