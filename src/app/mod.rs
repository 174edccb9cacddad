// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/mod.rs
//
// Application layer: model, messages, controller and views.

pub mod document;
pub mod message;
pub mod model;
pub mod update;
pub mod view;

pub use message::AppMessage;
pub use model::AppModel;
pub use update::{extract_selection, update};
