// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/mod.rs
//
// Pure domain layer: geometry, coordinate mapping and crop regions.

pub mod document;
pub mod geometry;
pub mod mapping;
