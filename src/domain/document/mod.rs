// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/document/mod.rs
//
// Document operations that do not depend on any loaded bitmap.

pub mod operations;
