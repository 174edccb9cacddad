// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/message.rs
//
// Application messages: pointer events in display coordinates.

use crate::app::view::crop::PointerId;
use crate::domain::geometry::Point;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppMessage {
    PointerDown { pointer: PointerId, at: Point },
    PointerMove { pointer: PointerId, at: Point },
    PointerUp { pointer: PointerId, at: Point },
    /// The system took the pointer away (e.g. an incoming call).
    PointerCancel { pointer: PointerId },
}
