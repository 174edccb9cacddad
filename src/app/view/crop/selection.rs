// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/crop/selection.rs
//
// Drag-to-select gesture state.

use crate::domain::geometry::{Point, Rect, Size};

/// Identifies one touch or pointer for the duration of a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PointerId(pub u64);

/// A gesture in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveSelection {
    pointer: PointerId,
    anchor: Point,
    rect: Rect,
}

impl ActiveSelection {
    pub fn pointer(&self) -> PointerId {
        self.pointer
    }

    /// Point where the gesture started. Fixed for the whole gesture.
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    /// Current selection, always standardized.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    fn spanning(self, point: Point) -> Self {
        Self {
            rect: Rect::from_corners(self.anchor, point),
            ..self
        }
    }
}

/// What an input event did to the selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    /// A gesture began; the overlay should appear at this rectangle.
    Started(Rect),
    /// The overlay should be resized to this rectangle.
    Resized(Rect),
    /// The gesture ended with this rectangle; the overlay should go away.
    Finished(Rect),
    /// The gesture was abandoned; the overlay should go away.
    Cancelled,
    /// Event did not apply to the current state.
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SelectionState {
    #[default]
    Idle,
    Active(ActiveSelection),
}

impl SelectionState {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active(_))
    }

    /// Current rectangle, if a gesture is in progress.
    pub fn rect(&self) -> Option<Rect> {
        match self {
            Self::Idle => None,
            Self::Active(active) => Some(active.rect),
        }
    }

    /// Start a gesture. A second pointer while one is tracked is ignored.
    pub fn begin(self, pointer: PointerId, point: Point) -> (Self, Transition) {
        match self {
            Self::Idle => {
                let rect = Rect::from_origin_size(point, Size::ZERO);
                let active = ActiveSelection {
                    pointer,
                    anchor: point,
                    rect,
                };
                (Self::Active(active), Transition::Started(rect))
            }
            Self::Active(_) => (self, Transition::Ignored),
        }
    }

    /// Stretch the selection from the anchor to `point`.
    pub fn update(self, pointer: PointerId, point: Point) -> (Self, Transition) {
        match self {
            Self::Active(active) if active.pointer == pointer => {
                let active = active.spanning(point);
                (Self::Active(active), Transition::Resized(active.rect))
            }
            _ => (self, Transition::Ignored),
        }
    }

    /// Final update at `point`, then back to idle.
    pub fn end(self, pointer: PointerId, point: Point) -> (Self, Transition) {
        match self {
            Self::Active(active) if active.pointer == pointer => {
                let rect = active.spanning(point).rect;
                (Self::Idle, Transition::Finished(rect))
            }
            _ => (self, Transition::Ignored),
        }
    }

    /// Drop the gesture without producing a selection.
    pub fn cancel(self, pointer: PointerId) -> (Self, Transition) {
        match self {
            Self::Active(active) if active.pointer == pointer => (Self::Idle, Transition::Cancelled),
            _ => (self, Transition::Ignored),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FINGER: PointerId = PointerId(1);
    const OTHER: PointerId = PointerId(2);

    #[test]
    fn test_begin_creates_zero_sized_rect() {
        let (state, t) = SelectionState::Idle.begin(FINGER, Point::new(5.0, 7.0));
        assert_eq!(t, Transition::Started(Rect::new(5.0, 7.0, 0.0, 0.0)));
        assert!(state.is_active());
        assert_eq!(state.rect(), Some(Rect::new(5.0, 7.0, 0.0, 0.0)));
    }

    #[test]
    fn test_drag_up_left_is_standardized() {
        let state = SelectionState::Idle;
        let (state, _) = state.begin(FINGER, Point::new(50.0, 50.0));
        let (state, t) = state.update(FINGER, Point::new(30.0, 30.0));
        assert_eq!(t, Transition::Resized(Rect::new(30.0, 30.0, 20.0, 20.0)));
        let (state, _) = state.update(FINGER, Point::new(20.0, 15.0));
        let (state, t) = state.end(FINGER, Point::new(10.0, 10.0));

        assert_eq!(t, Transition::Finished(Rect::new(10.0, 10.0, 40.0, 40.0)));
        assert_eq!(state, SelectionState::Idle);
    }

    #[test]
    fn test_every_direction_standardized() {
        let anchor = Point::new(50.0, 50.0);
        for end in [
            Point::new(80.0, 90.0),
            Point::new(10.0, 90.0),
            Point::new(80.0, 10.0),
            Point::new(10.0, 10.0),
        ] {
            let (state, _) = SelectionState::Idle.begin(FINGER, anchor);
            let (state, t) = state.update(FINGER, end);
            let Transition::Resized(rect) = t else {
                panic!("expected resize, got {t:?}");
            };
            assert!(rect.size.width >= 0.0 && rect.size.height >= 0.0);
            assert_eq!(rect, Rect::from_corners(anchor, end));

            let Transition::Finished(rect) = state.end(FINGER, end).1 else {
                panic!("expected finish");
            };
            assert!(rect.size.width >= 0.0 && rect.size.height >= 0.0);
        }
    }

    #[test]
    fn test_anchor_fixed_during_gesture() {
        let (state, _) = SelectionState::Idle.begin(FINGER, Point::new(1.0, 2.0));
        let (state, _) = state.update(FINGER, Point::new(100.0, 100.0));
        let (state, _) = state.update(FINGER, Point::new(-100.0, -100.0));
        let SelectionState::Active(active) = state else {
            panic!("expected active");
        };
        assert_eq!(active.anchor(), Point::new(1.0, 2.0));
        assert_eq!(active.pointer(), FINGER);
    }

    #[test]
    fn test_idle_update_and_end_are_noops() {
        let (state, t) = SelectionState::Idle.update(FINGER, Point::new(1.0, 1.0));
        assert_eq!((state, t), (SelectionState::Idle, Transition::Ignored));
        let (state, t) = SelectionState::Idle.end(FINGER, Point::new(1.0, 1.0));
        assert_eq!((state, t), (SelectionState::Idle, Transition::Ignored));
        let (state, t) = SelectionState::Idle.cancel(FINGER);
        assert_eq!((state, t), (SelectionState::Idle, Transition::Ignored));
    }

    #[test]
    fn test_second_pointer_ignored() {
        let (state, _) = SelectionState::Idle.begin(FINGER, Point::new(10.0, 10.0));
        let before = state;

        let (state, t) = state.begin(OTHER, Point::new(0.0, 0.0));
        assert_eq!(t, Transition::Ignored);
        let (state, t) = state.update(OTHER, Point::new(90.0, 90.0));
        assert_eq!(t, Transition::Ignored);
        let (state, t) = state.end(OTHER, Point::new(90.0, 90.0));
        assert_eq!(t, Transition::Ignored);
        assert_eq!(state, before);
    }

    #[test]
    fn test_cancel_discards() {
        let (state, _) = SelectionState::Idle.begin(FINGER, Point::new(10.0, 10.0));
        let (state, _) = state.update(FINGER, Point::new(20.0, 20.0));
        let (state, t) = state.cancel(FINGER);
        assert_eq!(t, Transition::Cancelled);
        assert_eq!(state, SelectionState::Idle);
    }
}
