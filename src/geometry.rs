//! Geometric primitives shared across the engine.
//!
//! Positions are absolute page-space coordinates with `y` growing downward,
//! which makes `atan2` angles increase clockwise on screen.

use serde::{Deserialize, Serialize};

/// Absolute pointer coordinates in page space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const ZERO: Position = Position { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Displacement of `self` from `origin`.
    pub fn offset_from(self, origin: Position) -> Position {
        Position {
            x: self.x - origin.x,
            y: self.y - origin.y,
        }
    }
}

/// Pointer position plus its deviation from the session's initial position.
///
/// `diff` is always relative to the position captured at the most recent
/// session start; it is exactly `{0, 0}` at the instant of `on_start`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MovePosition {
    pub x: f32,
    pub y: f32,
    pub diff: Position,
}

impl MovePosition {
    pub fn new(current: Position, init: Position) -> Self {
        Self {
            x: current.x,
            y: current.y,
            diff: current.offset_from(init),
        }
    }

    pub fn position(&self) -> Position {
        Position {
            x: self.x,
            y: self.y,
        }
    }
}

/// A box owned by the caller: read at session start, never mutated in place.
///
/// Every resize computation returns a fresh `Layout`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Layout {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// `width / height`. Non-finite when `height == 0`; callers of
    /// proportional resize must guard degenerate boxes themselves.
    pub fn aspect_ratio(&self) -> f32 {
        self.width / self.height
    }
}

/// Angle in degrees from `pivot` to `p`, in `(-180, 180]`.
pub fn degrees_between(p: Position, pivot: Position) -> f32 {
    (p.y - pivot.y).atan2(p.x - pivot.x).to_degrees()
}

/// Normalize an angle to `[0, 360)`: add a full turn when negative, then
/// floor to a whole degree.
pub fn normalize_degrees(degrees: f32) -> f32 {
    let shifted = if degrees < 0.0 {
        degrees + 360.0
    } else {
        degrees
    };
    shifted.floor()
}
