//! Constrained box resizing.
//!
//! A [`Resize`] stage turns the session's displacement into a new [`Layout`]
//! for one of eight compass handles. Shrinking past the anchored edge is
//! clamped so width and height never go negative (squash prevention), and an
//! optional proportional mode keeps the starting aspect ratio - deriving the
//! cross axis on edge handles and projecting the displacement onto the
//! anchor/handle diagonal on corner handles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::geometry::{Layout, Position};
use crate::reader::Reader;

use super::{Stage, StageCx};

/// One of the eight resize handles, named by compass position.
///
/// Closed by construction: out-of-enum directions cannot exist, so the resize
/// math validates nothing at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    TopLeft,
    Top,
    TopRight,
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
}

/// Failed to parse a direction name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized direction `{0}`")]
pub struct ParseDirectionError(String);

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::TopLeft,
        Direction::Top,
        Direction::TopRight,
        Direction::Right,
        Direction::BottomRight,
        Direction::Bottom,
        Direction::BottomLeft,
        Direction::Left,
    ];

    /// The 2-D sign vector `(x, y)` with components in `{-1, 0, 1}`.
    ///
    /// Single source of truth for all resize math: `1` means the handle sits
    /// on the right/bottom edge, `-1` on the left/top edge, `0` means the
    /// axis is untouched.
    pub fn signs(self) -> (i8, i8) {
        match self {
            Direction::TopLeft => (-1, -1),
            Direction::Top => (0, -1),
            Direction::TopRight => (1, -1),
            Direction::Right => (1, 0),
            Direction::BottomRight => (1, 1),
            Direction::Bottom => (0, 1),
            Direction::BottomLeft => (-1, 1),
            Direction::Left => (-1, 0),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::TopLeft => "top-left",
            Direction::Top => "top",
            Direction::TopRight => "top-right",
            Direction::Right => "right",
            Direction::BottomRight => "bottom-right",
            Direction::Bottom => "bottom",
            Direction::BottomLeft => "bottom-left",
            Direction::Left => "left",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top-left" => Ok(Direction::TopLeft),
            "top" => Ok(Direction::Top),
            "top-right" => Ok(Direction::TopRight),
            "right" => Ok(Direction::Right),
            "bottom-right" => Ok(Direction::BottomRight),
            "bottom" => Ok(Direction::Bottom),
            "bottom-left" => Ok(Direction::BottomLeft),
            "left" => Ok(Direction::Left),
            other => Err(ParseDirectionError(other.to_string())),
        }
    }
}

/// Clamp a desired displacement so the affected dimension cannot go negative.
///
/// `sign == 1` anchors the opposite (left/top) edge: growth is unclamped,
/// shrinking stops at `-size`. `sign == -1` anchors the right/bottom edge:
/// the inward displacement stops at `size`. `sign == 0` leaves the axis
/// untouched.
fn squash_prevented_diff(sign: i8, size: f32, desired: f32) -> f32 {
    match sign {
        1 => desired.max(-size),
        -1 => desired.min(size),
        _ => 0.0,
    }
}

/// Resize along x only. `aspect_ratio` additionally derives the height from
/// the new width when proportional mode is on.
fn horizontal_resize(
    init: Layout,
    diff: Position,
    sign_x: i8,
    aspect_ratio: Option<f32>,
) -> Layout {
    let mut out = init;

    let mut change = squash_prevented_diff(sign_x, init.width, diff.x);
    if sign_x == -1 {
        // Left-edge handle: mirror the sign so the right edge stays fixed
        // while x shifts.
        change = -change;
        out.x -= change;
    }
    out.width += change;

    if let Some(ratio) = aspect_ratio {
        out.height = out.width / ratio;
    }

    out
}

/// Resize along y only; the vertical mirror of [`horizontal_resize`].
fn vertical_resize(init: Layout, diff: Position, sign_y: i8, aspect_ratio: Option<f32>) -> Layout {
    let mut out = init;

    let mut change = squash_prevented_diff(sign_y, init.height, diff.y);
    if sign_y == -1 {
        change = -change;
        out.y -= change;
    }
    out.height += change;

    if let Some(ratio) = aspect_ratio {
        out.width = out.height * ratio;
    }

    out
}

/// Corner resize: independent squash-prevented changes on both axes.
fn corner_resize(init: Layout, diff: Position, sign_x: i8, sign_y: i8) -> Layout {
    let mut out = init;

    if sign_x != 0 {
        let change = squash_prevented_diff(sign_x, out.width, diff.x);
        if sign_x == 1 {
            out.width += change;
        } else {
            out.x += change;
            out.width -= change;
        }
    }

    if sign_y != 0 {
        let change = squash_prevented_diff(sign_y, out.height, diff.y);
        if sign_y == 1 {
            out.height += change;
        } else {
            out.y += change;
            out.height -= change;
        }
    }

    out
}

/// Project the raw displacement onto the diagonal through the anchor corner
/// and the active handle, so a corner resize moves strictly along the line
/// that preserves the starting aspect ratio.
///
/// The line is built in slope form through the two corners; the result is the
/// nearest point on it to the displaced pointer, re-expressed as a
/// displacement from the handle. Degenerate boxes (zero width) make the slope
/// non-finite and the projection propagates that; see the module docs.
fn project_onto_diagonal(diff: Position, layout: Layout, sign_x: i8, sign_y: i8) -> Position {
    // 'from' is the static anchor corner, 'to' the handle being dragged.
    let from = Position::new(
        if sign_x > 0 {
            layout.x
        } else {
            layout.x + layout.width
        },
        if sign_y > 0 {
            layout.y
        } else {
            layout.y + layout.height
        },
    );
    let to = Position::new(
        if sign_x < 0 {
            layout.x
        } else {
            layout.x + layout.width
        },
        if sign_y < 0 {
            layout.y
        } else {
            layout.y + layout.height
        },
    );

    // Slope form, then standard form ax + by + c = 0.
    let m = (to.y - from.y) / (to.x - from.x);
    let a = m;
    let b = -1.0;
    let c = from.y - m * from.x;

    // Absolute pointer location.
    let mouse = Position::new(to.x + diff.x, to.y + diff.y);

    let denom = a * a + b * b;
    Position::new(
        (b * (b * mouse.x - a * mouse.y) - a * c) / denom - to.x,
        (a * (a * mouse.y - b * mouse.x) - b * c) / denom - to.y,
    )
}

/// Transform stage computing a new [`Layout`] from direction + displacement.
///
/// All parameters are read at call time, so direction, layout, and the
/// proportional flag may change between events. The starting layout is
/// snapshotted at every session start and emitted as the `on_start` output.
pub struct Resize {
    layout: Reader<Layout>,
    direction: Reader<Direction>,
    proportional: Reader<bool>,
    init_layout: Layout,
}

impl Resize {
    pub fn new(layout: Reader<Layout>, direction: Reader<Direction>) -> Self {
        Self {
            layout,
            direction,
            proportional: Reader::fixed(false),
            init_layout: Layout::default(),
        }
    }

    /// Maintain the starting aspect ratio while resizing.
    pub fn proportional(mut self, flag: Reader<bool>) -> Self {
        self.proportional = flag;
        self
    }

    fn compute(&self, diff: Position) -> Layout {
        let (sign_x, sign_y) = self.direction.get().signs();
        let proportional = self.proportional.get();
        let aspect_ratio = proportional.then(|| self.init_layout.aspect_ratio());

        match (sign_x, sign_y) {
            (_, 0) => horizontal_resize(self.init_layout, diff, sign_x, aspect_ratio),
            (0, _) => vertical_resize(self.init_layout, diff, sign_y, aspect_ratio),
            _ => {
                let diff = if proportional {
                    project_onto_diagonal(diff, self.init_layout, sign_x, sign_y)
                } else {
                    diff
                };
                corner_resize(self.init_layout, diff, sign_x, sign_y)
            }
        }
    }
}

impl<I> Stage<I> for Resize {
    type Output = Layout;

    fn reset(&mut self) {
        self.init_layout = Layout::default();
    }

    fn on_start(&mut self, _cx: &StageCx<'_>, _input: I) -> Layout {
        self.init_layout = self.layout.get();
        self.init_layout
    }

    fn on_move(&mut self, cx: &StageCx<'_>, _input: I) -> Layout {
        self.compute(cx.position.diff)
    }

    fn on_end(&mut self, cx: &StageCx<'_>, _input: I) -> Layout {
        self.compute(cx.position.diff)
    }
}
