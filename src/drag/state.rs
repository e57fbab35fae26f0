//! Drag session state machine.
//!
//! A single explicit state machine replaces scattered boolean flags and makes
//! impossible states unrepresentable.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Dragging    (accepted start event)
//! Dragging -> Idle    (end event, teardown, rebind)
//! ```
//!
//! Move events are meaningful only while `Dragging`; the controller drops
//! them entirely while `Idle` so residual events after teardown cannot act on
//! stale positions.

use crate::geometry::{MovePosition, Position};

/// Ephemeral per-session state owned by the drag controller. Never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DragSession {
    #[default]
    Idle,
    Dragging {
        /// Pointer position captured by the accepted start event; the anchor
        /// for every diff of this session.
        init_position: Position,
        /// Most recent pointer position.
        last_position: Position,
    },
}

impl DragSession {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Transition to `Dragging`, anchoring diffs at `position`.
    pub fn start(&mut self, position: Position) {
        *self = Self::Dragging {
            init_position: position,
            last_position: position,
        };
    }

    /// Record the latest pointer position. No-op while idle.
    pub fn update(&mut self, position: Position) {
        if let Self::Dragging { last_position, .. } = self {
            *last_position = position;
        }
    }

    /// Transition back to `Idle`, yielding the session's anchor and final
    /// position when one was active.
    pub fn finish(&mut self) -> Option<(Position, Position)> {
        match std::mem::take(self) {
            Self::Dragging {
                init_position,
                last_position,
            } => Some((init_position, last_position)),
            Self::Idle => None,
        }
    }

    /// Current position plus diff against the session anchor.
    pub fn move_position(&self, current: Position) -> Option<MovePosition> {
        match self {
            Self::Dragging { init_position, .. } => {
                Some(MovePosition::new(current, *init_position))
            }
            Self::Idle => None,
        }
    }

    pub fn init_position(&self) -> Option<Position> {
        match self {
            Self::Dragging { init_position, .. } => Some(*init_position),
            Self::Idle => None,
        }
    }

    pub fn last_position(&self) -> Option<Position> {
        match self {
            Self::Dragging { last_position, .. } => Some(*last_position),
            Self::Idle => None,
        }
    }

    /// Reset to `Idle` discarding any active session.
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}
