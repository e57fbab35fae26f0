//! Unified pointer event.

use serde::{Deserialize, Serialize};

use crate::geometry::Position;
use crate::surface::SurfaceId;

/// Input modality of a pointer event.
///
/// See <https://developer.mozilla.org/en-US/docs/Web/API/PointerEvent/pointerType>
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerType {
    Mouse,
    Pen,
    Touch,
}

/// Which button was involved in a mouse or pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    Other(u8),
}

/// The event-family-specific payload of a [`PointerEvent`].
#[derive(Clone, Debug)]
pub enum PointerEventKind {
    Mouse {
        position: Position,
        button: MouseButton,
    },
    Touch {
        /// Active contact points. Only the first (primary) contact is
        /// tracked by the engine.
        touches: Vec<Position>,
    },
    Pointer {
        position: Position,
        button: MouseButton,
        pointer_type: PointerType,
    },
}

/// A normalized input event as delivered by a host surface.
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    /// Identity of the surface the event originated on, if the host knows it.
    /// Used by allow-list containment filtering.
    pub target: Option<SurfaceId>,
}

impl PointerEvent {
    pub fn mouse(position: Position) -> Self {
        Self {
            kind: PointerEventKind::Mouse {
                position,
                button: MouseButton::Left,
            },
            target: None,
        }
    }

    pub fn touch(touches: Vec<Position>) -> Self {
        Self {
            kind: PointerEventKind::Touch { touches },
            target: None,
        }
    }

    pub fn pointer(position: Position, pointer_type: PointerType) -> Self {
        Self {
            kind: PointerEventKind::Pointer {
                position,
                button: MouseButton::Left,
                pointer_type,
            },
        target: None,
        }
    }

    pub fn with_target(mut self, target: SurfaceId) -> Self {
        self.target = Some(target);
        self
    }

    pub fn with_button(mut self, button: MouseButton) -> Self {
        match &mut self.kind {
            PointerEventKind::Mouse { button: b, .. }
            | PointerEventKind::Pointer { button: b, .. } => *b = button,
            PointerEventKind::Touch { .. } => {}
        }
        self
    }

    /// Resolve the input modality: the native pointer-type field when the
    /// event exposes one, `Touch` for multi-touch payloads, `Mouse` otherwise.
    pub fn pointer_type(&self) -> PointerType {
        match &self.kind {
            PointerEventKind::Pointer { pointer_type, .. } => *pointer_type,
            PointerEventKind::Touch { .. } => PointerType::Touch,
            PointerEventKind::Mouse { .. } => PointerType::Mouse,
        }
    }

    /// Page-space position of the primary contact point.
    pub fn position(&self) -> Position {
        match &self.kind {
            PointerEventKind::Mouse { position, .. }
            | PointerEventKind::Pointer { position, .. } => *position,
            PointerEventKind::Touch { touches } => {
                touches.first().copied().unwrap_or_default()
            }
        }
    }

    /// The button involved, if the event family carries one.
    pub fn button(&self) -> Option<MouseButton> {
        match &self.kind {
            PointerEventKind::Mouse { button, .. }
            | PointerEventKind::Pointer { button, .. } => Some(*button),
            PointerEventKind::Touch { .. } => None,
        }
    }
}
