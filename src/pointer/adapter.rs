//! Event-name selection and pointer-type filtering.
//!
//! The controller decides once, at construction, which underlying event-name
//! sets to observe: hosts with unified pointer events get a single triple,
//! everything else gets the combined mouse + touch triples.

use super::event::{PointerEvent, PointerType};

/// A start/move/end event-name triple for one input family.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EventNames {
    pub start: &'static str,
    pub motion: &'static str,
    pub end: &'static str,
}

pub(crate) const MOUSE_EVENTS: EventNames = EventNames {
    start: "mousedown",
    motion: "mousemove",
    end: "mouseup",
};

pub(crate) const TOUCH_EVENTS: EventNames = EventNames {
    start: "touchstart",
    motion: "touchmove",
    end: "touchend",
};

pub(crate) const POINTER_EVENTS: EventNames = EventNames {
    start: "pointerdown",
    motion: "pointermove",
    end: "pointerup",
};

/// What the host environment advertises about its input stack.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HostCaps {
    /// Whether the host dispatches unified pointer events.
    pub pointer_events: bool,
}

/// The event-name sets to observe for the given host, chosen once.
pub fn event_name_sets(caps: HostCaps) -> &'static [EventNames] {
    if caps.pointer_events {
        &[POINTER_EVENTS]
    } else {
        &[MOUSE_EVENTS, TOUCH_EVENTS]
    }
}

/// Allow-list over input modalities.
///
/// With no list configured every event passes; otherwise only events whose
/// resolved [`PointerType`] appears in the list do.
#[derive(Clone, Debug, Default)]
pub struct PointerFilter {
    allowed: Option<Vec<PointerType>>,
}

impl PointerFilter {
    pub fn new(allowed: Option<Vec<PointerType>>) -> Self {
        Self { allowed }
    }

    pub fn accepts(&self, event: &PointerEvent) -> bool {
        match &self.allowed {
            None => true,
            Some(types) => types.contains(&event.pointer_type()),
        }
    }
}
