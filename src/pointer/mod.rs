//! Pointer event model.
//!
//! Unifies the three input event families (mouse, touch, pointer) into one
//! tagged variant, produced once per event, so the rest of the engine never
//! branches on event shape.
//!
//! ## Modules
//!
//! - `event` - `PointerEvent`, `PointerType`, `MouseButton`
//! - `adapter` - Event-name sets, host capabilities, pointer-type filtering

mod adapter;
mod event;

pub use adapter::{event_name_sets, EventNames, HostCaps, PointerFilter};
pub use event::{MouseButton, PointerEvent, PointerEventKind, PointerType};
