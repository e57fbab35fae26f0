//! Drag session lifecycle.
//!
//! ## Modules
//!
//! - `state` - The idle/dragging state machine
//! - `controller` - Listener bookkeeping, filtering, and the public
//!   [`draggable`] entry point

mod controller;
mod state;

pub use controller::{draggable, DragCallbacks, DragHandle, DragHook, DragOptions, StartFilter};
pub use state::DragSession;
