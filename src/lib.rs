//! Pointer-interaction engine for draggable UI elements.
//!
//! dragkit normalizes heterogeneous pointer input (mouse, touch, stylus) into
//! a single event model, tracks a drag session's lifecycle, and pipes raw
//! pointer displacement through a composable chain of transform stages that
//! produce domain values such as a resized layout box or a snapped rotation
//! angle.
//!
//! ## Architecture
//!
//! - `pointer` - Event model, pointer-type resolution, event-name sets
//! - `surface` - The listenable-surface abstraction the controller binds to
//! - `drag` - Drag session state machine, listener bookkeeping, lifecycle
//! - `transform` - Stage trait, chain composition, resize and rotate stages
//! - `geometry` - Position, layout, and angle primitives
//! - `reader` - Live value readers for inputs that change mid-gesture
//!
//! The controller is the only owner of listener registrations: every listener
//! added during a start-of-drag transition is removed during the matching
//! end-of-drag or explicit teardown.
//!
//! ## Example
//!
//! ```ignore
//! use std::rc::Rc;
//! use dragkit::{draggable, DragCallbacks, DragOptions, EventBus, Reader};
//! use dragkit::transform::{Resize, StageExt};
//! use dragkit::{Direction, Layout};
//!
//! let handle_el = Rc::new(EventBus::new());
//! let chain = Resize::new(
//!     Reader::fixed(Layout::new(0.0, 0.0, 100.0, 50.0)),
//!     Reader::fixed(Direction::BottomRight),
//! );
//! let handle = draggable(
//!     Some(handle_el.clone()),
//!     DragOptions::default(),
//!     chain,
//!     DragCallbacks {
//!         on_move: Some(Box::new(|_event, _pos, layout| {
//!             // apply `layout` to the visual tree
//!             let _ = layout;
//!         })),
//!         ..DragCallbacks::default()
//!     },
//! );
//! // later: handle.turn_off();
//! ```

pub mod drag;
pub mod geometry;
pub mod pointer;
pub mod reader;
pub mod surface;
pub mod transform;

pub use drag::{draggable, DragCallbacks, DragHandle, DragOptions, StartFilter};
pub use geometry::{Layout, MovePosition, Position};
pub use pointer::{EventNames, HostCaps, MouseButton, PointerEvent, PointerType};
pub use reader::Reader;
pub use surface::{EventBus, EventSurface, ListenerId, SurfaceId};
pub use transform::{Direction, Resize, Rotate, Stage, StageExt};
