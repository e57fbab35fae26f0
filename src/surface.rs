//! Listenable event surfaces.
//!
//! The engine never talks to a concrete UI toolkit. It binds to anything
//! implementing [`EventSurface`]: a thing with an identity that listeners can
//! be added to and removed from by event name. [`EventBus`] is the in-memory
//! implementation hosts embed and tests drive directly.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::pointer::PointerEvent;

/// Identity of a surface, used by allow-list containment filtering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SurfaceId(pub u64);

static NEXT_SURFACE_ID: AtomicU64 = AtomicU64::new(1);

impl SurfaceId {
    /// Allocate a fresh process-unique id.
    pub fn next() -> Self {
        Self(NEXT_SURFACE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Identity of a registered listener, so the same callback can be removed
/// exactly as it was added.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

static NEXT_LISTENER_ID: AtomicU64 = AtomicU64::new(1);

impl ListenerId {
    pub fn next() -> Self {
        Self(NEXT_LISTENER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// A callback invoked with every event dispatched under its name.
pub type EventListener = Rc<dyn Fn(&PointerEvent)>;

/// Something the drag controller can attach listeners to.
pub trait EventSurface {
    fn id(&self) -> SurfaceId;

    fn add_listener(&self, event: &'static str, listener: ListenerId, callback: EventListener);

    fn remove_listener(&self, event: &'static str, listener: ListenerId);

    /// The surface that owns this one (for DOM-like hosts, the window owning
    /// the element). Used as the default dragging target so move tracking can
    /// cover a wider area than the handle the drag started on.
    fn owner(&self) -> Option<Rc<dyn EventSurface>> {
        None
    }
}

/// In-memory [`EventSurface`] with synchronous dispatch.
pub struct EventBus {
    id: SurfaceId,
    owner: Option<Rc<dyn EventSurface>>,
    listeners: RefCell<HashMap<&'static str, Vec<(ListenerId, EventListener)>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            id: SurfaceId::next(),
            owner: None,
            listeners: RefCell::new(HashMap::new()),
        }
    }

    /// A bus whose events started here but whose drags are tracked on `owner`.
    pub fn with_owner(owner: Rc<dyn EventSurface>) -> Self {
        Self {
            id: SurfaceId::next(),
            owner: Some(owner),
            listeners: RefCell::new(HashMap::new()),
        }
    }

    /// Dispatch `event` to every listener registered under `name`.
    ///
    /// Listeners are snapshotted before dispatch so a listener may add or
    /// remove registrations (the controller does exactly that on start/end)
    /// without re-entering the borrow.
    pub fn emit(&self, name: &str, event: &PointerEvent) {
        let snapshot: Vec<EventListener> = self
            .listeners
            .borrow()
            .get(name)
            .map(|entries| entries.iter().map(|(_, l)| l.clone()).collect())
            .unwrap_or_default();
        for listener in snapshot {
            listener(event);
        }
    }

    /// Number of listeners currently registered under `name`. Lets hosts and
    /// tests assert attach/detach symmetry.
    pub fn listener_count(&self, name: &str) -> usize {
        self.listeners
            .borrow()
            .get(name)
            .map_or(0, |entries| entries.len())
    }

    /// Total registrations across all event names.
    pub fn total_listeners(&self) -> usize {
        self.listeners.borrow().values().map(|v| v.len()).sum()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSurface for EventBus {
    fn id(&self) -> SurfaceId {
        self.id
    }

    fn add_listener(&self, event: &'static str, listener: ListenerId, callback: EventListener) {
        self.listeners
            .borrow_mut()
            .entry(event)
            .or_default()
            .push((listener, callback));
    }

    fn remove_listener(&self, event: &'static str, listener: ListenerId) {
        let mut listeners = self.listeners.borrow_mut();
        if let Some(entries) = listeners.get_mut(event) {
            entries.retain(|(id, _)| *id != listener);
            if entries.is_empty() {
                listeners.remove(event);
            }
        }
    }

    fn owner(&self) -> Option<Rc<dyn EventSurface>> {
        self.owner.clone()
    }
}
