//! Drag session controller.
//!
//! Owns the idle/dragging lifecycle, the containment and pointer-type
//! filters, diff computation, and - critically - the listener registrations
//! on the origin and dragging surfaces. Registration is symmetric by
//! construction: every event name added when a drag starts is removed when it
//! ends, is rebound, or is torn down, with no dangling entries.
//!
//! Listener closures hold only weak references to the controller, so events
//! dispatched after teardown are inert. User callbacks are invoked with the
//! controller borrow released, so a callback may freely query or tear down
//! its own [`DragHandle`].

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use tracing::{debug, trace};

use crate::geometry::{MovePosition, Position};
use crate::pointer::{event_name_sets, EventNames, HostCaps, PointerEvent, PointerFilter, PointerType};
use crate::surface::{EventListener, EventSurface, ListenerId, SurfaceId};
use crate::transform::{Stage, StageCx};

use super::state::DragSession;

/// A lifecycle callback: raw event, position + diff, and the transform
/// chain's output for this hook.
pub type DragHook<T> = Box<dyn FnMut(&PointerEvent, MovePosition, &T)>;

/// The caller's lifecycle surface.
pub struct DragCallbacks<T> {
    pub on_start: Option<DragHook<T>>,
    pub on_move: Option<DragHook<T>>,
    pub on_end: Option<DragHook<T>>,
}

impl<T> Default for DragCallbacks<T> {
    fn default() -> Self {
        Self {
            on_start: None,
            on_move: None,
            on_end: None,
        }
    }
}

/// Containment filter deciding whether a start event may begin a session.
pub enum StartFilter {
    /// Every qualifying start event is accepted.
    Any,
    /// Accept only events originating on one of the listed surfaces. An
    /// empty list behaves like [`StartFilter::Any`].
    Allow(Vec<SurfaceId>),
    /// Arbitrary predicate over the event and the resolved origin surface.
    Predicate(Box<dyn Fn(&PointerEvent, Option<SurfaceId>) -> bool>),
}

impl Default for StartFilter {
    fn default() -> Self {
        Self::Any
    }
}

impl StartFilter {
    fn accepts(&self, event: &PointerEvent, origin: Option<SurfaceId>) -> bool {
        match self {
            Self::Any => true,
            Self::Allow(allowed) => {
                allowed.is_empty() || event.target.is_some_and(|t| allowed.contains(&t))
            }
            Self::Predicate(predicate) => predicate(event, origin),
        }
    }
}

/// Construction options for [`draggable`].
#[derive(Default)]
pub struct DragOptions {
    /// Where move/end events are tracked while dragging. Defaults to the
    /// origin's owning surface, falling back to the origin itself.
    pub dragging_target: Option<Rc<dyn EventSurface>>,
    /// Input modalities allowed to drive the drag. `None` allows all.
    pub pointer_types: Option<Vec<PointerType>>,
    /// Containment filter applied to start events.
    pub filter: StartFilter,
    /// Host input capabilities; decides the observed event-name sets once.
    pub caps: HostCaps,
}

/// State mirrored out of the controller for cheap querying on the handle.
#[derive(Default)]
struct SessionShared {
    dragging: Cell<bool>,
    position: Cell<Option<Position>>,
}

/// Handle returned by [`draggable`].
///
/// With no origin target the handle is inert: queries return defaults and
/// `turn_off` succeeds trivially. A later [`DragHandle::rebind`] with a real
/// origin brings it to life.
///
/// The handle owns the listener registrations: dropping it detaches them,
/// so keep it alive for as long as the element should stay draggable.
/// [`DragHandle::turn_off`] tears down early without dropping.
pub struct DragHandle {
    shared: Rc<SessionShared>,
    ops: Rc<dyn ControllerOps>,
}

impl DragHandle {
    /// Last observed pointer position, if any session ever ran.
    pub fn position(&self) -> Option<Position> {
        self.shared.position.get()
    }

    pub fn is_dragging(&self) -> bool {
        self.shared.dragging.get()
    }

    /// Detach every listener and release the session. Idempotent.
    pub fn turn_off(&self) {
        self.ops.turn_off();
    }

    /// Swap the origin and dragging targets. The controller fully detaches
    /// from the old surfaces before attaching to the new ones; safe to call
    /// mid-drag (the active session is discarded).
    pub fn rebind(
        &self,
        origin: Option<Rc<dyn EventSurface>>,
        dragging_target: Option<Rc<dyn EventSurface>>,
    ) {
        self.ops.rebind(origin, dragging_target);
    }
}

impl Drop for DragHandle {
    fn drop(&mut self) {
        self.ops.turn_off();
    }
}

trait ControllerOps {
    fn turn_off(&self);
    fn rebind(
        &self,
        origin: Option<Rc<dyn EventSurface>>,
        dragging_target: Option<Rc<dyn EventSurface>>,
    );
}

/// One surface plus the exact (event name, listener id) pairs registered on
/// it. Detaching drains the list, which keeps attach/detach symmetric.
struct Binding {
    surface: Rc<dyn EventSurface>,
    entries: Vec<(&'static str, ListenerId)>,
}

impl Binding {
    fn detach(self) {
        for (name, id) in self.entries {
            self.surface.remove_listener(name, id);
        }
    }
}

/// The three hook listeners, created once and re-registered as needed.
struct HookListeners {
    start: EventListener,
    motion: EventListener,
    end: EventListener,
    start_id: ListenerId,
    motion_id: ListenerId,
    end_id: ListenerId,
}

struct Inner<S: Stage> {
    origin: Option<Rc<dyn EventSurface>>,
    dragging_override: Option<Rc<dyn EventSurface>>,
    event_sets: &'static [EventNames],
    pointer_filter: PointerFilter,
    start_filter: StartFilter,
    chain: S,
    callbacks: DragCallbacks<S::Output>,
    session: DragSession,
    shared: Rc<SessionShared>,
    start_binding: Option<Binding>,
    motion_binding: Option<Binding>,
    hooks: Option<HookListeners>,
}

impl<S: Stage> Inner<S> {
    /// The surface tracking move/end events: explicit override, else the
    /// origin's owner, else the origin itself.
    fn dragging_surface(&self) -> Option<Rc<dyn EventSurface>> {
        self.dragging_override
            .clone()
            .or_else(|| self.origin.as_ref().and_then(|o| o.owner()))
            .or_else(|| self.origin.clone())
    }

    fn attach_start_listeners(&mut self) {
        if self.start_binding.is_some() {
            return;
        }
        let Some(origin) = self.origin.clone() else {
            debug!("no origin target, drag controller is inert");
            return;
        };
        let Some(hooks) = self.hooks.as_ref() else {
            return;
        };

        let mut entries = Vec::with_capacity(self.event_sets.len());
        for set in self.event_sets {
            origin.add_listener(set.start, hooks.start_id, hooks.start.clone());
            entries.push((set.start, hooks.start_id));
        }
        debug!(events = entries.len(), "attached start listeners");
        self.start_binding = Some(Binding {
            surface: origin,
            entries,
        });
    }

    fn register_motion_listeners(&mut self) {
        if self.motion_binding.is_some() {
            return;
        }
        let Some(surface) = self.dragging_surface() else {
            return;
        };
        let Some(hooks) = self.hooks.as_ref() else {
            return;
        };

        let mut entries = Vec::with_capacity(self.event_sets.len() * 2);
        for set in self.event_sets {
            surface.add_listener(set.motion, hooks.motion_id, hooks.motion.clone());
            surface.add_listener(set.end, hooks.end_id, hooks.end.clone());
            entries.push((set.motion, hooks.motion_id));
            entries.push((set.end, hooks.end_id));
        }
        self.motion_binding = Some(Binding { surface, entries });
    }

    fn detach_motion_listeners(&mut self) {
        if let Some(binding) = self.motion_binding.take() {
            binding.detach();
            debug!("detached move/end listeners");
        }
    }

    fn detach_all(&mut self) {
        self.detach_motion_listeners();
        if let Some(binding) = self.start_binding.take() {
            binding.detach();
            debug!("detached start listeners");
        }
        self.session.reset();
        self.shared.dragging.set(false);
    }
}

struct Controller<S: Stage> {
    inner: Rc<RefCell<Inner<S>>>,
}

impl<S: Stage> ControllerOps for Controller<S> {
    fn turn_off(&self) {
        self.inner.borrow_mut().detach_all();
    }

    fn rebind(
        &self,
        origin: Option<Rc<dyn EventSurface>>,
        dragging_target: Option<Rc<dyn EventSurface>>,
    ) {
        let mut inner = self.inner.borrow_mut();
        // Unconditional detach-before-attach: never two active listener sets,
        // even when the rebind lands mid-drag.
        inner.detach_all();
        inner.origin = origin;
        inner.dragging_override = dragging_target;
        inner.attach_start_listeners();
    }
}

fn handle_start<S: Stage>(this: &Rc<RefCell<Inner<S>>>, event: &PointerEvent) {
    let (move_position, output, callback) = {
        let mut inner = this.borrow_mut();
        if !inner.pointer_filter.accepts(event) {
            return;
        }
        let origin_id = inner.origin.as_ref().map(|o| o.id());
        if !inner.start_filter.accepts(event, origin_id) {
            trace!("start event rejected by containment filter");
            return;
        }
        if inner.session.is_dragging() {
            debug!("ignoring start event while a session is active");
            return;
        }

        let position = event.position();
        inner.session.start(position);
        inner.shared.dragging.set(true);
        inner.shared.position.set(Some(position));
        inner.register_motion_listeners();

        let move_position = MovePosition::new(position, position);
        inner.chain.reset();
        let output = inner.chain.on_start(
            &StageCx {
                event,
                position: &move_position,
            },
            (),
        );
        debug!(x = position.x, y = position.y, "drag session started");
        (move_position, output, inner.callbacks.on_start.take())
    };

    if let Some(mut callback) = callback {
        callback(event, move_position, &output);
        this.borrow_mut().callbacks.on_start = Some(callback);
    }
}

fn handle_move<S: Stage>(this: &Rc<RefCell<Inner<S>>>, event: &PointerEvent) {
    let (move_position, output, callback) = {
        let mut inner = this.borrow_mut();
        if !inner.pointer_filter.accepts(event) {
            return;
        }
        if inner.session.is_idle() {
            trace!("dropping move event while idle");
            return;
        }

        let position = event.position();
        inner.session.update(position);
        inner.shared.position.set(Some(position));
        let Some(move_position) = inner.session.move_position(position) else {
            return;
        };

        let output = inner.chain.on_move(
            &StageCx {
                event,
                position: &move_position,
            },
            (),
        );
        (move_position, output, inner.callbacks.on_move.take())
    };

    if let Some(mut callback) = callback {
        callback(event, move_position, &output);
        this.borrow_mut().callbacks.on_move = Some(callback);
    }
}

fn handle_end<S: Stage>(this: &Rc<RefCell<Inner<S>>>, event: &PointerEvent) {
    let (move_position, output, callback) = {
        let mut inner = this.borrow_mut();
        if !inner.pointer_filter.accepts(event) {
            return;
        }
        let Some((init_position, last_position)) = inner.session.finish() else {
            return;
        };
        inner.shared.dragging.set(false);
        inner.detach_motion_listeners();

        // Final diff is computed from the last known position, not the end
        // event itself (touchend carries no contact point).
        let move_position = MovePosition::new(last_position, init_position);
        let output = inner.chain.on_end(
            &StageCx {
                event,
                position: &move_position,
            },
            (),
        );
        debug!("drag session ended");
        (move_position, output, inner.callbacks.on_end.take())
    };

    if let Some(mut callback) = callback {
        callback(event, move_position, &output);
        this.borrow_mut().callbacks.on_end = Some(callback);
    }
}

fn make_hooks<S>(inner: &Rc<RefCell<Inner<S>>>) -> HookListeners
where
    S: Stage + 'static,
    S::Output: 'static,
{
    let start = {
        let weak: Weak<RefCell<Inner<S>>> = Rc::downgrade(inner);
        Rc::new(move |event: &PointerEvent| {
            if let Some(inner) = weak.upgrade() {
                handle_start(&inner, event);
            }
        }) as EventListener
    };
    let motion = {
        let weak: Weak<RefCell<Inner<S>>> = Rc::downgrade(inner);
        Rc::new(move |event: &PointerEvent| {
            if let Some(inner) = weak.upgrade() {
                handle_move(&inner, event);
            }
        }) as EventListener
    };
    let end = {
        let weak: Weak<RefCell<Inner<S>>> = Rc::downgrade(inner);
        Rc::new(move |event: &PointerEvent| {
            if let Some(inner) = weak.upgrade() {
                handle_end(&inner, event);
            }
        }) as EventListener
    };
    HookListeners {
        start,
        motion,
        end,
        start_id: ListenerId::next(),
        motion_id: ListenerId::next(),
        end_id: ListenerId::next(),
    }
}

/// Build a drag controller bound to `origin` and return its handle.
///
/// `chain` is the transform chain (use [`crate::transform::Identity`] for
/// none); its output is handed to each lifecycle callback. A `None` origin
/// yields an inert handle rather than an error, so construction is safe
/// before a target is resolved.
pub fn draggable<S>(
    origin: Option<Rc<dyn EventSurface>>,
    options: DragOptions,
    chain: S,
    callbacks: DragCallbacks<S::Output>,
) -> DragHandle
where
    S: Stage + 'static,
    S::Output: 'static,
{
    let shared = Rc::new(SessionShared::default());
    let inner = Rc::new(RefCell::new(Inner {
        origin,
        dragging_override: options.dragging_target,
        event_sets: event_name_sets(options.caps),
        pointer_filter: PointerFilter::new(options.pointer_types),
        start_filter: options.filter,
        chain,
        callbacks,
        session: DragSession::default(),
        shared: shared.clone(),
        start_binding: None,
        motion_binding: None,
        hooks: None,
    }));

    let hooks = make_hooks(&inner);
    {
        let mut borrow = inner.borrow_mut();
        borrow.hooks = Some(hooks);
        borrow.attach_start_listeners();
    }

    DragHandle {
        shared,
        ops: Rc::new(Controller { inner }),
    }
}
