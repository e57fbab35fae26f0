//! Test helpers and builders for reducing boilerplate in tests.
//!
//! Provides event-emission shorthands for driving an [`EventBus`] like a host
//! would, a recording callback surface, and direct-drive helpers for
//! exercising transform stages outside a controller.

use std::cell::RefCell;
use std::rc::Rc;

use dragkit::transform::StageCx;
use dragkit::{
    DragCallbacks, EventBus, EventSurface, MovePosition, PointerEvent, Position, Stage,
};

/// Initialize tracing once for the whole test binary; respects `RUST_LOG`.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Emit a mouse-down on `bus`, targeted at `bus` itself.
pub fn press(bus: &Rc<EventBus>, x: f32, y: f32) {
    let event = PointerEvent::mouse(Position::new(x, y)).with_target(bus.id());
    bus.emit("mousedown", &event);
}

/// Emit a mouse-move on `bus`.
pub fn drag_to(bus: &Rc<EventBus>, x: f32, y: f32) {
    bus.emit("mousemove", &PointerEvent::mouse(Position::new(x, y)));
}

/// Emit a mouse-up on `bus`.
pub fn release(bus: &Rc<EventBus>, x: f32, y: f32) {
    bus.emit("mouseup", &PointerEvent::mouse(Position::new(x, y)));
}

/// One recorded lifecycle callback invocation.
#[derive(Clone, Debug)]
pub struct Recorded<T> {
    pub hook: &'static str,
    pub position: MovePosition,
    pub output: T,
}

pub type HookLog<T> = Rc<RefCell<Vec<Recorded<T>>>>;

/// A callback surface that appends every invocation to `log`.
pub fn recording_callbacks<T: Clone + 'static>(log: &HookLog<T>) -> DragCallbacks<T> {
    fn hook<T: Clone + 'static>(log: &HookLog<T>, name: &'static str) -> dragkit::drag::DragHook<T> {
        let log = log.clone();
        Box::new(move |_event, position, output| {
            log.borrow_mut().push(Recorded {
                hook: name,
                position,
                output: output.clone(),
            });
        })
    }

    DragCallbacks {
        on_start: Some(hook(log, "start")),
        on_move: Some(hook(log, "move")),
        on_end: Some(hook(log, "end")),
    }
}

pub fn new_log<T>() -> HookLog<T> {
    Rc::new(RefCell::new(Vec::new()))
}

/// Drive a leaf stage's `on_start` directly at `(x, y)`.
pub fn stage_start<S: Stage<(), Output = T>, T>(stage: &mut S, x: f32, y: f32) -> T {
    let pos = Position::new(x, y);
    let event = PointerEvent::mouse(pos);
    let position = MovePosition::new(pos, pos);
    stage.reset();
    stage.on_start(
        &StageCx {
            event: &event,
            position: &position,
        },
        (),
    )
}

/// Drive a leaf stage's `on_move` directly, with the diff anchored at `init`.
pub fn stage_move<S: Stage<(), Output = T>, T>(
    stage: &mut S,
    x: f32,
    y: f32,
    init: Position,
) -> T {
    let pos = Position::new(x, y);
    let event = PointerEvent::mouse(pos);
    let position = MovePosition::new(pos, init);
    stage.on_move(
        &StageCx {
            event: &event,
            position: &position,
        },
        (),
    )
}
