//! Rebinding the controller to new surfaces.

use std::rc::Rc;

use dragkit::transform::Identity;
use dragkit::{draggable, DragOptions, EventBus, EventSurface};

use crate::helpers::{drag_to, new_log, press, recording_callbacks, release};

fn window_and_origin() -> (Rc<EventBus>, Rc<EventBus>) {
    let window = Rc::new(EventBus::new());
    let origin = Rc::new(EventBus::with_owner(
        window.clone() as Rc<dyn EventSurface>
    ));
    (window, origin)
}

#[test]
fn rebind_while_idle_moves_the_start_listeners() {
    let (_old_window, old_origin) = window_and_origin();
    let (new_window, new_origin) = window_and_origin();
    let handle = draggable(
        Some(old_origin.clone() as Rc<dyn EventSurface>),
        DragOptions::default(),
        Identity,
        recording_callbacks(&new_log::<()>()),
    );
    assert_eq!(old_origin.total_listeners(), 2);

    handle.rebind(Some(new_origin.clone() as Rc<dyn EventSurface>), None);
    assert_eq!(old_origin.total_listeners(), 0);
    assert_eq!(new_origin.total_listeners(), 2);

    // The old origin is disconnected; the new one drives sessions.
    press(&old_origin, 0.0, 0.0);
    assert!(!handle.is_dragging());
    press(&new_origin, 0.0, 0.0);
    assert!(handle.is_dragging());
    release(&new_window, 0.0, 0.0);
}

#[test]
fn rebind_mid_drag_discards_the_session() {
    let (old_window, old_origin) = window_and_origin();
    let (new_window, new_origin) = window_and_origin();
    let log = new_log::<()>();
    let handle = draggable(
        Some(old_origin.clone() as Rc<dyn EventSurface>),
        DragOptions::default(),
        Identity,
        recording_callbacks(&log),
    );

    press(&old_origin, 0.0, 0.0);
    assert!(handle.is_dragging());
    assert_eq!(old_window.total_listeners(), 4);

    handle.rebind(Some(new_origin.clone() as Rc<dyn EventSurface>), None);
    assert!(!handle.is_dragging());
    assert_eq!(old_origin.total_listeners(), 0);
    assert_eq!(old_window.total_listeners(), 0);
    assert_eq!(new_origin.total_listeners(), 2);

    // Leftover motion from the abandoned gesture does nothing.
    drag_to(&old_window, 50.0, 50.0);
    assert_eq!(log.borrow().len(), 1);

    press(&new_origin, 10.0, 10.0);
    drag_to(&new_window, 20.0, 10.0);
    release(&new_window, 20.0, 10.0);
    assert_eq!(log.borrow().len(), 4);
}

#[test]
fn rebind_activates_an_inert_handle() {
    let (window, origin) = window_and_origin();
    let handle = draggable(
        None,
        DragOptions::default(),
        Identity,
        recording_callbacks(&new_log::<()>()),
    );
    assert_eq!(origin.total_listeners(), 0);

    handle.rebind(Some(origin.clone() as Rc<dyn EventSurface>), None);
    assert_eq!(origin.total_listeners(), 2);

    press(&origin, 0.0, 0.0);
    assert!(handle.is_dragging());
    release(&window, 0.0, 0.0);
    assert!(!handle.is_dragging());
}

#[test]
fn rebind_with_explicit_dragging_target_tracks_there() {
    let (owner_window, origin) = window_and_origin();
    let tracker = Rc::new(EventBus::new());
    let handle = draggable(
        Some(origin.clone() as Rc<dyn EventSurface>),
        DragOptions::default(),
        Identity,
        recording_callbacks(&new_log::<()>()),
    );

    handle.rebind(
        Some(origin.clone() as Rc<dyn EventSurface>),
        Some(tracker.clone() as Rc<dyn EventSurface>),
    );

    press(&origin, 0.0, 0.0);
    // Override wins over the origin's owner.
    assert_eq!(tracker.total_listeners(), 4);
    assert_eq!(owner_window.total_listeners(), 0);
    release(&tracker, 0.0, 0.0);
    assert_eq!(tracker.total_listeners(), 0);
}
