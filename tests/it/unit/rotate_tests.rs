//! Unit tests for the rotation transform stage.

use std::cell::Cell;
use std::rc::Rc;

use dragkit::{Position, Reader, Rotate};

use crate::helpers::{stage_move, stage_start};

#[test]
fn quarter_turn_around_center_snaps_cleanly() {
    let pivot = Position::new(50.0, 50.0);
    let mut rotate = Rotate::with_interval(Reader::fixed(pivot), Reader::fixed(15.0));

    let init = Position::new(100.0, 50.0);
    let v: f32 = stage_start(&mut rotate, init.x, init.y);
    assert_eq!(v, 0.0);

    let v = stage_move(&mut rotate, 50.0, 100.0, init);
    assert_eq!(v, 90.0);
    assert_eq!(v % 15.0, 0.0);
}

#[test]
fn emitted_angles_are_interval_multiples() {
    // Angles chosen away from snap boundaries so float rounding in
    // atan2/to_degrees cannot flip the floor.
    let pivot = Position::ZERO;
    let init = Position::new(100.0, 0.0);

    for interval in [5.0_f32, 15.0, 30.0, 45.0] {
        let mut rotate = Rotate::with_interval(Reader::fixed(pivot), Reader::fixed(interval));
        stage_start(&mut rotate, init.x, init.y);

        for raw in [23.0_f32, 67.0, 131.0, 212.0, 301.0] {
            let x = 100.0 * raw.to_radians().cos();
            let y = 100.0 * raw.to_radians().sin();
            let v = stage_move(&mut rotate, x, y, init);
            assert_eq!(
                v % interval,
                0.0,
                "raw {raw} with interval {interval} emitted {v}"
            );
        }
    }
}

#[test]
fn live_pivot_is_read_per_event() {
    let pivot_x = Rc::new(Cell::new(50.0_f32));
    let pivot = {
        let pivot_x = pivot_x.clone();
        Reader::live(move || Position::new(pivot_x.get(), 50.0))
    };
    let mut rotate = Rotate::with_interval(pivot, Reader::fixed(1.0));

    let init = Position::new(100.0, 50.0);
    stage_start(&mut rotate, init.x, init.y);

    // Same pointer position, pivot shifted left: the angle to the pointer
    // is unchanged (still along +x), so the delta stays zero.
    pivot_x.set(0.0);
    let v = stage_move(&mut rotate, 100.0, 50.0, init);
    assert_eq!(v, 0.0);
}
