//! Angle-snapped rotation around a pivot.
//!
//! A [`Rotate`] stage emits the rotation accumulated since the session start,
//! snapped to a configurable interval. Both the pivot and the interval are
//! read live; changing the interval mid-gesture re-anchors the reference
//! angle so the emitted value stays continuous instead of jumping to a
//! multiple of the new granularity.

use crate::geometry::{degrees_between, normalize_degrees, Position};
use crate::reader::Reader;

use super::{Stage, StageCx};

/// Transform stage computing a snapped incremental rotation angle.
///
/// The output is always relative to the value at session start and is an
/// integer multiple of the active interval away from the last re-anchor
/// point.
pub struct Rotate {
    pivot: Reader<Position>,
    interval: Reader<f32>,
    init_rotation: f32,
    start_rotation: f32,
    last_increment: f32,
    last_interval: f32,
}

impl Rotate {
    pub fn new(pivot: Reader<Position>) -> Self {
        Self::with_interval(pivot, Reader::fixed(1.0))
    }

    /// `interval` is the snap granularity in degrees, read live.
    pub fn with_interval(pivot: Reader<Position>, interval: Reader<f32>) -> Self {
        Self {
            pivot,
            interval,
            init_rotation: 0.0,
            start_rotation: 0.0,
            last_increment: 0.0,
            last_interval: 1.0,
        }
    }

    fn current_angle(&self, position: Position) -> f32 {
        normalize_degrees(degrees_between(position, self.pivot.get()))
    }

    fn step(&mut self, position: Position) -> f32 {
        let current = self.current_angle(position);
        let interval = self.interval.get();

        // Interval changed mid-gesture: continue from the last emitted
        // increment instead of the raw start angle, so the output does not
        // jump at the moment of the change.
        if interval != self.last_interval {
            self.init_rotation = self.last_increment;
            self.last_interval = interval;
        }

        let degrees_diff = current - self.init_rotation;
        let snapped = (degrees_diff / interval).floor() * interval;
        let increment = self.init_rotation + snapped;
        self.last_increment = increment;

        increment - self.start_rotation
    }
}

impl<I> Stage<I> for Rotate {
    type Output = f32;

    fn reset(&mut self) {
        self.init_rotation = 0.0;
        self.start_rotation = 0.0;
        self.last_increment = 0.0;
        self.last_interval = self.interval.get();
    }

    fn on_start(&mut self, cx: &StageCx<'_>, _input: I) -> f32 {
        let angle = self.current_angle(cx.position.position());
        self.init_rotation = angle;
        self.start_rotation = angle;
        // The accumulator restarts at zero relative rotation: the stored
        // absolute increment equals the anchor.
        self.last_increment = angle;
        self.last_interval = self.interval.get();
        0.0
    }

    fn on_move(&mut self, cx: &StageCx<'_>, _input: I) -> f32 {
        self.step(cx.position.position())
    }

    fn on_end(&mut self, cx: &StageCx<'_>, _input: I) -> f32 {
        self.step(cx.position.position())
    }
}
