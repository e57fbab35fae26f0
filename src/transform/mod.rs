//! Transform stages and chain composition.
//!
//! A stage derives a domain value from the pointer position and displacement
//! at each lifecycle hook. Stages compose left to right: the chain is an
//! explicit fold **seeded with the unit value `()`** - the first stage always
//! receives `()`, each later stage receives the previous stage's output, and
//! the final stage's output is the chain output delivered to the caller. A
//! zero-stage chain is [`Identity`], which passes its input through, so it
//! contributes `()` to the caller; a one-stage chain passes that stage's raw
//! output through unchanged.
//!
//! Per-stage state is reset through [`Stage::reset`] at every session start,
//! so a chain is reusable across independent sessions without leakage.
//!
//! ## Modules
//!
//! - `resize` - Constrained box resizing from an 8-direction handle
//! - `rotate` - Angle-snapped rotation around a pivot

pub mod resize;
pub mod rotate;

pub use resize::{Direction, ParseDirectionError, Resize};
pub use rotate::Rotate;

use crate::geometry::MovePosition;
use crate::pointer::PointerEvent;

/// Per-hook context handed to every stage.
#[derive(Clone, Copy)]
pub struct StageCx<'a> {
    pub event: &'a PointerEvent,
    pub position: &'a MovePosition,
}

/// A pluggable transform deriving `Output` from pointer displacement.
///
/// `Input` is the previous stage's output; leaf stages take the chain seed
/// `()`. Stages that ignore their input (such as [`Rotate`]) implement the
/// trait for every `Input` so they can sit anywhere in a chain.
pub trait Stage<Input = ()> {
    type Output;

    /// Clear per-session state. Invoked once at every session start, before
    /// `on_start`.
    fn reset(&mut self) {}

    fn on_start(&mut self, cx: &StageCx<'_>, input: Input) -> Self::Output;

    fn on_move(&mut self, cx: &StageCx<'_>, input: Input) -> Self::Output;

    fn on_end(&mut self, cx: &StageCx<'_>, input: Input) -> Self::Output;
}

/// The empty chain: passes its input through on every hook.
///
/// Also the building block for a stage that omits a hook - omitting means
/// emitting the input unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct Identity;

impl<I> Stage<I> for Identity {
    type Output = I;

    fn on_start(&mut self, _cx: &StageCx<'_>, input: I) -> I {
        input
    }

    fn on_move(&mut self, _cx: &StageCx<'_>, input: I) -> I {
        input
    }

    fn on_end(&mut self, _cx: &StageCx<'_>, input: I) -> I {
        input
    }
}

/// Two stages composed left to right: `first`'s output feeds `second`.
pub struct Then<A, B> {
    first: A,
    second: B,
}

impl<I, A, B> Stage<I> for Then<A, B>
where
    A: Stage<I>,
    B: Stage<A::Output>,
{
    type Output = B::Output;

    fn reset(&mut self) {
        self.first.reset();
        self.second.reset();
    }

    fn on_start(&mut self, cx: &StageCx<'_>, input: I) -> Self::Output {
        let mid = self.first.on_start(cx, input);
        self.second.on_start(cx, mid)
    }

    fn on_move(&mut self, cx: &StageCx<'_>, input: I) -> Self::Output {
        let mid = self.first.on_move(cx, input);
        self.second.on_move(cx, mid)
    }

    fn on_end(&mut self, cx: &StageCx<'_>, input: I) -> Self::Output {
        let mid = self.first.on_end(cx, input);
        self.second.on_end(cx, mid)
    }
}

/// Chain-building sugar.
pub trait StageExt<I>: Stage<I> + Sized {
    /// Feed this stage's output into `next`.
    fn then<B: Stage<Self::Output>>(self, next: B) -> Then<Self, B> {
        Then {
            first: self,
            second: next,
        }
    }
}

impl<I, S: Stage<I>> StageExt<I> for S {}
