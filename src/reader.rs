//! Live value readers.
//!
//! Inputs such as the resize direction, the rotation interval, or the layout
//! box can change while a gesture is in flight. A [`Reader`] is a read-only
//! accessor invoked at the moment of use, so stages always see the current
//! value without owning a reactive subscription.

use std::cell::Cell;
use std::rc::Rc;

/// Read-only access to a possibly-changing value.
pub struct Reader<T> {
    kind: ReaderKind<T>,
}

enum ReaderKind<T> {
    Fixed(T),
    Live(Rc<dyn Fn() -> T>),
}

impl<T: Clone> Reader<T> {
    /// A value that never changes.
    pub fn fixed(value: T) -> Self {
        Self {
            kind: ReaderKind::Fixed(value),
        }
    }

    /// A value re-read from the closure on every access.
    pub fn live(read: impl Fn() -> T + 'static) -> Self {
        Self {
            kind: ReaderKind::Live(Rc::new(read)),
        }
    }

    /// Read the current value.
    pub fn get(&self) -> T {
        match &self.kind {
            ReaderKind::Fixed(value) => value.clone(),
            ReaderKind::Live(read) => read(),
        }
    }
}

impl<T: Copy + 'static> Reader<T> {
    /// A value read from a shared cell, the common host-side pattern for
    /// parameters updated between events.
    pub fn from_cell(cell: Rc<Cell<T>>) -> Self {
        Self::live(move || cell.get())
    }
}

impl<T: Clone> From<T> for Reader<T> {
    fn from(value: T) -> Self {
        Self::fixed(value)
    }
}
