//! Reactive - whole-object observability.
//!
//! Wraps an arbitrary value behind closure accessors. The granularity is
//! deliberately coarse: the object carries **one** subscriber set, keyed by
//! the object itself rather than by field. Reading any field inside an
//! effect subscribes that effect to the whole object, and writing any field
//! re-runs every subscriber - including effects that never read the written
//! field.
//!
//! Unlike [`Signal`](crate::Signal), writes never compare old and new state:
//! every `write` notifies.

use std::cell::RefCell;
use std::rc::Rc;

use crate::runtime::DepSet;

/// Wrap `value` in a reactive object.
pub fn reactive<T: 'static>(value: T) -> Reactive<T> {
    Reactive {
        inner: Rc::new(ReactiveInner {
            value: RefCell::new(value),
            deps: DepSet::new(),
        }),
    }
}

/// A shared observable object with one subscriber set for all fields.
pub struct Reactive<T> {
    inner: Rc<ReactiveInner<T>>,
}

struct ReactiveInner<T> {
    value: RefCell<T>,
    deps: DepSet,
}

impl<T> Clone for Reactive<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: 'static> Reactive<T> {
    /// Read through a closure.
    ///
    /// If an effect is evaluating, it is subscribed to the whole object, no
    /// matter which fields the closure touches. Passive reads register
    /// nothing.
    pub fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.inner.deps.track();
        let value = self.inner.value.borrow();
        f(&value)
    }

    /// Mutate through a closure, then run every subscriber once.
    ///
    /// The mutation always notifies - there is no equality short-circuit at
    /// object granularity. The borrow is released before notification.
    pub fn write<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let result = {
            let mut value = self.inner.value.borrow_mut();
            f(&mut value)
        };
        self.inner.deps.notify();
        result
    }
}

impl<T: Clone + 'static> Reactive<T> {
    /// Clone the whole value out (tracked like [`read`]).
    ///
    /// [`read`]: Reactive::read
    pub fn get(&self) -> T {
        self.read(|v| v.clone())
    }

    /// Replace the whole value (notifies like [`write`]).
    ///
    /// [`write`]: Reactive::write
    pub fn set(&self, value: T) {
        self.write(move |slot| *slot = value);
    }
}
