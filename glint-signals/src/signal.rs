//! Signal - the observable cell.
//!
//! A signal wraps a single value behind a cloneable handle. All clones share
//! one value and one subscriber set. Reads inside an evaluating effect
//! subscribe that effect; writes run every subscriber synchronously before
//! returning.
//!
//! Writing a value equal to the current one is a no-op by contract, not an
//! optimization: subscribers must not observe same-value writes.

use std::cell::RefCell;
use std::rc::Rc;

use crate::runtime::DepSet;

/// Create a new signal holding `initial`.
pub fn signal<T: Clone + PartialEq + 'static>(initial: T) -> Signal<T> {
    Signal {
        inner: Rc::new(SignalInner {
            value: RefCell::new(initial),
            deps: DepSet::new(),
        }),
    }
}

/// A shared observable cell.
///
/// Cloning a `Signal` clones the handle, not the value.
pub struct Signal<T> {
    inner: Rc<SignalInner<T>>,
}

struct SignalInner<T> {
    value: RefCell<T>,
    deps: DepSet,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone + PartialEq + 'static> Signal<T> {
    /// Read the current value.
    ///
    /// If an effect is evaluating, it is subscribed to this signal.
    pub fn get(&self) -> T {
        self.inner.deps.track();
        self.inner.value.borrow().clone()
    }

    /// Read the current value without subscribing anything.
    pub fn peek(&self) -> T {
        self.inner.value.borrow().clone()
    }

    /// Write a new value and synchronously run every subscriber once.
    ///
    /// A write equal to the current value returns immediately: no subscriber
    /// runs. The value borrow is released before notification, so effects in
    /// the cascade may freely read or write this signal again.
    pub fn set(&self, value: T) {
        {
            let current = self.inner.value.borrow();
            if *current == value {
                return;
            }
        }
        *self.inner.value.borrow_mut() = value;
        self.inner.deps.notify();
    }

    /// Read-modify-write through the same no-op short-circuit as [`set`].
    ///
    /// [`set`]: Signal::set
    pub fn update(&self, f: impl FnOnce(&T) -> T) {
        let next = {
            let current = self.inner.value.borrow();
            f(&current)
        };
        self.set(next);
    }
}
