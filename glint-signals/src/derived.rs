//! Derived - eagerly computed reactive values.
//!
//! A derived runs its computation once at construction and again,
//! synchronously, every time a dependency triggers - the cache is always
//! current before any subsequent read returns. This is a push system: a
//! derived never waits for a read to recompute.
//!
//! A derived is also a source. Reading `.get()` inside an evaluating effect
//! subscribes that effect to the derived, so a recomputation cascades into
//! its own dependents depth-first on the same call stack.

use std::cell::RefCell;
use std::rc::Rc;

use crate::runtime::{self, DepSet};

/// Create an eagerly computed value.
///
/// `compute` runs immediately under the active-effect protocol; every source
/// it reads subscribes the derived's own recomputation effect. The
/// recomputation effect is permanent - it lives as long as the thread's
/// reactive runtime, which keeps the derived's state alive with it.
pub fn derived<T, F>(compute: F) -> Derived<T, F>
where
    T: Clone + 'static,
    F: Fn() -> T + 'static,
{
    let id = runtime::reserve_effect();

    // First evaluation, tracked against the reserved id so dependencies
    // subscribe the recomputation effect installed below.
    let initial = runtime::with_active(id, &compute);

    let inner = Rc::new(DerivedInner {
        value: RefCell::new(initial),
        deps: DepSet::new(),
        compute,
    });

    let effect_inner = Rc::clone(&inner);
    runtime::install_effect(
        id,
        Rc::new(move || {
            let next = (effect_inner.compute)();
            *effect_inner.value.borrow_mut() = next;
            // Recomputation propagates to this derived's own subscribers.
            effect_inner.deps.notify();
        }),
    );

    Derived { inner }
}

/// An eagerly recomputed value. Cloning shares the cache.
pub struct Derived<T, F>
where
    F: Fn() -> T,
{
    inner: Rc<DerivedInner<T, F>>,
}

struct DerivedInner<T, F> {
    value: RefCell<T>,
    deps: DepSet,
    compute: F,
}

impl<T, F: Fn() -> T> Clone for Derived<T, F> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone + 'static, F: Fn() -> T + 'static> Derived<T, F> {
    /// Read the cached value.
    ///
    /// Never forces a recomputation - the cache is already current. Inside
    /// an evaluating effect, additionally subscribes that effect to this
    /// derived.
    pub fn get(&self) -> T {
        self.inner.deps.track();
        self.inner.value.borrow().clone()
    }

    /// Read the cached value without subscribing anything.
    pub fn peek(&self) -> T {
        self.inner.value.borrow().clone()
    }
}
