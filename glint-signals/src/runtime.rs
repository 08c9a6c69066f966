//! Reactive runtime - effect registry and active-effect tracking.
//!
//! One `Runtime` value per thread owns the two pieces of process-wide state
//! the reactive system needs:
//!
//! - the **active-effect stack**: which effect, if any, is currently
//!   evaluating (nested evaluation pushes, so a derived recomputing inside
//!   another effect tracks correctly)
//! - the **effect slab**: registered effect closures, addressed by index
//!
//! Subscriber sets store effect indices, never owning references. The
//! closure side of the relationship captures its sources strongly; the
//! source side holds only opaque handles. Stopping an effect clears its
//! slab slot, and subscriber sets prune dead handles lazily.

use std::cell::RefCell;
use std::rc::Rc;

pub(crate) type EffectId = usize;
pub(crate) type EffectFn = Rc<dyn Fn()>;

/// Per-thread reactive state.
struct Runtime {
    /// Effect slab. A `None` slot is a stopped effect; ids are never reused.
    slots: RefCell<Vec<Option<EffectFn>>>,
    /// Stack of currently-evaluating effect ids.
    active: RefCell<Vec<EffectId>>,
}

thread_local! {
    static RUNTIME: Runtime = Runtime {
        slots: RefCell::new(Vec::new()),
        active: RefCell::new(Vec::new()),
    };
}

// =============================================================================
// Effect Registration
// =============================================================================

/// Reserve a slot for an effect that is not runnable yet.
///
/// Used when the effect closure needs to capture state that can only be
/// built after the effect's first (tracked) evaluation, e.g. a derived's
/// initial value.
pub(crate) fn reserve_effect() -> EffectId {
    RUNTIME.with(|rt| {
        let mut slots = rt.slots.borrow_mut();
        slots.push(None);
        slots.len() - 1
    })
}

/// Install the closure for a previously reserved slot.
pub(crate) fn install_effect(id: EffectId, f: EffectFn) {
    RUNTIME.with(|rt| {
        if let Some(slot) = rt.slots.borrow_mut().get_mut(id) {
            *slot = Some(f);
        }
    });
}

/// Register a runnable effect in one step.
pub(crate) fn register_effect(f: EffectFn) -> EffectId {
    let id = reserve_effect();
    install_effect(id, f);
    id
}

/// Clear an effect's slot. Subscriber sets prune the dead id lazily.
pub(crate) fn remove_effect(id: EffectId) {
    RUNTIME.with(|rt| {
        if let Some(slot) = rt.slots.borrow_mut().get_mut(id) {
            *slot = None;
        }
    });
}

/// Whether an effect id still has a live closure.
pub(crate) fn is_live(id: EffectId) -> bool {
    RUNTIME.with(|rt| matches!(rt.slots.borrow().get(id), Some(Some(_))))
}

// =============================================================================
// Active-Effect Protocol
// =============================================================================

/// The effect currently evaluating, if any.
pub(crate) fn active_effect() -> Option<EffectId> {
    RUNTIME.with(|rt| rt.active.borrow().last().copied())
}

/// Run `f` with `id` on top of the active-effect stack.
pub(crate) fn with_active<R>(id: EffectId, f: impl FnOnce() -> R) -> R {
    RUNTIME.with(|rt| rt.active.borrow_mut().push(id));
    let result = f();
    RUNTIME.with(|rt| {
        rt.active.borrow_mut().pop();
    });
    result
}

/// Re-run a registered effect under the active-effect protocol.
///
/// The closure is cloned out of the slab before the call so a reentrant
/// registration or stop cannot alias the slab borrow.
pub(crate) fn run_effect(id: EffectId) {
    let f = RUNTIME.with(|rt| match rt.slots.borrow().get(id) {
        Some(Some(f)) => Some(Rc::clone(f)),
        _ => None,
    });
    if let Some(f) = f {
        with_active(id, || f());
    }
}

// =============================================================================
// Dependency Set
// =============================================================================

/// An insertion-ordered set of subscribed effect handles.
///
/// Every observable source owns one. Notification iterates a snapshot, so
/// reentrant subscription or writes during a cascade never invalidate the
/// iteration in progress.
pub(crate) struct DepSet {
    subscribers: RefCell<Vec<EffectId>>,
}

impl DepSet {
    pub(crate) fn new() -> Self {
        Self {
            subscribers: RefCell::new(Vec::new()),
        }
    }

    /// Subscribe the currently-active effect, if any.
    ///
    /// Passive reads (no effect evaluating) register nothing, so they never
    /// grow the set.
    pub(crate) fn track(&self) {
        if let Some(id) = active_effect() {
            let mut subs = self.subscribers.borrow_mut();
            if !subs.contains(&id) {
                subs.push(id);
            }
        }
    }

    /// Run every current subscriber exactly once, in insertion order.
    pub(crate) fn notify(&self) {
        self.subscribers.borrow_mut().retain(|&id| is_live(id));
        let snapshot: Vec<EffectId> = self.subscribers.borrow().clone();
        for id in snapshot {
            run_effect(id);
        }
    }
}
