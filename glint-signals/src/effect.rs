//! Effect and watch - tracked side effects.
//!
//! Both run their closure immediately at creation and re-run it,
//! synchronously and unbatched, on every dependency trigger. N writes to a
//! dependency produce N invocations; there is no tick to coalesce within.

use std::rc::Rc;

use crate::runtime;

/// Run `f` immediately with dependency tracking; re-run it on every change
/// to a source it read.
///
/// Returns a stop handle. Stopping clears the effect's runtime slot: the
/// closure (and everything it captured) is dropped, and subscriber sets
/// prune the dead handle on their next notification.
pub fn effect<F>(f: F) -> impl FnOnce()
where
    F: Fn() + 'static,
{
    let id = runtime::register_effect(Rc::new(f));
    runtime::run_effect(id);
    move || runtime::remove_effect(id)
}

/// Track `producer`, hand its result to `callback` - immediately at
/// creation, then once per dependency trigger.
///
/// Producer and callback run as one effect closure, so sources read by
/// either are tracked. There is no handle and no unsubscribe: the pair
/// lives for the thread's lifetime and keeps its captured sources alive.
pub fn watch<T, P, C>(producer: P, callback: C)
where
    T: 'static,
    P: Fn() -> T + 'static,
    C: Fn(T) + 'static,
{
    let id = runtime::register_effect(Rc::new(move || callback(producer())));
    runtime::run_effect(id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::signal;
    use std::cell::{Cell, RefCell};

    #[test]
    fn test_effect_runs_immediately() {
        let runs = Rc::new(Cell::new(0));
        let runs_clone = runs.clone();
        let _stop = effect(move || {
            runs_clone.set(runs_clone.get() + 1);
        });
        assert_eq!(runs.get(), 1);
    }

    #[test]
    fn test_effect_reruns_per_write() {
        let s = signal(0);
        let runs = Rc::new(Cell::new(0));

        let s_effect = s.clone();
        let runs_clone = runs.clone();
        let _stop = effect(move || {
            let _ = s_effect.get();
            runs_clone.set(runs_clone.get() + 1);
        });

        s.set(1);
        s.set(2);
        s.set(3);
        assert_eq!(runs.get(), 4);
    }

    #[test]
    fn test_stop_handle() {
        let s = signal(0);
        let runs = Rc::new(Cell::new(0));

        let s_effect = s.clone();
        let runs_clone = runs.clone();
        let stop = effect(move || {
            let _ = s_effect.get();
            runs_clone.set(runs_clone.get() + 1);
        });

        s.set(1);
        assert_eq!(runs.get(), 2);

        stop();
        s.set(2);
        assert_eq!(runs.get(), 2);
    }

    #[test]
    fn test_watch_immediate_and_per_write() {
        let s = signal(1);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let s_watch = s.clone();
        let seen_clone = seen.clone();
        watch(
            move || s_watch.get(),
            move |v| seen_clone.borrow_mut().push(v),
        );
        assert_eq!(*seen.borrow(), vec![1]);

        s.set(2);
        s.set(3);
        assert_eq!(*seen.borrow(), vec![1, 2, 3]);
    }

    #[test]
    fn test_watch_not_deduplicated_across_writes() {
        // Two separate writes bouncing between values produce two callbacks -
        // nothing coalesces them.
        let s = signal(0);
        let count = Rc::new(Cell::new(0));

        let s_watch = s.clone();
        let count_clone = count.clone();
        watch(
            move || s_watch.get(),
            move |_| count_clone.set(count_clone.get() + 1),
        );

        s.set(1);
        s.set(0);
        assert_eq!(count.get(), 3);
    }

    #[test]
    fn test_dependencies_accumulate_across_runs() {
        // A branch read on a later run subscribes then; earlier registrations
        // are never rolled back.
        let flag = signal(false);
        let extra = signal(0);
        let runs = Rc::new(Cell::new(0));

        let flag_effect = flag.clone();
        let extra_effect = extra.clone();
        let runs_clone = runs.clone();
        let _stop = effect(move || {
            runs_clone.set(runs_clone.get() + 1);
            if flag_effect.get() {
                let _ = extra_effect.get();
            }
        });
        assert_eq!(runs.get(), 1);

        // Not yet a dependency: the branch never read it.
        extra.set(1);
        assert_eq!(runs.get(), 1);

        flag.set(true);
        assert_eq!(runs.get(), 2);

        // Now it is, and it stays one even if the branch closes again.
        extra.set(2);
        assert_eq!(runs.get(), 3);
    }
}
