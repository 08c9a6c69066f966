//! Attribute binders - wire reactive props into renderable attributes.
//!
//! Both binders follow the same skip rules:
//! - an absent prop means **no binding**: no watcher is created and no
//!   default is written
//! - a static prop is applied once, with no watcher
//! - a signal or getter prop creates exactly one watch that copies the
//!   current value into the attribute on creation and after every change
//!
//! The two flavors differ in what the copy does. [`bind_attr`] replaces the
//! attribute wholesale (primitive values). [`bind_attr_merge`] hands the
//! callback a reference so it can copy an object value field-by-field into
//! an attribute object that downstream code holds a stable reference to.

use glint_signals::watch;

use crate::primitives::PropValue;

/// Direct-copy binder: the prop's current value replaces the attribute on
/// every change.
pub fn bind_attr<T, F>(prop: Option<PropValue<T>>, apply: F)
where
    T: Clone + PartialEq + 'static,
    F: Fn(T) + 'static,
{
    let Some(prop) = prop else {
        return;
    };
    match prop {
        PropValue::Static(v) => apply(v),
        PropValue::Signal(s) => watch(move || s.get(), apply),
        PropValue::Getter(g) => watch(move || g(), apply),
    }
}

/// Merge-copy binder: the prop's object value is merged into an existing
/// attribute object instead of replacing it.
pub fn bind_attr_merge<T, F>(prop: Option<PropValue<T>>, merge: F)
where
    T: Clone + PartialEq + 'static,
    F: Fn(&T) + 'static,
{
    let Some(prop) = prop else {
        return;
    };
    match prop {
        PropValue::Static(v) => merge(&v),
        PropValue::Signal(s) => watch(move || s.get(), move |v| merge(&v)),
        PropValue::Getter(g) => watch(move || g(), move |v| merge(&v)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_signals::signal;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_absent_prop_creates_nothing() {
        let applies = Rc::new(Cell::new(0));
        let applies_clone = applies.clone();
        bind_attr(None::<PropValue<i32>>, move |_| {
            applies_clone.set(applies_clone.get() + 1);
        });
        assert_eq!(applies.get(), 0);
    }

    #[test]
    fn test_static_prop_applies_once_without_watcher() {
        let applies = Rc::new(Cell::new(0));
        let applies_clone = applies.clone();
        bind_attr(Some(PropValue::Static(7)), move |v| {
            assert_eq!(v, 7);
            applies_clone.set(applies_clone.get() + 1);
        });
        assert_eq!(applies.get(), 1);
    }

    #[test]
    fn test_signal_prop_copies_on_change() {
        let s = signal(1);
        let last = Rc::new(Cell::new(0));

        let last_clone = last.clone();
        bind_attr(Some(PropValue::Signal(s.clone())), move |v| {
            last_clone.set(v);
        });
        assert_eq!(last.get(), 1);

        s.set(5);
        assert_eq!(last.get(), 5);
    }

    #[test]
    fn test_getter_prop_tracks_reads() {
        let s = signal(2);
        let last = Rc::new(Cell::new(0));

        let s_getter = s.clone();
        let last_clone = last.clone();
        bind_attr(
            Some(PropValue::Getter(Rc::new(move || s_getter.get() * 10))),
            move |v| last_clone.set(v),
        );
        assert_eq!(last.get(), 20);

        s.set(3);
        assert_eq!(last.get(), 30);
    }

    #[test]
    fn test_merge_binder_passes_reference() {
        let s = signal((1.0f32, 2.0f32));
        let seen = Rc::new(Cell::new((0.0f32, 0.0f32)));

        let seen_clone = seen.clone();
        bind_attr_merge(Some(PropValue::Signal(s.clone())), move |v: &(f32, f32)| {
            seen_clone.set(*v);
        });
        assert_eq!(seen.get(), (1.0, 2.0));

        s.set((3.0, 4.0));
        assert_eq!(seen.get(), (3.0, 4.0));
    }
}
